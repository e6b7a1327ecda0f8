//! In-process launch storage.
//!
//! [`MemoryLaunchCache`] is the only [`LaunchCache`] backend shipped with the engine. It is cheap to clone; clones share
//! the same underlying map, so one instance can be handed to every server worker.
//!
//! [`LaunchCache`]: crate::traits::LaunchCache
mod memory_cache;
mod purge_worker;

pub use memory_cache::{MemoryLaunchCache, DEFAULT_LAUNCH_TTL};
pub use purge_worker::start_cache_purge_worker;
