//! # Tool public API
//!
//! The `tool_api` module exposes the programmatic API of the tool. Each API is created by supplying the backends
//! that implement the traits it needs:
//!
//! * [`launch_api`] registers launches forwarded by the gateway and resolves them again on later requests.
//! * [`gradebook_api`] submits the score and time of a finished game.
//! * [`scoreboard_api`] joins the platform's results and roster into a class scoreboard.
//! * [`deep_link`] builds the content items offered during a deep-linking launch.
//!
//! ```rust,ignore
//! use lti_engine::{GradebookApi, LaunchApi, MemoryLaunchCache};
//! let launches = LaunchApi::new(MemoryLaunchCache::default());
//! let gradebook = GradebookApi::new(platform_client);
//! let context = launches.resolve(&launch_id).await?;
//! let submission = gradebook.submit_grades(&context, 95, 42).await?;
//! ```

pub mod deep_link;
pub mod errors;
pub mod gradebook_api;
pub mod launch_api;
pub mod scoreboard_api;
