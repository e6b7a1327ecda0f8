//! # Collaborator contracts
//!
//! The tool APIs never talk to the platform or to the launch store directly. Instead they are generic over the
//! traits in this module, so that backends can be swapped out (the HTTP platform client in production, fakes and
//! mocks in tests).
//!
//! * [`LaunchCache`] stores and resolves [`LaunchContext`]s by launch id.
//! * [`GradeService`] submits scores to, and reads results from, the platform's Assignment and Grade Service.
//! * [`RosterService`] lists the members of a course via the Names and Roles Provisioning Service.
//!
//! [`LaunchContext`]: crate::launch::LaunchContext
mod grade_service;
mod launch_cache;
mod roster_service;

pub use grade_service::{GradeService, GradeServiceError};
pub use launch_cache::{LaunchCache, LaunchCacheError};
pub use roster_service::{RosterService, RosterServiceError};
