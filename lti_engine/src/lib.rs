//! LTI tool engine
//!
//! The engine holds the logic of the Breakout LTI 1.3 tool that is independent of HTTP and of any particular
//! platform. It is divided into:
//! 1. Launch state ([`mod@launch`]). Validated id-token claims are parsed once into a typed [`LaunchContext`] and
//!    cached under a launch id, so that later requests (score submission, scoreboard, deep-link configuration) can
//!    refer back to the launch.
//! 2. Collaborator contracts ([`mod@traits`]). The platform's grade service, roster service and the launch store are
//!    all behind traits. The `lti_platform` crate provides the HTTP implementations.
//! 3. The public API ([`mod@tool_api`]): grade submission, scoreboard aggregation and deep linking.
//!
//! Signing and verifying JWTs and the OIDC login flow are handled upstream of this crate.
pub mod cache;
pub mod launch;
pub mod lti_types;
pub mod tool_api;
pub mod traits;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

pub use cache::{start_cache_purge_worker, MemoryLaunchCache};
pub use launch::{LaunchClaims, LaunchContext};
pub use tool_api::{
    deep_link::{build_deep_link_resource, configure_deep_link, DeepLinkResource, DeepLinkResponse},
    errors::ToolApiError,
    gradebook_api::GradebookApi,
    launch_api::LaunchApi,
    scoreboard_api::ScoreboardApi,
};
pub use traits::{GradeService, LaunchCache, RosterService};
