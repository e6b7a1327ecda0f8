//! HTTP client for an LTI platform's Advantage services.
//!
//! [`PlatformClient`] implements the engine's [`GradeService`] (Assignment and Grade Service) and [`RosterService`]
//! (Names and Roles Provisioning Service) over REST, so that it can be plugged straight into the engine's gradebook and
//! scoreboard APIs.
//!
//! [`GradeService`]: lti_engine::GradeService
//! [`RosterService`]: lti_engine::RosterService
mod ags;
mod api;
mod config;
mod data_objects;
mod error;
mod helpers;
mod nrps;

pub use api::PlatformClient;
pub use config::PlatformConfig;
pub use data_objects::{LineItem, MembershipContainer};
pub use error::PlatformApiError;
pub use helpers::{next_page_url, service_url};
