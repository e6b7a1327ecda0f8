//! Fixtures for exercising the engine without a real platform. Enabled with the `test_utils` feature.
pub mod fake_platform;
pub mod launches;
