//! # Breakout LTI tool server
//! This crate hosts the HTTP server for the Breakout LTI 1.3 tool. It is responsible for:
//! * Accepting launches forwarded (and signed) by the LTI gateway, and rendering the game page.
//! * Reporting finished games to the platform's gradebook.
//! * Serving the class scoreboard.
//! * Answering deep-linking requests with one resource link per difficulty.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `POST /launch/`: Launch ingestion. The body is the claim set of a validated id-token.
//! * `GET /launch/{launch_id}/`: The game page for a registered launch.
//! * `/configure/{launch_id}/{difficulty}/`: Deep-link response for the chosen difficulty.
//! * `POST /api/score/{launch_id}/{earned_score}/{time_spent}/`: Submit a finished game.
//! * `/api/scoreboard/{launch_id}/`: The scoreboard for the launch's course.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod game_page;
pub mod helpers;
pub mod middleware;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
