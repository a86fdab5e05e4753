//! HTTP boundary for CREW.
//!
//! Serves the mission endpoint, the persona roster and a health check with
//! `warp`.

pub mod config;
pub mod server;

pub use config::ServerConfig;
pub use server::MissionServer;
