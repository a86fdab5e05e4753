//! Application layer for CREW.
//!
//! This crate turns an idea into a `MissionDocument`: it extracts signals
//! from the text, binds them into phrasing templates, and assembles every
//! section of the crew's response. It also holds the transport-agnostic
//! mission endpoint that any outer surface (HTTP, CLI) calls into.

pub mod assignment;
pub mod lexicon;
pub mod mission_endpoint;
pub mod signal;
pub mod synthesizer;
pub mod templates;

pub use mission_endpoint::{EndpointResponse, handle_mission_request};
pub use signal::IdeaSignal;
pub use synthesizer::{MissionSynthesizer, synthesize};
