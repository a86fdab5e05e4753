//! Domain layer for CREW.
//!
//! Holds the fixed persona roster, the mission document model, and the
//! shared error type. Nothing in this crate performs I/O.

pub mod error;
pub mod mission;
pub mod persona;

// Re-export common error type
pub use error::{CrewError, Result};
