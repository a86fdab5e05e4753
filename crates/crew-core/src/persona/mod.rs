//! Persona domain module.
//!
//! This module contains the persona identity and focus-area enums, the
//! persona record, and the fixed five-member roster.
//!
//! # Module Structure
//!
//! - `model`: Core persona domain models (`Persona`, `PersonaId`, `FocusArea`)
//! - `roster`: The static roster and its lookups
//!
//! # Usage
//!
//! ```
//! use crew_core::persona::{all_personas, display_name, PersonaId};
//!
//! assert_eq!(all_personas().len(), 5);
//! assert_eq!(display_name(PersonaId::TeamLead), "Team Leader");
//! ```

mod model;
mod roster;

// Re-export public API
pub use model::{FocusArea, Persona, PersonaId};
pub use roster::{all_personas, display_name, display_name_for, persona};
