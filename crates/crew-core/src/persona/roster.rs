//! The fixed crew roster.
//!
//! Provides the five system personas in display order. The table is a
//! `static`, so it is built at compile time and is read-only for the life
//! of the process.

use super::model::{FocusArea, Persona, PersonaId};
use crate::error::Result;

/// The roster in registry order. Conversation entries follow this order.
static ROSTER: [Persona; 5] = [
    Persona {
        id: PersonaId::Architect,
        display_name: "Architect",
        title: "Systems Architect",
        mission: "Turns the idea into a coherent system shape with clear contracts between front end and back end.",
        specialty: &["System design", "API contracts", "Experience architecture"],
        focus: FocusArea::Architecture,
        accent_color: "from-sky-400 to-cyan-300",
    },
    Persona {
        id: PersonaId::Analyst,
        display_name: "Data Analyst",
        title: "Data Analyst",
        mission: "Makes success measurable by defining the signals, baselines, and insight loops the crew steers by.",
        specialty: &["Instrumentation", "Metrics design", "Data quality"],
        focus: FocusArea::Insight,
        accent_color: "from-purple-400 to-fuchsia-300",
    },
    Persona {
        id: PersonaId::Engineer,
        display_name: "Engineer",
        title: "Full-Stack Engineer",
        mission: "Builds the services and screens with automated tests from the first commit.",
        specialty: &["Service development", "Test automation", "CI/CD"],
        focus: FocusArea::Quality,
        accent_color: "from-rose-400 to-orange-300",
    },
    Persona {
        id: PersonaId::ProductManager,
        display_name: "Product Manager",
        title: "Product Manager",
        mission: "Keeps the crew aligned on who the product serves and what the first release must prove.",
        specialty: &["Scope control", "Stakeholder alignment", "Roadmapping"],
        focus: FocusArea::Alignment,
        accent_color: "from-amber-400 to-yellow-300",
    },
    Persona {
        id: PersonaId::TeamLead,
        display_name: "Team Leader",
        title: "Team Leader",
        mission: "Runs the delivery cadence so every track lands on time with its exit criteria met.",
        specialty: &["Delivery planning", "Risk management", "Team rituals"],
        focus: FocusArea::Delivery,
        accent_color: "from-emerald-400 to-teal-300",
    },
];

/// Returns every persona in registry order.
pub fn all_personas() -> &'static [Persona] {
    &ROSTER
}

/// Looks up the persona for an identity.
pub fn persona(id: PersonaId) -> &'static Persona {
    // The roster holds one entry per variant in declaration order.
    &ROSTER[id as usize]
}

/// Returns the display name for an identity.
pub fn display_name(id: PersonaId) -> &'static str {
    persona(id).display_name
}

/// Returns the display name for a wire identity such as `"teamLead"`.
///
/// Fails with `CrewError::UnknownPersona` for anything outside the roster.
pub fn display_name_for(id: &str) -> Result<&'static str> {
    PersonaId::parse(id).map(display_name)
}
