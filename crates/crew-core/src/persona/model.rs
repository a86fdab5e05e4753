//! Persona domain model.
//!
//! Represents the simulated crew members that respond to a mission idea.
//! The roster is closed: identities and focus areas are enums, so an
//! unchecked identity can never reach the ownership tables.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

use crate::error::{CrewError, Result};

/// Identity of one of the five fixed crew personas.
#[derive(
    Deserialize,
    Serialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PersonaId {
    /// Shapes the system and owns the experience track
    Architect,
    /// Defines measurement and owns the insight track
    Analyst,
    /// Builds the services and owns the test harness
    Engineer,
    /// Owns scope, the brief, and stakeholder alignment
    ProductManager,
    /// Owns cadence and delivery across all tracks
    TeamLead,
}

impl PersonaId {
    /// Parses a wire identity (`"architect"`, `"productManager"`, ...).
    ///
    /// Identities are only produced internally, so a failure here is a
    /// programming defect rather than bad user input.
    pub fn parse(value: &str) -> Result<Self> {
        value
            .parse::<Self>()
            .map_err(|_| CrewError::unknown_persona(value))
    }

    /// The focus area this persona speaks for.
    pub fn focus_area(self) -> FocusArea {
        match self {
            PersonaId::Architect => FocusArea::Architecture,
            PersonaId::Analyst => FocusArea::Insight,
            PersonaId::Engineer => FocusArea::Quality,
            PersonaId::ProductManager => FocusArea::Alignment,
            PersonaId::TeamLead => FocusArea::Delivery,
        }
    }
}

/// Classifies a persona's contribution in the crew conversation.
#[derive(
    Deserialize,
    Serialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FocusArea {
    Alignment,
    Architecture,
    Delivery,
    Insight,
    Quality,
}

/// A simulated crew member with a fixed role and remit.
///
/// Personas are static data: the registry hands out `&'static Persona`
/// references and nothing mutates them after start-up.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    /// Stable identity
    pub id: PersonaId,
    /// Name shown next to the persona's contributions
    pub display_name: &'static str,
    /// Short role label
    pub title: &'static str,
    /// One-sentence remit
    pub mission: &'static str,
    /// Ordered skill tags (never empty)
    pub specialty: &'static [&'static str],
    /// Focus area used to route and color the persona's contribution
    pub focus: FocusArea,
    /// Gradient classes used by the presentation layer
    pub accent_color: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_persona_id_wire_names() {
        assert_eq!(PersonaId::ProductManager.to_string(), "productManager");
        assert_eq!(PersonaId::TeamLead.as_ref(), "teamLead");
        assert_eq!(
            serde_json::to_string(&PersonaId::Architect).unwrap(),
            "\"architect\""
        );
    }

    #[test]
    fn test_parse_known_and_unknown_ids() {
        assert_eq!(PersonaId::parse("analyst").unwrap(), PersonaId::Analyst);
        assert_eq!(PersonaId::parse("teamLead").unwrap(), PersonaId::TeamLead);

        let err = PersonaId::parse("designer").unwrap_err();
        assert!(err.is_unknown_persona());
    }

    #[test]
    fn test_focus_areas_are_bijective() {
        let focuses: BTreeSet<FocusArea> = PersonaId::iter().map(PersonaId::focus_area).collect();
        assert_eq!(focuses.len(), FocusArea::COUNT);
        assert_eq!(PersonaId::COUNT, FocusArea::COUNT);
    }

    #[test]
    fn test_focus_area_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FocusArea::Insight).unwrap(),
            "\"insight\""
        );
        assert_eq!(FocusArea::Delivery.to_string(), "delivery");
    }
}
