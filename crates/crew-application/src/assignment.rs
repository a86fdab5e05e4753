//! Ownership table.
//!
//! Every section that names an owner or lead asks this module, so a track
//! is always attributed to the same persona wherever it appears.

use crew_core::mission::Track;
use crew_core::persona::PersonaId;

/// Owner of each execution track.
pub fn track_owner(track: Track) -> PersonaId {
    match track {
        Track::FrontEnd => PersonaId::Architect,
        Track::BackEnd => PersonaId::Engineer,
        Track::Analytics => PersonaId::Analyst,
    }
}

/// Persona whose voice carries the brief and the status report.
pub fn brief_owner() -> PersonaId {
    PersonaId::ProductManager
}

/// Persona that owns end-to-end acceptance and phase cadence.
pub fn delivery_owner() -> PersonaId {
    PersonaId::TeamLead
}

/// Kinds of testing entry, each tied to the track it verifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestingScope {
    Service,
    DataQuality,
    Acceptance,
}

impl TestingScope {
    pub const ALL: [TestingScope; 3] = [
        TestingScope::Service,
        TestingScope::DataQuality,
        TestingScope::Acceptance,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TestingScope::Service => "Service & contract tests",
            TestingScope::DataQuality => "Data quality validation",
            TestingScope::Acceptance => "End-to-end acceptance",
        }
    }

    /// Owner follows the track the scope verifies.
    pub fn owner(self) -> PersonaId {
        match self {
            TestingScope::Service => track_owner(Track::BackEnd),
            TestingScope::DataQuality => track_owner(Track::Analytics),
            TestingScope::Acceptance => delivery_owner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_each_track_has_a_distinct_owner() {
        let owners: BTreeSet<PersonaId> = Track::iter().map(track_owner).collect();
        assert_eq!(owners.len(), 3);
    }

    #[test]
    fn test_testing_owners_follow_tracks() {
        assert_eq!(TestingScope::Service.owner(), PersonaId::Engineer);
        assert_eq!(TestingScope::DataQuality.owner(), PersonaId::Analyst);
        assert_eq!(TestingScope::Acceptance.owner(), PersonaId::TeamLead);
    }

    #[test]
    fn test_brief_is_voiced_by_product_manager() {
        assert_eq!(brief_owner(), PersonaId::ProductManager);
    }
}
