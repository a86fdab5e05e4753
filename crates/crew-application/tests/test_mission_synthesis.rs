use std::collections::BTreeSet;

use crew_application::lexicon::DEFAULT_AUDIENCE;
use crew_application::synthesize;
use crew_core::mission::{MissionDocument, Track};
use crew_core::persona::{FocusArea, PersonaId};
use strum::{EnumCount, IntoEnumIterator};

/// Every human-readable string in the document, keys excluded.
fn all_text(doc: &MissionDocument) -> String {
    fn collect(value: &serde_json::Value, out: &mut Vec<String>) {
        match value {
            serde_json::Value::String(s) => out.push(s.clone()),
            serde_json::Value::Array(items) => items.iter().for_each(|v| collect(v, out)),
            serde_json::Value::Object(map) => map.values().for_each(|v| collect(v, out)),
            _ => {}
        }
    }
    let mut out = Vec::new();
    collect(&serde_json::to_value(doc).unwrap(), &mut out);
    out.join("\n")
}

#[test]
fn test_same_idea_same_document() {
    let idea = "Create a collaborative whiteboard for teachers with live sync";
    let first = synthesize(idea).unwrap();
    let second = synthesize(idea).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_conversation_covers_every_persona_and_focus() {
    let doc = synthesize("Build a recipe sharing app").unwrap();
    assert_eq!(doc.conversation.len(), 5);

    let agents: Vec<PersonaId> = doc.conversation.iter().map(|m| m.agent).collect();
    assert_eq!(agents, PersonaId::iter().collect::<Vec<_>>());

    let focuses: BTreeSet<FocusArea> = doc.conversation.iter().map(|m| m.focus).collect();
    assert_eq!(focuses.len(), FocusArea::COUNT);
}

#[test]
fn test_three_workstreams_with_content() {
    let doc = synthesize("Build a recipe sharing app").unwrap();
    assert_eq!(doc.workstreams.iter().count(), Track::COUNT);
    for (_, stream) in doc.workstreams.iter() {
        assert!(!stream.summary.is_empty());
        assert!(!stream.goals.is_empty());
        assert!(!stream.tasks.is_empty());
    }
}

#[test]
fn test_developer_portal_traceability() {
    let doc = synthesize("Build a developer portal with real-time analytics dashboards").unwrap();
    let brief = &doc.mission_brief;

    assert_eq!(brief.codename, "Developer Portal");
    assert!(brief.target_users.contains("developer"));
    assert!(brief.elevator_pitch.to_lowercase().contains("analytics"));

    let text = all_text(&doc).to_lowercase();
    assert!(text.contains("real-time"));
    assert!(
        doc.workstreams
            .analytics
            .goals
            .iter()
            .any(|g| g.to_lowercase().contains("analytics"))
    );
}

#[test]
fn test_birthday_party_avoids_unrelated_themes() {
    let doc = synthesize("Plan a birthday party").unwrap();
    assert_eq!(doc.mission_brief.codename, "Birthday Party");
    assert_eq!(doc.mission_brief.target_users, DEFAULT_AUDIENCE);

    let text = all_text(&doc).to_lowercase();
    assert!(text.contains("birthday party"));
    assert!(!text.contains("analytics"));
    assert!(!text.contains("real-time"));
}

#[test]
fn test_everyday_ideas_stay_generic() {
    for idea in [
        "Plan a live concert in the park",
        "Write a report on local history",
    ] {
        let doc = synthesize(idea).unwrap();
        assert_eq!(doc.mission_brief.target_users, DEFAULT_AUDIENCE);

        let text = all_text(&doc).to_lowercase();
        assert!(!text.contains("analytics"), "{idea} picked up analytics");
        assert!(!text.contains("real-time"), "{idea} picked up real-time");
    }
}

#[test]
fn test_purpose_phrase_is_not_the_audience() {
    let doc = synthesize("Build an app for tracking expenses").unwrap();
    assert_eq!(doc.mission_brief.codename, "Expenses");
    assert_eq!(doc.mission_brief.target_users, DEFAULT_AUDIENCE);
}

#[test]
fn test_codename_appears_across_sections() {
    let doc = synthesize("Launch a marketplace for local artists").unwrap();
    let codename = &doc.mission_brief.codename;
    assert!(doc.mission_brief.elevator_pitch.contains(codename.as_str()));
    assert!(doc.timeline[0].goal.contains(codename.as_str()));
    assert!(doc.status.stakeholder_brief.contains(codename.as_str()));
}

#[test]
fn test_owners_are_consistent_across_sections() {
    let doc = synthesize("Build an API for fleet tracking").unwrap();

    let backend_owner = doc.workstreams.back_end.owner;
    let analytics_owner = doc.workstreams.analytics.owner;
    let service_tests = doc
        .testing
        .iter()
        .find(|t| t.title == "Service & contract tests")
        .unwrap();
    let data_tests = doc
        .testing
        .iter()
        .find(|t| t.title == "Data quality validation")
        .unwrap();
    assert_eq!(service_tests.owner, backend_owner);
    assert_eq!(data_tests.owner, analytics_owner);

    let build_sprint = doc.timeline.iter().find(|p| p.name == "Build Sprint").unwrap();
    assert_eq!(build_sprint.lead, backend_owner);
    let measure = doc
        .timeline
        .iter()
        .find(|p| p.name == "Measure & Harden")
        .unwrap();
    assert_eq!(measure.lead, analytics_owner);
}

#[test]
fn test_blank_idea_is_invalid_input() {
    for idea in ["", "   ", "\n\t "] {
        let err = synthesize(idea).unwrap_err();
        assert!(err.is_invalid_input(), "{idea:?} should be rejected");
    }
}

#[test]
fn test_symbol_only_idea_still_produces_document() {
    let doc = synthesize("!!! ??? 🎉").unwrap();
    assert_eq!(doc.mission_brief.codename, "Untitled Mission");
    assert!(doc.validate().is_ok());
}

#[test]
fn test_document_serializes_with_camel_case_keys() {
    let doc = synthesize("Build a developer portal with real-time analytics dashboards").unwrap();
    let value = serde_json::to_value(&doc).unwrap();
    for key in [
        "missionBrief",
        "conversation",
        "workstreams",
        "timeline",
        "testing",
        "deliverables",
        "status",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert!(value["workstreams"].get("frontEnd").is_some());
    assert!(value["workstreams"].get("backEnd").is_some());
    assert!(value["status"].get("stakeholderBrief").is_some());
    assert_eq!(value["conversation"][3]["agent"], "productManager");
    assert_eq!(value["conversation"][3]["focus"], "alignment");
}
