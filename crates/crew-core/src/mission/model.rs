//! Mission document model.
//!
//! These are the value objects the synthesizer produces for one idea. They
//! serialize with camelCase keys and keep every list in display order, so a
//! presentation layer can render the JSON without adaptation.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

use crate::persona::{FocusArea, PersonaId};

/// The full structured response of the crew to one idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionDocument {
    pub mission_brief: MissionBrief,
    /// One message per persona, in roster order
    pub conversation: Vec<AgentMessage>,
    pub workstreams: Workstreams,
    /// Phases in chronological order
    pub timeline: Vec<TimelinePhase>,
    pub testing: Vec<TestingEntry>,
    pub deliverables: Vec<DeliverableEntry>,
    pub status: StatusReport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionBrief {
    /// Short, human-legible name derived from the idea
    pub codename: String,
    pub elevator_pitch: String,
    pub target_users: String,
    pub guardrails: Vec<String>,
    pub success_metrics: Vec<String>,
}

/// A single persona's contribution to the crew conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentMessage {
    pub agent: PersonaId,
    pub focus: FocusArea,
    pub headline: String,
    pub message: String,
    pub actions: Vec<String>,
}

/// The three parallel execution tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumCount)]
#[strum(serialize_all = "camelCase")]
pub enum Track {
    FrontEnd,
    BackEnd,
    Analytics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workstreams {
    pub front_end: Workstream,
    pub back_end: Workstream,
    pub analytics: Workstream,
}

impl Workstreams {
    /// Iterates the tracks in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Track, &Workstream)> {
        [
            (Track::FrontEnd, &self.front_end),
            (Track::BackEnd, &self.back_end),
            (Track::Analytics, &self.analytics),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workstream {
    pub owner: PersonaId,
    pub summary: String,
    pub goals: Vec<String>,
    pub tasks: Vec<WorkstreamTask>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkstreamTask {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePhase {
    pub name: String,
    /// Duration label, e.g. "Weeks 2-3"
    pub duration: String,
    pub goal: String,
    pub lead: PersonaId,
    pub activities: Vec<String>,
    pub exit_criteria: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestingEntry {
    pub title: String,
    pub owner: PersonaId,
    pub focus: String,
    pub coverage: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverableEntry {
    pub category: String,
    pub summary: String,
    pub artifacts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub next_steps: Vec<String>,
    pub risks: Vec<String>,
    pub stakeholder_brief: String,
}
