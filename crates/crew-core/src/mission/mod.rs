//! Mission document module.
//!
//! - `model`: The document value objects (`MissionDocument` and its sections)
//! - `validation`: Structural invariant checks on a finished document

mod model;
mod validation;

pub use model::{
    AgentMessage, DeliverableEntry, MissionBrief, MissionDocument, StatusReport, TestingEntry,
    TimelinePhase, Track, Workstream, WorkstreamTask, Workstreams,
};
