//! Timeline section: four phases in chronological order.

use crew_core::Result;
use crew_core::mission::{TimelinePhase, Track};
use crew_core::persona::PersonaId;

use super::SectionContext;
use crate::assignment::{delivery_owner, track_owner};

pub(super) struct PhasePlan {
    name: &'static str,
    duration: &'static str,
    goal: &'static str,
    activities: &'static [&'static str],
    exit_criteria: &'static [&'static str],
}

pub(super) const PHASES: [PhasePlan; 4] = [
    PhasePlan {
        name: "Discovery & Architecture",
        duration: "Week 1",
        goal: "timeline/discovery_goal",
        activities: &[
            "timeline/discovery_activity_journeys",
            "timeline/discovery_activity_context",
            "timeline/discovery_activity_contract",
        ],
        exit_criteria: &[
            "timeline/discovery_exit_decisions",
            "timeline/discovery_exit_contract",
        ],
    },
    PhasePlan {
        name: "Build Sprint",
        duration: "Weeks 2-3",
        goal: "timeline/build_goal",
        activities: &[
            "timeline/build_activity_screens",
            "timeline/build_activity_services",
            "timeline/build_activity_integration",
        ],
        exit_criteria: &["timeline/build_exit_flow", "timeline/build_exit_tests"],
    },
    PhasePlan {
        name: "Measure & Harden",
        duration: "Week 4",
        goal: "timeline/measure_goal",
        activities: &[
            "timeline/measure_activity_pilot",
            "timeline/measure_activity_compare",
            "timeline/measure_activity_fix",
        ],
        exit_criteria: &[
            "timeline/measure_exit_metrics",
            "timeline/measure_exit_defects",
        ],
    },
    PhasePlan {
        name: "Launch Readiness",
        duration: "Week 5",
        goal: "timeline/launch_goal",
        activities: &[
            "timeline/launch_activity_runbooks",
            "timeline/launch_activity_brief",
            "timeline/launch_activity_review",
        ],
        exit_criteria: &[
            "timeline/launch_exit_approval",
            "timeline/launch_exit_rollback",
        ],
    },
];

/// Lead for the phase at `index`.
fn phase_lead(index: usize) -> PersonaId {
    match index {
        0 => PersonaId::Architect,
        1 => track_owner(Track::BackEnd),
        2 => track_owner(Track::Analytics),
        _ => delivery_owner(),
    }
}

pub(super) fn build(ctx: &SectionContext<'_>) -> Result<Vec<TimelinePhase>> {
    PHASES
        .iter()
        .enumerate()
        .map(|(index, phase)| {
            Ok(TimelinePhase {
                name: phase.name.to_string(),
                duration: phase.duration.to_string(),
                goal: ctx.render(phase.goal)?,
                lead: phase_lead(index),
                activities: ctx.render_all(phase.activities)?,
                exit_criteria: ctx.render_all(phase.exit_criteria)?,
            })
        })
        .collect()
}
