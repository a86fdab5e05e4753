//! Deliverables section.

use crew_core::Result;
use crew_core::mission::DeliverableEntry;

use super::SectionContext;

struct DeliverablePlan {
    category: &'static str,
    summary: &'static str,
    artifacts: &'static [&'static str],
    /// Whether each selected theme adds its own artifact
    themed: bool,
}

const DELIVERABLES: [DeliverablePlan; 4] = [
    DeliverablePlan {
        category: "Product Blueprint",
        summary: "deliverables/blueprint_summary",
        artifacts: &[
            "deliverables/blueprint_brief",
            "deliverables/blueprint_context",
            "deliverables/blueprint_contract",
        ],
        themed: false,
    },
    DeliverablePlan {
        category: "Working Software",
        summary: "deliverables/software_summary",
        artifacts: &["deliverables/software_client", "deliverables/software_service"],
        themed: true,
    },
    DeliverablePlan {
        category: "Quality Evidence",
        summary: "deliverables/evidence_summary",
        artifacts: &[
            "deliverables/evidence_report",
            "deliverables/evidence_data",
            "deliverables/evidence_pilot",
        ],
        themed: false,
    },
    DeliverablePlan {
        category: "Launch Kit",
        summary: "deliverables/launch_summary",
        artifacts: &[
            "deliverables/launch_notes",
            "deliverables/launch_deck",
            "deliverables/launch_review",
        ],
        themed: false,
    },
];

pub(super) fn build(ctx: &SectionContext<'_>) -> Result<Vec<DeliverableEntry>> {
    DELIVERABLES
        .iter()
        .map(|plan| {
            let mut artifacts = ctx.render_all(plan.artifacts)?;
            if plan.themed {
                artifacts.extend(ctx.per_theme(|t| t.artifact));
            }
            Ok(DeliverableEntry {
                category: plan.category.to_string(),
                summary: ctx.render(plan.summary)?,
                artifacts,
            })
        })
        .collect()
}
