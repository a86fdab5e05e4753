//! Crew conversation section: one message per persona, in roster order.

use crew_core::Result;
use crew_core::mission::AgentMessage;
use crew_core::persona::{FocusArea, PersonaId};
use strum::IntoEnumIterator;

use super::SectionContext;

/// Template names for one focus area's message.
struct Script {
    headline: &'static str,
    message: &'static str,
    actions: [&'static str; 3],
}

fn script(focus: FocusArea) -> Script {
    match focus {
        FocusArea::Architecture => Script {
            headline: "conversation/architecture_headline",
            message: "conversation/architecture_message",
            actions: [
                "conversation/architecture_action_context",
                "conversation/architecture_action_contract",
                "conversation/architecture_action_adr",
            ],
        },
        FocusArea::Insight => Script {
            headline: "conversation/insight_headline",
            message: "conversation/insight_message",
            actions: [
                "conversation/insight_action_taxonomy",
                "conversation/insight_action_baselines",
                "conversation/insight_action_digest",
            ],
        },
        FocusArea::Quality => Script {
            headline: "conversation/quality_headline",
            message: "conversation/quality_message",
            actions: [
                "conversation/quality_action_scaffold",
                "conversation/quality_action_tests",
                "conversation/quality_action_staging",
            ],
        },
        FocusArea::Alignment => Script {
            headline: "conversation/alignment_headline",
            message: "conversation/alignment_message",
            actions: [
                "conversation/alignment_action_brief",
                "conversation/alignment_action_backlog",
                "conversation/alignment_action_scope",
            ],
        },
        FocusArea::Delivery => Script {
            headline: "conversation/delivery_headline",
            message: "conversation/delivery_message",
            actions: [
                "conversation/delivery_action_plan",
                "conversation/delivery_action_sync",
                "conversation/delivery_action_escalate",
            ],
        },
    }
}

pub(super) fn build(ctx: &SectionContext<'_>) -> Result<Vec<AgentMessage>> {
    PersonaId::iter()
        .map(|agent| {
            let focus = agent.focus_area();
            let script = script(focus);
            Ok(AgentMessage {
                agent,
                focus,
                headline: ctx.render(script.headline)?,
                message: ctx.render(script.message)?,
                actions: ctx.render_all(&script.actions)?,
            })
        })
        .collect()
}
