//! Status report section.

use crew_core::Result;
use crew_core::mission::StatusReport;

use super::SectionContext;

const NEXT_STEPS: [&str; 5] = [
    "status/step_brief",
    "status/step_contract",
    "status/step_scaffold",
    "status/step_taxonomy",
    "status/step_reviews",
];

pub(super) fn build(ctx: &SectionContext<'_>) -> Result<StatusReport> {
    let mut risks = ctx.per_theme(|t| t.risk);
    risks.extend(ctx.render_all(&["status/risk_scope", "status/risk_feedback"])?);

    Ok(StatusReport {
        next_steps: ctx.render_all(&NEXT_STEPS)?,
        risks,
        stakeholder_brief: ctx.render("status/stakeholder_brief")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::IdeaSignal;
    use crate::templates::TemplateCatalog;

    #[test]
    fn test_status_names_personas_and_counts() {
        let catalog = TemplateCatalog::new().unwrap();
        let signal = IdeaSignal::extract("Plan a birthday party").unwrap();
        let status = build(&SectionContext::bind(&catalog, &signal)).unwrap();

        assert_eq!(
            status.next_steps[0],
            "Product Manager confirms the Birthday Party brief with stakeholders"
        );
        assert!(status.stakeholder_brief.contains("4-phase plan"));
        assert!(status.stakeholder_brief.contains("3 success metrics"));
        assert_eq!(status.risks.len(), 3);
    }
}
