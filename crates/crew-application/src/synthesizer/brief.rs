//! Mission brief section.

use crew_core::Result;
use crew_core::mission::MissionBrief;

use super::SectionContext;
use crate::templates::Theme;

const FIXED_METRICS: [&str; 2] = ["brief/metric_first_build", "brief/metric_defects"];

/// Success metrics in the brief: the fixed ones plus one per theme.
pub(super) fn metric_count(themes: &[&Theme]) -> usize {
    FIXED_METRICS.len() + themes.len()
}

pub(super) fn build(ctx: &SectionContext<'_>) -> Result<MissionBrief> {
    let mut guardrails = vec![ctx.render("brief/guardrail_increments")?];
    guardrails.extend(ctx.per_theme(|t| t.guardrail));
    guardrails.push(ctx.render("brief/guardrail_privacy")?);

    let mut success_metrics = vec![ctx.render(FIXED_METRICS[0])?];
    success_metrics.extend(ctx.per_theme(|t| t.metric));
    success_metrics.push(ctx.render(FIXED_METRICS[1])?);

    Ok(MissionBrief {
        codename: ctx.signal.codename.clone(),
        elevator_pitch: ctx.render("brief/pitch")?,
        target_users: ctx.signal.audience.clone(),
        guardrails,
        success_metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::IdeaSignal;
    use crate::templates::TemplateCatalog;

    fn brief_for(idea: &str) -> MissionBrief {
        let catalog = TemplateCatalog::new().unwrap();
        let signal = IdeaSignal::extract(idea).unwrap();
        build(&SectionContext::bind(&catalog, &signal)).unwrap()
    }

    #[test]
    fn test_pitch_names_codename_and_audience() {
        let brief = brief_for("Build a developer portal with real-time analytics dashboards");
        assert_eq!(brief.codename, "Developer Portal");
        assert!(brief.elevator_pitch.starts_with("Developer Portal turns"));
        assert!(brief.elevator_pitch.contains("developer and engineering teams"));
        assert!(brief.elevator_pitch.contains("analytics"));
    }

    #[test]
    fn test_metrics_count_matches_themes() {
        let brief = brief_for("Build a developer portal with real-time analytics dashboards");
        assert_eq!(brief.success_metrics.len(), 4);
        assert_eq!(brief.guardrails.len(), 4);

        let plain = brief_for("Plan a birthday party");
        assert_eq!(plain.success_metrics.len(), 3);
    }
}
