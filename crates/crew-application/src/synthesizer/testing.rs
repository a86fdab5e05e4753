//! Testing section.

use crew_core::Result;
use crew_core::mission::TestingEntry;

use super::SectionContext;
use crate::assignment::TestingScope;

fn templates(scope: TestingScope) -> (&'static str, &'static [&'static str]) {
    match scope {
        TestingScope::Service => (
            "testing/service_focus",
            &[
                "testing/service_coverage_unit",
                "testing/service_coverage_contract",
                "testing/service_coverage_load",
            ],
        ),
        TestingScope::DataQuality => (
            "testing/data_focus",
            &[
                "testing/data_coverage_schema",
                "testing/data_coverage_reconcile",
                "testing/data_coverage_alerts",
            ],
        ),
        TestingScope::Acceptance => (
            "testing/acceptance_focus",
            &[
                "testing/acceptance_coverage_journey",
                "testing/acceptance_coverage_accessibility",
            ],
        ),
    }
}

pub(super) fn build(ctx: &SectionContext<'_>) -> Result<Vec<TestingEntry>> {
    TestingScope::ALL
        .iter()
        .map(|scope| {
            let (focus, coverage_names) = templates(*scope);
            let mut coverage = ctx.render_all(coverage_names)?;
            // Theme checks run as part of acceptance.
            if *scope == TestingScope::Acceptance {
                coverage.extend(ctx.per_theme(|t| t.coverage));
            }
            Ok(TestingEntry {
                title: scope.title().to_string(),
                owner: scope.owner(),
                focus: ctx.render(focus)?,
                coverage,
            })
        })
        .collect()
}
