//! Workstreams section: front-end, back-end and analytics tracks.

use crew_core::Result;
use crew_core::mission::{Track, Workstream, WorkstreamTask, Workstreams};

use super::SectionContext;
use crate::assignment::track_owner;
use crate::templates::Theme;

struct TrackPlan {
    summary: &'static str,
    primary_goal: &'static str,
    theme_goal: fn(&Theme) -> &'static str,
    closing_goal: &'static str,
    /// (title, detail) template pairs
    tasks: [(&'static str, &'static str); 3],
}

fn plan(track: Track) -> TrackPlan {
    match track {
        Track::FrontEnd => TrackPlan {
            summary: "workstreams/front_summary",
            primary_goal: "workstreams/front_goal_primary",
            theme_goal: |t| t.front_goal,
            closing_goal: "workstreams/front_goal_accessibility",
            tasks: [
                (
                    "workstreams/front_task_design_title",
                    "workstreams/front_task_design_detail",
                ),
                (
                    "workstreams/front_task_flows_title",
                    "workstreams/front_task_flows_detail",
                ),
                (
                    "workstreams/front_task_wiring_title",
                    "workstreams/front_task_wiring_detail",
                ),
            ],
        },
        Track::BackEnd => TrackPlan {
            summary: "workstreams/back_summary",
            primary_goal: "workstreams/back_goal_primary",
            theme_goal: |t| t.back_goal,
            closing_goal: "workstreams/back_goal_latency",
            tasks: [
                (
                    "workstreams/back_task_skeleton_title",
                    "workstreams/back_task_skeleton_detail",
                ),
                (
                    "workstreams/back_task_model_title",
                    "workstreams/back_task_model_detail",
                ),
                (
                    "workstreams/back_task_pipeline_title",
                    "workstreams/back_task_pipeline_detail",
                ),
            ],
        },
        Track::Analytics => TrackPlan {
            summary: "workstreams/insight_summary",
            primary_goal: "workstreams/insight_goal_primary",
            theme_goal: |t| t.insight_goal,
            closing_goal: "workstreams/insight_goal_reporting",
            tasks: [
                (
                    "workstreams/insight_task_taxonomy_title",
                    "workstreams/insight_task_taxonomy_detail",
                ),
                (
                    "workstreams/insight_task_baselines_title",
                    "workstreams/insight_task_baselines_detail",
                ),
                (
                    "workstreams/insight_task_reviews_title",
                    "workstreams/insight_task_reviews_detail",
                ),
            ],
        },
    }
}

fn build_track(ctx: &SectionContext<'_>, track: Track) -> Result<Workstream> {
    let plan = plan(track);

    let mut goals = vec![ctx.render(plan.primary_goal)?];
    goals.extend(ctx.per_theme(plan.theme_goal));
    goals.push(ctx.render(plan.closing_goal)?);

    let tasks = plan
        .tasks
        .iter()
        .map(|(title, detail)| {
            Ok(WorkstreamTask {
                title: ctx.render(title)?,
                detail: ctx.render(detail)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Workstream {
        owner: track_owner(track),
        summary: ctx.render(plan.summary)?,
        goals,
        tasks,
    })
}

pub(super) fn build(ctx: &SectionContext<'_>) -> Result<Workstreams> {
    Ok(Workstreams {
        front_end: build_track(ctx, Track::FrontEnd)?,
        back_end: build_track(ctx, Track::BackEnd)?,
        analytics: build_track(ctx, Track::Analytics)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::IdeaSignal;
    use crate::templates::TemplateCatalog;
    use crew_core::persona::PersonaId;

    fn workstreams_for(idea: &str) -> Workstreams {
        let catalog = TemplateCatalog::new().unwrap();
        let signal = IdeaSignal::extract(idea).unwrap();
        build(&SectionContext::bind(&catalog, &signal)).unwrap()
    }

    #[test]
    fn test_tracks_are_owned_per_assignment() {
        let streams = workstreams_for("Plan a birthday party");
        assert_eq!(streams.front_end.owner, PersonaId::Architect);
        assert_eq!(streams.back_end.owner, PersonaId::Engineer);
        assert_eq!(streams.analytics.owner, PersonaId::Analyst);
    }

    #[test]
    fn test_goals_grow_with_themes() {
        let plain = workstreams_for("Plan a birthday party");
        let themed =
            workstreams_for("Build a developer portal with real-time analytics dashboards");
        assert_eq!(plain.front_end.goals.len(), 3);
        assert_eq!(themed.front_end.goals.len(), 4);
        assert!(
            themed
                .analytics
                .goals
                .iter()
                .any(|g| g.contains("analytics dashboards"))
        );
    }

    #[test]
    fn test_every_track_has_three_tasks() {
        let streams = workstreams_for("Create a shared recipe book");
        for (_, stream) in streams.iter() {
            assert_eq!(stream.tasks.len(), 3);
        }
    }
}
