//! Phrasing templates for the mission document.
//!
//! Two tables drive all phrasing:
//!
//! - `THEMES`: one `Theme` per keyword class plus `GENERIC_THEME`. A theme
//!   holds the domain-specific fragment every section needs, so a detected
//!   signal changes wording in one place only.
//! - `SENTENCE_TEMPLATES`: named `minijinja` templates for the fixed
//!   sentences. They are compiled once into a shared environment.
//!
//! User-derived text only ever reaches a template as a context value. It is
//! never compiled as template source.

use crew_core::{CrewError, Result};
use minijinja::{Environment, UndefinedBehavior, Value};
use serde::Serialize;

use crate::lexicon::KeywordClass;

/// Domain-specific phrasing for one keyword class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Short label used in running text ("analytics", "real-time", ...)
    pub label: &'static str,
    pub pitch: &'static str,
    pub guardrail: &'static str,
    pub metric: &'static str,
    pub architecture: &'static str,
    pub insight: &'static str,
    pub engineering: &'static str,
    pub front_goal: &'static str,
    pub back_goal: &'static str,
    pub insight_goal: &'static str,
    pub coverage: &'static str,
    pub artifact: &'static str,
    pub risk: &'static str,
}

pub const GENERIC_THEME: Theme = Theme {
    label: "core",
    pitch: "with a lean first release that proves value quickly",
    guardrail: "Hold scope to the smallest slice that proves the idea",
    metric: "Seven in ten pilot users complete the core flow unaided",
    architecture: "and the first release keeps the moving parts to a minimum",
    insight: "capture the handful of signals that show the idea is working",
    engineering: "The core flow gets end-to-end coverage before anything else is added.",
    front_goal: "Make the core flow completable in under three minutes",
    back_goal: "Persist the core records with clear ownership and audit history",
    insight_goal: "Capture the core-flow completion rate from the first build",
    coverage: "Core flow on desktop and mobile viewports",
    artifact: "Core flow ready for pilot users",
    risk: "Unclear success criteria diluting focus",
};

/// The theme table, indexed by keyword class.
pub fn theme_for(class: KeywordClass) -> &'static Theme {
    match class {
        KeywordClass::Analytics => &THEMES[0],
        KeywordClass::RealTime => &THEMES[1],
        KeywordClass::Integration => &THEMES[2],
        KeywordClass::Collaboration => &THEMES[3],
        KeywordClass::Commerce => &THEMES[4],
        KeywordClass::Automation => &THEMES[5],
    }
}

/// Selects the themes for a set of detected classes, in the given order.
///
/// Falls back to the generic theme alone when nothing was detected.
pub fn select_themes(classes: &[KeywordClass]) -> Vec<&'static Theme> {
    if classes.is_empty() {
        return vec![&GENERIC_THEME];
    }
    classes.iter().map(|class| theme_for(*class)).collect()
}

/// Joins theme labels into running text: "a", "a and b", "a, b and c".
pub fn join_labels(themes: &[&Theme]) -> String {
    let labels: Vec<&str> = themes.iter().map(|t| t.label).collect();
    match labels.as_slice() {
        [] => GENERIC_THEME.label.to_string(),
        [only] => (*only).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

static THEMES: [Theme; 6] = [
    Theme {
        label: "analytics",
        pitch: "with analytics dashboards that turn raw activity into decisions",
        guardrail: "Define every metric before a dashboard renders it",
        metric: "Dashboards load in under two seconds with analytics that match source data",
        architecture: "and an event pipeline feeds the analytics store",
        insight: "model the analytics dashboards around the questions users actually ask",
        engineering: "Ingestion jobs get contract tests so analytics never drift from source data.",
        front_goal: "Render analytics dashboards with filters and drill-downs",
        back_goal: "Stream events into an analytics-ready warehouse",
        insight_goal: "Ship the analytics dashboards that answer the top five user questions",
        coverage: "Analytics figures reconciled against source records",
        artifact: "Analytics dashboards wired to live data",
        risk: "Unreliable source data undermining trust in analytics",
    },
    Theme {
        label: "real-time",
        pitch: "with real-time updates that keep every view current",
        guardrail: "Degrade gracefully to polling when live connections drop",
        metric: "Real-time updates reach every connected client in under one second",
        architecture: "and a push channel carries real-time updates to every client",
        insight: "track freshness so real-time data is provably current",
        engineering: "Socket fan-out gets load tests against the real-time latency budget.",
        front_goal: "Reflect real-time updates without full page reloads",
        back_goal: "Push real-time changes over a websocket channel",
        insight_goal: "Monitor real-time data freshness and alert on lag",
        coverage: "Real-time delivery under concurrent connections",
        artifact: "Real-time update channel with a load-test report",
        risk: "Real-time load exceeding connection capacity",
    },
    Theme {
        label: "integration",
        pitch: "with an integration layer and clean APIs other systems can build on",
        guardrail: "Version every public API contract from day one",
        metric: "Partners complete a first integration call within one day",
        architecture: "and an API gateway fronts every integration",
        insight: "watch API adoption and error rates per integration",
        engineering: "Every integration endpoint ships with contract tests and sandbox credentials.",
        front_goal: "Surface connection status for every integration",
        back_goal: "Publish documented REST endpoints and webhooks",
        insight_goal: "Track API adoption and error rates per integration partner",
        coverage: "Webhook retries and API version compatibility",
        artifact: "Public API reference and sandbox keys",
        risk: "Third-party API changes breaking integrations",
    },
    Theme {
        label: "collaboration",
        pitch: "with shared workspaces where people move the work forward together",
        guardrail: "Resolve concurrent edits deterministically and visibly",
        metric: "Three or more people co-edit a shared workspace in one session",
        architecture: "and a shared state service keeps collaborators in sync",
        insight: "measure how often people co-edit and hand work off",
        engineering: "Concurrent edit paths get conflict-resolution tests for collaboration.",
        front_goal: "Show presence and live cursors for collaborators",
        back_goal: "Store shared workspaces with per-member permissions",
        insight_goal: "Measure collaboration depth across shared workspaces",
        coverage: "Concurrent edits and permission boundaries",
        artifact: "Shared workspace module with permissions",
        risk: "Edit conflicts eroding trust in collaboration",
    },
    Theme {
        label: "commerce",
        pitch: "with a checkout and billing flow customers can trust",
        guardrail: "Never store raw card data and delegate payments to a certified processor",
        metric: "Checkout completion above seventy percent",
        architecture: "and payments stay isolated behind a billing service",
        insight: "follow the commerce funnel from first visit to paid conversion",
        engineering: "Payment flows run against the processor sandbox on every build.",
        front_goal: "Deliver a three-step checkout with clear pricing",
        back_goal: "Integrate the payment processor and subscription ledger",
        insight_goal: "Model revenue and conversion across the commerce funnel",
        coverage: "Payment success, decline and refund paths",
        artifact: "Checkout and billing integration",
        risk: "Payment compliance gaps delaying launch",
    },
    Theme {
        label: "AI automation",
        pitch: "with AI automation that takes over the repetitive steps",
        guardrail: "Keep a human approval step on every automated action",
        metric: "Automated suggestions accepted in at least forty percent of cases",
        architecture: "and model calls sit behind a single AI automation service",
        insight: "track how often AI suggestions are accepted or reverted",
        engineering: "Assistant prompts and fallbacks get regression fixtures.",
        front_goal: "Present AI suggestions that users can accept or dismiss",
        back_goal: "Route model calls through a rate-limited automation service",
        insight_goal: "Evaluate AI suggestion quality and acceptance",
        coverage: "AI fallbacks when the model is slow or unavailable",
        artifact: "AI automation service with evaluation fixtures",
        risk: "Automated output that users cannot verify",
    },
];

/// Named sentence templates. Names avoid `.html`/`.json`-style suffixes so
/// no auto-escaping applies.
pub const SENTENCE_TEMPLATES: &[(&str, &str)] = &[
    // Mission brief
    (
        "brief/pitch",
        "{{ codename }} turns {{ focus }} into a focused product for {{ audience }}, {{ theme.pitch }}.",
    ),
    (
        "brief/guardrail_increments",
        "Ship {{ codename }} in thin, reviewable increments",
    ),
    (
        "brief/guardrail_privacy",
        "Keep personal data out of logs, demos and test fixtures",
    ),
    (
        "brief/metric_first_build",
        "First usable {{ codename }} build in front of {{ audience }} within five weeks",
    ),
    (
        "brief/metric_defects",
        "Zero open severity-one defects at launch",
    ),
    // Conversation
    (
        "conversation/architecture_headline",
        "Architecture blueprint for {{ codename }}",
    ),
    (
        "conversation/architecture_message",
        "I'll shape {{ codename }} around {{ focus }}. Front end and back end share one contract so both tracks move in lockstep, {{ theme.architecture }}.",
    ),
    (
        "conversation/architecture_action_context",
        "Draft the {{ codename }} system context and service boundaries",
    ),
    (
        "conversation/architecture_action_contract",
        "Publish the shared API contract for both tracks",
    ),
    (
        "conversation/architecture_action_adr",
        "Record key decisions in lightweight decision records",
    ),
    ("conversation/insight_headline", "Measurement plan"),
    (
        "conversation/insight_message",
        "Success for {{ audience }} has to be measurable from the first build. I'll define the signals for {{ codename }} and {{ theme.insight }}.",
    ),
    (
        "conversation/insight_action_taxonomy",
        "Define the event taxonomy for {{ codename }}",
    ),
    (
        "conversation/insight_action_baselines",
        "Set a baseline for every success metric",
    ),
    (
        "conversation/insight_action_digest",
        "Prepare a weekly findings digest for the crew",
    ),
    ("conversation/quality_headline", "Build and quality plan"),
    (
        "conversation/quality_message",
        "I'll stand up the services behind {{ codename }} with tests from the first commit. {{ theme.engineering }}",
    ),
    (
        "conversation/quality_action_scaffold",
        "Scaffold the service skeleton and CI pipeline",
    ),
    (
        "conversation/quality_action_tests",
        "Wire automated tests into every merge",
    ),
    (
        "conversation/quality_action_staging",
        "Keep the staging environment deployable every day",
    ),
    ("conversation/alignment_headline", "Scope alignment"),
    (
        "conversation/alignment_message",
        "{{ codename }} is for {{ audience }}. We hold scope to {{ focus }} and judge every new request against that promise.",
    ),
    (
        "conversation/alignment_action_brief",
        "Confirm the mission brief with stakeholders",
    ),
    (
        "conversation/alignment_action_backlog",
        "Rank the backlog against the success metrics",
    ),
    (
        "conversation/alignment_action_scope",
        "Run a scope check at the end of every phase",
    ),
    ("conversation/delivery_headline", "Delivery cadence"),
    (
        "conversation/delivery_message",
        "We run {{ phase_count }} phases with explicit exit criteria. I keep the cadence and the risk log for {{ codename }} current so every track lands on time.",
    ),
    (
        "conversation/delivery_action_plan",
        "Publish the phase plan with an owner for every track",
    ),
    (
        "conversation/delivery_action_sync",
        "Hold a twice-weekly cross-track sync",
    ),
    (
        "conversation/delivery_action_escalate",
        "Escalate blocked work within one working day",
    ),
    // Workstreams
    (
        "workstreams/front_summary",
        "Experience track for {{ codename }}: the screens {{ audience }} use every day.",
    ),
    (
        "workstreams/front_goal_primary",
        "Deliver a responsive {{ codename }} interface built around {{ focus }}",
    ),
    (
        "workstreams/front_goal_accessibility",
        "Meet WCAG AA accessibility on every core screen",
    ),
    ("workstreams/front_task_design_title", "Design system"),
    (
        "workstreams/front_task_design_detail",
        "Set up tokens, components and layout primitives for {{ codename }}.",
    ),
    ("workstreams/front_task_flows_title", "Core journeys"),
    (
        "workstreams/front_task_flows_detail",
        "Build the primary journeys for {{ audience }} against mocked APIs.",
    ),
    ("workstreams/front_task_wiring_title", "Contract wiring"),
    (
        "workstreams/front_task_wiring_detail",
        "Swap mocks for the shared API contract once the back end is live.",
    ),
    (
        "workstreams/back_summary",
        "Service track for {{ codename }}: APIs, storage and deployment.",
    ),
    (
        "workstreams/back_goal_primary",
        "Expose a versioned {{ codename }} API that covers {{ focus }}",
    ),
    (
        "workstreams/back_goal_latency",
        "Keep p95 API latency under 300 ms",
    ),
    ("workstreams/back_task_skeleton_title", "Service skeleton"),
    (
        "workstreams/back_task_skeleton_detail",
        "Create the {{ codename }} service with health checks, configuration and structured logging.",
    ),
    ("workstreams/back_task_model_title", "Data model"),
    (
        "workstreams/back_task_model_detail",
        "Define the schema and migrations behind {{ focus }}.",
    ),
    (
        "workstreams/back_task_pipeline_title",
        "Deployment pipeline",
    ),
    (
        "workstreams/back_task_pipeline_detail",
        "Automate builds, tests and staging deploys on every merge.",
    ),
    (
        "workstreams/insight_summary",
        "Insight track for {{ codename }}: instrumentation, metrics and learning loops.",
    ),
    (
        "workstreams/insight_goal_primary",
        "Instrument {{ codename }} so every success metric is observable",
    ),
    (
        "workstreams/insight_goal_reporting",
        "Report progress to stakeholders every week",
    ),
    (
        "workstreams/insight_task_taxonomy_title",
        "Event taxonomy",
    ),
    (
        "workstreams/insight_task_taxonomy_detail",
        "Name and document every tracked event for {{ codename }}.",
    ),
    (
        "workstreams/insight_task_baselines_title",
        "Metric baselines",
    ),
    (
        "workstreams/insight_task_baselines_detail",
        "Record baseline values before the pilot opens.",
    ),
    (
        "workstreams/insight_task_reviews_title",
        "Findings reviews",
    ),
    (
        "workstreams/insight_task_reviews_detail",
        "Share findings with the crew at the end of each phase.",
    ),
    // Timeline
    (
        "timeline/discovery_goal",
        "Turn the {{ codename }} brief into an agreed architecture and API contract.",
    ),
    (
        "timeline/discovery_activity_journeys",
        "Map the key journeys for {{ audience }}",
    ),
    (
        "timeline/discovery_activity_context",
        "Sketch the system context around {{ focus }}",
    ),
    (
        "timeline/discovery_activity_contract",
        "Agree the API contract between tracks",
    ),
    (
        "timeline/discovery_exit_decisions",
        "Architecture decisions signed off by the crew",
    ),
    (
        "timeline/discovery_exit_contract",
        "API contract published to both tracks",
    ),
    (
        "timeline/build_goal",
        "Build the {{ labels }} foundations of {{ codename }} in parallel tracks.",
    ),
    (
        "timeline/build_activity_screens",
        "Implement core screens against mocks",
    ),
    (
        "timeline/build_activity_services",
        "Stand up services and storage",
    ),
    (
        "timeline/build_activity_integration",
        "Run a daily integration build",
    ),
    (
        "timeline/build_exit_flow",
        "Core flow works end to end on staging",
    ),
    (
        "timeline/build_exit_tests",
        "Automated tests pass on every merge",
    ),
    (
        "timeline/measure_goal",
        "Prove {{ codename }} against its success metrics and close quality gaps.",
    ),
    (
        "timeline/measure_activity_pilot",
        "Run a pilot with a small group of {{ audience }}",
    ),
    (
        "timeline/measure_activity_compare",
        "Compare pilot results to the recorded baselines",
    ),
    (
        "timeline/measure_activity_fix",
        "Fix the defects found in testing",
    ),
    (
        "timeline/measure_exit_metrics",
        "Success metrics trending toward target",
    ),
    (
        "timeline/measure_exit_defects",
        "No open severity-one defects",
    ),
    (
        "timeline/launch_goal",
        "Ship {{ codename }} with a clear rollout, support and follow-up plan.",
    ),
    (
        "timeline/launch_activity_runbooks",
        "Finalize release notes and runbooks",
    ),
    (
        "timeline/launch_activity_brief",
        "Brief stakeholders on scope and open risks",
    ),
    (
        "timeline/launch_activity_review",
        "Schedule the post-launch review",
    ),
    (
        "timeline/launch_exit_approval",
        "Go/no-go approved by the crew",
    ),
    ("timeline/launch_exit_rollback", "Rollback plan rehearsed"),
    // Testing
    (
        "testing/service_focus",
        "Verify the {{ codename }} API behaves exactly as its contract promises.",
    ),
    (
        "testing/service_coverage_unit",
        "Unit tests for domain logic",
    ),
    (
        "testing/service_coverage_contract",
        "Contract tests for every endpoint",
    ),
    (
        "testing/service_coverage_load",
        "Load test at twice the expected peak traffic",
    ),
    (
        "testing/data_focus",
        "Confirm every metric {{ codename }} reports is complete and correct.",
    ),
    (
        "testing/data_coverage_schema",
        "Event schema validation on ingest",
    ),
    (
        "testing/data_coverage_reconcile",
        "Metric values reconciled with source records",
    ),
    (
        "testing/data_coverage_alerts",
        "Alerting on missing or late data",
    ),
    (
        "testing/acceptance_focus",
        "Walk the journeys {{ audience }} rely on before every release.",
    ),
    (
        "testing/acceptance_coverage_journey",
        "Core journey across supported browsers",
    ),
    (
        "testing/acceptance_coverage_accessibility",
        "Accessibility audit of core screens",
    ),
    // Deliverables
    ("deliverables/blueprint_summary", "Scope and architecture"),
    (
        "deliverables/blueprint_brief",
        "{{ codename }} mission brief and success metrics",
    ),
    (
        "deliverables/blueprint_context",
        "System context diagram and decision records",
    ),
    (
        "deliverables/blueprint_contract",
        "Versioned API contract",
    ),
    (
        "deliverables/software_summary",
        "Front-end and back-end builds",
    ),
    (
        "deliverables/software_client",
        "Deployed {{ codename }} web client",
    ),
    (
        "deliverables/software_service",
        "Service deployment with health checks",
    ),
    ("deliverables/evidence_summary", "Test and pilot results"),
    ("deliverables/evidence_report", "Automated test report"),
    (
        "deliverables/evidence_data",
        "Data quality validation log",
    ),
    (
        "deliverables/evidence_pilot",
        "Pilot findings from {{ audience }}",
    ),
    ("deliverables/launch_summary", "Rollout and support"),
    ("deliverables/launch_notes", "Release notes and runbooks"),
    ("deliverables/launch_deck", "Stakeholder briefing deck"),
    ("deliverables/launch_review", "Post-launch review agenda"),
    // Status
    (
        "status/step_brief",
        "{{ pm }} confirms the {{ codename }} brief with stakeholders",
    ),
    (
        "status/step_contract",
        "{{ architect }} publishes the API contract",
    ),
    (
        "status/step_scaffold",
        "{{ engineer }} scaffolds the services and CI",
    ),
    (
        "status/step_taxonomy",
        "{{ analyst }} locks the event taxonomy",
    ),
    (
        "status/step_reviews",
        "{{ lead }} schedules the phase reviews",
    ),
    (
        "status/risk_scope",
        "Scope creep beyond the agreed {{ codename }} brief",
    ),
    (
        "status/risk_feedback",
        "Pilot feedback arriving too late to change the build",
    ),
    (
        "status/stakeholder_brief",
        "{{ codename }} targets {{ audience }} with a {{ phase_count }}-phase plan across front-end, back-end and insight tracks, centered on {{ labels }} work. {{ pm }} owns scope, {{ lead }} owns delivery, and the crew reports against {{ metric_count }} success metrics every week.",
    ),
];

/// A compiled, read-only set of sentence templates.
#[derive(Debug)]
pub struct TemplateCatalog {
    env: Environment<'static>,
}

impl TemplateCatalog {
    /// Compiles every template in `SENTENCE_TEMPLATES`.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        for &(name, source) in SENTENCE_TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| CrewError::template(name, e.to_string()))?;
        }
        Ok(Self { env })
    }

    /// Renders a named template against a context.
    pub fn render(&self, name: &str, ctx: &Value) -> Result<String> {
        let template = self
            .env
            .get_template(name)
            .map_err(|e| CrewError::template(name, e.to_string()))?;
        template
            .render(ctx)
            .map_err(|e| CrewError::template(name, e.to_string()))
    }

    /// Number of compiled templates.
    pub fn template_count(&self) -> usize {
        self.env.templates().count()
    }
}
