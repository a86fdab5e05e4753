//! Mission synthesis.
//!
//! `MissionSynthesizer::build` is a pure function of the idea text:
//!
//! 1. extract an `IdeaSignal`
//! 2. select the themes for the detected keyword classes
//! 3. bind one shared template context
//! 4. run every section builder against that context
//! 5. validate the assembled document
//!
//! Section builders never look at the raw text, only at the shared context,
//! so every section agrees on the codename, audience and themes.

mod brief;
mod conversation;
mod deliverables;
mod status;
mod testing;
mod timeline;
mod workstreams;

use crew_core::Result;
use crew_core::mission::MissionDocument;
use crew_core::persona::{PersonaId, display_name};
use minijinja::{Value, context};
use once_cell::sync::OnceCell;

use crate::signal::IdeaSignal;
use crate::templates::{TemplateCatalog, Theme, join_labels, select_themes};

/// Builds mission documents from idea text.
#[derive(Debug)]
pub struct MissionSynthesizer {
    templates: TemplateCatalog,
}

impl MissionSynthesizer {
    pub fn new() -> Result<Self> {
        let templates = TemplateCatalog::new()?;
        tracing::debug!(
            templates = templates.template_count(),
            "Compiled sentence templates"
        );
        Ok(Self { templates })
    }

    /// Produces the mission document for one idea.
    ///
    /// # Errors
    ///
    /// - `CrewError::InvalidInput` when the idea is empty after trimming
    /// - `CrewError::Template` or `CrewError::InvariantViolation` when the
    ///   synthesizer itself is broken
    pub fn build(&self, idea: &str) -> Result<MissionDocument> {
        let signal = IdeaSignal::extract(idea)?;
        tracing::debug!(
            codename = %signal.codename,
            keywords = ?signal.keywords,
            audience_detected = signal.audience_detected,
            "Synthesizing mission"
        );

        let ctx = SectionContext::bind(&self.templates, &signal);
        let document = MissionDocument {
            mission_brief: brief::build(&ctx)?,
            conversation: conversation::build(&ctx)?,
            workstreams: workstreams::build(&ctx)?,
            timeline: timeline::build(&ctx)?,
            testing: testing::build(&ctx)?,
            deliverables: deliverables::build(&ctx)?,
            status: status::build(&ctx)?,
        };
        document.validate()?;
        Ok(document)
    }
}

static SHARED: OnceCell<MissionSynthesizer> = OnceCell::new();

/// Builds a mission document with a lazily-initialized shared synthesizer.
pub fn synthesize(idea: &str) -> Result<MissionDocument> {
    SHARED.get_or_try_init(MissionSynthesizer::new)?.build(idea)
}

/// Everything a section builder may read.
pub(crate) struct SectionContext<'a> {
    catalog: &'a TemplateCatalog,
    signal: &'a IdeaSignal,
    /// Selected themes, primary first. Never empty.
    themes: Vec<&'static Theme>,
    values: Value,
}

impl<'a> SectionContext<'a> {
    fn bind(catalog: &'a TemplateCatalog, signal: &'a IdeaSignal) -> Self {
        let themes = select_themes(&signal.keywords);
        let values = context! {
            codename => signal.codename,
            focus => signal.focus,
            audience => signal.audience,
            theme => themes[0],
            labels => join_labels(&themes),
            pm => display_name(PersonaId::ProductManager),
            architect => display_name(PersonaId::Architect),
            analyst => display_name(PersonaId::Analyst),
            engineer => display_name(PersonaId::Engineer),
            lead => display_name(PersonaId::TeamLead),
            phase_count => timeline::PHASES.len(),
            metric_count => brief::metric_count(&themes),
        };
        Self {
            catalog,
            signal,
            themes,
            values,
        }
    }

    fn render(&self, name: &str) -> Result<String> {
        self.catalog.render(name, &self.values)
    }

    fn render_all(&self, names: &[&str]) -> Result<Vec<String>> {
        names.iter().map(|name| self.render(name)).collect()
    }

    /// One line per selected theme.
    fn per_theme(&self, pick: fn(&Theme) -> &'static str) -> Vec<String> {
        self.themes.iter().map(|theme| pick(theme).to_string()).collect()
    }
}
