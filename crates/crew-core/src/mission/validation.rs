//! Structural invariants of a mission document.

use std::collections::BTreeSet;

use strum::{EnumCount, IntoEnumIterator};

use super::model::MissionDocument;
use crate::error::{CrewError, Result};
use crate::persona::{FocusArea, PersonaId};

impl MissionDocument {
    /// Checks every structural invariant of the document.
    ///
    /// - the codename and every prose field are non-blank
    /// - the conversation holds one entry per persona, in roster order, each
    ///   tagged with that persona's own focus area
    /// - every list field is non-empty
    ///
    /// A failure means the synthesizer is broken, not that the input was bad.
    pub fn validate(&self) -> Result<()> {
        let brief = &self.mission_brief;
        require_text("missionBrief.codename", &brief.codename)?;
        require_text("missionBrief.elevatorPitch", &brief.elevator_pitch)?;
        require_text("missionBrief.targetUsers", &brief.target_users)?;
        require_list("missionBrief.guardrails", &brief.guardrails)?;
        require_list("missionBrief.successMetrics", &brief.success_metrics)?;

        let speakers: Vec<PersonaId> = self.conversation.iter().map(|m| m.agent).collect();
        let roster: Vec<PersonaId> = PersonaId::iter().collect();
        if speakers != roster {
            return Err(CrewError::invariant(format!(
                "conversation must follow roster order, got {:?}",
                speakers
            )));
        }
        let focuses: BTreeSet<FocusArea> = self.conversation.iter().map(|m| m.focus).collect();
        if focuses.len() != FocusArea::COUNT {
            return Err(CrewError::invariant(
                "conversation must cover every focus area exactly once",
            ));
        }
        for message in &self.conversation {
            if message.focus != message.agent.focus_area() {
                return Err(CrewError::invariant(format!(
                    "{} spoke with focus '{}'",
                    message.agent, message.focus
                )));
            }
            require_text("conversation.headline", &message.headline)?;
            require_text("conversation.message", &message.message)?;
            require_list("conversation.actions", &message.actions)?;
        }

        for (track, stream) in self.workstreams.iter() {
            require_text(&format!("workstreams.{track}.summary"), &stream.summary)?;
            require_list(&format!("workstreams.{track}.goals"), &stream.goals)?;
            require_list(&format!("workstreams.{track}.tasks"), &stream.tasks)?;
        }

        require_list("timeline", &self.timeline)?;
        for phase in &self.timeline {
            require_text("timeline.goal", &phase.goal)?;
            require_list("timeline.activities", &phase.activities)?;
            require_list("timeline.exitCriteria", &phase.exit_criteria)?;
        }

        require_list("testing", &self.testing)?;
        for entry in &self.testing {
            require_list("testing.coverage", &entry.coverage)?;
        }

        require_list("deliverables", &self.deliverables)?;
        for deliverable in &self.deliverables {
            require_list("deliverables.artifacts", &deliverable.artifacts)?;
        }

        require_list("status.nextSteps", &self.status.next_steps)?;
        require_list("status.risks", &self.status.risks)?;
        require_text("status.stakeholderBrief", &self.status.stakeholder_brief)?;

        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CrewError::invariant(format!("{field} is blank")));
    }
    Ok(())
}

fn require_list<T>(field: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(CrewError::invariant(format!("{field} is empty")));
    }
    Ok(())
}
