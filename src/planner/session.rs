//! Planning session state machine.
//!
//! ```text
//! Idle -> TermsChosen -> { Validated | ValidationFailed } -> Submitted
//!   ^                                         |
//!   +------------------ reset ----------------+
//! ```
//!
//! Any selection change from `Validated` or `ValidationFailed` returns
//! to `TermsChosen`; removing the last term returns to `Idle`. An idle
//! session has nothing to validate. Only a validated session may be
//! submitted, and the request names the plan it was validated against.
//! A submitted session accepts only `reset`.

use crate::error::PlanningError;
use crate::models::{is_valid_term, CurriculumPlan, TermSelection};
use crate::solver::SolverRequest;

use super::{plan_selections, PlanSummary, MAX_SELECTED_TERMS};

/// Where a planning session stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanningState {
    /// Nothing selected.
    Idle,
    /// Selections present, not yet validated.
    TermsChosen,
    /// Selections passed every check against plan `plan_id`.
    Validated {
        plan_id: String,
        summary: PlanSummary,
    },
    /// Selections failed; every problem is listed.
    ValidationFailed(Vec<PlanningError>),
    /// Request handed to the solver.
    Submitted,
}

impl PlanningState {
    /// Short state name for messages.
    pub fn name(&self) -> &'static str {
        match self {
            PlanningState::Idle => "idle",
            PlanningState::TermsChosen => "terms chosen",
            PlanningState::Validated { .. } => "validated",
            PlanningState::ValidationFailed(_) => "validation failed",
            PlanningState::Submitted => "submitted",
        }
    }
}

/// One user's planning session. Owns the selections; nothing is persisted.
#[derive(Debug, Clone)]
pub struct PlanningSession {
    selections: Vec<TermSelection>,
    state: PlanningState,
}

impl Default for PlanningSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanningSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self {
            selections: Vec::new(),
            state: PlanningState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> &PlanningState {
        &self.state
    }

    /// Current selections, ascending by term.
    pub fn selections(&self) -> &[TermSelection] {
        &self.selections
    }

    /// The validated plan, if any.
    pub fn summary(&self) -> Option<&PlanSummary> {
        match &self.state {
            PlanningState::Validated { summary, .. } => Some(summary),
            _ => None,
        }
    }

    /// ID of the plan the selections were validated against, if validated.
    pub fn validated_plan_id(&self) -> Option<&str> {
        match &self.state {
            PlanningState::Validated { plan_id, .. } => Some(plan_id),
            _ => None,
        }
    }

    fn ensure_open(&self, action: &'static str) -> Result<(), PlanningError> {
        if self.state == PlanningState::Submitted {
            return Err(PlanningError::InvalidTransition {
                from: self.state.name(),
                action,
            });
        }
        Ok(())
    }

    fn selections_changed(&mut self) {
        self.state = if self.selections.is_empty() {
            PlanningState::Idle
        } else {
            PlanningState::TermsChosen
        };
    }

    fn position(&self, term_number: u8) -> Option<usize> {
        self.selections
            .iter()
            .position(|s| s.term_number == term_number)
    }

    /// Adds a term with the default student count.
    ///
    /// Rejects internship terms, repeats, and a selection beyond
    /// [`MAX_SELECTED_TERMS`].
    pub fn select_term(&mut self, term_number: u8) -> Result<(), PlanningError> {
        self.ensure_open("change selections")?;
        if !is_valid_term(term_number) {
            return Err(PlanningError::InvalidTerm(term_number));
        }
        if self.position(term_number).is_some() {
            return Err(PlanningError::DuplicateTerm(term_number));
        }
        if self.selections.len() >= MAX_SELECTED_TERMS {
            return Err(PlanningError::TooManyTerms {
                selected: self.selections.len() + 1,
                max: MAX_SELECTED_TERMS,
            });
        }
        self.selections
            .push(TermSelection::with_default_students(term_number));
        self.selections.sort_by_key(|s| s.term_number);
        self.selections_changed();
        Ok(())
    }

    /// Removes a term.
    pub fn deselect_term(&mut self, term_number: u8) -> Result<(), PlanningError> {
        self.ensure_open("change selections")?;
        let idx = self
            .position(term_number)
            .ok_or(PlanningError::TermNotSelected(term_number))?;
        self.selections.remove(idx);
        self.selections_changed();
        Ok(())
    }

    /// Sets a selected term's student count.
    pub fn set_students(&mut self, term_number: u8, student_count: i32) -> Result<(), PlanningError> {
        self.ensure_open("change selections")?;
        let idx = self
            .position(term_number)
            .ok_or(PlanningError::TermNotSelected(term_number))?;
        self.selections[idx].student_count = student_count;
        self.selections_changed();
        Ok(())
    }

    /// Sets a student count from a raw input field (non-numeric counts as 1).
    pub fn set_students_input(&mut self, term_number: u8, raw: &str) -> Result<(), PlanningError> {
        let count = TermSelection::from_input(term_number, raw).student_count;
        self.set_students(term_number, count)
    }

    /// Validates the selections against a curriculum plan.
    ///
    /// Rejected while idle or submitted.
    pub fn validate(&mut self, plan: &CurriculumPlan) -> Result<&PlanningState, PlanningError> {
        if matches!(self.state, PlanningState::Idle | PlanningState::Submitted) {
            return Err(PlanningError::InvalidTransition {
                from: self.state.name(),
                action: "validate",
            });
        }
        self.state = match plan_selections(&self.selections, plan) {
            Ok(summary) => PlanningState::Validated {
                plan_id: plan.id.clone(),
                summary,
            },
            Err(errors) => PlanningState::ValidationFailed(errors),
        };
        Ok(&self.state)
    }

    /// Builds the solver request for the validated plan. Only legal once
    /// validated.
    pub fn submit(&mut self, professor_ids: Vec<String>) -> Result<SolverRequest, PlanningError> {
        let (plan_id, summary) = match &self.state {
            PlanningState::Validated { plan_id, summary } => (plan_id.as_str(), summary),
            other => {
                return Err(PlanningError::InvalidTransition {
                    from: other.name(),
                    action: "submit",
                })
            }
        };
        let request = SolverRequest::from_plan(plan_id, professor_ids, summary);
        tracing::debug!(
            plan = %request.plan_id,
            groups = summary.total_groups,
            "planning session submitted"
        );
        self.state = PlanningState::Submitted;
        Ok(request)
    }

    /// Clears all selections and returns to `Idle`.
    pub fn reset(&mut self) {
        self.selections.clear();
        self.state = PlanningState::Idle;
    }
}
