//! Plan aggregation for a set of term selections.
//!
//! # Checks
//!
//! 1. At least one term selected
//! 2. At most [`MAX_SELECTED_TERMS`] terms selected
//! 3. Every term is schedulable and selected once
//! 4. Every term's subject hours total the weekly quota
//!
//! All failures are collected; no plan is produced unless every check
//! passes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::PlanningError;
use crate::models::{is_valid_term, CurriculumPlan, TermSelection};

use super::{compute_groups, group_labels, validate_term_hours, HourQuotaViolation};

/// Terms that may be planned in one request.
pub const MAX_SELECTED_TERMS: usize = 4;

/// Planned groups for one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermPlan {
    /// Term number.
    pub term_number: u8,
    /// Students used for sizing (after clamping).
    pub student_count: u32,
    /// Groups to create.
    pub group_count: u32,
    /// Group labels (`"1A"`, `"1B"`, ...).
    pub group_labels: Vec<String>,
}

impl TermPlan {
    /// Sizes the groups for one selection.
    pub fn for_selection(selection: &TermSelection) -> Self {
        let student_count = selection.effective_students();
        let group_count = compute_groups(student_count as i32);
        Self {
            term_number: selection.term_number,
            student_count,
            group_count,
            group_labels: group_labels(selection.term_number, group_count),
        }
    }
}

/// Aggregate plan handed to the schedule request builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Per-term plans, ascending by term number.
    pub terms: Vec<TermPlan>,
    /// Sum of groups over all terms.
    pub total_groups: u32,
    /// Sum of students over all terms.
    pub total_students: u32,
    /// Rooms required; one per group.
    pub rooms_needed: u32,
}

impl PlanSummary {
    /// Builds the summary from per-term plans.
    pub fn from_terms(mut terms: Vec<TermPlan>) -> Self {
        terms.sort_by_key(|t| t.term_number);
        let total_groups = terms.iter().map(|t| t.group_count).sum();
        let total_students = terms.iter().map(|t| t.student_count).sum();
        Self {
            terms,
            total_groups,
            total_students,
            rooms_needed: total_groups,
        }
    }

    /// Term number → group count.
    pub fn groups_per_term(&self) -> BTreeMap<u8, u32> {
        self.terms
            .iter()
            .map(|t| (t.term_number, t.group_count))
            .collect()
    }

    /// Planned term numbers, ascending.
    pub fn term_numbers(&self) -> Vec<u8> {
        self.terms.iter().map(|t| t.term_number).collect()
    }

    /// Every group label across all terms.
    pub fn group_labels(&self) -> Vec<&str> {
        self.terms
            .iter()
            .flat_map(|t| t.group_labels.iter().map(String::as_str))
            .collect()
    }

    /// Plan for one term.
    pub fn term(&self, term_number: u8) -> Option<&TermPlan> {
        self.terms.iter().find(|t| t.term_number == term_number)
    }
}

/// Validates selections against a curriculum and sizes their groups.
///
/// A selected term missing from `plan` counts as having zero hours.
///
/// # Returns
/// `Ok(summary)` if all checks pass, `Err(errors)` with every problem found.
pub fn plan_selections(
    selections: &[TermSelection],
    plan: &CurriculumPlan,
) -> Result<PlanSummary, Vec<PlanningError>> {
    let mut errors = Vec::new();

    if selections.is_empty() {
        errors.push(PlanningError::NoTermsSelected);
    }
    if selections.len() > MAX_SELECTED_TERMS {
        errors.push(PlanningError::TooManyTerms {
            selected: selections.len(),
            max: MAX_SELECTED_TERMS,
        });
    }

    // Term numbers and hour quota
    let mut seen: Vec<u8> = Vec::with_capacity(selections.len());
    for sel in selections {
        let n = sel.term_number;
        if !is_valid_term(n) {
            errors.push(PlanningError::InvalidTerm(n));
            continue;
        }
        if seen.contains(&n) {
            errors.push(PlanningError::DuplicateTerm(n));
            continue;
        }
        seen.push(n);

        let check = match plan.term(n) {
            Some(term) => validate_term_hours(term),
            None => Err(HourQuotaViolation::new(n, 0)),
        };
        if let Err(violation) = check {
            errors.push(PlanningError::HourQuota(violation));
        }
    }

    if !errors.is_empty() {
        tracing::warn!(
            plan = %plan.id,
            errors = errors.len(),
            "term selection rejected"
        );
        return Err(errors);
    }

    let summary = PlanSummary::from_terms(selections.iter().map(TermPlan::for_selection).collect());
    tracing::debug!(
        plan = %plan.id,
        terms = summary.terms.len(),
        groups = summary.total_groups,
        students = summary.total_students,
        "term selection planned"
    );
    Ok(summary)
}
