//! Curriculum plan model.
//!
//! A curriculum plan is divided into terms ("cuatrimestres"). Each term
//! lists its subjects with their weekly class hours. Terms 6 and 10 are
//! internship periods and never appear in a timetable.

use serde::{Deserialize, Serialize};

/// Term numbers that may be scheduled.
pub const VALID_TERMS: [u8; 8] = [1, 2, 3, 4, 5, 7, 8, 9];

/// Internship terms. Never scheduled.
pub const INTERNSHIP_TERMS: [u8; 2] = [6, 10];

/// Weekly class hours a balanced term must total.
pub const REQUIRED_WEEKLY_HOURS: u32 = 35;

/// Whether `term` may be scheduled.
pub fn is_valid_term(term: u8) -> bool {
    VALID_TERMS.contains(&term)
}

/// A subject with its weekly hour load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject name.
    pub name: String,
    /// Weekly class hours.
    pub weekly_hours: u32,
}

impl Subject {
    /// Creates a subject.
    pub fn new(name: impl Into<String>, weekly_hours: u32) -> Self {
        Self {
            name: name.into(),
            weekly_hours,
        }
    }
}

/// One term of a curriculum plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumTerm {
    /// Term number (see [`VALID_TERMS`]).
    pub term_number: u8,
    /// Subjects in curriculum order.
    pub subjects: Vec<Subject>,
}

impl CurriculumTerm {
    /// Creates an empty term.
    pub fn new(term_number: u8) -> Self {
        Self {
            term_number,
            subjects: Vec::new(),
        }
    }

    /// Builder: adds a subject.
    pub fn with_subject(mut self, name: impl Into<String>, weekly_hours: u32) -> Self {
        self.subjects.push(Subject::new(name, weekly_hours));
        self
    }

    /// Sum of weekly hours over all subjects.
    pub fn weekly_hours_total(&self) -> u32 {
        self.subjects.iter().map(|s| s.weekly_hours).sum()
    }

    /// Whether the term meets the weekly-hour quota exactly.
    pub fn is_balanced(&self) -> bool {
        self.weekly_hours_total() == REQUIRED_WEEKLY_HOURS
    }
}

/// A complete curriculum plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumPlan {
    /// Plan identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Terms of the plan.
    pub terms: Vec<CurriculumTerm>,
}

impl CurriculumPlan {
    /// Creates an empty plan.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the plan name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder: adds a term.
    pub fn with_term(mut self, term: CurriculumTerm) -> Self {
        self.terms.push(term);
        self
    }

    /// Looks up a term by number.
    pub fn term(&self, term_number: u8) -> Option<&CurriculumTerm> {
        self.terms.iter().find(|t| t.term_number == term_number)
    }
}
