//! Timetable (generated schedule) model.
//!
//! A timetable is the full set of session assignments the external
//! solver produced for one request. It is read-only here; queries
//! borrow from it.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{SessionAssignment, Weekday};

/// One generated timetable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Timetable identifier.
    pub id: String,
    /// Scheduled sessions.
    pub assignments: Vec<SessionAssignment>,
}

/// Trimmed, lowercase form of a person's name for lookups.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn push_unique<'a>(out: &mut Vec<&'a str>, value: &'a str) {
    if !out.contains(&value) {
        out.push(value);
    }
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            assignments: Vec::new(),
        }
    }

    /// Creates a timetable from existing assignments.
    pub fn with_assignments(id: impl Into<String>, assignments: Vec<SessionAssignment>) -> Self {
        Self {
            id: id.into(),
            assignments,
        }
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: SessionAssignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Finds an assignment by ID.
    pub fn assignment(&self, id: &str) -> Option<&SessionAssignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    /// Sessions taught by a professor. Names match ignoring case and
    /// surrounding whitespace.
    pub fn assignments_for_professor(&self, professor: &str) -> Vec<&SessionAssignment> {
        let wanted = normalize_name(professor);
        self.assignments
            .iter()
            .filter(|a| normalize_name(&a.professor) == wanted)
            .collect()
    }

    /// Sessions attended by a group.
    pub fn assignments_for_group(&self, group: &str) -> Vec<&SessionAssignment> {
        self.assignments.iter().filter(|a| a.group == group).collect()
    }

    /// Sessions held in a room.
    pub fn assignments_for_room(&self, room: &str) -> Vec<&SessionAssignment> {
        self.assignments.iter().filter(|a| a.room == room).collect()
    }

    /// Sessions on a given day.
    pub fn assignments_on(&self, day: Weekday) -> Vec<&SessionAssignment> {
        self.assignments.iter().filter(|a| a.day == day).collect()
    }

    /// Distinct subjects a professor teaches, in first-seen order.
    pub fn subjects_for_professor(&self, professor: &str) -> Vec<&str> {
        let mut out = Vec::new();
        for a in self.assignments_for_professor(professor) {
            push_unique(&mut out, a.subject.as_str());
        }
        out
    }

    /// Distinct groups a professor teaches, in first-seen order.
    pub fn groups_for_professor(&self, professor: &str) -> Vec<&str> {
        let mut out = Vec::new();
        for a in self.assignments_for_professor(professor) {
            push_unique(&mut out, a.group.as_str());
        }
        out
    }

    /// Distinct professors, in first-seen order.
    ///
    /// Spellings that differ only in case or surrounding whitespace are
    /// one professor; the first spelling seen is returned.
    pub fn professors(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.assignments
            .iter()
            .filter(|a| seen.insert(normalize_name(&a.professor)))
            .map(|a| a.professor.as_str())
            .collect()
    }

    /// Weekly teaching hours of a professor (one hour per session).
    pub fn weekly_hours_for_professor(&self, professor: &str) -> usize {
        self.assignments_for_professor(professor).len()
    }

    /// Session count per (professor, day), keyed by normalized name.
    pub fn professor_daily_load(&self) -> HashMap<(String, Weekday), usize> {
        let mut load: HashMap<(String, Weekday), usize> = HashMap::new();
        for a in &self.assignments {
            *load.entry((normalize_name(&a.professor), a.day)).or_insert(0) += 1;
        }
        load
    }
}
