//! Conflict graph.
//!
//! Nodes are the session assignments of one timetable; edges are
//! resource-exclusivity violations between two of them. The graph
//! answers "does assignment X conflict with anything?" and exposes
//! same-professor companion links for visual clustering. Companion
//! links are never conflicts.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::models::{SessionAssignment, Weekday};

/// Why two assignments cannot coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConflictCause {
    /// Same professor booked twice in one slot.
    SameProfessor,
    /// Same room booked twice in one slot.
    SameRoom,
}

/// A detected violation between two assignments.
///
/// The pair is unordered; endpoints are stored with the smaller ID in `a`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConflictEdge {
    /// First assignment ID.
    pub a: String,
    /// Second assignment ID.
    pub b: String,
    /// Violation kind.
    pub cause: ConflictCause,
}

impl ConflictEdge {
    /// Creates an edge, normalizing endpoint order.
    pub fn new(x: impl Into<String>, y: impl Into<String>, cause: ConflictCause) -> Self {
        let (x, y) = (x.into(), y.into());
        let (a, b) = if x <= y { (x, y) } else { (y, x) };
        Self { a, b, cause }
    }

    /// Whether `id` is an endpoint.
    #[inline]
    pub fn touches(&self, id: &str) -> bool {
        self.a == id || self.b == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint.
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.a == id {
            Some(self.b.as_str())
        } else if self.b == id {
            Some(self.a.as_str())
        } else {
            None
        }
    }
}

/// Two sessions of one professor on the same day in different slots.
///
/// Used only to cluster a professor's day when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionLink {
    pub a: String,
    pub b: String,
    pub professor: String,
    pub day: Weekday,
}

/// Assignments plus the conflicts among them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConflictGraph {
    /// Every input assignment.
    pub nodes: Vec<SessionAssignment>,
    /// Detected violations, sorted by `(a, b, cause)`.
    pub edges: Vec<ConflictEdge>,
}

impl ConflictGraph {
    /// Number of assignments.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of violations.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether no violations were found.
    pub fn is_conflict_free(&self) -> bool {
        self.edges.is_empty()
    }

    /// Finds a node by assignment ID.
    pub fn node(&self, id: &str) -> Option<&SessionAssignment> {
        self.nodes.iter().find(|a| a.id == id)
    }

    /// Violations touching an assignment.
    pub fn conflicts_for(&self, id: &str) -> Vec<&ConflictEdge> {
        self.edges.iter().filter(|e| e.touches(id)).collect()
    }

    /// Whether an assignment takes part in any violation.
    pub fn has_conflict(&self, id: &str) -> bool {
        self.edges.iter().any(|e| e.touches(id))
    }

    /// IDs of all assignments involved in at least one violation.
    pub fn conflicting_ids(&self) -> BTreeSet<&str> {
        self.edges
            .iter()
            .flat_map(|e| [e.a.as_str(), e.b.as_str()])
            .collect()
    }

    /// Number of violations of one kind.
    pub fn count_by_cause(&self, cause: ConflictCause) -> usize {
        self.edges.iter().filter(|e| e.cause == cause).count()
    }

    /// Same-professor, same-day, different-slot pairs.
    ///
    /// Derived from the nodes; never part of `edges`.
    pub fn companion_links(&self) -> Vec<CompanionLink> {
        let mut by_prof_day: HashMap<(&str, Weekday), Vec<&SessionAssignment>> = HashMap::new();
        for a in &self.nodes {
            by_prof_day
                .entry((a.professor.as_str(), a.day))
                .or_default()
                .push(a);
        }

        let mut links = Vec::new();
        for ((professor, day), sessions) in by_prof_day {
            for (i, x) in sessions.iter().enumerate() {
                for y in &sessions[i + 1..] {
                    if x.start_hour != y.start_hour {
                        let (a, b) = if x.id <= y.id { (x, y) } else { (y, x) };
                        links.push(CompanionLink {
                            a: a.id.clone(),
                            b: b.id.clone(),
                            professor: professor.to_string(),
                            day,
                        });
                    }
                }
            }
        }
        links.sort_by(|l, r| (&l.a, &l.b).cmp(&(&r.a, &r.b)));
        links
    }
}
