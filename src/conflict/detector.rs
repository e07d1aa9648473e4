//! Resource-exclusivity conflict detection.
//!
//! # Algorithm
//!
//! 1. Bucket assignments by `(day, start_hour)`.
//! 2. Within each bucket, compare every unordered pair once, skipping
//!    pairs that share an assignment ID.
//! 3. Emit a `SameProfessor` edge when professors match and a `SameRoom`
//!    edge when rooms match and are assigned. Both may hold for one pair.
//!
//! Pairs in different buckets can never conflict, so the result equals
//! an all-pairs scan.
//!
//! # Complexity
//! O(n + Σ k²) where k is the number of assignments sharing a slot.

use std::collections::HashMap;

use crate::config::DetectorConfig;
use crate::error::DetectError;
use crate::models::{SessionAssignment, Weekday};

use super::{ConflictCause, ConflictEdge, ConflictGraph};

/// Detects every professor and room double-booking.
///
/// Total over its input: an empty slice yields an empty graph.
/// Two entries with the same ID are the same assignment and never
/// conflict with each other; duplicate IDs are reported by
/// [`validate_assignments`](crate::validation::validate_assignments).
pub fn detect_conflicts(assignments: &[SessionAssignment]) -> ConflictGraph {
    let mut buckets: HashMap<(Weekday, u8), Vec<&SessionAssignment>> = HashMap::new();
    for a in assignments {
        buckets.entry((a.day, a.start_hour)).or_default().push(a);
    }

    let mut edges = Vec::new();
    for slot in buckets.values() {
        for (i, x) in slot.iter().enumerate() {
            for y in &slot[i + 1..] {
                if x.id == y.id {
                    continue;
                }
                if x.professor == y.professor {
                    edges.push(ConflictEdge::new(&x.id, &y.id, ConflictCause::SameProfessor));
                }
                if x.room == y.room && x.has_room() {
                    edges.push(ConflictEdge::new(&x.id, &y.id, ConflictCause::SameRoom));
                }
            }
        }
    }
    edges.sort();
    edges.dedup();

    tracing::debug!(
        assignments = assignments.len(),
        slots = buckets.len(),
        conflicts = edges.len(),
        "conflict detection finished"
    );

    ConflictGraph {
        nodes: assignments.to_vec(),
        edges,
    }
}

/// Conflict detector with an input size bound.
///
/// Use this where detection runs inside a request path and the
/// quadratic worst case must be capped.
#[derive(Debug, Clone, Default)]
pub struct ConflictDetector {
    config: DetectorConfig,
}

impl ConflictDetector {
    /// Creates a detector with the given limits.
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Creates a detector that accepts any input size.
    pub fn unbounded() -> Self {
        Self::new(DetectorConfig::unbounded())
    }

    /// Current limits.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detects conflicts, rejecting inputs above the configured bound.
    pub fn detect(&self, assignments: &[SessionAssignment]) -> Result<ConflictGraph, DetectError> {
        if let Some(max) = self.config.max_assignments {
            if assignments.len() > max {
                tracing::warn!(
                    count = assignments.len(),
                    max,
                    "conflict detection input rejected"
                );
                return Err(DetectError::TooManyAssignments {
                    count: assignments.len(),
                    max,
                });
            }
        }
        Ok(detect_conflicts(assignments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNASSIGNED_ROOM;

    fn session(id: &str, prof: &str, room: &str, day: Weekday, hour: u8) -> SessionAssignment {
        SessionAssignment::new(id, day, hour)
            .with_professor(prof)
            .with_room(room)
    }

    /// Reference all-pairs scan.
    fn all_pairs(assignments: &[SessionAssignment]) -> Vec<ConflictEdge> {
        let mut edges = Vec::new();
        for i in 0..assignments.len() {
            for j in i + 1..assignments.len() {
                let (x, y) = (&assignments[i], &assignments[j]);
                if !x.same_slot(y) || x.id == y.id {
                    continue;
                }
                if x.professor == y.professor {
                    edges.push(ConflictEdge::new(&x.id, &y.id, ConflictCause::SameProfessor));
                }
                if x.room == y.room && x.room != UNASSIGNED_ROOM {
                    edges.push(ConflictEdge::new(&x.id, &y.id, ConflictCause::SameRoom));
                }
            }
        }
        edges.sort();
        edges.dedup();
        edges
    }

    #[test]
    fn test_empty_input() {
        let g = detect_conflicts(&[]);
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_same_professor() {
        let g = detect_conflicts(&[
            session("1", "A", "101", Weekday::Monday, 7),
            session("2", "A", "102", Weekday::Monday, 7),
        ]);
        assert_eq!(g.edges, vec![ConflictEdge::new("1", "2", ConflictCause::SameProfessor)]);
    }

    #[test]
    fn test_same_room() {
        let g = detect_conflicts(&[
            session("1", "A", "101", Weekday::Monday, 7),
            session("2", "B", "101", Weekday::Monday, 7),
        ]);
        assert_eq!(g.edges, vec![ConflictEdge::new("1", "2", ConflictCause::SameRoom)]);
    }

    #[test]
    fn test_both_causes_reported() {
        let g = detect_conflicts(&[
            session("1", "A", "101", Weekday::Monday, 7),
            session("2", "A", "101", Weekday::Monday, 7),
        ]);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.count_by_cause(ConflictCause::SameProfessor), 1);
        assert_eq!(g.count_by_cause(ConflictCause::SameRoom), 1);
    }

    #[test]
    fn test_different_hour_or_day() {
        let g = detect_conflicts(&[
            session("1", "A", "101", Weekday::Monday, 7),
            session("2", "A", "101", Weekday::Monday, 8),
            session("3", "A", "101", Weekday::Tuesday, 7),
        ]);
        assert!(g.is_conflict_free());
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn test_unassigned_room_never_conflicts() {
        let g = detect_conflicts(&[
            session("1", "A", UNASSIGNED_ROOM, Weekday::Friday, 12),
            session("2", "B", UNASSIGNED_ROOM, Weekday::Friday, 12),
        ]);
        assert!(g.is_conflict_free());
    }

    #[test]
    fn test_break_adjacent_hours_do_not_overlap() {
        let g = detect_conflicts(&[
            session("1", "A", "101", Weekday::Monday, 10),
            session("2", "A", "101", Weekday::Monday, 11),
        ]);
        assert!(g.is_conflict_free());
    }

    #[test]
    fn test_three_way_slot() {
        let g = detect_conflicts(&[
            session("1", "A", "101", Weekday::Wednesday, 9),
            session("2", "A", "102", Weekday::Wednesday, 9),
            session("3", "A", "101", Weekday::Wednesday, 9),
        ]);
        // professor: 1-2, 1-3, 2-3; room: 1-3
        assert_eq!(g.count_by_cause(ConflictCause::SameProfessor), 3);
        assert_eq!(g.count_by_cause(ConflictCause::SameRoom), 1);
        assert_eq!(g.conflicts_for("1").len(), 3);
    }

    #[test]
    fn test_matches_all_pairs_scan() {
        let mut input = Vec::new();
        let profs = ["A", "B", "C"];
        let rooms = ["101", "102", UNASSIGNED_ROOM];
        for (i, day) in Weekday::ALL.iter().enumerate() {
            for hour in [7u8, 8, 11] {
                for k in 0..3 {
                    let id = format!("{i}-{hour}-{k}");
                    input.push(session(&id, profs[(i + k) % 3], rooms[(hour as usize + k) % 3], *day, hour));
                    input.push(session(&format!("{id}x"), profs[k], rooms[k], *day, hour));
                }
            }
        }
        assert_eq!(detect_conflicts(&input).edges, all_pairs(&input));
    }

    #[test]
    fn test_duplicate_id_has_no_self_edge() {
        let g = detect_conflicts(&[
            session("x", "A", "101", Weekday::Monday, 7),
            session("x", "A", "101", Weekday::Monday, 7),
            session("y", "A", "102", Weekday::Monday, 7),
        ]);
        assert!(g.edges.iter().all(|e| e.a != e.b));
        // Both copies of x clash with y; they collapse to one edge.
        assert_eq!(g.edges, vec![ConflictEdge::new("x", "y", ConflictCause::SameProfessor)]);
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn test_input_untouched() {
        let input = vec![
            session("1", "A", "101", Weekday::Monday, 7),
            session("2", "A", "101", Weekday::Monday, 7),
        ];
        let before = input.clone();
        let g = detect_conflicts(&input);
        assert_eq!(input, before);
        assert_eq!(g.nodes, before);
    }

    #[test]
    fn test_bounded_detector() {
        let input = vec![
            session("1", "A", "101", Weekday::Monday, 7),
            session("2", "B", "102", Weekday::Monday, 7),
            session("3", "C", "103", Weekday::Monday, 7),
        ];
        let detector = ConflictDetector::new(DetectorConfig::default().with_max_assignments(2));
        assert_eq!(
            detector.detect(&input).unwrap_err(),
            DetectError::TooManyAssignments { count: 3, max: 2 }
        );

        let detector = ConflictDetector::new(DetectorConfig::default().with_max_assignments(3));
        assert!(detector.detect(&input).unwrap().is_conflict_free());

        assert!(ConflictDetector::unbounded().detect(&input).is_ok());
    }
}
