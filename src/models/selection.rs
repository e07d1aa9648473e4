//! Term selection: planning input chosen by the user.

use serde::{Deserialize, Serialize};

/// Upper bound applied to a term's student count.
pub const MAX_STUDENTS_PER_TERM: i32 = 500;

/// Student count given to a newly selected term.
pub const DEFAULT_STUDENTS: i32 = 35;

/// A chosen term with its enrolled student count.
///
/// The raw count is kept as entered. Non-positive counts are treated
/// as one student when planning, never as zero groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermSelection {
    /// Selected term number.
    pub term_number: u8,
    /// Enrolled students as entered.
    pub student_count: i32,
}

impl TermSelection {
    /// Creates a selection.
    pub fn new(term_number: u8, student_count: i32) -> Self {
        Self {
            term_number,
            student_count,
        }
    }

    /// Creates a selection with the default student count.
    pub fn with_default_students(term_number: u8) -> Self {
        Self::new(term_number, DEFAULT_STUDENTS)
    }

    /// Parses a raw student-count field; non-numeric input counts as 1.
    pub fn from_input(term_number: u8, raw: &str) -> Self {
        let count = raw.trim().parse::<i32>().unwrap_or(1);
        Self::new(term_number, count)
    }

    /// Student count used for planning, clamped to `1..=MAX_STUDENTS_PER_TERM`.
    pub fn effective_students(&self) -> u32 {
        self.student_count.clamp(1, MAX_STUDENTS_PER_TERM) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_students_clamped() {
        assert_eq!(TermSelection::new(1, 40).effective_students(), 40);
        assert_eq!(TermSelection::new(1, 0).effective_students(), 1);
        assert_eq!(TermSelection::new(1, -12).effective_students(), 1);
        assert_eq!(TermSelection::new(1, 9000).effective_students(), 500);
    }

    #[test]
    fn test_from_input() {
        assert_eq!(TermSelection::from_input(2, " 70 ").student_count, 70);
        assert_eq!(TermSelection::from_input(2, "many").student_count, 1);
        assert_eq!(TermSelection::from_input(2, "").student_count, 1);
    }

    #[test]
    fn test_default_students() {
        let s = TermSelection::with_default_students(4);
        assert_eq!(s.student_count, 35);
    }
}
