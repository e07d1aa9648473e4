//! Conflict detection for generated timetables.
//!
//! Takes the flat list of session assignments of one timetable and
//! reports every pair that double-books a professor or a room in the
//! same `(day, start_hour)` slot.
//!
//! # Usage
//!
//! ```
//! use u_timetable::conflict::{detect_conflicts, ConflictCause};
//! use u_timetable::models::{SessionAssignment, Weekday};
//!
//! let assignments = vec![
//!     SessionAssignment::new("1", Weekday::Monday, 7).with_professor("A").with_room("101"),
//!     SessionAssignment::new("2", Weekday::Monday, 7).with_professor("A").with_room("102"),
//! ];
//! let graph = detect_conflicts(&assignments);
//! assert_eq!(graph.edge_count(), 1);
//! assert_eq!(graph.edges[0].cause, ConflictCause::SameProfessor);
//! ```

mod detector;
mod graph;

pub use detector::{detect_conflicts, ConflictDetector};
pub use graph::{CompanionLink, ConflictCause, ConflictEdge, ConflictGraph};
