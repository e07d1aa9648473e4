//! Timetabling domain models.
//!
//! Provides the data types both engines operate on: scheduled session
//! assignments, the weekly teaching grid, curriculum plans, and the
//! term selections used for capacity planning.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | Spanish label |
//! |-------------|-----------|---------------|
//! | SessionAssignment | Scheduled class | Asignación |
//! | CurriculumTerm | Term of a study plan | Cuatrimestre |
//! | TermSelection | Term chosen for planning | Cuatrimestre seleccionado |
//! | Timetable | Generated schedule | Horario |

mod assignment;
mod curriculum;
pub mod grid;
mod selection;
mod timetable;

pub use assignment::{SessionAssignment, UNASSIGNED_ROOM};
pub use curriculum::{
    is_valid_term, CurriculumPlan, CurriculumTerm, Subject, INTERNSHIP_TERMS,
    REQUIRED_WEEKLY_HOURS, VALID_TERMS,
};
pub use grid::{TimeSlot, Weekday, DAILY_GRID};
pub use selection::{TermSelection, DEFAULT_STUDENTS, MAX_STUDENTS_PER_TERM};
pub use timetable::Timetable;

pub(crate) use timetable::normalize_name;
