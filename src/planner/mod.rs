//! Capacity planning and pre-validation.
//!
//! Before a schedule request goes to the solver, each selected term is
//! sized into groups of one room's capacity and its curriculum is
//! checked against the weekly-hour quota.
//!
//! # Usage
//!
//! ```
//! use u_timetable::models::{CurriculumPlan, CurriculumTerm, TermSelection};
//! use u_timetable::planner::plan_selections;
//!
//! let plan = CurriculumPlan::new("ISC")
//!     .with_term(CurriculumTerm::new(1).with_subject("Core", 30).with_subject("English", 5));
//! let summary = plan_selections(&[TermSelection::new(1, 40)], &plan).unwrap();
//! assert_eq!(summary.total_groups, 2);
//! ```

mod capacity;
mod hours;
mod plan;
mod session;

pub use capacity::{compute_groups, group_labels, term_of_group, ROOM_CAPACITY};
pub use hours::{validate_term_hours, HourQuotaViolation};
pub use plan::{plan_selections, PlanSummary, TermPlan, MAX_SELECTED_TERMS};
pub use session::{PlanningSession, PlanningState};
