//! Timetable validation for university course scheduling.
//!
//! An external solver assigns course sessions to professors, groups,
//! rooms, and time slots. This crate checks what comes out of it and
//! sizes what goes into it.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `SessionAssignment`, `Weekday`, the daily
//!   grid, `CurriculumPlan`, `CurriculumTerm`, `TermSelection`, `Timetable`
//! - **`conflict`**: Professor and room double-booking detection
//! - **`planner`**: Group sizing, weekly-hour quota checks, planning sessions
//! - **`advisory`**: Non-fatal schedule quality notes
//! - **`solver`**: Contract with the external solver and timetable reports
//! - **`validation`**: Input integrity checks (duplicate IDs, off-grid hours)
//! - **`config`**: Operational limits, loadable from TOML
//!
//! # Architecture
//!
//! Both engines are pure functions over explicit inputs. They hold no
//! state and may run concurrently on independent inputs. The only
//! stateful type, `PlanningSession`, is owned by the caller.

pub mod advisory;
pub mod config;
pub mod conflict;
pub mod error;
pub mod models;
pub mod planner;
pub mod solver;
pub mod validation;
