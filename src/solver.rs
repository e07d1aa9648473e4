//! External solver contract and timetable reports.
//!
//! The solver that places sessions into slots lives outside this crate.
//! This module fixes the shape of what is sent to it and what comes
//! back, and turns a returned timetable into a report of hard
//! conflicts and advisory notes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::advisory::{self, Advisory};
use crate::config::TimetableConfig;
use crate::conflict::{ConflictCause, ConflictDetector, ConflictGraph};
use crate::error::{DetectError, SolverError};
use crate::models::{grid, SessionAssignment, Timetable};
use crate::planner::PlanSummary;

/// Teaching shift requested from the solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    /// 07:00 to 14:55.
    #[default]
    #[serde(alias = "matutino")]
    Morning,
}

/// Request sent to the external solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverRequest {
    /// Curriculum plan identifier.
    pub plan_id: String,
    /// Professors available for assignment.
    pub professor_ids: Vec<String>,
    /// Selected terms, ascending.
    pub terms: Vec<u8>,
    /// Term → number of groups to schedule.
    pub groups_per_term: BTreeMap<u8, u32>,
    /// Teaching shift.
    pub shift: Shift,
}

impl SolverRequest {
    /// Builds a request from a validated plan.
    pub fn from_plan(
        plan_id: impl Into<String>,
        professor_ids: Vec<String>,
        summary: &PlanSummary,
    ) -> Self {
        Self {
            plan_id: plan_id.into(),
            professor_ids,
            terms: summary.term_numbers(),
            groups_per_term: summary.groups_per_term(),
            shift: Shift::Morning,
        }
    }
}

/// What the solver returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolverResponse {
    /// Scheduled sessions.
    pub assignments: Vec<SessionAssignment>,
    /// Non-fatal quality notes.
    #[serde(default)]
    pub advisories: Vec<String>,
}

/// The external schedule generator.
pub trait ScheduleSolver {
    /// Produces a timetable for the request.
    fn solve(&self, request: &SolverRequest) -> Result<SolverResponse, SolverError>;
}

/// Validation report for one timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Timetable identifier.
    pub timetable_id: String,
    /// Assignments and their conflicts.
    pub graph: ConflictGraph,
    /// Solver notes followed by computed advisories.
    pub advisories: Vec<Advisory>,
}

impl ScheduleReport {
    /// Detects conflicts and runs advisory checks on a timetable.
    pub fn build(
        timetable: &Timetable,
        solver_notes: &[String],
        config: &TimetableConfig,
    ) -> Result<Self, DetectError> {
        let graph = ConflictDetector::new(config.detector.clone()).detect(&timetable.assignments)?;

        let mut advisories: Vec<Advisory> =
            solver_notes.iter().map(|n| Advisory::solver(n.as_str())).collect();
        advisories.extend(advisory::check_timetable(timetable, &config.advisories));

        if !graph.is_conflict_free() {
            tracing::warn!(
                timetable = %timetable.id,
                conflicts = graph.edge_count(),
                "timetable has conflicts"
            );
        }

        Ok(Self {
            timetable_id: timetable.id.clone(),
            graph,
            advisories,
        })
    }

    /// Builds a report from a solver response.
    pub fn from_response(
        timetable_id: impl Into<String>,
        response: SolverResponse,
        config: &TimetableConfig,
    ) -> Result<Self, DetectError> {
        let timetable = Timetable::with_assignments(timetable_id, response.assignments);
        Self::build(&timetable, &response.advisories, config)
    }

    /// Runs the solver for a request and reports on its output.
    pub fn solve_and_check<S: ScheduleSolver + ?Sized>(
        solver: &S,
        request: &SolverRequest,
        config: &TimetableConfig,
    ) -> Result<Self, ReportError> {
        let response = solver.solve(request)?;
        Ok(Self::from_response(request.plan_id.clone(), response, config)?)
    }

    /// Whether the timetable has no hard conflicts.
    pub fn is_conflict_free(&self) -> bool {
        self.graph.is_conflict_free()
    }

    /// Number of hard conflicts.
    pub fn conflict_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// One line per conflict, e.g.
    /// `"professor A double-booked on Monday 07:00 - 07:55: 1 / 2"`.
    pub fn conflict_messages(&self) -> Vec<String> {
        self.graph
            .edges
            .iter()
            .map(|e| {
                let node = self.graph.node(&e.a);
                let (what, key) = match (e.cause, node) {
                    (ConflictCause::SameProfessor, Some(n)) => ("professor", n.professor.as_str()),
                    (ConflictCause::SameRoom, Some(n)) => ("room", n.room.as_str()),
                    (ConflictCause::SameProfessor, None) => ("professor", "?"),
                    (ConflictCause::SameRoom, None) => ("room", "?"),
                };
                let when = node
                    .map(|n| {
                        let slot = grid::slot_for_hour(n.start_hour)
                            .map(|s| s.label.to_string())
                            .unwrap_or_else(|| format!("{}:00", n.start_hour));
                        format!("{} {}", n.day, slot)
                    })
                    .unwrap_or_default();
                format!("{what} {key} double-booked on {when}: {} / {}", e.a, e.b)
            })
            .collect()
    }
}

/// Failure of [`ScheduleReport::solve_and_check`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Detect(#[from] DetectError),
}
