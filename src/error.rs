//! Error types.
//!
//! Planning and detection never panic on well-typed input. Validation
//! outcomes are returned as values so the caller can display them or
//! block submission.

use std::path::PathBuf;

use thiserror::Error;

use crate::planner::HourQuotaViolation;

/// A reason a planning request cannot proceed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanningError {
    #[error("at least one term must be selected")]
    NoTermsSelected,

    #[error("{selected} terms selected, at most {max} allowed")]
    TooManyTerms { selected: usize, max: usize },

    #[error("term {0} cannot be scheduled")]
    InvalidTerm(u8),

    #[error("term {0} selected more than once")]
    DuplicateTerm(u8),

    #[error("{0}")]
    HourQuota(HourQuotaViolation),

    #[error("term {0} is not selected")]
    TermNotSelected(u8),

    #[error("cannot {action} while {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },
}

impl PlanningError {
    /// Whether this is a malformed selection rather than a quota failure.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, PlanningError::HourQuota(_))
    }
}

/// Conflict detection refused its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    #[error("{count} assignments exceed the detector limit of {max}")]
    TooManyAssignments { count: usize, max: usize },
}

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// The external solver failed to produce a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("solver unavailable: {0}")]
    Unavailable(String),

    #[error("solver rejected the request: {0}")]
    Rejected(String),
}
