//! Weekly-hour quota check.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{CurriculumTerm, REQUIRED_WEEKLY_HOURS};

/// A term whose subject hours do not total the weekly quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourQuotaViolation {
    /// Offending term.
    pub term_number: u8,
    /// Sum of the term's weekly subject hours.
    pub actual_total: u32,
    /// Quota the total must equal.
    pub required_total: u32,
}

impl HourQuotaViolation {
    /// Creates a violation against the standard quota.
    pub fn new(term_number: u8, actual_total: u32) -> Self {
        Self {
            term_number,
            actual_total,
            required_total: REQUIRED_WEEKLY_HOURS,
        }
    }

    /// Excess (positive) or deficit (negative) in hours.
    pub fn difference(&self) -> i64 {
        i64::from(self.actual_total) - i64::from(self.required_total)
    }
}

impl fmt::Display for HourQuotaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "term {}: {} weekly hours ({} required)",
            self.term_number, self.actual_total, self.required_total
        )
    }
}

/// Checks that a term's subject hours total exactly the weekly quota.
pub fn validate_term_hours(term: &CurriculumTerm) -> Result<(), HourQuotaViolation> {
    let total = term.weekly_hours_total();
    if total == REQUIRED_WEEKLY_HOURS {
        Ok(())
    } else {
        Err(HourQuotaViolation::new(term.term_number, total))
    }
}
