//! Advisory (non-fatal) timetable checks.
//!
//! Advisories flag schedule quality issues that do not make a
//! timetable invalid. They are never reported as conflicts.
//!
//! | Check | Raised when |
//! |-------|-------------|
//! | Professor daily load | A professor has more sessions in one day than allowed |
//! | Group gap | A group has an idle slot between two sessions of one day |
//! | Incomplete group | A group has fewer sessions than its term's weekly hours |
//!
//! The mid-morning break is not a slot, so sessions at 10 and 11 are
//! consecutive.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::AdvisoryConfig;
use crate::models::{grid, normalize_name, CurriculumPlan, Timetable, Weekday};
use crate::planner::term_of_group;

/// An advisory note about a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    /// Advisory category.
    pub kind: AdvisoryKind,
    /// Professor, group, or other entity concerned.
    pub entity_id: String,
    /// Day concerned, if any.
    pub day: Option<Weekday>,
    /// Human-readable description.
    pub message: String,
}

/// Advisory categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AdvisoryKind {
    /// Professor teaches too many sessions in one day.
    ProfessorDailyLoad,
    /// Group has an idle slot inside its day.
    GroupGap,
    /// Group received fewer sessions than its curriculum requires.
    IncompleteGroup,
    /// Note passed through from the solver.
    Solver,
}

impl Advisory {
    /// Wraps a solver note.
    pub fn solver(message: impl Into<String>) -> Self {
        Self {
            kind: AdvisoryKind::Solver,
            entity_id: String::new(),
            day: None,
            message: message.into(),
        }
    }
}

/// Professors with more than `max_per_day` sessions on a day.
///
/// Names are compared ignoring case and surrounding whitespace; the
/// first spelling seen is reported.
pub fn check_professor_load(timetable: &Timetable, max_per_day: usize) -> Vec<Advisory> {
    let mut display: HashMap<String, &str> = HashMap::new();
    for name in timetable.professors() {
        display.entry(normalize_name(name)).or_insert(name.trim());
    }

    let mut out: Vec<Advisory> = timetable
        .professor_daily_load()
        .into_iter()
        .filter(|(_, count)| *count > max_per_day)
        .map(|((key, day), count)| {
            let name = display.get(&key).copied().unwrap_or(key.as_str()).to_string();
            Advisory {
                kind: AdvisoryKind::ProfessorDailyLoad,
                message: format!("{name} has {count} sessions on {day} (limit {max_per_day})"),
                entity_id: name,
                day: Some(day),
            }
        })
        .collect();
    out.sort_by(|a, b| (&a.entity_id, a.day).cmp(&(&b.entity_id, b.day)));
    out
}

/// Idle slots between sessions of the same group on one day.
pub fn check_group_gaps(timetable: &Timetable) -> Vec<Advisory> {
    let mut slots: HashMap<(&str, Weekday), Vec<usize>> = HashMap::new();
    for a in &timetable.assignments {
        if let Some(idx) = grid::slot_index(a.start_hour) {
            slots.entry((a.group.as_str(), a.day)).or_default().push(idx);
        }
    }

    let mut out = Vec::new();
    for ((group, day), mut used) in slots {
        used.sort_unstable();
        used.dedup();
        let idle: usize = used.windows(2).map(|w| w[1] - w[0] - 1).sum();
        if idle > 0 {
            out.push(Advisory {
                kind: AdvisoryKind::GroupGap,
                entity_id: group.to_string(),
                day: Some(day),
                message: format!("group {group} has {idle} idle slot(s) on {day}"),
            });
        }
    }
    out.sort_by(|a, b| (&a.entity_id, a.day).cmp(&(&b.entity_id, b.day)));
    out
}

/// Groups with fewer weekly sessions than their term's subjects require.
///
/// Each session counts as one hour. A group's term is read from its
/// label (`"3B"` is term 3); groups whose label carries no term, or whose
/// term the plan does not define, are skipped.
pub fn check_group_completeness(timetable: &Timetable, plan: &CurriculumPlan) -> Vec<Advisory> {
    let mut sessions: HashMap<&str, u32> = HashMap::new();
    for a in &timetable.assignments {
        *sessions.entry(a.group.as_str()).or_insert(0) += 1;
    }

    let mut out = Vec::new();
    for (group, assigned) in sessions {
        let Some(term) = term_of_group(group).and_then(|n| plan.term(n)) else {
            continue;
        };
        let required = term.weekly_hours_total();
        if assigned < required {
            out.push(Advisory {
                kind: AdvisoryKind::IncompleteGroup,
                entity_id: group.to_string(),
                day: None,
                message: format!(
                    "group {group} has {assigned}/{required} weekly hours assigned ({} missing)",
                    required - assigned
                ),
            });
        }
    }
    out.sort_by(|a, b| a.entity_id.cmp(&b.entity_id));
    out
}

/// Runs every enabled advisory check.
pub fn check_timetable(timetable: &Timetable, config: &AdvisoryConfig) -> Vec<Advisory> {
    let mut out = check_professor_load(timetable, config.max_professor_sessions_per_day);
    if config.report_group_gaps {
        out.extend(check_group_gaps(timetable));
    }
    tracing::debug!(
        timetable = %timetable.id,
        advisories = out.len(),
        "advisory checks finished"
    );
    out
}
