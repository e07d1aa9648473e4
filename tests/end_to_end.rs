//! End-to-end scenarios across both engines.

use u_timetable::config::TimetableConfig;
use u_timetable::conflict::{detect_conflicts, ConflictCause};
use u_timetable::error::PlanningError;
use u_timetable::models::{CurriculumPlan, CurriculumTerm, SessionAssignment, TermSelection, Weekday};
use u_timetable::planner::{plan_selections, PlanningSession, PlanningState};
use u_timetable::solver::{ScheduleReport, SolverResponse};
use u_timetable::validation::validate_assignments;

fn session(id: &str, prof: &str, room: &str, hour: u8) -> SessionAssignment {
    SessionAssignment::new(id, Weekday::Monday, hour)
        .with_subject("Calculus")
        .with_professor(prof)
        .with_room(room)
}

fn balanced_plan() -> CurriculumPlan {
    let mut plan = CurriculumPlan::new("ISC-2024").with_name("Software Engineering");
    for n in [1, 2, 3, 4, 5, 7, 8, 9] {
        plan = plan.with_term(
            CurriculumTerm::new(n)
                .with_subject("Mathematics", 10)
                .with_subject("Programming", 10)
                .with_subject("Databases", 10)
                .with_subject("English", 5),
        );
    }
    plan
}

#[test]
fn same_professor_same_slot() {
    let g = detect_conflicts(&[session("1", "A", "101", 7), session("2", "A", "102", 7)]);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.count_by_cause(ConflictCause::SameProfessor), 1);
    assert_eq!(g.count_by_cause(ConflictCause::SameRoom), 0);
}

#[test]
fn same_room_same_slot() {
    let g = detect_conflicts(&[session("1", "A", "101", 7), session("2", "B", "101", 7)]);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.count_by_cause(ConflictCause::SameRoom), 1);
}

#[test]
fn different_start_hours_never_conflict() {
    let g = detect_conflicts(&[session("1", "A", "101", 7), session("2", "A", "101", 8)]);
    assert_eq!(g.edge_count(), 0);

    let g = detect_conflicts(&[session("1", "A", "101", 7), session("2", "B", "101", 8)]);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn two_term_plan_totals() {
    let summary = plan_selections(
        &[TermSelection::new(1, 40), TermSelection::new(2, 35)],
        &balanced_plan(),
    )
    .unwrap();
    assert_eq!(summary.total_groups, 3);
    assert_eq!(summary.total_students, 75);
    assert_eq!(summary.rooms_needed, 3);
}

#[test]
fn five_terms_rejected_before_planning() {
    let selections: Vec<_> = [1, 2, 3, 4, 5]
        .into_iter()
        .map(|n| TermSelection::new(n, 35))
        .collect();
    let errors = plan_selections(&selections, &balanced_plan()).unwrap_err();
    assert!(errors.contains(&PlanningError::TooManyTerms { selected: 5, max: 4 }));
}

#[test]
fn session_to_report() {
    let mut session_state = PlanningSession::new();
    session_state.select_term(1).unwrap();
    session_state.set_students(1, 40).unwrap();
    assert!(matches!(
        session_state.validate(&balanced_plan()).unwrap(),
        PlanningState::Validated { .. }
    ));
    let request = session_state
        .submit(vec!["ana".into(), "bruno".into()])
        .unwrap();
    assert_eq!(request.plan_id, "ISC-2024");
    assert_eq!(request.groups_per_term[&1], 2);

    // What a solver might hand back for that request.
    let response = SolverResponse {
        assignments: vec![
            session("1", "ana", "101", 7).with_group("1A"),
            session("2", "ana", "102", 7).with_group("1B"),
            session("3", "bruno", "101", 8).with_group("1A"),
            session("4", "carla", "N/A", 8).with_group("1B"),
        ],
        advisories: vec![],
    };
    assert!(validate_assignments(&response.assignments).is_ok());

    let report = ScheduleReport::from_response("T-1", response, &TimetableConfig::default()).unwrap();
    assert_eq!(report.conflict_count(), 1);
    assert!(report.graph.has_conflict("1"));
    assert!(!report.graph.has_conflict("3"));
    assert!(report.advisories.is_empty());
}

#[test]
fn solver_output_short_of_curriculum_hours() {
    use u_timetable::advisory::{check_group_completeness, AdvisoryKind};
    use u_timetable::models::Timetable;

    let timetable = Timetable::with_assignments(
        "T-2",
        (7..10u8)
            .map(|hour| session(&format!("s{hour}"), "ana", "101", hour).with_group("1A"))
            .collect(),
    );
    let advisories = check_group_completeness(&timetable, &balanced_plan());
    assert_eq!(advisories.len(), 1);
    assert_eq!(advisories[0].kind, AdvisoryKind::IncompleteGroup);
    assert_eq!(
        advisories[0].message,
        "group 1A has 3/35 weekly hours assigned (32 missing)"
    );
    assert!(detect_conflicts(&timetable.assignments).is_conflict_free());
}
