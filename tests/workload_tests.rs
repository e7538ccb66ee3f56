mod common;
use common::{memory_pool_with_refs, month};
use rplancharge::core::admin::AdminLogic;
use rplancharge::core::directory::{PersonLogic, SubjectLogic, TeamLogic};
use rplancharge::core::logic::Core;
use rplancharge::core::workload::{CommentLogic, SubmitLogic};
use rplancharge::db::log::load_log;
use rplancharge::db::queries::{
    RowScope, find_comment, find_person, list_persons, load_workload_rows,
};
use rplancharge::errors::AppError;
use rplancharge::models::month::Month;
use rplancharge::models::workload::{SubmitOutcome, WorkloadEntry};

fn entry(person: i64, subject: i64, m: &str, load: i32) -> WorkloadEntry {
    WorkloadEntry::new(person, subject, month(m), load).unwrap()
}

#[test]
fn test_month_parse_accepts_all_input_forms() {
    let expected = Month::new(2024, 2).unwrap();
    assert_eq!(Month::parse("2024-02").unwrap(), expected);
    assert_eq!(Month::parse("2024-02-17").unwrap(), expected);
    assert_eq!(Month::parse("02/2024").unwrap(), expected);
    assert_eq!(Month::parse(" 2/2024 ").unwrap(), expected);
    assert_eq!(expected.to_string(), "2024-02-01");
    assert_eq!(expected.label(), "2024-02");
    assert_eq!(expected.short_label(), "02 24");
}

#[test]
fn test_month_parse_rejects_garbage() {
    for bad in ["", "2024", "2024-13", "13/2024", "Feb 2024", "2024-02-30"] {
        assert!(
            matches!(Month::parse(bad), Err(AppError::InvalidMonth(_))),
            "{bad}"
        );
    }
}

#[test]
fn test_load_bounds() {
    assert!(WorkloadEntry::new(1, 1, month("2024-01"), 0).is_ok());
    assert!(WorkloadEntry::new(1, 1, month("2024-01"), 31).is_ok());
    assert!(matches!(
        WorkloadEntry::new(1, 1, month("2024-01"), 32),
        Err(AppError::InvalidLoad(32))
    ));
    assert!(matches!(
        WorkloadEntry::new(1, 1, month("2024-01"), -1),
        Err(AppError::InvalidLoad(-1))
    ));
}

#[test]
fn test_submit_inserts_then_updates() {
    let mut pool = memory_pool_with_refs();

    let first = SubmitLogic::apply(&mut pool, &entry(1, 1, "2024-01", 5), "test").unwrap();
    assert_eq!(first, SubmitOutcome::Inserted);
    assert_eq!(first.message(), "Record inserted successfully");

    let second = SubmitLogic::apply(&mut pool, &entry(1, 1, "2024-01-31", 7), "test").unwrap();
    assert_eq!(second, SubmitOutcome::Updated);
    assert_eq!(second.message(), "Record updated successfully");

    let rows = load_workload_rows(&pool.conn, RowScope::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].load, 7);
    assert_eq!(rows[0].month, month("2024-01"));
}

#[test]
fn test_submit_unknown_person_or_subject() {
    let mut pool = memory_pool_with_refs();

    assert!(matches!(
        SubmitLogic::apply(&mut pool, &entry(99, 1, "2024-01", 5), "test"),
        Err(AppError::PersonNotFound(99))
    ));
    assert!(matches!(
        SubmitLogic::apply(&mut pool, &entry(1, 99, "2024-01", 5), "test"),
        Err(AppError::SubjectNotFound(99))
    ));
}

#[test]
fn test_submit_writes_audit_line() {
    let mut pool = memory_pool_with_refs();
    SubmitLogic::apply(&mut pool, &entry(1, 1, "2024-01", 5), "test").unwrap();

    let log = load_log(&pool.conn).unwrap();
    let last = log.last().unwrap();
    assert_eq!(last.operation, "set");
    assert_eq!(last.target, "1/1/2024-01");
}

#[test]
fn test_remove_load() {
    let mut pool = memory_pool_with_refs();
    SubmitLogic::apply(&mut pool, &entry(1, 1, "2024-01", 5), "test").unwrap();

    assert!(SubmitLogic::remove(&mut pool, 1, 1, &month("2024-01")).unwrap());
    assert!(!SubmitLogic::remove(&mut pool, 1, 1, &month("2024-01")).unwrap());
}

#[test]
fn test_scope_by_range_and_team() {
    let mut pool = memory_pool_with_refs();
    SubmitLogic::apply(&mut pool, &entry(1, 1, "2024-01", 5), "test").unwrap();
    SubmitLogic::apply(&mut pool, &entry(1, 1, "2024-02", 10), "test").unwrap();
    SubmitLogic::apply(&mut pool, &entry(2, 2, "2024-02", 20), "test").unwrap();

    let feb = RowScope {
        bounds: Some((month("2024-02"), month("2024-02"))),
        team_id: None,
    };
    assert_eq!(load_workload_rows(&pool.conn, feb).unwrap().len(), 2);

    let team = RowScope {
        bounds: None,
        team_id: Some(1),
    };
    let rows = load_workload_rows(&pool.conn, team).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.name == "Doe"));
}

#[test]
fn test_doe_math_matrix_from_database() {
    let mut pool = memory_pool_with_refs();
    SubmitLogic::apply(&mut pool, &entry(1, 1, "2024-01", 5), "test").unwrap();
    SubmitLogic::apply(&mut pool, &entry(1, 1, "2024-02", 10), "test").unwrap();

    let matrix = Core::load_matrix(&pool, RowScope::default()).unwrap();

    assert_eq!(matrix.rows.len(), 1);
    let r = &matrix.rows[0];
    assert_eq!((r.name.as_str(), r.subject.as_str()), ("Doe", "Math"));
    assert_eq!(r.comment, "No comment");
    assert_eq!(r.load_for(&month("2024-01")), 5);
    assert_eq!(r.load_for(&month("2024-02")), 10);
}

#[test]
fn test_comment_set_replace_and_clear() {
    let mut pool = memory_pool_with_refs();

    CommentLogic::set(&mut pool, 1, 1, "lead").unwrap();
    CommentLogic::set(&mut pool, 1, 1, "  backup  ").unwrap();
    assert_eq!(
        find_comment(&pool.conn, 1, 1).unwrap().as_deref(),
        Some("backup")
    );

    assert!(CommentLogic::clear(&mut pool, 1, 1).unwrap());
    assert_eq!(find_comment(&pool.conn, 1, 1).unwrap(), None);
    assert!(matches!(
        CommentLogic::set(&mut pool, 1, 1, "   "),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_comment_is_joined_into_rows() {
    let mut pool = memory_pool_with_refs();
    SubmitLogic::apply(&mut pool, &entry(1, 1, "2024-01", 5), "test").unwrap();
    CommentLogic::set(&mut pool, 1, 1, "lead").unwrap();

    let matrix = Core::load_matrix(&pool, RowScope::default()).unwrap();
    assert_eq!(matrix.rows[0].comment, "lead");
}

#[test]
fn test_delete_person_cascades_loads() {
    let mut pool = memory_pool_with_refs();
    SubmitLogic::apply(&mut pool, &entry(1, 1, "2024-01", 5), "test").unwrap();

    PersonLogic::delete(&mut pool, 1).unwrap();

    assert!(load_workload_rows(&pool.conn, RowScope::default()).unwrap().is_empty());
    assert!(matches!(
        PersonLogic::delete(&mut pool, 1),
        Err(AppError::PersonNotFound(1))
    ));
}

#[test]
fn test_delete_team_keeps_members() {
    let mut pool = memory_pool_with_refs();
    TeamLogic::delete(&mut pool, 1).unwrap();

    let doe = find_person(&pool.conn, 1).unwrap().unwrap();
    assert_eq!(doe.team_id, None);
    assert_eq!(list_persons(&pool.conn).unwrap().len(), 2);
}

#[test]
fn test_reference_data_validation() {
    let mut pool = memory_pool_with_refs();

    assert!(matches!(
        PersonLogic::add(&mut pool, " ", "X", None),
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        PersonLogic::add(&mut pool, "New", "Guy", Some(42)),
        Err(AppError::TeamNotFound(42))
    ));
    // subject names are unique
    assert!(matches!(
        SubjectLogic::add(&mut pool, "Math"),
        Err(AppError::Db(_))
    ));
}

#[test]
fn test_admin_grant_authorize_revoke() {
    let mut pool = memory_pool_with_refs();

    AdminLogic::grant(&mut pool, 1, "jdoe").unwrap();

    let admin = AdminLogic::authorize(&pool, Some("jdoe")).unwrap();
    assert_eq!(admin.person_id, 1);
    assert_eq!(admin.name, "Doe");

    assert!(matches!(
        AdminLogic::authorize(&pool, None),
        Err(AppError::Unauthorized)
    ));
    assert!(matches!(
        AdminLogic::authorize(&pool, Some("nobody")),
        Err(AppError::Forbidden(_))
    ));

    AdminLogic::revoke(&mut pool, "jdoe").unwrap();
    assert!(matches!(
        AdminLogic::authorize(&pool, Some("jdoe")),
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        AdminLogic::revoke(&mut pool, "jdoe"),
        Err(AppError::AdminNotFound(_))
    ));
}

#[test]
fn test_admin_unknown_person() {
    let mut pool = memory_pool_with_refs();
    assert!(matches!(
        AdminLogic::grant(&mut pool, 7, "ghost"),
        Err(AppError::PersonNotFound(7))
    ));
}
