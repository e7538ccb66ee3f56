mod common;
use common::{month, row};
use rplancharge::core::aggregate::{GroupKey, aggregate};
use rplancharge::models::comment::NO_COMMENT;

#[test]
fn test_aggregate_groups_months_of_same_pair() {
    let rows = vec![
        row("Doe", "John", "Math", None, "2024-01-01", 5),
        row("Doe", "John", "Math", None, "2024-02-01", 10),
    ];

    let matrix = aggregate(&rows);

    assert_eq!(matrix.rows.len(), 1);
    let r = &matrix.rows[0];
    assert_eq!(r.name, "Doe");
    assert_eq!(r.comment, NO_COMMENT);
    assert_eq!(r.load_for(&month("2024-01")), 5);
    assert_eq!(r.load_for(&month("2024-02")), 10);
    assert_eq!(matrix.months, vec![month("2024-01"), month("2024-02")]);
}

#[test]
fn test_aggregate_keeps_explicit_zero_load() {
    let rows = vec![
        row("Doe", "J", "Math", None, "2024-01", 10),
        row("Doe", "J", "Math", None, "2024-02", 0),
    ];

    let matrix = aggregate(&rows);

    assert_eq!(matrix.rows.len(), 1);
    assert_eq!(matrix.months, vec![month("2024-01"), month("2024-02")]);
    let r = &matrix.rows[0];
    assert_eq!(r.loads.len(), 2);
    assert_eq!(r.load_for(&month("2024-01")), 10);
    assert_eq!(r.load_for(&month("2024-02")), 0);
}

#[test]
fn test_aggregate_missing_month_reads_zero() {
    let rows = vec![
        row("Doe", "John", "Math", None, "2024-01-01", 5),
        row("Smith", "Jane", "Physics", None, "2024-03-01", 7),
    ];

    let matrix = aggregate(&rows);

    assert_eq!(matrix.rows.len(), 2);
    assert_eq!(matrix.rows[0].load_for(&month("2024-03")), 0);
    assert_eq!(matrix.rows[1].load_for(&month("2024-01")), 0);
    assert_eq!(matrix.months.len(), 2);
}

#[test]
fn test_aggregate_keeps_first_appearance_order() {
    let rows = vec![
        row("Smith", "Jane", "Physics", None, "2024-02-01", 1),
        row("Doe", "John", "Math", None, "2024-01-01", 2),
        row("Smith", "Jane", "Physics", None, "2024-01-01", 3),
    ];

    let matrix = aggregate(&rows);

    let names: Vec<&str> = matrix.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Smith", "Doe"]);
}

#[test]
fn test_aggregate_last_write_wins_for_duplicate_month() {
    let rows = vec![
        row("Doe", "John", "Math", None, "2024-01-01", 5),
        row("Doe", "John", "Math", None, "2024-01-20", 8),
    ];

    let matrix = aggregate(&rows);

    assert_eq!(matrix.rows.len(), 1);
    assert_eq!(matrix.rows[0].load_for(&month("2024-01")), 8);
    assert_eq!(matrix.months, vec![month("2024-01")]);
}

#[test]
fn test_aggregate_missing_and_blank_comment_share_a_group() {
    let rows = vec![
        row("Doe", "John", "Math", None, "2024-01-01", 5),
        row("Doe", "John", "Math", Some("   "), "2024-02-01", 6),
    ];

    let matrix = aggregate(&rows);

    assert_eq!(matrix.rows.len(), 1);
    assert_eq!(
        GroupKey::from_row(&rows[0]),
        GroupKey::from_row(&rows[1])
    );
}

#[test]
fn test_aggregate_different_comments_split_groups() {
    let rows = vec![
        row("Doe", "John", "Math", Some("lead"), "2024-01-01", 5),
        row("Doe", "John", "Math", None, "2024-02-01", 6),
    ];

    let matrix = aggregate(&rows);

    assert_eq!(matrix.rows.len(), 2);
    assert_eq!(matrix.rows[0].comment, "lead");
    assert_eq!(matrix.rows[1].comment, NO_COMMENT);
}

#[test]
fn test_aggregate_empty_input() {
    let matrix = aggregate(&[]);
    assert!(matrix.is_empty());
    assert!(matrix.months.is_empty());
}

#[test]
fn test_load_sum_over_months() {
    let rows = vec![
        row("Doe", "John", "Math", None, "2024-01-01", 5),
        row("Doe", "John", "Math", None, "2024-02-01", 10),
        row("Doe", "John", "Math", None, "2024-03-01", 1),
    ];
    let matrix = aggregate(&rows);

    let window = [month("2024-02"), month("2024-03"), month("2024-04")];
    assert_eq!(matrix.rows[0].load_sum(&window), 11);
    assert_eq!(matrix.rows[0].load_sum(&matrix.months), 16);
}
