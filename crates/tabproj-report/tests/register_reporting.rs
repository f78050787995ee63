//! Integration tests for register reporting.
//!
//! These tests run the full derivation: CSV bytes through column inference
//! and normalization, then metrics, delay report, and schedule view.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tabproj_ingest::{normalize_table, read_csv, resolve_columns};
use tabproj_report::{build_schedule_view, compute_metrics, delay_days, delayed_activities};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Reference register: one cleanly-dated row
#[test]
fn reference_row_reports_five_days_late() {
    let csv = "\
Activity Name,Status,Start Date,Planned End,End Date
Foo,Completed,01/01/2024,10/01/2024,15/01/2024
";
    let table = read_csv(csv.as_bytes()).unwrap();
    let roles = resolve_columns(table.columns());
    let table = normalize_table(table, &roles).unwrap();

    let metrics = compute_metrics(&table, &roles);
    assert_eq!(metrics.total, 1);
    assert_eq!(metrics.completed(), Some(1));

    assert_eq!(delay_days(&table, &roles), Some(vec![Some(5)]));

    let delayed = delayed_activities(&table, &roles);
    assert_eq!(delayed.len(), 1);
    assert_eq!(delayed[0].label, "Foo");
    assert_eq!(delayed[0].delay_days, 5);
    assert_eq!(delayed[0].status.as_deref(), Some("Completed"));

    let view = build_schedule_view(&table, &roles);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].label, "Foo");
    assert_eq!(view[0].start, ymd(2024, 1, 1));
    assert_eq!(view[0].end, ymd(2024, 1, 15));
    assert_eq!(view[0].category.as_deref(), Some("Completed"));
}

/// An unparsable end date degrades: no delay, no schedule bar, but the row
/// still counts toward total and its status bucket.
#[test]
fn unparsable_end_date_degrades_gracefully() {
    let csv = "\
Activity Name,Status,Start Date,Planned End,End Date
Foo,Completed,01/01/2024,10/01/2024,15/01/2024
Bar,In Progress,05/01/2024,20/01/2024,not a date
";
    let table = read_csv(csv.as_bytes()).unwrap();
    let roles = resolve_columns(table.columns());
    let table = normalize_table(table, &roles).unwrap();

    let metrics = compute_metrics(&table, &roles);
    assert_eq!(metrics.total, 2);
    assert_eq!(metrics.count_for("In Progress"), Some(1));

    assert_eq!(delay_days(&table, &roles), Some(vec![Some(5), None]));

    let delayed = delayed_activities(&table, &roles);
    assert_eq!(delayed.iter().map(|d| d.label.as_str()).collect::<Vec<_>>(), vec!["Foo"]);

    let view = build_schedule_view(&table, &roles);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].label, "Foo");
}

/// Without a planned-end column, delay is unavailable but everything else
/// still derives.
#[test]
fn missing_planned_end_disables_only_the_delay_report() {
    let csv = "\
Task,Status,Start Date,End Date
Foo,Completed,2024-01-01,2024-01-15
";
    let table = read_csv(csv.as_bytes()).unwrap();
    let roles = resolve_columns(table.columns());
    let table = normalize_table(table, &roles).unwrap();

    assert_eq!(delay_days(&table, &roles), None);
    assert!(delayed_activities(&table, &roles).is_empty());

    let metrics = compute_metrics(&table, &roles);
    assert_eq!(metrics.total, 1);

    let view = build_schedule_view(&table, &roles);
    assert_eq!(view.len(), 1);
    // Activity fell back to the first column
    assert_eq!(view[0].label, "Foo");
}

/// A register with no recognizable columns still yields a total.
#[test]
fn total_survives_any_register_shape() {
    let csv = "col_a,col_b\n1,2\n3,4\n5,6\n";
    let table = read_csv(csv.as_bytes()).unwrap();
    let roles = resolve_columns(table.columns());
    let table = normalize_table(table, &roles).unwrap();

    let metrics = compute_metrics(&table, &roles);
    assert_eq!(metrics.total, 3);
    assert_eq!(metrics.status_counts, None);
    assert!(build_schedule_view(&table, &roles).is_empty());
    assert_eq!(delay_days(&table, &roles), None);
}

/// Owner column surfaces as a hover attribute on schedule entries.
#[test]
fn owner_flows_into_schedule_entries() {
    let csv = "\
Activity,Owner,Start Date,End Date
Foo,Alice,2024-01-01,2024-01-05
Bar,,2024-01-02,2024-01-06
";
    let table = read_csv(csv.as_bytes()).unwrap();
    let roles = resolve_columns(table.columns());
    let table = normalize_table(table, &roles).unwrap();

    let view = build_schedule_view(&table, &roles);
    assert_eq!(view.len(), 2);
    assert_eq!(view[0].owner.as_deref(), Some("Alice"));
    assert_eq!(view[1].owner, None);
}

/// Rerunning the whole derivation yields identical results.
#[test]
fn derivation_is_idempotent() {
    let csv = "\
Activity Name,Status,Start Date,Planned End,End Date
Foo,Completed,01/01/2024,10/01/2024,15/01/2024
Bar,Pending,05/01/2024,20/01/2024,25/01/2024
";
    let raw = read_csv(csv.as_bytes()).unwrap();
    let roles = resolve_columns(raw.columns());
    let table = normalize_table(raw.clone(), &roles).unwrap();

    let again = normalize_table(raw, &resolve_columns(table.columns())).unwrap();
    assert_eq!(table, again);

    assert_eq!(compute_metrics(&table, &roles), compute_metrics(&again, &roles));
    assert_eq!(
        build_schedule_view(&table, &roles),
        build_schedule_view(&again, &roles)
    );
    assert_eq!(
        delayed_activities(&table, &roles),
        delayed_activities(&again, &roles)
    );
}
