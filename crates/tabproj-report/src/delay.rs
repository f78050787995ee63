//! Schedule delay arithmetic.
//!
//! Delay is the signed whole-day difference between the actual end date and
//! the planned end date; positive means late. It exists only when both roles
//! resolved, and per row only when both cells carry valid dates — the
//! unparsed sentinel propagates as absence, never as a number.

use tabproj_core::{ColumnRoleMap, DelayedActivity, NormalizedTable, Role};

/// Per-row delay in whole days.
///
/// `None` when the end or planned-end role did not resolve. Inside the
/// vector, `None` marks a row where either date is missing or unparsed.
pub fn delay_days(table: &NormalizedTable, roles: &ColumnRoleMap) -> Option<Vec<Option<i64>>> {
    let end_col = table.column_index(roles.column(Role::End)?)?;
    let planned_col = table.column_index(roles.column(Role::PlannedEnd)?)?;

    let delays = table
        .rows()
        .iter()
        .map(|row| {
            let end = row[end_col].as_date()?;
            let planned = row[planned_col].as_date()?;
            Some(end.signed_duration_since(planned).num_days())
        })
        .collect();
    Some(delays)
}

/// The late-activity subset: rows with a strictly positive delay, in
/// original row order.
///
/// Empty when delay cannot be computed at all. Carries the activity label
/// and, when resolved, the status value for the report rendering.
pub fn delayed_activities(table: &NormalizedTable, roles: &ColumnRoleMap) -> Vec<DelayedActivity> {
    let Some(delays) = delay_days(table, roles) else {
        return Vec::new();
    };

    let activity_col = roles
        .column(Role::Activity)
        .and_then(|label| table.column_index(label));
    let status_col = roles
        .column(Role::Status)
        .and_then(|label| table.column_index(label));

    delays
        .iter()
        .enumerate()
        .filter_map(|(i, delay)| {
            let delay = (*delay)?;
            if delay <= 0 {
                return None;
            }
            let row = &table.rows()[i];
            Some(DelayedActivity {
                row: i,
                label: activity_col
                    .map(|col| row[col].display_text())
                    .unwrap_or_default(),
                delay_days: delay,
                status: status_col
                    .map(|col| row[col].display_text())
                    .filter(|s| !s.is_empty()),
            })
        })
        .collect()
}
