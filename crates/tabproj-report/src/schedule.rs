//! Gantt-style schedule view.
//!
//! Projects the normalized register into interval entries: one bar per row
//! with a valid start and end date. Rows with unparsed or missing dates are
//! silently excluded; an unresolved start or end role disables the view
//! altogether (empty sequence, not an error).

use tabproj_core::{ColumnRoleMap, NormalizedTable, Role, ScheduleEntry};

/// Build the ordered interval view of the register.
pub fn build_schedule_view(table: &NormalizedTable, roles: &ColumnRoleMap) -> Vec<ScheduleEntry> {
    let start_col = roles
        .column(Role::Start)
        .and_then(|label| table.column_index(label));
    let end_col = roles
        .column(Role::End)
        .and_then(|label| table.column_index(label));
    let (Some(start_col), Some(end_col)) = (start_col, end_col) else {
        return Vec::new();
    };

    let activity_col = roles
        .column(Role::Activity)
        .and_then(|label| table.column_index(label));
    let status_col = roles
        .column(Role::Status)
        .and_then(|label| table.column_index(label));
    let owner_col = roles
        .column(Role::Owner)
        .and_then(|label| table.column_index(label));

    table
        .rows()
        .iter()
        .filter_map(|row| {
            let start = row[start_col].as_date()?;
            let end = row[end_col].as_date()?;
            Some(ScheduleEntry {
                label: activity_col
                    .map(|col| row[col].display_text())
                    .unwrap_or_default(),
                start,
                end,
                category: status_col
                    .map(|col| row[col].display_text())
                    .filter(|s| !s.is_empty()),
                owner: owner_col
                    .map(|col| row[col].display_text())
                    .filter(|s| !s.is_empty()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tabproj_core::CellValue;

    fn ymd(y: i32, m: u32, d: u32) -> CellValue {
        CellValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn view_table(rows: Vec<Vec<CellValue>>) -> NormalizedTable {
        NormalizedTable::from_parts(
            vec![
                "activity".into(),
                "status".into(),
                "start_date".into(),
                "end_date".into(),
            ],
            rows,
        )
        .unwrap()
    }

    fn view_roles() -> ColumnRoleMap {
        let mut roles = ColumnRoleMap::new();
        roles.assign(Role::Activity, "activity");
        roles.assign(Role::Status, "status");
        roles.assign(Role::Start, "start_date");
        roles.assign(Role::End, "end_date");
        roles
    }

    #[test]
    fn one_entry_per_fully_dated_row() {
        let table = view_table(vec![
            vec![
                CellValue::Text("Foo".into()),
                CellValue::Text("Completed".into()),
                ymd(2024, 1, 1),
                ymd(2024, 1, 15),
            ],
            vec![
                CellValue::Text("Bar".into()),
                CellValue::Text("Pending".into()),
                CellValue::Unparsed,
                ymd(2024, 1, 20),
            ],
        ]);

        let view = build_schedule_view(&table, &view_roles());
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].label, "Foo");
        assert_eq!(view[0].start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(view[0].end, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(view[0].category.as_deref(), Some("Completed"));
        assert_eq!(view[0].owner, None);
    }

    #[test]
    fn missing_start_role_disables_the_view() {
        let table = view_table(vec![vec![
            CellValue::Text("Foo".into()),
            CellValue::Text("Completed".into()),
            ymd(2024, 1, 1),
            ymd(2024, 1, 15),
        ]]);
        let mut roles = ColumnRoleMap::new();
        roles.assign(Role::Activity, "activity");
        roles.assign(Role::End, "end_date");

        assert!(build_schedule_view(&table, &roles).is_empty());
    }

    #[test]
    fn category_absent_when_status_unresolved() {
        let table = view_table(vec![vec![
            CellValue::Text("Foo".into()),
            CellValue::Text("Completed".into()),
            ymd(2024, 1, 1),
            ymd(2024, 1, 15),
        ]]);
        let mut roles = ColumnRoleMap::new();
        roles.assign(Role::Activity, "activity");
        roles.assign(Role::Start, "start_date");
        roles.assign(Role::End, "end_date");

        let view = build_schedule_view(&table, &roles);
        assert_eq!(view[0].category, None);
    }

    #[test]
    fn blank_status_cell_gives_no_category() {
        let table = view_table(vec![vec![
            CellValue::Text("Foo".into()),
            CellValue::Empty,
            ymd(2024, 1, 1),
            ymd(2024, 1, 15),
        ]]);
        let view = build_schedule_view(&table, &view_roles());
        assert_eq!(view[0].category, None);
    }

    #[test]
    fn entries_keep_row_order() {
        let table = view_table(vec![
            vec![
                CellValue::Text("B".into()),
                CellValue::Empty,
                ymd(2024, 2, 1),
                ymd(2024, 2, 5),
            ],
            vec![
                CellValue::Text("A".into()),
                CellValue::Empty,
                ymd(2024, 1, 1),
                ymd(2024, 1, 5),
            ],
        ]);
        let view = build_schedule_view(&table, &view_roles());
        assert_eq!(view[0].label, "B");
        assert_eq!(view[1].label, "A");
    }
}
