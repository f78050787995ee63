//! Aggregate register metrics.
//!
//! `total` is always available. Status counts exist only when the status
//! role resolved: `None` means "status is unknown", which callers must keep
//! distinguishable from "no activity has this status".

use std::collections::BTreeMap;
use tabproj_core::{ColumnRoleMap, NormalizedTable, Role, SummaryMetrics};

/// Compute summary metrics over a normalized register.
///
/// Status values are counted by exact string equality, as-is from the
/// source. Blank status cells stay out of the per-value counts but still
/// contribute to `total`.
pub fn compute_metrics(table: &NormalizedTable, roles: &ColumnRoleMap) -> SummaryMetrics {
    let status_counts = roles
        .column(Role::Status)
        .and_then(|label| table.column_index(label))
        .map(|col| {
            let mut counts: BTreeMap<String, usize> = BTreeMap::new();
            for row in table.rows() {
                let value = row[col].display_text();
                if value.is_empty() {
                    continue;
                }
                *counts.entry(value).or_insert(0) += 1;
            }
            counts
        });

    SummaryMetrics {
        total: table.len(),
        status_counts,
    }
}
