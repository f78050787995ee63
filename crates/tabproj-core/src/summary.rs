//! Register Summary Model
//!
//! This module provides the derived-model types the reporting engine
//! produces. They answer the question: "How is the project register doing
//! right now?"
//!
//! # Core Concepts
//!
//! - **SummaryMetrics**: total activity count plus per-status counts
//! - **DelayedActivity**: one row of the late-activity report
//! - **ScheduleEntry**: one bar of the Gantt-style interval view
//!
//! All three are inert projections: recomputed from the normalized table on
//! every invocation, never persisted.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use tabproj_core::SummaryMetrics;
//!
//! let mut counts = BTreeMap::new();
//! counts.insert("Completed".to_string(), 3);
//! counts.insert("In Progress".to_string(), 2);
//!
//! let metrics = SummaryMetrics {
//!     total: 5,
//!     status_counts: Some(counts),
//! };
//!
//! assert_eq!(metrics.completed(), Some(3));
//! assert_eq!(metrics.pending(), Some(2));
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Status value the original dashboard treats as "done"
pub const COMPLETED_STATUS: &str = "Completed";

// ============================================================================
// Summary Metrics
// ============================================================================

/// Aggregate counts over the register
///
/// `status_counts` is `None` when no status column resolved — "status is
/// unknown" must stay distinguishable from "no activity has this status".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Total number of activities (rows), always available
    pub total: usize,

    /// Count per distinct status value, exact string equality.
    /// `None` iff the status role did not resolve.
    pub status_counts: Option<BTreeMap<String, usize>>,
}

impl SummaryMetrics {
    /// Count of activities with exactly this status value.
    ///
    /// `None` when status is unknown; `Some(0)` when the value never occurs.
    pub fn count_for(&self, status: &str) -> Option<usize> {
        self.status_counts
            .as_ref()
            .map(|counts| counts.get(status).copied().unwrap_or(0))
    }

    /// Activities whose status is exactly [`COMPLETED_STATUS`]
    pub fn completed(&self) -> Option<usize> {
        self.count_for(COMPLETED_STATUS)
    }

    /// Everything that is not completed, missing statuses included
    pub fn pending(&self) -> Option<usize> {
        self.completed().map(|done| self.total - done)
    }

    /// Distinct status values observed, in sorted order
    pub fn statuses(&self) -> Option<Vec<&str>> {
        self.status_counts
            .as_ref()
            .map(|counts| counts.keys().map(String::as_str).collect())
    }
}

// ============================================================================
// Delay Report
// ============================================================================

/// One row of the delay report
///
/// Present only for rows where both the end and planned-end dates were valid
/// and the signed day difference is strictly positive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DelayedActivity {
    /// Original row index in the register
    pub row: usize,

    /// Activity label (text of the activity-role column)
    pub label: String,

    /// Whole days late: end date minus planned end date, always > 0 here
    pub delay_days: i64,

    /// Status value, when the status role resolved
    pub status: Option<String>,
}

// ============================================================================
// Schedule View
// ============================================================================

/// One interval bar of the Gantt-style schedule view
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Task label shown on the category axis
    pub label: String,

    /// Interval start (valid date, never the unparsed sentinel)
    pub start: NaiveDate,

    /// Interval end (valid date, never the unparsed sentinel)
    pub end: NaiveDate,

    /// Color/grouping category — the status value, when resolved
    pub category: Option<String>,

    /// Hover attribute — the owner value, when resolved
    pub owner: Option<String>,
}

impl ScheduleEntry {
    /// Signed span of the interval in whole days
    pub fn span_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn metrics_with(counts: &[(&str, usize)], total: usize) -> SummaryMetrics {
        SummaryMetrics {
            total,
            status_counts: Some(
                counts
                    .iter()
                    .map(|(k, v)| (k.to_string(), *v))
                    .collect(),
            ),
        }
    }

    #[test]
    fn count_for_known_and_unknown_values() {
        let metrics = metrics_with(&[("Completed", 2), ("Delayed", 1)], 4);
        assert_eq!(metrics.count_for("Completed"), Some(2));
        assert_eq!(metrics.count_for("Never Seen"), Some(0));
    }

    #[test]
    fn unresolved_status_yields_none_not_zero() {
        let metrics = SummaryMetrics {
            total: 7,
            status_counts: None,
        };
        assert_eq!(metrics.count_for("Completed"), None);
        assert_eq!(metrics.completed(), None);
        assert_eq!(metrics.pending(), None);
        assert_eq!(metrics.statuses(), None);
    }

    #[test]
    fn pending_counts_missing_statuses_too() {
        // 5 rows, 2 completed, 1 in progress, 2 rows with blank status
        let metrics = metrics_with(&[("Completed", 2), ("In Progress", 1)], 5);
        assert_eq!(metrics.pending(), Some(3));
    }

    #[test]
    fn statuses_are_sorted() {
        let metrics = metrics_with(&[("Pending", 1), ("Completed", 2)], 3);
        assert_eq!(metrics.statuses(), Some(vec!["Completed", "Pending"]));
    }

    #[test]
    fn span_days_is_signed() {
        let entry = ScheduleEntry {
            label: "Foo".into(),
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            category: None,
            owner: None,
        };
        assert_eq!(entry.span_days(), 14);
    }
}
