//! # tabproj-ingest
//!
//! Column inference and date coercion for loosely-structured project
//! registers.
//!
//! This crate provides:
//! - Label canonicalization (trim, lowercase, space to underscore)
//! - Heuristic role resolution over a data-driven rule table
//! - Tolerant, multi-format date coercion with an explicit unparsed sentinel
//! - A CSV adapter producing `RawTable` values
//!
//! ## Example
//!
//! ```rust
//! use tabproj_core::Role;
//! use tabproj_ingest::resolve_columns;
//!
//! let labels = vec![
//!     "Activity Name".to_string(),
//!     "Status".to_string(),
//!     "Start Date".to_string(),
//!     "Planned End".to_string(),
//!     "End Date".to_string(),
//! ];
//!
//! let roles = resolve_columns(&labels);
//! assert_eq!(roles.column(Role::Activity), Some("activity_name"));
//! assert_eq!(roles.column(Role::End), Some("end_date"));
//! assert_eq!(roles.column(Role::PlannedEnd), Some("planned_end"));
//! ```

pub mod coerce;
pub mod csv;
pub mod normalize;
pub mod resolve;

pub use coerce::parse_date;
pub use csv::{read_csv, read_csv_file};
pub use normalize::{normalize_label, normalize_labels};
pub use resolve::{resolve_roles, RoleRule, RULES};

use tabproj_core::{ColumnLabel, ColumnRoleMap, NormalizedTable, RawTable, TableError};
use thiserror::Error;

/// Ingestion error
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Resolve semantic roles from raw column labels.
///
/// Canonicalizes the labels first so matching is deterministic, then applies
/// the ordered rule table in [`resolve::RULES`]. Never fails; unmatched roles
/// are simply absent from the returned map.
pub fn resolve_columns(raw_labels: &[ColumnLabel]) -> ColumnRoleMap {
    let normalized = normalize::normalize_labels(raw_labels);
    resolve::resolve_roles(&normalized)
}

/// Canonicalize a raw table and coerce its date-role columns.
///
/// Labels are normalized; every cell of a column resolved to a date role
/// becomes either a valid date or the unparsed sentinel. Post-normalization
/// label collisions and ragged rows are the only failure modes.
pub fn normalize_table(
    table: RawTable,
    roles: &ColumnRoleMap,
) -> Result<NormalizedTable, TableError> {
    let (columns, mut rows) = table.into_parts();
    let columns = normalize::normalize_labels(&columns);

    for (i, label) in columns.iter().enumerate() {
        if columns[..i].contains(label) {
            return Err(TableError::DuplicateColumn(label.clone()));
        }
    }

    for (_role, label) in roles.resolved_date_columns() {
        if let Some(col) = columns.iter().position(|c| c == label) {
            for row in &mut rows {
                let cell = std::mem::replace(&mut row[col], tabproj_core::CellValue::Empty);
                row[col] = coerce::coerce_cell(cell);
            }
        }
    }

    NormalizedTable::from_parts(columns, rows)
}
