//! # tabproj-core
//!
//! Core domain model for the tabproj project-register analytics engine.
//!
//! This crate provides:
//! - Domain types: `RawTable`, `NormalizedTable`, `CellValue`, `ColumnRoleMap`
//! - The semantic `Role` enumeration for column inference
//! - Derived-model types: `SummaryMetrics`, `DelayedActivity`, `ScheduleEntry`
//! - Error types shared across the pipeline
//!
//! ## Example
//!
//! ```rust
//! use tabproj_core::{CellValue, RawTable};
//!
//! let mut table = RawTable::new(vec![
//!     "Activity Name".into(),
//!     "Status".into(),
//! ]);
//! table
//!     .push_row(vec![
//!         CellValue::Text("Foo".into()),
//!         CellValue::Text("Completed".into()),
//!     ])
//!     .unwrap();
//!
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.width(), 2);
//! ```

pub mod summary;

pub use summary::{DelayedActivity, ScheduleEntry, SummaryMetrics};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// ============================================================================
// Type Aliases
// ============================================================================

/// A raw or normalized column label
pub type ColumnLabel = String;

// ============================================================================
// Roles
// ============================================================================

/// Semantic role a register column may be mapped to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Human-readable activity name (label axis of the schedule view)
    Activity,
    /// Free-form status category ("Completed", "In Progress", ...)
    Status,
    /// Actual or planned start date
    Start,
    /// Actual end date
    End,
    /// Planned (baseline) end date
    PlannedEnd,
    /// Person or team responsible
    Owner,
}

impl Role {
    /// All roles, in resolution order
    pub const ALL: [Role; 6] = [
        Role::Activity,
        Role::Status,
        Role::Start,
        Role::End,
        Role::PlannedEnd,
        Role::Owner,
    ];

    /// Canonical snake_case name for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Activity => "activity",
            Role::Status => "status",
            Role::Start => "start",
            Role::End => "end",
            Role::PlannedEnd => "planned_end",
            Role::Owner => "owner",
        }
    }

    /// Whether cells of a column resolved to this role must be date-coerced
    pub fn is_date(&self) -> bool {
        matches!(self, Role::Start | Role::End | Role::PlannedEnd)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Cell Values
// ============================================================================

/// A single scalar cell of the register
///
/// `Unparsed` is the date-coercion sentinel: it marks a cell in a date-role
/// column that could not be interpreted as a date. It is distinct from every
/// valid date, so comparisons and arithmetic against it resolve to absence
/// (`as_date` returns `None`) rather than a misleading value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Missing / blank cell
    Empty,
    /// Untyped text
    Text(String),
    /// Numeric scalar
    Number(f64),
    /// Date-coerced value
    Date(NaiveDate),
    /// Date coercion failed for this cell
    Unparsed,
}

impl CellValue {
    /// The date carried by this cell, if any
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            CellValue::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Whether this cell is the date-coercion sentinel
    pub fn is_unparsed(&self) -> bool {
        matches!(self, CellValue::Unparsed)
    }

    /// Whether this cell is blank
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Text coercion used for label-like cells (activity, status, owner).
    ///
    /// `Empty` and `Unparsed` coerce to the empty string; numbers drop a
    /// trailing `.0` so integral counts read naturally as labels.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Empty | CellValue::Unparsed => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

// ============================================================================
// Raw Table
// ============================================================================

/// The register as loaded by the host, before any normalization
///
/// Rows are ordered; every row carries exactly one cell per column. That
/// invariant is enforced at construction — a ragged row is the one malformed
/// input that aborts the pipeline instead of degrading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    columns: Vec<ColumnLabel>,
    rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    /// Create an empty table with the given column labels
    pub fn new(columns: Vec<ColumnLabel>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a table from pre-built rows, validating row widths
    pub fn from_rows(
        columns: Vec<ColumnLabel>,
        rows: Vec<Vec<CellValue>>,
    ) -> Result<Self, TableError> {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row, rejecting it if its width does not match the column set
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<(), TableError> {
        if row.len() != self.columns.len() {
            return Err(TableError::MalformedRow {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column labels, in original order
    pub fn columns(&self) -> &[ColumnLabel] {
        &self.columns
    }

    /// All rows, in original order
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Decompose into columns and rows (used by the ingest pipeline)
    pub fn into_parts(self) -> (Vec<ColumnLabel>, Vec<Vec<CellValue>>) {
        (self.columns, self.rows)
    }
}

// ============================================================================
// Normalized Table
// ============================================================================

/// The register after label canonicalization and date coercion
///
/// Labels are trimmed, lowercased, space-free. Every cell of a column that
/// was resolved to a date role is either `CellValue::Date` or
/// `CellValue::Unparsed` — never untyped text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    columns: Vec<ColumnLabel>,
    rows: Vec<Vec<CellValue>>,
}

impl NormalizedTable {
    /// Build from canonicalized parts, validating widths and rejecting
    /// post-normalization label collisions
    pub fn from_parts(
        columns: Vec<ColumnLabel>,
        rows: Vec<Vec<CellValue>>,
    ) -> Result<Self, TableError> {
        for (i, label) in columns.iter().enumerate() {
            if columns[..i].contains(label) {
                return Err(TableError::DuplicateColumn(label.clone()));
            }
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(TableError::MalformedRow {
                    row: i,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Column labels, canonicalized, in original order
    pub fn columns(&self) -> &[ColumnLabel] {
        &self.columns
    }

    /// All rows, in original order
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by canonical label
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// Cell at (row, column label), if both exist
    pub fn cell(&self, row: usize, label: &str) -> Option<&CellValue> {
        let col = self.column_index(label)?;
        self.rows.get(row).and_then(|r| r.get(col))
    }
}

// ============================================================================
// Column Role Map
// ============================================================================

/// Mapping from semantic roles to resolved (normalized) column labels
///
/// Built once per table by the resolver; read-only thereafter. Absence of a
/// role is a first-class state — consumers branch on it rather than erroring.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnRoleMap {
    map: HashMap<Role, ColumnLabel>,
}

impl ColumnRoleMap {
    /// Create an empty role map
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `role` resolved to `label`
    pub fn assign(&mut self, role: Role, label: impl Into<ColumnLabel>) {
        self.map.insert(role, label.into());
    }

    /// The column resolved for `role`, if any
    pub fn column(&self, role: Role) -> Option<&str> {
        self.map.get(&role).map(String::as_str)
    }

    /// Whether `role` resolved to a column
    pub fn is_resolved(&self, role: Role) -> bool {
        self.map.contains_key(&role)
    }

    /// Resolved date roles with their columns, in `Role::ALL` order
    pub fn resolved_date_columns(&self) -> Vec<(Role, &str)> {
        Role::ALL
            .iter()
            .filter(|r| r.is_date())
            .filter_map(|r| self.column(*r).map(|c| (*r, c)))
            .collect()
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Structural table error — the only aborting condition in the pipeline
#[derive(Debug, Error)]
pub enum TableError {
    #[error("malformed row {row}: expected {expected} cells, found {found}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("column label collides after normalization: {0}")]
    DuplicateColumn(ColumnLabel),
}

// ============================================================================
// Tests
// ============================================================================
