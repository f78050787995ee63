//! # tabproj-report
//!
//! Derivation engines over a normalized register: summary metrics, the
//! delay report, and the Gantt-style schedule view.
//!
//! This crate provides:
//! - Aggregate counts (total, per distinct status value)
//! - Per-row schedule delay in whole days, and the late-activity subset
//! - The interval projection used for Gantt-style rendering
//!
//! Every function here is a pure, synchronous transform: same table and role
//! map in, same derived model out. Absent roles disable the dependent output
//! instead of failing.
//!
//! ## Example
//!
//! ```rust
//! use tabproj_ingest::{normalize_table, read_csv, resolve_columns};
//! use tabproj_report::{build_schedule_view, compute_metrics};
//!
//! let csv = "Activity,Status,Start Date,End Date\n\
//!            Foo,Completed,2024-01-01,2024-01-15\n";
//! let table = read_csv(csv.as_bytes()).unwrap();
//! let roles = resolve_columns(table.columns());
//! let table = normalize_table(table, &roles).unwrap();
//!
//! let metrics = compute_metrics(&table, &roles);
//! assert_eq!(metrics.total, 1);
//!
//! let view = build_schedule_view(&table, &roles);
//! assert_eq!(view[0].label, "Foo");
//! ```

pub mod delay;
pub mod metrics;
pub mod schedule;

pub use delay::{delay_days, delayed_activities};
pub use metrics::compute_metrics;
pub use schedule::build_schedule_view;
