//! tabproj CLI - Project Register Analytics
//!
//! Command-line host for the tabproj pipeline: reads a register CSV from
//! disk, infers column roles, and prints the derived model as text or JSON.
//! Acquisition of the CSV (download, refresh, caching) is deliberately left
//! to whatever put the file on disk.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};
use tabproj_core::{ColumnRoleMap, NormalizedTable, Role};
use tabproj_ingest::{normalize_table, read_csv_file, resolve_columns};
use tabproj_report::{build_schedule_view, compute_metrics, delayed_activities};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tabproj")]
#[command(author, version, about = "Project register analytics", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and print the column role map of a register
    Check {
        /// Register CSV path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print summary metrics and the delay report
    Report {
        /// Register CSV path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the Gantt-style schedule view
    Schedule {
        /// Register CSV path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => {
            let (_, roles) = load(&file)?;
            print_roles(&roles);
        }
        Commands::Report { file, format } => {
            let (table, roles) = load(&file)?;
            let rendered = render_report(&table, &roles, format)?;
            println!("{rendered}");
        }
        Commands::Schedule {
            file,
            format,
            output,
        } => {
            let (table, roles) = load(&file)?;
            let rendered = render_schedule(&table, &roles, format)?;
            match output {
                Some(path) => {
                    let mut out = std::fs::File::create(&path)
                        .with_context(|| format!("cannot create {}", path.display()))?;
                    writeln!(out, "{rendered}")?;
                }
                None => println!("{rendered}"),
            }
        }
    }

    Ok(())
}

/// Read, resolve, and normalize a register from disk
fn load(file: &Path) -> Result<(NormalizedTable, ColumnRoleMap)> {
    let raw = read_csv_file(file)
        .with_context(|| format!("failed to read register {}", file.display()))?;
    tracing::debug!(rows = raw.len(), columns = raw.width(), "register loaded");

    let roles = resolve_columns(raw.columns());
    let table = normalize_table(raw, &roles).context("register failed normalization")?;
    Ok((table, roles))
}

fn print_roles(roles: &ColumnRoleMap) {
    for role in Role::ALL {
        match roles.column(role) {
            Some(column) => println!("{:>12} -> {column}", role.as_str()),
            None => println!("{:>12} -> (unresolved)", role.as_str()),
        }
    }
}

fn render_report(
    table: &NormalizedTable,
    roles: &ColumnRoleMap,
    format: OutputFormat,
) -> Result<String> {
    let metrics = compute_metrics(table, roles);
    let delayed = delayed_activities(table, roles);
    let delay_available =
        roles.is_resolved(Role::End) && roles.is_resolved(Role::PlannedEnd);

    if format == OutputFormat::Json {
        let delayed_or_na = delay_available.then_some(&delayed);
        let value = serde_json::json!({
            "total": metrics.total,
            "status_counts": metrics.status_counts,
            "delayed": delayed_or_na,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut out = String::new();
    out.push_str(&format!("Total activities: {}\n", metrics.total));
    out.push_str(&format!("Completed: {}\n", count_or_na(metrics.completed())));
    out.push_str(&format!("Pending: {}\n", count_or_na(metrics.pending())));

    if let Some(counts) = &metrics.status_counts {
        out.push_str("\nStatus breakdown:\n");
        for (status, count) in counts {
            out.push_str(&format!("  {status}: {count}\n"));
        }
    }

    out.push_str("\nDelay report:\n");
    if !delay_available {
        out.push_str("  N/A (end or planned-end column not found)\n");
    } else if delayed.is_empty() {
        out.push_str("  No delayed activities.\n");
    } else {
        for activity in &delayed {
            let status = activity
                .status
                .as_deref()
                .map(|s| format!(" [{s}]"))
                .unwrap_or_default();
            out.push_str(&format!(
                "  {} +{}d{}\n",
                activity.label, activity.delay_days, status
            ));
        }
    }

    Ok(out.trim_end().to_string())
}

fn render_schedule(
    table: &NormalizedTable,
    roles: &ColumnRoleMap,
    format: OutputFormat,
) -> Result<String> {
    let view = build_schedule_view(table, roles);

    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&view)?);
    }

    if !roles.is_resolved(Role::Start) || !roles.is_resolved(Role::End) {
        return Ok("No schedule view available (start or end column not found).".to_string());
    }
    if view.is_empty() {
        return Ok("No rows with both a valid start and end date.".to_string());
    }

    let mut out = String::new();
    for entry in &view {
        let category = entry
            .category
            .as_deref()
            .map(|c| format!(" [{c}]"))
            .unwrap_or_default();
        let owner = entry
            .owner
            .as_deref()
            .map(|o| format!(" ({o})"))
            .unwrap_or_default();
        out.push_str(&format!(
            "{}  {} -> {}{}{}\n",
            entry.label, entry.start, entry.end, category, owner
        ));
    }
    Ok(out.trim_end().to_string())
}

fn count_or_na(count: Option<usize>) -> String {
    count.map_or_else(|| "N/A".to_string(), |c| c.to_string())
}
