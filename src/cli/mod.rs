//! Command-line interface for junction-recon.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **compare**: Reconcile a candidate junction table against ground truth
//! - **aggregate**: Normalize and merge duplicate rows of one or more tables
//! - **layout**: Solve (and optionally draw) a two-circle diagram from counts
//!
//! ## Usage
//!
//! ```text
//! # Reconcile two tables and draw the overlap
//! junction-recon compare valid.csv own.csv --diagram overlap.png
//!
//! # Several runs of the local pipeline, concatenated before aggregation
//! junction-recon compare valid.csv run1.csv run2.csv
//!
//! # JSON output for scripting
//! junction-recon compare valid.csv own.csv --format json
//!
//! # Diagram from known counts
//! junction-recon layout --only-a 12 --only-b 5 --both 30 --diagram venn.svg
//! ```
//!
//! ## Exit status
//!
//! | Status | Meaning |
//! |--------|---------|
//! | 0 | Tables agree |
//! | 1 | Tables differ (missing, extra, or mismatched junctions) |
//! | 2 | Fatal error (unreadable input, bad schema, overflow, render failure) |

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::core::record::JunctionRecord;
use crate::parsing::{self, ColumnSchema};
use crate::render::DiagramStyle;

pub mod aggregate;
pub mod compare;
pub mod layout;

#[derive(Parser)]
#[command(name = "junction-recon")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Reconcile recombination-junction tables and draw their overlap")]
#[command(
    long_about = "junction-recon checks a locally produced table of recombination junctions against a trusted one.\n\nDuplicate rows are merged by (reference, start, end) with their read counts summed, then:\n- Junctions missing from the local table are listed\n- Junctions only in the local table are listed\n- Shared junctions with different read counts are listed\n- An area-proportional two-circle diagram of the overlap can be drawn"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconcile a candidate table against a ground-truth table
    Compare(compare::CompareArgs),

    /// Normalize and aggregate junction tables
    Aggregate(aggregate::AggregateArgs),

    /// Solve a two-circle overlap layout from region counts
    Layout(layout::LayoutArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Options shared by commands that can draw the overlap diagram
#[derive(Args, Debug, Clone)]
pub struct DiagramArgs {
    /// Write the overlap diagram to this path (.svg for vector, otherwise PNG)
    #[arg(long)]
    pub diagram: Option<PathBuf>,

    /// Diagram width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Diagram height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}

impl DiagramArgs {
    #[must_use]
    pub fn style(&self, label_a: &str, label_b: &str) -> DiagramStyle {
        DiagramStyle {
            width: self.width,
            height: self.height,
            label_a: label_a.to_string(),
            label_b: label_b.to_string(),
            ..DiagramStyle::default()
        }
    }
}

/// Load a column schema file, or the default aliases when none is given
pub(crate) fn load_schema(path: Option<&Path>) -> anyhow::Result<ColumnSchema> {
    match path {
        Some(p) => Ok(ColumnSchema::load_from_file(p).context("config")?),
        None => Ok(ColumnSchema::default()),
    }
}

/// Read and normalize every table in `paths`, concatenating their rows
pub(crate) fn load_all(
    paths: &[impl AsRef<Path>],
    schema: &ColumnSchema,
) -> anyhow::Result<Vec<JunctionRecord>> {
    let mut records = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let rows = parsing::load_records(path, schema)?;
        tracing::debug!(path = %path.display(), rows = rows.len(), "Loaded table");
        records.extend(rows);
    }
    Ok(records)
}

/// Lay out junction rows as an aligned text table, header first
pub(crate) fn record_table_lines(rows: &[&JunctionRecord]) -> Vec<String> {
    let header = ["reference", "start", "end", "read_count"];
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|r| {
            [
                r.reference.clone(),
                r.start.to_string(),
                r.end.to_string(),
                r.read_count.to_string(),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 1);
    lines.push(format!(
        "{:<w0$}  {:>w1$}  {:>w2$}  {:>w3$}",
        header[0],
        header[1],
        header[2],
        header[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    ));
    for [reference, start, end, count] in &cells {
        lines.push(format!(
            "{:<w0$}  {:>w1$}  {:>w2$}  {:>w3$}",
            reference,
            start,
            end,
            count,
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_table_is_aligned() {
        let a = JunctionRecord::new("PB2", 44, 2201, 7);
        let b = JunctionRecord::new("HA", 1000, 15, 12345);
        let lines = record_table_lines(&[&a, &b]);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("reference"));
        let width = lines[0].len();
        assert!(lines.iter().all(|l| l.len() == width));
        assert!(lines[2].ends_with("12345"));
    }

    #[test]
    fn test_record_table_empty_has_header() {
        let lines = record_table_lines(&[]);
        assert_eq!(lines, vec!["reference  start  end  read_count".to_string()]);
    }

    #[test]
    fn test_default_schema_when_no_path() {
        let schema = load_schema(None).unwrap();
        assert_eq!(schema, ColumnSchema::default());
    }

    #[test]
    fn test_diagram_args_style() {
        let args = DiagramArgs {
            diagram: None,
            width: 640,
            height: 480,
        };
        let style = args.style("Alnaji2021", "own");
        assert_eq!((style.width, style.height), (640, 480));
        assert_eq!(style.label_a, "Alnaji2021");
        assert_eq!(style.opacity, DiagramStyle::default().opacity);
    }
}
