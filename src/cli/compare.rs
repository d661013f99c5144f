use std::path::PathBuf;

use clap::Args;
use tracing::{debug, warn};

use crate::cli::{load_all, load_schema, record_table_lines, DiagramArgs, OutputFormat};
use crate::core::table::CanonicalTable;
use crate::geometry::CircleLayout;
use crate::reconcile::{aggregate, ReconciliationReport};
use crate::render::render_diagram;

#[derive(Args)]
pub struct CompareArgs {
    /// Ground-truth junction table (CSV or TSV, optionally gzipped)
    #[arg(required = true)]
    pub valid: PathBuf,

    /// Candidate junction table(s); several are concatenated before aggregation
    #[arg(required = true)]
    pub own: Vec<PathBuf>,

    /// Column schema (JSON) for the ground-truth table
    #[arg(long)]
    pub valid_schema: Option<PathBuf>,

    /// Column schema (JSON) for the candidate table(s)
    #[arg(long)]
    pub own_schema: Option<PathBuf>,

    /// Caption for the ground-truth circle
    #[arg(long, default_value = "valid")]
    pub label_valid: String,

    /// Caption for the candidate circle
    #[arg(long, default_value = "own")]
    pub label_own: String,

    #[command(flatten)]
    pub diagram: DiagramArgs,
}

/// Run the full pipeline and return the process exit status (0 clean, 1 not)
pub fn run(args: CompareArgs, format: OutputFormat) -> anyhow::Result<u8> {
    let valid_schema = load_schema(args.valid_schema.as_deref())?;
    let own_schema = load_schema(args.own_schema.as_deref())?;

    let valid_rows = load_all(std::slice::from_ref(&args.valid), &valid_schema)?;
    let own_rows = load_all(&args.own, &own_schema)?;

    let valid = aggregate(&valid_rows)?;
    let own = aggregate(&own_rows)?;
    debug!(
        junctions = valid.len(),
        signature = %valid.signature(),
        "Aggregated ground-truth table"
    );
    debug!(
        junctions = own.len(),
        signature = %own.signature(),
        "Aggregated candidate table"
    );

    if valid.is_empty() {
        warn!(path = %args.valid.display(), "Ground-truth table has no junctions");
    }
    if own.is_empty() {
        warn!("Candidate tables have no junctions");
    }

    let report = ReconciliationReport::reconcile(&valid, &own);
    let layout = CircleLayout::solve(report.counts);
    debug!(
        only_a = report.counts.only_a,
        only_b = report.counts.only_b,
        both = report.counts.both,
        distance = layout.distance,
        "Solved overlap layout"
    );

    // Draw before printing so a render failure leaves no partial report
    if let Some(path) = &args.diagram.diagram {
        let style = args.diagram.style(&args.label_valid, &args.label_own);
        render_diagram(&layout, &style, path)?;
    }

    match format {
        OutputFormat::Text => print_text_report(&report, &valid, &own),
        OutputFormat::Json => print_json_report(&args, &report, &valid, &own, &layout)?,
        OutputFormat::Tsv => print_tsv_report(&report, &valid, &own),
    }

    Ok(report.exit_status())
}

fn print_text_report(report: &ReconciliationReport, valid: &CanonicalTable, own: &CanonicalTable) {
    if report.is_clean() {
        println!("OK");
        return;
    }

    let missing = report.missing_rows(valid);
    if !missing.is_empty() {
        println!("Missing from candidate ({}):", missing.len());
        for line in record_table_lines(&missing) {
            println!("  {line}");
        }
        println!();
    }

    let extra = report.extra_rows(own);
    if !extra.is_empty() {
        println!("Extra in candidate ({}):", extra.len());
        for line in record_table_lines(&extra) {
            println!("  {line}");
        }
        println!();
    }

    if !report.mismatched.is_empty() {
        println!("Read count mismatches ({}):", report.mismatched.len());
        for line in mismatch_table_lines(report) {
            println!("  {line}");
        }
        println!();
    }

    println!(
        "Summary: {} shared, {} missing, {} extra, {} mismatched",
        report.counts.both,
        report.counts.only_a,
        report.counts.only_b,
        report.mismatched.len()
    );
}

fn mismatch_table_lines(report: &ReconciliationReport) -> Vec<String> {
    let header = ["reference", "start", "end", "count_valid", "count_own"];
    let cells: Vec<[String; 5]> = report
        .mismatched
        .iter()
        .map(|m| {
            [
                m.key.reference.clone(),
                m.key.start.to_string(),
                m.key.end.to_string(),
                m.count_valid.to_string(),
                m.count_own.to_string(),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    std::iter::once(header.map(str::to_string))
        .chain(cells)
        .map(|row| {
            row.iter()
                .zip(widths)
                .enumerate()
                .map(|(i, (cell, w))| {
                    if i == 0 {
                        format!("{cell:<w$}")
                    } else {
                        format!("{cell:>w$}")
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

fn print_json_report(
    args: &CompareArgs,
    report: &ReconciliationReport,
    valid: &CanonicalTable,
    own: &CanonicalTable,
    layout: &CircleLayout,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "clean": report.is_clean(),
        "valid": {
            "paths": [args.valid.display().to_string()],
            "junctions": valid.len(),
            "total_reads": valid.total_reads(),
            "signature": valid.signature(),
        },
        "own": {
            "paths": args.own.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
            "junctions": own.len(),
            "total_reads": own.total_reads(),
            "signature": own.signature(),
        },
        "counts": report.counts,
        "missing": report.missing_rows(valid),
        "extra": report.extra_rows(own),
        "mismatched": report.mismatched,
        "layout": layout,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_report(report: &ReconciliationReport, valid: &CanonicalTable, own: &CanonicalTable) {
    println!("category\treference\tstart\tend\tcount_valid\tcount_own");
    for r in report.missing_rows(valid) {
        println!(
            "missing\t{}\t{}\t{}\t{}\t",
            r.reference, r.start, r.end, r.read_count
        );
    }
    for r in report.extra_rows(own) {
        println!(
            "extra\t{}\t{}\t{}\t\t{}",
            r.reference, r.start, r.end, r.read_count
        );
    }
    for m in &report.mismatched {
        println!(
            "mismatched\t{}\t{}\t{}\t{}\t{}",
            m.key.reference, m.key.start, m.key.end, m.count_valid, m.count_own
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::JunctionRecord;

    #[test]
    fn test_mismatch_table_lines() {
        let valid = aggregate(&[JunctionRecord::new("HA", 40, 1600, 12)]).unwrap();
        let own = aggregate(&[JunctionRecord::new("HA", 40, 1600, 11)]).unwrap();
        let report = ReconciliationReport::reconcile(&valid, &own);

        let lines = mismatch_table_lines(&report);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "reference  start   end  count_valid  count_own");
        assert_eq!(lines[1], "HA            40  1600           12         11");
    }
}
