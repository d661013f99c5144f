use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_all, load_schema, record_table_lines, OutputFormat};
use crate::core::record::JunctionRecord;
use crate::core::table::CanonicalTable;
use crate::reconcile::aggregate;

#[derive(Args)]
pub struct AggregateArgs {
    /// Junction table(s) to merge (CSV or TSV, optionally gzipped)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Column schema (JSON) for the input tables
    #[arg(long)]
    pub schema: Option<PathBuf>,
}

pub fn run(args: AggregateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let schema = load_schema(args.schema.as_deref())?;
    let rows = load_all(&args.inputs, &schema)?;
    let table = aggregate(&rows)?;

    match format {
        OutputFormat::Text => print_text_table(&table, rows.len()),
        OutputFormat::Json => print_json_table(&args, &table, rows.len())?,
        OutputFormat::Tsv => print_tsv_table(&table),
    }

    Ok(())
}

fn print_text_table(table: &CanonicalTable, input_rows: usize) {
    let rows: Vec<&JunctionRecord> = table.iter().collect();
    for line in record_table_lines(&rows) {
        println!("{line}");
    }
    println!();
    println!(
        "{} junctions from {} rows, {} reads",
        table.len(),
        input_rows,
        table.total_reads()
    );
}

fn print_json_table(
    args: &AggregateArgs,
    table: &CanonicalTable,
    input_rows: usize,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "paths": args.inputs.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        "input_rows": input_rows,
        "junctions": table.len(),
        "total_reads": table.total_reads(),
        "signature": table.signature(),
        "records": table,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_table(table: &CanonicalTable) {
    println!("reference\tstart\tend\tread_count");
    for r in table {
        println!("{}\t{}\t{}\t{}", r.reference, r.start, r.end, r.read_count);
    }
}
