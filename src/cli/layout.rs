use clap::Args;

use crate::cli::{DiagramArgs, OutputFormat};
use crate::core::types::OverlapCounts;
use crate::geometry::{CircleLayout, DiagramPlacement};
use crate::render::render_diagram;

#[derive(Args)]
pub struct LayoutArgs {
    /// Elements only in set A
    #[arg(long)]
    pub only_a: u64,

    /// Elements only in set B
    #[arg(long)]
    pub only_b: u64,

    /// Elements in both sets
    #[arg(long)]
    pub both: u64,

    /// Caption for circle A
    #[arg(long, default_value = "A")]
    pub label_a: String,

    /// Caption for circle B
    #[arg(long, default_value = "B")]
    pub label_b: String,

    #[command(flatten)]
    pub diagram: DiagramArgs,
}

pub fn run(args: LayoutArgs, format: OutputFormat) -> anyhow::Result<()> {
    let counts = OverlapCounts::new(args.only_a, args.only_b, args.both);
    let layout = CircleLayout::solve(counts);

    if let Some(path) = &args.diagram.diagram {
        let style = args.diagram.style(&args.label_a, &args.label_b);
        render_diagram(&layout, &style, path)?;
    }

    match format {
        OutputFormat::Text => print_text_layout(&layout),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "layout": layout,
                "placement": DiagramPlacement::for_layout(&layout),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("only_a\tonly_b\tboth\tradius_a\tradius_b\tdistance\toverlap_area");
            println!(
                "{}\t{}\t{}\t{:.6}\t{:.6}\t{:.6}\t{:.6}",
                counts.only_a,
                counts.only_b,
                counts.both,
                layout.radius_a,
                layout.radius_b,
                layout.distance,
                layout.overlap_area()
            );
        }
    }

    Ok(())
}

fn print_text_layout(layout: &CircleLayout) {
    let counts = layout.counts;
    println!("Circle Layout");
    println!("{}", "=".repeat(60));
    println!(
        "\nCounts: only A = {}, only B = {}, both = {}",
        counts.only_a, counts.only_b, counts.both
    );
    println!("\nCircle A:");
    println!("  Area: {}", counts.total_a());
    println!("  Radius: {:.4}", layout.radius_a);
    println!(
        "  Center: ({:.4}, {:.4})",
        layout.center_a.0, layout.center_a.1
    );
    println!("\nCircle B:");
    println!("  Area: {}", counts.total_b());
    println!("  Radius: {:.4}", layout.radius_b);
    println!(
        "  Center: ({:.4}, {:.4})",
        layout.center_b.0, layout.center_b.1
    );
    println!("\nDistance: {:.4}", layout.distance);
    println!("Overlap area: {:.4}", layout.overlap_area());
}
