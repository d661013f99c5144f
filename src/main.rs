use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use junction_recon::cli;

/// Status for fatal errors, distinct from the "tables differ" status
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("junction_recon=debug,info")
    } else {
        EnvFilter::new("junction_recon=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match run(cli) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run(cli: cli::Cli) -> anyhow::Result<u8> {
    match cli.command {
        cli::Commands::Compare(args) => cli::compare::run(args, cli.format),
        cli::Commands::Aggregate(args) => {
            cli::aggregate::run(args, cli.format)?;
            Ok(0)
        }
        cli::Commands::Layout(args) => {
            cli::layout::run(args, cli.format)?;
            Ok(0)
        }
    }
}
