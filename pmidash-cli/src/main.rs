//! pmidash CLI: the dashboard's data pipeline without the terminal UI.
//!
//! Commands:
//! - `latest`: run the source fallback chain and print the reading
//! - `show`: print the merged history as a Markdown report
//! - `export`: write the merged history as CSV
//! - `sources`: list sources in priority order

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pmidash_core::{DashboardConfig, FallbackResolver};
use pmidash_report::{
    export_reading_json, generate_report, load_history, save_history_csv, LoadOptions,
};

#[derive(Parser)]
#[command(
    name = "pmidash",
    about = "pmidash CLI - India Manufacturing PMI with multi-source fallback"
)]
struct Cli {
    /// Path to a TOML config file. Defaults to <config_dir>/pmidash/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Offline mode: no network access, seeded history only.
    #[arg(long, global = true, default_value_t = false)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the latest reading from the first source that has one.
    Latest {
        /// Print the reading as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the merged history with summary as Markdown.
    Show,
    /// Write the merged history as CSV.
    Export {
        /// Output path. Defaults to the configured export file name.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List sources in the order they are tried.
    Sources,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = DashboardConfig::resolve(cli.config.as_deref()).context("loading config")?;
    debug!(?config, "configuration resolved");
    let resolver = FallbackResolver::with_default_sources(&config.fetch);
    let opts = LoadOptions {
        offline: cli.offline,
    };

    match cli.command {
        Commands::Latest { json } => run_latest(&resolver, &opts, json),
        Commands::Show => {
            let loaded = load_history(&resolver, &opts);
            print!("{}", generate_report(&loaded.history));
            Ok(())
        }
        Commands::Export { output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(&config.export.file_name));
            let loaded = load_history(&resolver, &opts);
            save_history_csv(&loaded.history, &path)?;
            println!(
                "Wrote {} rows to {}",
                loaded.history.len(),
                path.display()
            );
            Ok(())
        }
        Commands::Sources => {
            for (i, source) in resolver.sources().iter().enumerate() {
                println!("{}. {source}", i + 1);
            }
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout stays clean for CSV/JSON/Markdown.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_latest(resolver: &FallbackResolver, opts: &LoadOptions, json: bool) -> Result<()> {
    if opts.offline {
        println!("no data");
        return Ok(());
    }

    let resolution = resolver.resolve_with_diagnostics();
    match resolution.reading {
        Some((source, reading)) if json => println!("{}", export_reading_json(source, &reading)?),
        Some((source, reading)) => println!(
            "{} {:.1} ({})",
            reading.date.format("%Y-%m-%d"),
            reading.value,
            source
        ),
        None => println!("no data"),
    }
    Ok(())
}
