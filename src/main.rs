use analytics::{AnalyticsError, PriceComparison};
use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::Config;
use rust_decimal::Decimal;
use std::path::PathBuf;

mod currency;
mod pipeline;
mod report;
mod telemetry;

/// The main entry point for the quotescope report.
fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let config = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let _log_guard = telemetry::init_tracing(&config.logging);
    tracing::debug!(?config, "Configuration loaded");

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(&config, cli.seed, args),
        Commands::Compare(args) => handle_compare(&config, cli.seed, args),
        Commands::Returns(args) => handle_returns(&config, cli.seed, args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Simulated 005930.KS price series with log-return statistics.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (default: ./config.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fixed RNG seed, overriding `series.seed` from the configuration.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print prices, returns, statistics, box plot and insights.
    Report(OutputArgs),
    /// Compare the closes at two positions of the series.
    Compare(CompareArgs),
    /// Print every log return with its calculation.
    Returns(OutputArgs),
}

#[derive(Parser)]
struct OutputArgs {
    /// Emit JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct CompareArgs {
    /// Index of the first close.
    #[arg(long, default_value_t = 200)]
    from: usize,

    /// Index of the second close.
    #[arg(long, default_value_t = 600)]
    to: usize,

    /// Emit JSON instead of a table.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn display_rate(config: &Config) -> Option<Decimal> {
    config.display.show_mxn.then_some(config.display.krw_to_mxn)
}

fn handle_report(config: &Config, seed: Option<u64>, args: OutputArgs) -> anyhow::Result<()> {
    let series = pipeline::generate_series(config, seed).context("Failed to generate series")?;
    let analysis = pipeline::analyze(series, &config.analysis);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let rate = display_rate(config);
    let rows = config.display.preview_rows;

    println!("Closing prices (first and last {})", rows);
    println!("{}", report::price_table(analysis.series.points(), rows, rate));
    println!("\nLog returns (first and last {})", rows);
    println!("{}", report::return_table(analysis.returns.as_ref(), Some(rows)));
    println!("\n{}", report::summary_table(analysis.summary.as_ref(), analysis.volatility));
    println!("\n{}", report::box_plot_table(analysis.box_plot.as_ref()));
    println!("\n{}", report::price_summary_table(analysis.price_summary.as_ref(), rate));
    println!("\n{}", report::insight_table(&analysis, rate));
    Ok(())
}

fn handle_compare(config: &Config, seed: Option<u64>, args: CompareArgs) -> anyhow::Result<()> {
    let series = pipeline::generate_series(config, seed).context("Failed to generate series")?;

    let result = analytics::compare_prices(&series, args.from, args.to);
    if let Err(e) = &result {
        tracing::warn!(error = %e, from = args.from, to = args.to, "Comparison unavailable");
    }

    let output = render_comparison(result, series.len() - 1, args.json, display_rate(config))?;
    println!("{}", output);
    Ok(())
}

/// An unavailable comparison stays machine-readable under `--json`.
fn render_comparison(
    result: Result<PriceComparison, AnalyticsError>,
    last_index: usize,
    json: bool,
    rate: Option<Decimal>,
) -> anyhow::Result<String> {
    let output = match (result, json) {
        (Ok(comparison), true) => serde_json::to_string_pretty(&comparison)?,
        (Ok(comparison), false) => report::comparison_table(&comparison, rate).to_string(),
        (Err(e), true) => serde_json::to_string_pretty(&serde_json::json!({
            "error": e.to_string(),
            "valid_indices": [0, last_index],
        }))?,
        (Err(_), false) => format!(
            "Comparison unavailable: choose indices between 0 and {}",
            last_index
        ),
    };
    Ok(output)
}

fn handle_returns(config: &Config, seed: Option<u64>, args: OutputArgs) -> anyhow::Result<()> {
    let series = pipeline::generate_series(config, seed).context("Failed to generate series")?;
    let returns = analytics::compute_log_returns(&series)
        .inspect_err(|e| tracing::warn!(error = %e, "Log returns unavailable"))
        .ok();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&returns)?);
    } else {
        println!("{}", report::return_table(returns.as_ref(), None));
    }
    Ok(())
}
