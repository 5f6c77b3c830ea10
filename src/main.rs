use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use gclog_core::config::Config;

#[derive(Parser)]
#[command(
    name = "gclog",
    version,
    about = "Extract heap usage before/after each GC pause into JSON lines"
)]
struct Cli {
    /// GC log to read (must end in .log). Falls back to `[paths] input`.
    input: Option<PathBuf>,

    /// File to write (must end in .json, overwritten). Falls back to `[paths] output`.
    output: Option<PathBuf>,

    /// Read configuration from this file instead of ~/.config/gclog/config.toml.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG still wins).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    init_tracing(&config, cli.verbose);

    let input = config.resolve_input(cli.input)?;
    let output = config.resolve_output(cli.output)?;
    tracing::debug!(input = %input.display(), output = %output.display(), "resolved paths");

    let summary = gclog_core::convert(&input, &output)
        .with_context(|| format!("failed to convert {}", input.display()))?;

    println!(
        "wrote {} records to {}",
        summary.stats.events,
        summary.output.display()
    );
    Ok(())
}

/// Logs go to stderr so stdout only carries the final report.
fn init_tracing(config: &Config, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.logging.level.as_str() };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .init();
}
