//! Dispatch for the calcz binary.
//!
//! - `run()`: parses arguments, sets up logging and context, calls the API
//! - `init_context()`: loads configuration and applies command-line overrides
//! - `init_logging()`: installs the stderr `tracing` subscriber

use super::print::{print_calculations, print_messages};
use super::setup::Cli;
use calcz::api::CalczApi;
use calcz::config::CalczConfig;
use calcz::error::Result;
use calcz::model::{OutputFormat, OverflowPolicy};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: CalczApi,
    output: OutputFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Usage errors win over config errors
    let (overflow, output) = (cli.overflow, cli.output);
    let op = cli.operation().unwrap_or_else(|e| e.exit());
    let ctx = init_context(overflow, output)?;

    let result = ctx.api.execute(op)?;
    print_calculations(&result.calculations, ctx.output)?;
    print_messages(&result.messages);
    Ok(())
}

fn init_context(
    overflow: Option<OverflowPolicy>,
    output: Option<OutputFormat>,
) -> Result<AppContext> {
    let config_dir = CalczConfig::default_dir()?;
    debug!(dir = %config_dir.display(), "loading config");

    let config = CalczConfig::load(&config_dir)?.merge_overrides(overflow, output);
    let output = config.output;

    Ok(AppContext {
        api: CalczApi::new(config),
        output,
    })
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("calcz=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
