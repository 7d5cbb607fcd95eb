//! Diffcov CLI entry point.
//!
//! Parses arguments, sets up logging, runs the measurement, and maps
//! errors to exit codes.

use diffcov::cli::Cli;
use diffcov::config::Config;
use diffcov::error::Result;
use diffcov::exit_codes;
use diffcov::run::execute;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::resolve(cli)?;
    tracing::debug!(?config, "resolved config");

    let mut stdout = std::io::stdout().lock();
    execute(cli, &config, &mut stdout)?;
    Ok(())
}

/// Log to stderr so stdout carries only the report and summary.
/// `RUST_LOG` wins over `-v`.
fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
