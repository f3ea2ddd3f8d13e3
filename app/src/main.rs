//! FILENAME: app/src/main.rs
// PURPOSE: CLI entry point with unified logging.
// FORMAT: seq|level|category|message

use std::process::ExitCode;

use clap::Parser;
use sales_chart::cli::{run, Cli};
use sales_chart::{init_logging, AppError};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_logging(config.log_level_filter()?, config.log_file.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&cli, &config, &mut out)
}
