use std::process::ExitCode;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tabstats::cli::{CliArgs, DEFINITIONS};
use tabstats::config::{Config, DEFAULT_LOG_LEVEL};
use tabstats::error::AppError;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.header {
        println!("{DEFINITIONS}");
        return ExitCode::SUCCESS;
    }

    let config = Config::resolve(&args);
    let level = config.as_ref().map(|c| c.log_level.as_str()).unwrap_or(DEFAULT_LOG_LEVEL);

    // Logs go to stderr so stdout only carries the rendered tables.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = config.map_err(AppError::from).and_then(|config| {
        config.init_thread_pool()?;
        let path = args.input().ok_or(AppError::NoInput)?;
        tabstats::run(path, &config)
    });

    match result {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
