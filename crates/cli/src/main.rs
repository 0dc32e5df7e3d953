mod cli;
mod error;
mod load;
mod pipeline;
mod view;

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::Cli;
use crate::cli::Commands;

const LOG_TARGETS: [&str; 3] = ["airprobe", "airprobe_readings", "airprobe_vis"];

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.log_level);

    let result = match cli.command {
        Commands::View(args) => view::view(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: Level) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives = LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={}", level.as_str().to_lowercase()))
            .collect::<Vec<_>>()
            .join(",");
        EnvFilter::new(directives)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
