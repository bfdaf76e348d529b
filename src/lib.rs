pub mod cli;
pub mod config;
pub mod constants;
pub mod pad;
pub mod payload;
pub mod report;
pub mod scan;

use clap::Parser;
use cli::Cli;
use config::{ConfigError, Configuration};
use pad::{PadError, PadService};
use report::Report;
use std::io;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Pad(PadError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "{err}"),
            AppError::Pad(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Pad(err) => Some(err),
        }
    }
}

pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = Configuration::try_from(cli).map_err(AppError::Config)?;
    let mut report = Report::new(io::stdout().lock());
    PadService
        .execute(&config, &mut report)
        .map(|outcome| {
            tracing::info!(padded = outcome.records.len(), "done");
        })
        .map_err(AppError::Pad)
}
