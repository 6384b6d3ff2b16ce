pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use crate::core::{ConversionRequest, RateTable};
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Commands dispatched by [`run_command`]. Currency codes left as `None`
/// fall back to the configured defaults.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Convert {
        amount: f64,
        from: Option<String>,
        to: Option<String>,
    },
    Rates {
        filter: Vec<String>,
    },
}

/// Global options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config_path: Option<String>,
    pub rates_path: Option<String>,
}

impl RunOptions {
    fn load_config(&self) -> Result<AppConfig> {
        match &self.config_path {
            Some(path) => AppConfig::load_from_path(path),
            None => AppConfig::load(),
        }
    }

    fn resolve_rates_path(&self, config: &AppConfig) -> PathBuf {
        match &self.rates_path {
            Some(path) => PathBuf::from(path),
            None => config.rates_path(),
        }
    }
}

pub fn run_command(command: AppCommand, options: &RunOptions) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_command_to(&mut out, command, options)
}

pub fn run_command_to<W: Write>(
    out: &mut W,
    command: AppCommand,
    options: &RunOptions,
) -> Result<()> {
    info!("Currency converter starting...");

    let config = options.load_config()?;
    debug!("Loaded config: {config:#?}");

    let rates = RateTable::load_from_path(options.resolve_rates_path(&config))?;

    match command {
        AppCommand::Convert { amount, from, to } => {
            let request = ConversionRequest {
                amount,
                from: from.unwrap_or(config.from),
                to: to.unwrap_or(config.to),
            };
            cli::convert::run(out, &rates, &request)
        }
        AppCommand::Rates { filter } => cli::rates::run(out, &rates, &filter),
    }
}
