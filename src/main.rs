use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use curconv::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Path to the exchange rate file, overrides the configured one
    #[arg(short, long, global = true)]
    rates_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for curconv::AppCommand {
    fn from(cmd: Commands) -> curconv::AppCommand {
        match cmd {
            Commands::Convert { amount, from, to } => {
                curconv::AppCommand::Convert { amount, from, to }
            }
            Commands::Rates { filter } => curconv::AppCommand::Rates { filter },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert currency from one unit to another
    #[command(visible_alias = "c")]
    Convert {
        /// Amount to convert
        #[arg(allow_negative_numbers = true, value_parser = parse_amount)]
        amount: f64,

        /// From currency [default: USD]
        #[arg(short, long)]
        from: Option<String>,

        /// To currency [default: VND]
        #[arg(short, long)]
        to: Option<String>,
    },
    /// List the loaded exchange rates
    Rates {
        /// Only show these currency codes
        #[arg(long, value_delimiter = ',')]
        filter: Vec<String>,
    },
    /// Create default configuration
    Setup,
}

fn parse_amount(value: &str) -> Result<f64, String> {
    curconv::cli::convert::parse_amount(value).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let options = curconv::RunOptions {
        config_path: cli.config_path,
        rates_path: cli.rates_path,
    };

    let result = match cli.command {
        Some(Commands::Setup) => curconv::cli::setup::setup(),
        Some(cmd) => curconv::run_command(cmd.into(), &options),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
