// shelfprice CLI - reprice a retailer inventory against a supplier price feed

mod exit_codes;
mod report;
mod reprice;

use std::process::ExitCode;

use clap::Parser;

use exit_codes::{EXIT_SUCCESS, EXIT_USAGE};
use reprice::RepriceCommands;

#[derive(Parser)]
#[command(name = "shelfprice")]
#[command(about = "Reconcile inventory against a wholesale feed and compute new retail prices")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    /// Log pipeline progress (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<RepriceCommands>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        None => {
            // No subcommand = show usage
            eprintln!("Usage: shelfprice <run|validate> <config> [options]");
            eprintln!("       shelfprice --help for more information");
            Err(CliError { code: EXIT_USAGE, message: String::new(), hint: None })
        }
        Some(cmd) => reprice::cmd_reprice(cmd),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
