//! # CartCalc CLI
//!
//! Prices a cart request and prints the itemized breakdown.
//!
//! ## Usage
//! ```bash
//! # Price a cart file with the built-in policy
//! cartcalc cart.json
//!
//! # Custom policy, human-readable output
//! cartcalc --policy ./policy.toml --format text cart.json
//!
//! # From stdin, with debug logs on stderr
//! CARTCALC_LOG=debug cartcalc - < cart.json
//! ```

use std::env;
use std::process::ExitCode;

use cartcalc_cli::config::{CliConfig, Command, USAGE};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let command = match CliConfig::parse(env::args().skip(1), |key| env::var(key).ok()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    let config = match command {
        Command::Help => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Command::Price(config) => config,
    };

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| EnvFilter::new(cartcalc_cli::config::DEFAULT_LOG_FILTER)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    match cartcalc_cli::run(&config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
