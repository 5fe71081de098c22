//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --policy ./policy.toml --format text                               │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     CARTCALC_POLICY=./policy.toml                                      │
//! │     CARTCALC_FORMAT=json                                               │
//! │     CARTCALC_LOG=debug                                                 │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     built-in pricing policy, JSON output, warn-level logs              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Policy File Format
//! ```toml
//! # policy.toml - every key optional
//! bulk_min_quantity = 3
//! bulk_discount_bps = 1500
//! loyalty_min_tenure_years = 2
//! loyalty_discount_bps = 500
//! discount_cap_bps = 3000
//! free_shipping_threshold_cents = 10000
//! base_shipping_cents = 700
//! weight_rate_cents_per_kg = 200
//! expedited_surcharge_bps = 1500
//! express_flat_cents = 2500
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use cartcalc_core::{CoreError, PricingPolicy};
use tracing::{debug, info};

/// Default log filter when neither `CARTCALC_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

// =============================================================================
// Output Format
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed `PricingResult` JSON.
    #[default]
    Json,
    /// Human-readable itemized breakdown.
    Text,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(ConfigError::InvalidValue {
                key: "format".to_string(),
                reason: format!("'{}' is not one of: json, text", other),
            }),
        }
    }
}

// =============================================================================
// Input Source
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

// =============================================================================
// CLI Config
// =============================================================================

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Price(CliConfig),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub input: InputSource,
    pub policy_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub log_filter: String,
}

impl CliConfig {
    /// Parses flags, falling back to environment values from `env`.
    ///
    /// `args` excludes the program name. `env` is a lookup so tests can
    /// supply variables without touching the process environment.
    pub fn parse<I, F>(args: I, env: F) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut input = None;
        let mut policy_path = env("CARTCALC_POLICY").map(PathBuf::from);
        let mut format = match env("CARTCALC_FORMAT") {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };
        let log_filter = env("CARTCALC_LOG")
            .or_else(|| env("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--policy" | "-p" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--policy"))?;
                    policy_path = Some(PathBuf::from(value));
                }
                "--format" | "-f" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--format"))?;
                    format = value.parse()?;
                }
                "--help" | "-h" => return Ok(Command::Help),
                "-" => input = Some(InputSource::Stdin),
                flag if flag.starts_with('-') => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                path => {
                    if input.is_some() {
                        return Err(ConfigError::UnexpectedArgument(path.to_string()));
                    }
                    input = Some(InputSource::File(PathBuf::from(path)));
                }
            }
        }

        Ok(Command::Price(CliConfig {
            input: input.unwrap_or(InputSource::Stdin),
            policy_path,
            format,
            log_filter,
        }))
    }

    /// Loads the configured policy, or the built-in one if none is set.
    pub fn load_policy(&self) -> Result<PricingPolicy, ConfigError> {
        match &self.policy_path {
            Some(path) => load_policy_file(path),
            None => {
                debug!("no policy file configured, using built-in policy");
                Ok(PricingPolicy::default())
            }
        }
    }
}

pub const USAGE: &str = "\
CartCalc - itemized cart pricing

Usage: cartcalc [OPTIONS] [CART_JSON]

Reads the cart request from CART_JSON, or stdin when omitted or '-'.

Options:
  -p, --policy <PATH>    Pricing policy TOML (env: CARTCALC_POLICY)
  -f, --format <FMT>     Output format: json | text (env: CARTCALC_FORMAT)
  -h, --help             Show this help message

Logging goes to stderr; filter with CARTCALC_LOG or RUST_LOG.";

// =============================================================================
// Policy Loading
// =============================================================================

/// Reads and validates a TOML policy file.
pub fn load_policy_file(path: &Path) -> Result<PricingPolicy, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let policy = parse_policy(&content)?;
    info!(path = %path.display(), "loaded pricing policy");
    Ok(policy)
}

/// Parses and validates policy TOML.
pub fn parse_policy(content: &str) -> Result<PricingPolicy, ConfigError> {
    let policy: PricingPolicy = toml::from_str(content)?;
    policy.validate()?;
    Ok(policy)
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing value for {0}")]
    MissingValue(&'static str),

    #[error("Unknown option: {0}")]
    UnknownFlag(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid policy file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Policy(#[from] CoreError),
}

// =============================================================================
// Unit Tests
// =============================================================================
