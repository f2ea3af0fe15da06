//! Runtime configuration for the binary.
//!
//! Values come from positional arguments first, then environment variables
//! (which `main` may have loaded from a `.env` file):
//! - `SUBNET_ALGEBRA_LEFT` - path of the left block list
//! - `SUBNET_ALGEBRA_RIGHT` - path of the right block list
//! - `SUBNET_ALGEBRA_FORMAT` - `csv` (default) or `json`

use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const ENV_LEFT: &str = "SUBNET_ALGEBRA_LEFT";
pub const ENV_RIGHT: &str = "SUBNET_ALGEBRA_RIGHT";
pub const ENV_FORMAT: &str = "SUBNET_ALGEBRA_FORMAT";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("No {0} given: pass it as an argument or set {1}")]
    MissingPath(&'static str, &'static str),

    #[error("Unknown output format {0:?}, expected csv or json")]
    UnknownFormat(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub left: PathBuf,
    pub right: PathBuf,
    pub format: OutputFormat,
}

impl Config {
    /// Build from the process arguments and environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_sources(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Build from explicit arguments (`left right [format]`) and a variable
    /// lookup; arguments win over variables.
    pub fn from_sources<I, F>(args: I, var: F) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let left = args
            .next()
            .or_else(|| var(ENV_LEFT))
            .ok_or(ConfigError::MissingPath("left list", ENV_LEFT))?;
        let right = args
            .next()
            .or_else(|| var(ENV_RIGHT))
            .ok_or(ConfigError::MissingPath("right list", ENV_RIGHT))?;
        let format = match args.next().or_else(|| var(ENV_FORMAT)) {
            Some(format) => format.parse()?,
            None => OutputFormat::default(),
        };

        let config = Config {
            left: PathBuf::from(left),
            right: PathBuf::from(right),
            format,
        };
        log::debug!("Config: {config:?}");
        Ok(config)
    }
}
