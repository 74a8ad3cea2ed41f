use std::env;
use std::str::FromStr;

use crate::error::AppError;

pub const LOG_FORMAT_VAR: &str = "SCOREKEEPER_LOG_FORMAT";

/// Output format for the binary's log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "{LOG_FORMAT_VAR} must be 'pretty' or 'json', got '{other}'"
            ))),
        }
    }
}

impl LogFormat {
    pub fn from_env() -> Result<Self, AppError> {
        match env::var(LOG_FORMAT_VAR) {
            Ok(v) => v.parse(),
            Err(_) => Ok(Self::default()),
        }
    }
}
