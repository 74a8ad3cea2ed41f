use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::store::StoreError;
use crate::errors::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("No game in progress: {detail}")]
    NoGame { detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(DomainError::RuleViolation { .. }) => ErrorCode::ZeroRuleViolation,
            AppError::Domain(DomainError::ScoreOverflow { .. }) => ErrorCode::ScoreOverflow,
            AppError::Domain(DomainError::Precondition(_)) => ErrorCode::NoActiveGame,
            AppError::Domain(DomainError::InvariantViolated(_)) => ErrorCode::CorruptState,
            AppError::Store(StoreError::Io { .. }) => ErrorCode::StorageIo,
            AppError::Store(StoreError::Serialization(_)) => ErrorCode::Serialization,
            AppError::Store(StoreError::UnsupportedVersion { .. }) => {
                ErrorCode::UnsupportedVersion
            }
            AppError::Store(StoreError::Corrupt(_)) => ErrorCode::CorruptState,
            AppError::Store(StoreError::Locked(_)) => ErrorCode::SlotLocked,
            AppError::NoGame { .. } => ErrorCode::NoActiveGame,
            AppError::Conflict { code, .. } => *code,
            AppError::Validation { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Process exit status for the CLI. Rule violations are user errors the
    /// caller can retry; everything else is operational.
    pub fn exit_code(&self) -> i32 {
        match self.code() {
            ErrorCode::ZeroRuleViolation => 3,
            ErrorCode::NoActiveGame | ErrorCode::GameExists | ErrorCode::InvalidSetup => 4,
            ErrorCode::ConfigError => 78,
            _ => 1,
        }
    }

    /// Zero count carried by a rule violation, for user-facing messages.
    pub fn zero_count(&self) -> Option<usize> {
        match self {
            AppError::Domain(DomainError::RuleViolation { zero_count }) => Some(*zero_count),
            _ => None,
        }
    }

    pub fn no_game(detail: impl Into<String>) -> Self {
        Self::NoGame {
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}
