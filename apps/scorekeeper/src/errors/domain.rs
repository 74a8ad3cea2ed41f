//! Domain-level error type used by the pure scorekeeping functions.
//!
//! This error type is storage- and presentation-agnostic. The session
//! controller converts it into `crate::error::AppError`.

use thiserror::Error;

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// More than one player scored zero in the same round. Recoverable:
    /// the caller re-prompts and nothing was changed.
    #[error("rule violation: {zero_count} players scored zero in this round, at most one may")]
    RuleViolation { zero_count: usize },
    /// Adding the round would push a cumulative score past `i64`.
    #[error("score overflow: player {player} total no longer fits")]
    ScoreOverflow { player: usize },
    /// Operation called before setup/load populated the game.
    #[error("precondition failed: {0}")]
    Precondition(String),
    /// A state failed its structural checks (e.g. a corrupted record).
    #[error("invariant violated: {0}")]
    InvariantViolated(String),
}

impl DomainError {
    pub fn rule_violation(zero_count: usize) -> Self {
        Self::RuleViolation { zero_count }
    }
    pub fn score_overflow(player: usize) -> Self {
        Self::ScoreOverflow { player }
    }
    pub fn precondition(detail: impl Into<String>) -> Self {
        Self::Precondition(detail.into())
    }
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::InvariantViolated(detail.into())
    }
}
