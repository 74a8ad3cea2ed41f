//! Error codes for the scorekeeper.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// More than one zero score submitted in a round
    ZeroRuleViolation,
    /// A round would overflow a cumulative score
    ScoreOverflow,
    /// No game has been set up or loaded
    NoActiveGame,
    /// A game already exists in the slot
    GameExists,
    /// Setup input rejected
    InvalidSetup,
    /// Persisted record failed validation
    CorruptState,
    /// Persisted record written by an unknown format version
    UnsupportedVersion,
    /// Save slot held by another process
    SlotLocked,
    /// Filesystem failure
    StorageIo,
    /// JSON encode/decode failure
    Serialization,
    /// Bad environment or flag value
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ZeroRuleViolation => "ZERO_RULE_VIOLATION",
            Self::ScoreOverflow => "SCORE_OVERFLOW",
            Self::NoActiveGame => "NO_ACTIVE_GAME",
            Self::GameExists => "GAME_EXISTS",
            Self::InvalidSetup => "INVALID_SETUP",
            Self::CorruptState => "CORRUPT_STATE",
            Self::UnsupportedVersion => "UNSUPPORTED_VERSION",
            Self::SlotLocked => "SLOT_LOCKED",
            Self::StorageIo => "STORAGE_IO",
            Self::Serialization => "SERIALIZATION",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
