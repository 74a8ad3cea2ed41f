#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod render;
pub mod services;
pub mod storage;
pub mod telemetry;


// Re-exports for public API
pub use config::logging::LogFormat;
pub use config::storage::StorageConfig;
pub use domain::{GameState, Player, PlayerId, RoundSubmission, Scoreboard, StatsReport};
pub use error::AppError;
pub use errors::domain::DomainError;
pub use errors::store::StoreError;
pub use errors::ErrorCode;
pub use services::ScoreSession;
pub use storage::{GameStore, InMemoryStore, JsonFileStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
