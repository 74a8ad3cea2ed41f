#![allow(dead_code)]

use scorekeeper::{JsonFileStore, ScoreSession};
use tempfile::TempDir;

// Auto-initialize logging for integration tests
#[ctor::ctor]
fn init_logging() {
    scorekeeper_test_support::logging::init();
}

pub const SLOT: &str = "cardGameDataV3";

/// Temp data dir plus a session bound to it. Keep the dir alive for the
/// whole test.
pub fn session_in_tempdir() -> (TempDir, ScoreSession<JsonFileStore>) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let session = reopen(&dir);
    (dir, session)
}

/// A fresh session over the same slot, as a new process would see it.
pub fn reopen(dir: &TempDir) -> ScoreSession<JsonFileStore> {
    ScoreSession::bootstrap(JsonFileStore::new(dir.path(), SLOT)).expect("bootstrap session")
}

pub fn scores(session: &ScoreSession<JsonFileStore>) -> Vec<i64> {
    session
        .state()
        .expect("game in progress")
        .players
        .iter()
        .map(|p| p.score)
        .collect()
}
