//! On-disk record format.
//!
//! Current records are wrapped in `{ "version": 1, "state": {...} }`. A bare
//! state object (as written by the legacy browser build) is read as-is.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::GameState;
use crate::errors::store::StoreError;

pub const RECORD_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct RecordRef<'a> {
    version: u32,
    state: &'a GameState,
}

#[derive(Debug, Deserialize)]
struct Record {
    state: GameState,
}

pub fn encode(state: &GameState) -> Result<Vec<u8>, StoreError> {
    let record = RecordRef {
        version: RECORD_VERSION,
        state,
    };
    Ok(serde_json::to_vec_pretty(&record)?)
}

/// Decode and validate a stored record.
pub fn decode(bytes: &[u8]) -> Result<GameState, StoreError> {
    let value: Value = serde_json::from_slice(bytes)?;

    let state = match value.get("version") {
        Some(version) => {
            let found = version
                .as_u64()
                .ok_or_else(|| StoreError::Corrupt("version is not an integer".into()))?;
            if found != u64::from(RECORD_VERSION) {
                return Err(StoreError::UnsupportedVersion {
                    found,
                    expected: RECORD_VERSION,
                });
            }
            serde_json::from_value::<Record>(value)
                .map_err(|e| StoreError::Corrupt(e.to_string()))?
                .state
        }
        None => serde_json::from_value::<GameState>(value)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?,
    };

    state
        .check_invariants()
        .map_err(|e| StoreError::Corrupt(e.to_string()))?;
    Ok(state)
}
