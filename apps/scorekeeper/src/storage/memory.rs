use crate::domain::GameState;
use crate::errors::store::StoreError;
use crate::storage::{record, GameStore};

/// Store that keeps the encoded record in memory.
///
/// Goes through the same encode/decode path as the file store so tests
/// exercise the real format.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    slot: Option<Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the slot with raw bytes.
    pub fn with_raw(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            slot: Some(bytes.into()),
        }
    }

    pub fn raw(&self) -> Option<&[u8]> {
        self.slot.as_deref()
    }
}

impl GameStore for InMemoryStore {
    fn load(&self) -> Result<Option<GameState>, StoreError> {
        self.slot.as_deref().map(record::decode).transpose()
    }

    fn save(&mut self, state: &GameState) -> Result<(), StoreError> {
        self.slot = Some(record::encode(state)?);
        Ok(())
    }

    fn reset(&mut self) -> Result<(), StoreError> {
        self.slot = None;
        Ok(())
    }
}
