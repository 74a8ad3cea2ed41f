//! Persistence adapters for the single game slot.

pub mod file;
pub mod memory;
pub mod record;

use crate::domain::GameState;
use crate::errors::store::StoreError;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

/// Load/save/clear one serialized game.
///
/// `load` after `save(s)` must return a state structurally equal to `s`.
pub trait GameStore {
    fn load(&self) -> Result<Option<GameState>, StoreError>;
    fn save(&mut self, state: &GameState) -> Result<(), StoreError>;
    fn reset(&mut self) -> Result<(), StoreError>;
}
