// Standard library imports
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

// External crate imports
use fs4::fs_std::FileExt;
use tracing::{debug, info};

// Internal crate imports
use crate::domain::GameState;
use crate::errors::store::StoreError;
use crate::storage::{record, GameStore};

/// One JSON file per save slot under a data directory.
///
/// Writes go to a sibling temp file and are renamed over the slot, so a
/// crash never leaves a half-written record. Mutations hold an exclusive OS
/// lock on `<slot>.lock`; a second process gets `StoreError::Locked`
/// instead of interleaving writes.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
    slot: String,
}

/// Held for the duration of one mutation; the OS lock is released when the
/// file handle drops.
struct SlotLock {
    _file: File,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>, slot: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            slot: slot.into(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.slot))
    }

    fn temp_path(&self) -> PathBuf {
        self.dir.join(format!(".{}.json.tmp", self.slot))
    }

    fn lock_path(&self) -> PathBuf {
        self.dir.join(format!("{}.lock", self.slot))
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))
    }

    fn acquire(&self) -> Result<SlotLock, StoreError> {
        let lock_path = self.lock_path();
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .read(true)
            .write(true)
            .open(&lock_path)
            .map_err(|e| StoreError::io(&lock_path, e))?;

        // Ok(true) = acquired, Ok(false) = held elsewhere
        match file.try_lock_exclusive() {
            Ok(true) => {
                debug!(lock_path = %lock_path.display(), "slot lock acquired");
                Ok(SlotLock { _file: file })
            }
            Ok(false) => Err(StoreError::Locked(lock_path)),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                Err(StoreError::Locked(lock_path))
            }
            Err(e) => Err(StoreError::io(&lock_path, e)),
        }
    }

    fn write_atomic(&self, bytes: &[u8]) -> Result<(), StoreError> {
        let tmp = self.temp_path();
        let target = self.path();

        let mut file = File::create(&tmp).map_err(|e| StoreError::io(&tmp, e))?;
        file.write_all(bytes).map_err(|e| StoreError::io(&tmp, e))?;
        file.sync_all().map_err(|e| StoreError::io(&tmp, e))?;
        drop(file);

        fs::rename(&tmp, &target).map_err(|e| StoreError::io(&target, e))
    }
}

impl GameStore for JsonFileStore {
    fn load(&self) -> Result<Option<GameState>, StoreError> {
        let path = self.path();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no saved game");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        };
        let state = record::decode(&bytes)?;
        info!(path = %path.display(), round = state.round, "game loaded");
        Ok(Some(state))
    }

    fn save(&mut self, state: &GameState) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let _lock = self.acquire()?;
        let bytes = record::encode(state)?;
        self.write_atomic(&bytes)?;
        debug!(path = %self.path().display(), round = state.round, "game saved");
        Ok(())
    }

    fn reset(&mut self) -> Result<(), StoreError> {
        if !self.dir.exists() {
            return Ok(());
        }
        let _lock = self.acquire()?;
        let path = self.path();
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = %path.display(), "saved game cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(&path, e)),
        }
    }
}

/// True when `dir` holds a saved game for `slot`.
pub fn slot_exists(dir: &Path, slot: &str) -> bool {
    JsonFileStore::new(dir, slot).path().is_file()
}
