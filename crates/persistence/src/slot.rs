// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::debug;

/// A single named storage slot holding one serialized draft.
///
/// The store writes the whole slot on every save (last-write-wins, no
/// merge), so implementations only need whole-value read/write/clear.
pub trait DraftSlot {
    /// Reads the slot contents, or `None` when the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read.
    fn read(&self) -> Result<Option<String>, PersistenceError>;

    /// Overwrites the slot contents unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written.
    fn write(&self, contents: &str) -> Result<(), PersistenceError>;

    /// Empties the slot. Clearing an already-empty slot succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be cleared.
    fn clear(&self) -> Result<(), PersistenceError>;
}

/// A draft slot backed by a single file on disk.
#[derive(Debug, Clone)]
pub struct FileSlot {
    /// The file holding the serialized draft.
    path: PathBuf,
}

impl FileSlot {
    /// Creates a file slot at the given path.
    ///
    /// # Arguments
    ///
    /// * `path` - The file to hold the serialized draft
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the slot's file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl DraftSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, contents: &str) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), "Draft slot written");
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Draft slot cleared");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// An in-memory draft slot, used by tests and headless runs.
#[derive(Debug, Default)]
pub struct MemorySlot {
    cell: Mutex<Option<String>>,
}

impl MemorySlot {
    /// Creates an empty in-memory slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, PersistenceError> {
        let cell = self
            .cell
            .lock()
            .map_err(|err| PersistenceError::SlotUnavailable(err.to_string()))?;
        Ok(cell.clone())
    }

    fn write(&self, contents: &str) -> Result<(), PersistenceError> {
        let mut cell = self
            .cell
            .lock()
            .map_err(|err| PersistenceError::SlotUnavailable(err.to_string()))?;
        *cell = Some(contents.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        let mut cell = self
            .cell
            .lock()
            .map_err(|err| PersistenceError::SlotUnavailable(err.to_string()))?;
        *cell = None;
        Ok(())
    }
}
