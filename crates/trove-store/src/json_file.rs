// SPDX-License-Identifier: Apache-2.0

use crate::{ItemStore, StoreError, StoreErrorCode};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use trove_model::{Item, NewItem};

/// Item store backed by a single pretty-printed JSON array file.
///
/// The whole file is the unit of storage: every append re-reads the array,
/// pushes the new item, and rewrites the file in full.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file as an empty array when it does not exist yet.
    pub fn ensure_seeded(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
        }
        fs::write(&self.path, "[]").map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))
    }

    fn write_all(&self, items: &[Item]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(items)
            .map_err(|e| StoreError::new(StoreErrorCode::Serialize, e.to_string()))?;
        fs::write(&self.path, raw)
            .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

impl ItemStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Item>, StoreError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::new(StoreErrorCode::Io, e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| StoreError::new(StoreErrorCode::Parse, e.to_string()))
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Item>, StoreError> {
        Ok(self.load_all()?.into_iter().find(|item| item.id == id))
    }

    fn append(&self, draft: NewItem) -> Result<Item, StoreError> {
        let mut items = self.load_all()?;
        // Creation-timestamp id, bumped past the current max so two appends
        // within the same millisecond still get distinct ids.
        let mut id = unix_millis();
        if let Some(max) = items.iter().map(|i| i.id).max() {
            if id <= max {
                id = max + 1;
            }
        }
        let item = draft.into_item(id);
        items.push(item.clone());
        self.write_all(&items)?;
        Ok(item)
    }
}
