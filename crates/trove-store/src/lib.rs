// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod error;
mod json_file;

pub use error::{StoreError, StoreErrorCode};
pub use json_file::JsonFileStore;

use trove_model::{Item, NewItem};

/// Read/write seam over the catalog's backing file.
///
/// A miss on `find_by_id` is `Ok(None)`; the caller decides the HTTP
/// semantics. `append` rewrites the whole file and takes no lock, so
/// concurrent writers race and the last write wins.
pub trait ItemStore: Send + Sync {
    fn load_all(&self) -> Result<Vec<Item>, StoreError>;
    fn find_by_id(&self, id: u64) -> Result<Option<Item>, StoreError>;
    fn append(&self, draft: NewItem) -> Result<Item, StoreError>;
}
