//! CLI configuration: where the persisted custom-chain store lives.

use std::path::PathBuf;

use orbit_core::store::{CustomChainStore, FileStore};

/// Directory holding the persisted store, `~/.orbit` by default.
pub fn store_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".orbit"))
}

/// Opens the custom-chain store backed by the default directory.
pub fn open_store() -> Option<CustomChainStore<FileStore>> {
    store_dir().map(|dir| CustomChainStore::new(FileStore::new(dir)))
}
