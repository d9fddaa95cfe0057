//! Persisted custom-chain store.
//!
//! User-added chains are layered over the built-in catalog through a
//! [`CustomChainStore`], which persists a JSON array of
//! [`CustomChainEntry`] records under one well-known key in an opaque
//! [`KeyValueStore`]. The persisted store is the sole source of truth:
//! every read re-derives its view (through the
//! [`validation`](crate::validation) layer), and every write rewrites
//! the full array. Two interleaved writers therefore race last-write-
//! wins; that is the documented contract, not a defect to guard
//! against.
//!
//! # Example
//!
//! ```rust
//! use orbit_core::chain::{ChainDefinition, CustomChainEntry};
//! use orbit_core::store::{CustomChainStore, MemoryStore};
//!
//! let mut store = CustomChainStore::new(MemoryStore::new());
//!
//! let entry = CustomChainEntry {
//!     definition: ChainDefinition {
//!         chain_id: 660279,
//!         parent_chain_id: Some(42161),
//!         child_chain_ids: vec![],
//!         block_time_seconds: 0.25,
//!         confirm_period_blocks: Some(45818),
//!         explorer_url: "https://explorer.xai-chain.net".to_string(),
//!         name: "Xai".to_string(),
//!         is_custom: true,
//!     },
//!     rpc_url: "https://xai-chain.net/rpc".to_string(),
//!     slug: Some("xai".to_string()),
//! };
//!
//! store.add(entry).unwrap();
//! assert_eq!(store.list().len(), 1);
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::chain::{ChainId, CustomChainEntry};
use crate::error::{RegistryError, Result};
use crate::validation;

/// Well-known key the custom-chain array is persisted under.
pub const CUSTOM_CHAINS_KEY: &str = "arbitrum:custom-chains";

/// Opaque persisted key-value storage.
///
/// Reads return the raw stored payload; absence is the normal empty
/// state, never an error.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory key-value store for tests and embedders.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed key-value store: one file per key under a directory.
///
/// Keys are mapped to file names by replacing `:` with `_`, so the
/// custom-chain array lands in e.g. `~/.orbit/arbitrum_custom-chains.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created on
    /// first write, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key.replace(':', "_")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| RegistryError::Storage(format!("failed to create store dir: {}", e)))?;
        fs::write(self.path_for(key), value)
            .map_err(|e| RegistryError::Storage(format!("failed to write store: {}", e)))
    }
}

/// The persisted set of user-added chains.
#[derive(Debug, Clone, Default)]
pub struct CustomChainStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> CustomChainStore<S> {
    /// Wraps a key-value store.
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// All persisted custom chains, re-derived from the store.
    ///
    /// Missing or corrupted persisted data degrades to the empty set;
    /// every read passes through the validation layer (chain-ID
    /// coercion, reserved-ID exclusion).
    pub fn list(&self) -> Vec<CustomChainEntry> {
        match self.kv.get(CUSTOM_CHAINS_KEY) {
            Some(raw) => validation::sanitize_entries(&raw),
            None => Vec::new(),
        }
    }

    /// Adds a custom chain. No-op if an entry with the same chain ID
    /// is already persisted.
    ///
    /// # Errors
    /// Returns an error only if serializing or persisting the rewritten
    /// array fails.
    pub fn add(&mut self, entry: CustomChainEntry) -> Result<()> {
        let mut entries = self.list();
        if entries.iter().any(|e| e.chain_id() == entry.chain_id()) {
            return Ok(());
        }
        entries.push(entry);
        self.persist(&entries)
    }

    /// Removes the custom chain with the given ID. No-op if absent.
    ///
    /// # Errors
    /// Returns an error only if persisting the rewritten array fails.
    pub fn remove(&mut self, chain_id: ChainId) -> Result<()> {
        let mut entries = self.list();
        let before = entries.len();
        entries.retain(|e| e.chain_id() != chain_id);
        if entries.len() == before {
            return Ok(());
        }
        self.persist(&entries)
    }

    /// The first persisted entry with the given chain ID, if any.
    pub fn find_by_id(&self, chain_id: ChainId) -> Option<CustomChainEntry> {
        self.list().into_iter().find(|e| e.chain_id() == chain_id)
    }

    /// Full rewrite of the persisted array. The payload stays a JSON
    /// array even when empty.
    fn persist(&mut self, entries: &[CustomChainEntry]) -> Result<()> {
        let payload = serde_json::to_string(entries)?;
        debug!(count = entries.len(), "rewriting persisted custom-chain array");
        self.kv.set(CUSTOM_CHAINS_KEY, &payload)
    }
}
