//! Error types for the chain network registry.
//!
//! Integrity faults discovered while walking the chain hierarchy are
//! the only fatal class. Unknown chain IDs are tolerated inputs, and
//! corrupted persisted records are filtered out on read, never raised.

use thiserror::Error;

use crate::chain::ChainId;

/// Errors that can occur in registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A chain declares a parent chain ID that is absent from the
    /// merged registry (catalog + custom store).
    #[error("Parent chain {parent_chain_id} of chain {chain_id} not found in registry")]
    ParentNotFound {
        /// The chain whose parent could not be resolved
        chain_id: ChainId,
        /// The declared parent chain ID that is missing
        parent_chain_id: ChainId,
    },

    /// The parent walk revisited a chain, so the persisted data
    /// contains a parent loop.
    #[error("Cycle detected in parent chain links at chain {chain_id}")]
    CycleDetected {
        /// The first chain ID seen twice during the walk
        chain_id: ChainId,
    },

    /// The underlying key-value store rejected a write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
