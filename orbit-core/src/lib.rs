//! # Orbit Core
//!
//! **Chain network registry for Ethereum, Arbitrum, and Orbit chains**
//!
//! This crate maintains a registry of blockchain network definitions
//! and resolves relationships between them: which chain settles to
//! which parent, which root (base layer) any chain ultimately settles
//! to, and which chains are valid one-hop bridging destinations.
//!
//! The merged registry is a built-in catalog layered with a persisted,
//! user-extensible custom chain store. It is a pure metadata resolver:
//! no RPC calls, no on-chain state, no validation of chain parameters
//! against live networks.
//!
//! ## Quick Start
//!
//! ```rust
//! use orbit_core::chain::ids;
//! use orbit_core::classify::classify;
//! use orbit_core::hierarchy::{base_chain_of, destinations_of};
//! use orbit_core::registry::Registry;
//!
//! let registry = Registry::builtin();
//!
//! // Stylus Testnet settles to Arbitrum Sepolia, which settles to Sepolia.
//! assert_eq!(base_chain_of(&registry, ids::STYLUS_TESTNET).unwrap(), ids::SEPOLIA);
//!
//! // The "go back up" destination always comes first.
//! let destinations = destinations_of(&registry, ids::ARBITRUM_ONE);
//! assert_eq!(destinations[0], ids::ETHEREUM_MAINNET);
//!
//! // Unrecognized chains classify as unsupported Orbit chains.
//! let facts = classify(555_555, &[]);
//! assert!(facts.is_orbit_chain && !facts.is_supported);
//! ```

pub mod chain;
pub mod classify;
pub mod error;
pub mod hierarchy;
pub mod registrar;
pub mod registry;
pub mod store;
pub mod validation;

// Re-export main types for convenience
pub use chain::{ChainDefinition, ChainId, CustomChainEntry};
pub use classify::{classify, Classification};
pub use error::{RegistryError, Result};
pub use hierarchy::{base_chain_of, destinations_of, parent_of};
pub use registrar::{register_custom_chain, register_local, LocalRegistration};
pub use registry::Registry;
pub use store::{CustomChainStore, FileStore, KeyValueStore, MemoryStore};
