//! The registry: runtime view of the chain catalog plus endpoint tables.
//!
//! The built-in catalog is compiled in, but the runtime view is an
//! explicit [`Registry`] value rather than ambient process state, so
//! embedders and tests can construct isolated registries.
//!
//! # Example
//!
//! ```rust
//! use orbit_core::chain::ids;
//! use orbit_core::registry::Registry;
//!
//! let registry = Registry::builtin();
//! let one = registry.chain(ids::ARBITRUM_ONE).unwrap();
//! assert_eq!(one.parent_chain_id, Some(ids::ETHEREUM_MAINNET));
//! ```

use std::collections::HashMap;

use crate::chain::{ids, ChainDefinition, ChainId};
use crate::error::{RegistryError, Result};

/// Documented fallback RPC endpoints for the built-in catalog.
///
/// Environment-derived overrides are an external concern; these are
/// the per-chain defaults used when nothing else is configured.
const DEFAULT_RPC_ENDPOINTS: &[(ChainId, &str)] = &[
    (ids::ETHEREUM_MAINNET, "https://ethereum-rpc.publicnode.com"),
    (ids::SEPOLIA, "https://ethereum-sepolia-rpc.publicnode.com"),
    (ids::HOLESKY, "https://ethereum-holesky-rpc.publicnode.com"),
    (ids::ARBITRUM_ONE, "https://arb1.arbitrum.io/rpc"),
    (ids::ARBITRUM_NOVA, "https://nova.arbitrum.io/rpc"),
    (ids::ARBITRUM_SEPOLIA, "https://sepolia-rollup.arbitrum.io/rpc"),
    (ids::STYLUS_TESTNET, "https://stylus-testnet.arbitrum.io/rpc"),
];

/// The built-in chain catalog: Ethereum roots and Arbitrum rollups,
/// in catalog enumeration order.
fn builtin_chains() -> Vec<ChainDefinition> {
    vec![
        ChainDefinition {
            chain_id: ids::ETHEREUM_MAINNET,
            parent_chain_id: None,
            child_chain_ids: vec![ids::ARBITRUM_ONE, ids::ARBITRUM_NOVA],
            block_time_seconds: 12.0,
            confirm_period_blocks: None,
            explorer_url: "https://etherscan.io".to_string(),
            name: "Ethereum".to_string(),
            is_custom: false,
        },
        ChainDefinition {
            chain_id: ids::SEPOLIA,
            parent_chain_id: None,
            child_chain_ids: vec![ids::ARBITRUM_SEPOLIA],
            block_time_seconds: 12.0,
            confirm_period_blocks: None,
            explorer_url: "https://sepolia.etherscan.io".to_string(),
            name: "Sepolia".to_string(),
            is_custom: false,
        },
        ChainDefinition {
            chain_id: ids::HOLESKY,
            parent_chain_id: None,
            child_chain_ids: vec![],
            block_time_seconds: 12.0,
            confirm_period_blocks: None,
            explorer_url: "https://holesky.etherscan.io".to_string(),
            name: "Holesky".to_string(),
            is_custom: false,
        },
        ChainDefinition {
            chain_id: ids::LOCAL_GETH_LEGACY,
            parent_chain_id: None,
            child_chain_ids: vec![],
            block_time_seconds: 12.0,
            confirm_period_blocks: None,
            explorer_url: String::new(),
            name: "Localhost (legacy)".to_string(),
            is_custom: false,
        },
        ChainDefinition {
            chain_id: ids::ARBITRUM_ONE,
            parent_chain_id: Some(ids::ETHEREUM_MAINNET),
            child_chain_ids: vec![],
            block_time_seconds: 0.25,
            confirm_period_blocks: Some(45_818),
            explorer_url: "https://arbiscan.io".to_string(),
            name: "Arbitrum One".to_string(),
            is_custom: false,
        },
        ChainDefinition {
            chain_id: ids::ARBITRUM_NOVA,
            parent_chain_id: Some(ids::ETHEREUM_MAINNET),
            child_chain_ids: vec![],
            block_time_seconds: 0.25,
            confirm_period_blocks: Some(45_818),
            explorer_url: "https://nova.arbiscan.io".to_string(),
            name: "Arbitrum Nova".to_string(),
            is_custom: false,
        },
        ChainDefinition {
            chain_id: ids::ARBITRUM_SEPOLIA,
            parent_chain_id: Some(ids::SEPOLIA),
            child_chain_ids: vec![ids::STYLUS_TESTNET],
            block_time_seconds: 0.25,
            confirm_period_blocks: Some(20),
            explorer_url: "https://sepolia.arbiscan.io".to_string(),
            name: "Arbitrum Sepolia".to_string(),
            is_custom: false,
        },
        ChainDefinition {
            chain_id: ids::STYLUS_TESTNET,
            parent_chain_id: Some(ids::ARBITRUM_SEPOLIA),
            child_chain_ids: vec![],
            block_time_seconds: 0.25,
            confirm_period_blocks: Some(20),
            explorer_url: "https://stylus-testnet-explorer.arbitrum.io".to_string(),
            name: "Stylus Testnet".to_string(),
            is_custom: false,
        },
    ]
}

/// Runtime view of the chain catalog plus the two endpoint tables.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Known chains in enumeration order.
    chains: Vec<ChainDefinition>,
    /// RPC endpoint per chain ID.
    rpc_endpoints: HashMap<ChainId, String>,
    /// Block explorer endpoint per chain ID.
    explorer_endpoints: HashMap<ChainId, String>,
}

impl Registry {
    /// Creates an empty registry with no chains and no endpoints.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with the built-in catalog and its
    /// default endpoint tables.
    pub fn builtin() -> Self {
        let chains = builtin_chains();
        let rpc_endpoints = DEFAULT_RPC_ENDPOINTS
            .iter()
            .map(|(id, url)| (*id, (*url).to_string()))
            .collect();
        let explorer_endpoints = chains
            .iter()
            .filter(|chain| !chain.explorer_url.is_empty())
            .map(|chain| (chain.chain_id, chain.explorer_url.clone()))
            .collect();
        Self {
            chains,
            rpc_endpoints,
            explorer_endpoints,
        }
    }

    /// Looks up a chain by ID in the runtime view.
    pub fn chain(&self, chain_id: ChainId) -> Option<&ChainDefinition> {
        self.chains.iter().find(|chain| chain.chain_id == chain_id)
    }

    /// Lists chains for display, preserving enumeration order.
    ///
    /// Excludes the reserved legacy development chain and any root
    /// chain with no declared children (a base layer without rollups
    /// is not a useful listing entry).
    pub fn list_chains(&self) -> Vec<&ChainDefinition> {
        self.chains
            .iter()
            .filter(|chain| {
                let orphan_root = !chain.is_rollup() && chain.child_chain_ids.is_empty();
                chain.chain_id != ids::LOCAL_GETH_LEGACY && !orphan_root
            })
            .collect()
    }

    /// All chains in the runtime view, unfiltered.
    pub fn all_chains(&self) -> &[ChainDefinition] {
        &self.chains
    }

    /// Installs a chain definition, overwriting any existing entry
    /// with the same chain ID in place.
    ///
    /// If the definition declares a parent, the parent must already be
    /// present; the new chain ID is appended to the parent's child
    /// list if not yet declared there.
    ///
    /// # Errors
    /// Returns [`RegistryError::ParentNotFound`] if the declared
    /// parent is absent from the runtime view.
    pub fn register(&mut self, definition: ChainDefinition) -> Result<()> {
        if let Some(parent_id) = definition.parent_chain_id {
            let parent = self
                .chains
                .iter_mut()
                .find(|chain| chain.chain_id == parent_id)
                .ok_or(RegistryError::ParentNotFound {
                    chain_id: definition.chain_id,
                    parent_chain_id: parent_id,
                })?;
            if !parent.child_chain_ids.contains(&definition.chain_id) {
                parent.child_chain_ids.push(definition.chain_id);
            }
        }

        match self
            .chains
            .iter_mut()
            .find(|chain| chain.chain_id == definition.chain_id)
        {
            Some(existing) => *existing = definition,
            None => self.chains.push(definition),
        }
        Ok(())
    }

    /// The RPC endpoint configured for a chain, if any.
    pub fn rpc_endpoint(&self, chain_id: ChainId) -> Option<&str> {
        self.rpc_endpoints.get(&chain_id).map(String::as_str)
    }

    /// Sets the RPC endpoint for a chain, replacing any prior value.
    pub fn set_rpc_endpoint(&mut self, chain_id: ChainId, url: impl Into<String>) {
        self.rpc_endpoints.insert(chain_id, url.into());
    }

    /// The explorer endpoint configured for a chain, if any.
    pub fn explorer_endpoint(&self, chain_id: ChainId) -> Option<&str> {
        self.explorer_endpoints.get(&chain_id).map(String::as_str)
    }

    /// Sets the explorer endpoint for a chain, replacing any prior value.
    pub fn set_explorer_endpoint(&mut self, chain_id: ChainId, url: impl Into<String>) {
        self.explorer_endpoints.insert(chain_id, url.into());
    }
}
