//! Chain definitions and well-known chain identifiers.
//!
//! A [`ChainDefinition`] describes one network in the merged registry:
//! either a root (settlement base layer, no parent) or a rollup chain
//! that settles to a declared parent. [`CustomChainEntry`] is the
//! persisted form of a user-added chain, a definition plus its RPC
//! endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// An EIP-155 chain ID (e.g. 42161 for Arbitrum One).
pub type ChainId = u64;

/// Well-known chain identifiers.
pub mod ids {
    use super::ChainId;

    /// Ethereum Mainnet
    pub const ETHEREUM_MAINNET: ChainId = 1;
    /// Sepolia Testnet
    pub const SEPOLIA: ChainId = 11_155_111;
    /// Holesky Testnet
    pub const HOLESKY: ChainId = 17_000;
    /// Local development L1 (nitro test node)
    pub const LOCAL_L1: ChainId = 1337;
    /// Reserved legacy development chain, excluded from chain listings
    pub const LOCAL_GETH_LEGACY: ChainId = 1338;
    /// Arbitrum One
    pub const ARBITRUM_ONE: ChainId = 42_161;
    /// Arbitrum Nova
    pub const ARBITRUM_NOVA: ChainId = 42_170;
    /// Arbitrum Sepolia
    pub const ARBITRUM_SEPOLIA: ChainId = 421_614;
    /// Local development L2 settling to [`LOCAL_L1`]
    pub const ARBITRUM_LOCAL: ChainId = 412_346;
    /// Stylus Testnet (settles to Arbitrum Sepolia)
    pub const STYLUS_TESTNET: ChainId = 23_011_913;
}

/// One network in the merged registry.
///
/// A chain with `parent_chain_id: None` is a root chain; a chain with
/// a declared parent is a rollup that settles to that parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainDefinition {
    /// Globally unique chain ID within the merged registry.
    #[serde(deserialize_with = "chain_id_from_number_or_string")]
    pub chain_id: ChainId,
    /// Settlement parent; present only for rollup chains.
    #[serde(default)]
    pub parent_chain_id: Option<ChainId>,
    /// Chains declaring this chain as their parent, in registration order.
    #[serde(default)]
    pub child_chain_ids: Vec<ChainId>,
    /// Average block time in seconds.
    #[serde(default)]
    pub block_time_seconds: f64,
    /// Blocks until finality against the parent; rollup chains only.
    #[serde(default)]
    pub confirm_period_blocks: Option<u64>,
    /// Block explorer base URL.
    #[serde(default)]
    pub explorer_url: String,
    /// Human-readable network name.
    #[serde(default)]
    pub name: String,
    /// True for registrar-injected or user-added entries.
    #[serde(default)]
    pub is_custom: bool,
}

impl ChainDefinition {
    /// Whether this chain settles to a parent chain.
    pub fn is_rollup(&self) -> bool {
        self.parent_chain_id.is_some()
    }
}

/// Persisted form of a user-added chain: the definition plus the RPC
/// endpoint it was registered with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomChainEntry {
    /// The chain definition.
    #[serde(flatten)]
    pub definition: ChainDefinition,
    /// RPC endpoint URL for the chain.
    #[serde(default)]
    pub rpc_url: String,
    /// Optional URL-friendly identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl CustomChainEntry {
    /// The entry's chain ID.
    pub fn chain_id(&self) -> ChainId {
        self.definition.chain_id
    }
}

/// Accepts a chain ID as either a JSON number or a numeric string.
///
/// Persisted records may have round-tripped through a text format, so
/// the canonical numeric form is restored on deserialization.
fn chain_id_from_number_or_string<'de, D>(deserializer: D) -> Result<ChainId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(ChainId),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(id) => Ok(id),
        NumberOrString::String(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid chain ID: {:?}", s))),
    }
}
