//! Chain classification.
//!
//! [`classify`] computes a fixed bundle of boolean facts about a chain
//! ID by cross-referencing the well-known family IDs, the caller's
//! current custom-chain view, and two static membership tables of
//! well-known Orbit chains. Every call computes the bundle fresh;
//! nothing is cached.
//!
//! "Core" means the Ethereum or Arbitrum families. Everything else,
//! including any unrecognized chain ID, is an Orbit chain by
//! construction.

use crate::chain::{ids, ChainId, CustomChainEntry};

/// Well-known Orbit chains settling on mainnet family parents.
pub const MAINNET_ORBIT_CHAIN_IDS: &[ChainId] = &[
    660_279,       // Xai
    1_380_012_617, // Rari Chain
    4078,          // Muster
    70_700,        // Proof of Play Apex
    1996,          // Sanko
    666_666_666,   // Degen
];

/// Well-known Orbit chains settling on testnet family parents.
pub const TESTNET_ORBIT_CHAIN_IDS: &[ChainId] = &[
    37_714_555_429,     // Xai Testnet
    1_918_988_905,      // Rari Testnet
    ids::STYLUS_TESTNET,
];

/// Production and development chain IDs this registry explicitly
/// supports, before consulting the custom store or the Orbit tables.
const SUPPORTED_CHAIN_IDS: &[ChainId] = &[
    ids::ETHEREUM_MAINNET,
    ids::SEPOLIA,
    ids::HOLESKY,
    ids::ARBITRUM_ONE,
    ids::ARBITRUM_NOVA,
    ids::ARBITRUM_SEPOLIA,
    ids::LOCAL_L1,
    ids::ARBITRUM_LOCAL,
];

/// Boolean facts about one chain ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    /// Chain is Ethereum Mainnet.
    pub is_ethereum_mainnet: bool,
    /// Chain is the Sepolia testnet.
    pub is_sepolia: bool,
    /// Chain is the Holesky testnet.
    pub is_holesky: bool,
    /// Chain is a local development chain.
    pub is_local: bool,
    /// Chain is Arbitrum One.
    pub is_arbitrum_one: bool,
    /// Chain is Arbitrum Nova.
    pub is_arbitrum_nova: bool,
    /// Chain is Arbitrum Sepolia.
    pub is_arbitrum_sepolia: bool,
    /// Chain is the local development Arbitrum chain.
    pub is_arbitrum_local: bool,
    /// Chain is the Stylus testnet.
    pub is_stylus_testnet: bool,
    /// Chain is in the Ethereum family (mainnet, testnets, local L1s).
    pub is_ethereum_chain: bool,
    /// Chain is in the Arbitrum family.
    pub is_arbitrum: bool,
    /// Chain is Ethereum- or Arbitrum-family.
    pub is_core_chain: bool,
    /// Chain is outside the two core families.
    pub is_orbit_chain: bool,
    /// Chain is a test or development network.
    pub is_testnet: bool,
    /// Chain is usable: explicitly enumerated, user-added, or a
    /// well-known Orbit chain.
    pub is_supported: bool,
}

/// Classifies a chain ID against the current custom-chain view.
///
/// `custom_chains` is the caller's freshly listed store contents; the
/// classifier never caches them. Unrecognized chain IDs yield an
/// unsupported Orbit classification rather than an error.
pub fn classify(chain_id: ChainId, custom_chains: &[CustomChainEntry]) -> Classification {
    let is_ethereum_mainnet = chain_id == ids::ETHEREUM_MAINNET;
    let is_sepolia = chain_id == ids::SEPOLIA;
    let is_holesky = chain_id == ids::HOLESKY;
    let is_local = matches!(
        chain_id,
        ids::LOCAL_L1 | ids::LOCAL_GETH_LEGACY | ids::ARBITRUM_LOCAL
    );

    let is_arbitrum_one = chain_id == ids::ARBITRUM_ONE;
    let is_arbitrum_nova = chain_id == ids::ARBITRUM_NOVA;
    let is_arbitrum_sepolia = chain_id == ids::ARBITRUM_SEPOLIA;
    let is_arbitrum_local = chain_id == ids::ARBITRUM_LOCAL;
    let is_stylus_testnet = chain_id == ids::STYLUS_TESTNET;

    let is_ethereum_chain = is_ethereum_mainnet
        || is_sepolia
        || is_holesky
        || chain_id == ids::LOCAL_L1
        || chain_id == ids::LOCAL_GETH_LEGACY;
    let is_arbitrum =
        is_arbitrum_one || is_arbitrum_nova || is_arbitrum_sepolia || is_arbitrum_local;
    let is_core_chain = is_ethereum_chain || is_arbitrum;

    let in_custom_store = custom_chains.iter().any(|e| e.chain_id() == chain_id);
    let in_mainnet_orbit = MAINNET_ORBIT_CHAIN_IDS.contains(&chain_id);
    let in_testnet_orbit = TESTNET_ORBIT_CHAIN_IDS.contains(&chain_id);

    Classification {
        is_ethereum_mainnet,
        is_sepolia,
        is_holesky,
        is_local,
        is_arbitrum_one,
        is_arbitrum_nova,
        is_arbitrum_sepolia,
        is_arbitrum_local,
        is_stylus_testnet,
        is_ethereum_chain,
        is_arbitrum,
        is_core_chain,
        is_orbit_chain: !is_core_chain,
        is_testnet: is_sepolia
            || is_holesky
            || is_local
            || is_arbitrum_sepolia
            || is_arbitrum_local
            || is_stylus_testnet
            || in_custom_store
            || in_testnet_orbit,
        is_supported: SUPPORTED_CHAIN_IDS.contains(&chain_id)
            || in_custom_store
            || in_mainnet_orbit
            || in_testnet_orbit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ChainDefinition;

    fn custom(chain_id: ChainId) -> CustomChainEntry {
        CustomChainEntry {
            definition: ChainDefinition {
                chain_id,
                parent_chain_id: Some(ids::ARBITRUM_ONE),
                child_chain_ids: vec![],
                block_time_seconds: 0.25,
                confirm_period_blocks: Some(45_818),
                explorer_url: String::new(),
                name: "custom".to_string(),
                is_custom: true,
            },
            rpc_url: String::new(),
            slug: None,
        }
    }

    #[test]
    fn test_ethereum_mainnet() {
        let c = classify(ids::ETHEREUM_MAINNET, &[]);
        assert!(c.is_ethereum_mainnet);
        assert!(c.is_core_chain);
        assert!(!c.is_orbit_chain);
        assert!(!c.is_testnet);
        assert!(c.is_supported);
    }

    #[test]
    fn test_arbitrum_sepolia_is_core_testnet() {
        let c = classify(ids::ARBITRUM_SEPOLIA, &[]);
        assert!(c.is_arbitrum);
        assert!(c.is_core_chain);
        assert!(c.is_testnet);
        assert!(c.is_supported);
    }

    #[test]
    fn test_stylus_testnet_is_orbit() {
        let c = classify(ids::STYLUS_TESTNET, &[]);
        assert!(c.is_stylus_testnet);
        assert!(!c.is_core_chain);
        assert!(c.is_orbit_chain);
        assert!(c.is_testnet);
        assert!(c.is_supported);
    }

    #[test]
    fn test_unregistered_id_is_unsupported_orbit() {
        let c = classify(555_555, &[]);
        assert!(!c.is_core_chain);
        assert!(c.is_orbit_chain);
        assert!(!c.is_supported);
        assert!(!c.is_testnet);
    }

    #[test]
    fn test_custom_store_membership() {
        let entries = [custom(555_555)];
        let c = classify(555_555, &entries);
        assert!(c.is_orbit_chain);
        assert!(c.is_supported);
        assert!(c.is_testnet);
    }

    #[test]
    fn test_well_known_orbit_mainnet() {
        let c = classify(660_279, &[]); // Xai
        assert!(c.is_orbit_chain);
        assert!(c.is_supported);
        assert!(!c.is_testnet);
    }

    #[test]
    fn test_local_dev_pair() {
        let l1 = classify(ids::LOCAL_L1, &[]);
        assert!(l1.is_local && l1.is_ethereum_chain && l1.is_testnet && l1.is_supported);

        let l2 = classify(ids::ARBITRUM_LOCAL, &[]);
        assert!(l2.is_arbitrum_local && l2.is_arbitrum && l2.is_local);
        assert!(l2.is_testnet && l2.is_supported);
    }
}
