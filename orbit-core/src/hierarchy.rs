//! Chain hierarchy resolution.
//!
//! Chains form a forest: rollups point at their settlement parent,
//! roots have no parent. This module walks those links to find a
//! chain's ultimate base layer and enumerates its one-hop bridging
//! destinations. Parent data comes from persisted, untrusted input, so
//! the base-chain walk carries an explicit cycle guard instead of
//! assuming the links are well-founded.

use std::collections::HashSet;

use crate::chain::{ChainDefinition, ChainId};
use crate::error::{RegistryError, Result};
use crate::registry::Registry;

/// Resolves a chain's declared parent in the registry.
///
/// # Errors
/// Returns [`RegistryError::ParentNotFound`] if the chain declares a
/// parent that is absent from the registry. A missing parent is a
/// data-integrity fault, not a recoverable condition. Root chains
/// (no declared parent) also resolve to `ParentNotFound` carrying the
/// chain's own ID; callers check [`ChainDefinition::is_rollup`] first.
pub fn parent_of<'r>(
    registry: &'r Registry,
    chain: &ChainDefinition,
) -> Result<&'r ChainDefinition> {
    let parent_id = chain
        .parent_chain_id
        .ok_or(RegistryError::ParentNotFound {
            chain_id: chain.chain_id,
            parent_chain_id: chain.chain_id,
        })?;
    registry
        .chain(parent_id)
        .ok_or(RegistryError::ParentNotFound {
            chain_id: chain.chain_id,
            parent_chain_id: parent_id,
        })
}

/// Resolves the root (base layer) chain ID for a chain.
///
/// Unknown and root chain IDs resolve to themselves. Rollup chains
/// follow parent links until a root is reached.
///
/// # Errors
/// Returns [`RegistryError::ParentNotFound`] if a link in the walk
/// points at a chain absent from the registry, or
/// [`RegistryError::CycleDetected`] if the persisted links loop.
pub fn base_chain_of(registry: &Registry, chain_id: ChainId) -> Result<ChainId> {
    let mut current = match registry.chain(chain_id) {
        Some(chain) => chain,
        None => return Ok(chain_id),
    };

    let mut visited = HashSet::from([current.chain_id]);
    while current.is_rollup() {
        current = parent_of(registry, current)?;
        if !visited.insert(current.chain_id) {
            return Err(RegistryError::CycleDetected {
                chain_id: current.chain_id,
            });
        }
    }
    Ok(current.chain_id)
}

/// Enumerates the valid one-hop bridging destinations for a chain.
///
/// An unknown chain has no destinations. A rollup's destinations start
/// with its declared parent (the "go back up" hop comes first), then
/// its declared children in order; a root's destinations are its
/// children only. The declared parent ID is reported without being
/// resolved, so this never fails.
pub fn destinations_of(registry: &Registry, chain_id: ChainId) -> Vec<ChainId> {
    let Some(chain) = registry.chain(chain_id) else {
        return Vec::new();
    };

    let mut destinations = Vec::with_capacity(chain.child_chain_ids.len() + 1);
    if let Some(parent_id) = chain.parent_chain_id {
        destinations.push(parent_id);
    }
    destinations.extend(&chain.child_chain_ids);
    destinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ids;

    fn rollup(chain_id: ChainId, parent: ChainId) -> ChainDefinition {
        ChainDefinition {
            chain_id,
            parent_chain_id: Some(parent),
            child_chain_ids: vec![],
            block_time_seconds: 0.25,
            confirm_period_blocks: Some(20),
            explorer_url: String::new(),
            name: format!("chain-{}", chain_id),
            is_custom: true,
        }
    }

    #[test]
    fn test_base_of_root_is_itself() {
        let registry = Registry::builtin();
        assert_eq!(
            base_chain_of(&registry, ids::ETHEREUM_MAINNET).unwrap(),
            ids::ETHEREUM_MAINNET
        );
    }

    #[test]
    fn test_base_of_unknown_is_itself() {
        let registry = Registry::builtin();
        assert_eq!(base_chain_of(&registry, 999_999).unwrap(), 999_999);
    }

    #[test]
    fn test_base_walks_two_levels() {
        let registry = Registry::builtin();
        // Stylus Testnet settles to Arbitrum Sepolia, which settles to Sepolia.
        assert_eq!(
            base_chain_of(&registry, ids::STYLUS_TESTNET).unwrap(),
            ids::SEPOLIA
        );
    }

    #[test]
    fn test_parent_of_missing_parent_is_fatal() {
        let registry = Registry::builtin();
        let orphan = rollup(660_279, 777);
        let result = parent_of(&registry, &orphan);
        assert!(matches!(
            result,
            Err(RegistryError::ParentNotFound {
                chain_id: 660_279,
                parent_chain_id: 777,
            })
        ));
    }

    #[test]
    fn test_cycle_is_detected() {
        let mut registry = Registry::empty();
        // Build the loop through register() by installing the roots
        // first, then redeclaring parents.
        let mut a = rollup(10, 20);
        a.parent_chain_id = None;
        registry.register(a).unwrap();
        registry.register(rollup(20, 10)).unwrap();
        registry.register(rollup(10, 20)).unwrap();

        let result = base_chain_of(&registry, 10);
        assert!(matches!(result, Err(RegistryError::CycleDetected { .. })));
    }

    #[test]
    fn test_destinations_parent_first() {
        let registry = Registry::builtin();
        let destinations = destinations_of(&registry, ids::ARBITRUM_SEPOLIA);
        assert_eq!(destinations, vec![ids::SEPOLIA, ids::STYLUS_TESTNET]);
    }

    #[test]
    fn test_destinations_of_root_are_children_only() {
        let registry = Registry::builtin();
        let destinations = destinations_of(&registry, ids::ETHEREUM_MAINNET);
        assert_eq!(destinations, vec![ids::ARBITRUM_ONE, ids::ARBITRUM_NOVA]);
    }

    #[test]
    fn test_destinations_of_unknown_are_empty() {
        let registry = Registry::builtin();
        assert!(destinations_of(&registry, 999_999).is_empty());
    }
}
