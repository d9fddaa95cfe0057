//! Network registration.
//!
//! Two entry points mutate a [`Registry`] at process start or on user
//! action: [`register_local`] injects the local development L1/L2 pair
//! (best-effort, never propagates failure), and
//! [`register_custom_chain`] persists a user-added chain and installs
//! it into the runtime view and endpoint tables.

use tracing::warn;

use crate::chain::{ids, ChainDefinition, CustomChainEntry};
use crate::error::Result;
use crate::registry::Registry;
use crate::store::{CustomChainStore, KeyValueStore};

/// Default loopback RPC endpoint for the local development L1.
pub const DEFAULT_LOCAL_L1_RPC: &str = "http://localhost:8545";
/// Default loopback RPC endpoint for the local development L2.
pub const DEFAULT_LOCAL_L2_RPC: &str = "http://localhost:8547";

/// The built-in local development L1 definition (nitro test node).
pub fn local_l1_definition() -> ChainDefinition {
    ChainDefinition {
        chain_id: ids::LOCAL_L1,
        parent_chain_id: None,
        child_chain_ids: vec![ids::ARBITRUM_LOCAL],
        block_time_seconds: 12.0,
        confirm_period_blocks: None,
        explorer_url: String::new(),
        name: "Ethereum Local".to_string(),
        is_custom: true,
    }
}

/// The built-in local development L2 definition, settling to
/// [`local_l1_definition`].
pub fn local_l2_definition() -> ChainDefinition {
    ChainDefinition {
        chain_id: ids::ARBITRUM_LOCAL,
        parent_chain_id: Some(ids::LOCAL_L1),
        child_chain_ids: vec![],
        block_time_seconds: 0.25,
        confirm_period_blocks: Some(20),
        explorer_url: String::new(),
        name: "Arbitrum Local".to_string(),
        is_custom: true,
    }
}

/// Outcome of a best-effort local registration.
///
/// The two phases are reported separately: endpoint-table writes are
/// unconditional, while each catalog registration can fail and be
/// swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalRegistration {
    /// Both chains' RPC endpoints were written. Always true; kept so
    /// partial success is explicit at the call site.
    pub endpoints_updated: bool,
    /// The L1 definition was installed into the registry.
    pub l1_registered: bool,
    /// The L2 definition was installed into the registry.
    pub l2_registered: bool,
}

/// Registers the local development L1/L2 pair into the registry.
///
/// Phase one unconditionally points both chains' RPC endpoints at the
/// loopback defaults. Phase two installs the definitions; a rejected
/// definition is logged and reported in the returned
/// [`LocalRegistration`] instead of propagating. Re-registering the
/// same chain IDs overwrites prior values and does not fail.
pub fn register_local(
    registry: &mut Registry,
    l1: Option<ChainDefinition>,
    l2: Option<ChainDefinition>,
) -> LocalRegistration {
    let l1 = l1.unwrap_or_else(local_l1_definition);
    let l2 = l2.unwrap_or_else(local_l2_definition);

    registry.set_rpc_endpoint(l1.chain_id, DEFAULT_LOCAL_L1_RPC);
    registry.set_rpc_endpoint(l2.chain_id, DEFAULT_LOCAL_L2_RPC);

    let l1_registered = try_register(registry, l1);
    let l2_registered = try_register(registry, l2);

    LocalRegistration {
        endpoints_updated: true,
        l1_registered,
        l2_registered,
    }
}

fn try_register(registry: &mut Registry, definition: ChainDefinition) -> bool {
    let chain_id = definition.chain_id;
    match registry.register(definition) {
        Ok(()) => true,
        Err(err) => {
            warn!(chain_id, error = %err, "local network registration rejected");
            false
        }
    }
}

/// Persists a custom chain and installs it into the registry.
///
/// The entry is added to the persisted store (idempotent), its
/// definition installed into the runtime view, and both endpoint
/// tables updated from the entry.
///
/// # Errors
/// Returns an error if persisting fails or the declared parent is
/// absent from the registry.
pub fn register_custom_chain<S: KeyValueStore>(
    registry: &mut Registry,
    store: &mut CustomChainStore<S>,
    entry: CustomChainEntry,
) -> Result<()> {
    let chain_id = entry.chain_id();
    store.add(entry.clone())?;
    registry.register(entry.definition.clone())?;
    registry.set_rpc_endpoint(chain_id, entry.rpc_url);
    if !entry.definition.explorer_url.is_empty() {
        registry.set_explorer_endpoint(chain_id, entry.definition.explorer_url);
    }
    Ok(())
}
