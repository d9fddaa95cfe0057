//! Base and destinations command implementations.

use clap::Args;

use orbit_core::chain::ChainId;
use orbit_core::hierarchy::{base_chain_of, destinations_of};
use orbit_core::registrar::register_custom_chain;
use orbit_core::registry::Registry;
use orbit_core::store::{CustomChainStore, MemoryStore};

use crate::config;
use crate::output;

/// Arguments for the base command.
#[derive(Args)]
pub struct BaseArgs {
    /// Chain ID to resolve
    pub chain_id: ChainId,
}

/// Arguments for the destinations command.
#[derive(Args)]
pub struct DestinationsArgs {
    /// Chain ID to enumerate destinations for
    pub chain_id: ChainId,
}

/// The built-in registry merged with the persisted custom chains.
fn merged_registry() -> Registry {
    let mut registry = Registry::builtin();
    let Some(store) = config::open_store() else {
        return registry;
    };
    // Re-register into a scratch store so the persisted file is not
    // rewritten by a read-only command.
    let mut scratch = CustomChainStore::new(MemoryStore::new());
    for entry in store.list() {
        if let Err(err) = register_custom_chain(&mut registry, &mut scratch, entry) {
            output::error(&format!("skipping custom chain: {}", err));
        }
    }
    registry
}

/// Run the base command.
pub fn run_base(args: BaseArgs) -> i32 {
    let registry = merged_registry();
    match base_chain_of(&registry, args.chain_id) {
        Ok(base) => {
            output::header(&format!("Chain {}", args.chain_id));
            output::kv("base chain", &base.to_string());
            println!();
            0
        }
        Err(err) => {
            output::error(&format!("{}", err));
            1
        }
    }
}

/// Run the destinations command.
pub fn run_destinations(args: DestinationsArgs) -> i32 {
    let registry = merged_registry();
    let destinations = destinations_of(&registry, args.chain_id);

    output::header(&format!("Chain {}", args.chain_id));
    if destinations.is_empty() {
        output::kv("destinations", "none");
    } else {
        let rendered = destinations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        output::kv("destinations", &rendered);
    }
    println!();
    0
}
