//! Classify command implementation.

use clap::Args;

use orbit_core::chain::ChainId;
use orbit_core::classify::classify;

use crate::config;
use crate::output;

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Chain ID to classify
    pub chain_id: ChainId,
}

/// Run the classify command.
pub fn run(args: ClassifyArgs) -> i32 {
    let custom_chains = config::open_store()
        .map(|store| store.list())
        .unwrap_or_default();

    let facts = classify(args.chain_id, &custom_chains);

    output::header(&format!("Chain {}", args.chain_id));
    output::flag("core chain", facts.is_core_chain);
    output::flag("orbit chain", facts.is_orbit_chain);
    output::flag("testnet", facts.is_testnet);
    output::flag("supported", facts.is_supported);
    output::flag("ethereum family", facts.is_ethereum_chain);
    output::flag("arbitrum family", facts.is_arbitrum);
    output::flag("local", facts.is_local);
    println!();
    0
}
