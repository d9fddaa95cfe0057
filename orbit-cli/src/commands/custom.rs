//! Custom-chain management commands.

use clap::{Args, Subcommand};
use colored::Colorize;

use orbit_core::chain::{ChainDefinition, ChainId, CustomChainEntry};

use crate::config;
use crate::output;

/// Arguments for the custom command group.
#[derive(Args)]
pub struct CustomArgs {
    #[command(subcommand)]
    command: CustomCommands,
}

#[derive(Subcommand)]
enum CustomCommands {
    /// List persisted custom chains
    List,

    /// Add a custom chain
    Add(AddArgs),

    /// Remove a custom chain by ID
    Remove(RemoveArgs),
}

#[derive(Args)]
struct AddArgs {
    /// Chain ID of the new chain
    #[arg(long)]
    chain_id: ChainId,

    /// Chain ID of the settlement parent
    #[arg(long)]
    parent: ChainId,

    /// Human-readable network name
    #[arg(long)]
    name: String,

    /// RPC endpoint URL
    #[arg(long)]
    rpc_url: String,

    /// Block explorer base URL
    #[arg(long, default_value = "")]
    explorer_url: String,

    /// URL-friendly identifier
    #[arg(long)]
    slug: Option<String>,

    /// Average block time in seconds
    #[arg(long, default_value_t = 0.25)]
    block_time: f64,

    /// Blocks until finality against the parent
    #[arg(long, default_value_t = 45_818)]
    confirm_period: u64,
}

#[derive(Args)]
struct RemoveArgs {
    /// Chain ID to remove
    chain_id: ChainId,
}

/// Run a custom subcommand.
pub fn run(args: CustomArgs) -> i32 {
    let Some(mut store) = config::open_store() else {
        output::error("could not determine home directory for the custom-chain store");
        return 1;
    };

    match args.command {
        CustomCommands::List => {
            let entries = store.list();
            output::header("Custom Chains");
            if entries.is_empty() {
                output::kv("custom chains", "none");
                println!();
                return 0;
            }
            println!();
            println!(
                "{:<20} {:<14} {:<12} {}",
                "Name".bold(),
                "Chain ID".bold(),
                "Parent".bold(),
                "RPC".bold()
            );
            println!("{}", "─".repeat(70).dimmed());
            for entry in entries {
                let parent = entry
                    .definition
                    .parent_chain_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<20} {:<14} {:<12} {}",
                    entry.definition.name.green(),
                    entry.chain_id(),
                    parent,
                    entry.rpc_url.dimmed()
                );
            }
            println!();
            0
        }
        CustomCommands::Add(add) => {
            let entry = CustomChainEntry {
                definition: ChainDefinition {
                    chain_id: add.chain_id,
                    parent_chain_id: Some(add.parent),
                    child_chain_ids: vec![],
                    block_time_seconds: add.block_time,
                    confirm_period_blocks: Some(add.confirm_period),
                    explorer_url: add.explorer_url,
                    name: add.name,
                    is_custom: true,
                },
                rpc_url: add.rpc_url,
                slug: add.slug,
            };
            match store.add(entry) {
                Ok(()) => {
                    output::success(&format!("custom chain {} persisted", add.chain_id));
                    0
                }
                Err(err) => {
                    output::error(&format!("{}", err));
                    1
                }
            }
        }
        CustomCommands::Remove(remove) => match store.remove(remove.chain_id) {
            Ok(()) => {
                output::success(&format!("custom chain {} removed", remove.chain_id));
                0
            }
            Err(err) => {
                output::error(&format!("{}", err));
                1
            }
        },
    }
}
