//! Chains command implementation.

use colored::Colorize;

use orbit_core::registry::Registry;

use crate::output;

/// Run the chains command.
pub fn run() -> i32 {
    let registry = Registry::builtin();

    output::header("Known Chains");

    println!();
    println!(
        "{:<20} {:<12} {:<12} {}",
        "Name".bold(),
        "Chain ID".bold(),
        "Parent".bold(),
        "Children".bold()
    );
    println!("{}", "─".repeat(64).dimmed());

    for chain in registry.list_chains() {
        let parent = chain
            .parent_chain_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        let children = if chain.child_chain_ids.is_empty() {
            "-".to_string()
        } else {
            chain
                .child_chain_ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!(
            "{:<20} {:<12} {:<12} {}",
            chain.name.green(),
            chain.chain_id,
            parent,
            children.dimmed()
        );
    }

    println!();
    0
}
