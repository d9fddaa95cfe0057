//! Terminal output formatting.

use colored::Colorize;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg.green());
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg.red());
}

/// Print a header.
pub fn header(msg: &str) {
    println!("\n{}", msg.white().bold());
    println!("{}", "─".repeat(msg.len()).dimmed());
}

/// Print a key-value pair.
pub fn kv(key: &str, value: &str) {
    println!("  {} {}", format!("{}:", key).dimmed(), value);
}

/// Print a yes/no flag.
pub fn flag(key: &str, value: bool) {
    let rendered = if value {
        "yes".green()
    } else {
        "no".dimmed()
    };
    println!("  {} {}", format!("{}:", key).dimmed(), rendered);
}
