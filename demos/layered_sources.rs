// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered sources example for the layercfg crate.
//!
//! This example demonstrates:
//! - Applying several INI sources in order
//! - Injecting environment and command-line values instead of reading the process
//! - Reading the value history of an option
//!
//! To run this example:
//! ```bash
//! cargo run --example layered_sources
//! ```

use layercfg::prelude::*;
use std::collections::HashMap;

const SITE_DEFAULTS: &str = "\
[DEFAULT]
level = 1

[layers]
name = site
";

const USER_OVERRIDES: &str = "\
[layers]
# Keys match option names regardless of case
LEVEL = 2
tags = red, green,
";

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== layercfg: Layered Sources ===\n");

    let mut env = HashMap::new();
    env.insert("LAYERS_LEVEL".to_string(), "3".to_string());

    let mut config = Config::builder("layers")
        .without_default_locations()
        .with_text(SITE_DEFAULTS)
        .with_text(USER_OVERRIDES)
        .with_source("/nonexistent/layers.cfg")
        .with_env(EnvVarAdapter::with_values(env))
        .with_args(CommandLineAdapter::from_args(vec!["--layers-name", "cli"]))
        .option("level", (0, OptionKind::Integer, "Nesting level"))
        .option("name", ("none", OptionKind::String, "Layer name"))
        .option(
            "tags",
            (Vec::<String>::new(), OptionKind::tuple_of(OptionKind::String), "Tags"),
        )
        .build()?;

    config.set("level", 4)?;

    for name in &config {
        println!("{} = {}", name, config.get(name)?);
        for entry in config.history(name)?.entries() {
            println!("    {:<10} {}", entry.source.to_string(), entry.value);
        }
    }

    // Both text sources share the same tag, so the second replaced the first
    // in the history of `level`.
    println!("\nlevel history length: {}", config.history("level")?.len());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
