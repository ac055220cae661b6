// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the layercfg crate.
//!
//! This example demonstrates:
//! - Declaring a configuration with typed options
//! - Reading values from environment variables and command-line arguments
//! - Assigning values in code and inspecting where a value came from
//!
//! To run this example:
//! ```bash
//! # Set some environment variables
//! export DEMO_VERBOSE="yes"
//! export DEMO_PORTS="8080, 8443"
//!
//! # Run the example, overriding one option on the command line
//! cargo run --example basic_usage -- --demo-timeout 2.5
//! ```

use layercfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== layercfg: Basic Usage ===\n");

    let mut config = Config::builder("demo")
        .option("verbose", (false, OptionKind::Boolean, "Print more output"))
        .option("retries", (3, OptionKind::Integer, "Number of retries"))
        .option("timeout", (10.0, OptionKind::Float, "Timeout in seconds"))
        .option(
            "ports",
            (vec![80], OptionKind::tuple_of(OptionKind::Integer), "Ports to listen on"),
        )
        .option("label", ("demo", OptionKind::String, "Display label"))
        .build()?;

    println!("{}\n", config);
    println!("{}", config.describe());

    println!("--- Current values ---");
    for name in &config {
        println!(
            "{:>8} = {:<16} (from {})",
            name,
            config.get(name)?.to_string(),
            config.source_of(name)?
        );
    }

    println!("\n--- Typed access ---");
    let verbose: bool = config.get_as("verbose")?;
    let ports: Vec<i64> = config.get_as("ports")?;
    println!("verbose: {}", verbose);
    println!("ports:   {:?}", ports);

    println!("\n--- Assignment ---");
    config.set("RETRIES", "5")?;
    println!("retries = {} (from {})", config.get("retries")?, config.source_of("retries")?);

    match config.set("retries", "many") {
        Ok(()) => println!("unexpected success"),
        Err(e) => println!("rejected: {}", e),
    }
    println!("retries is still {}", config.get("retries")?);

    match config.get("missing") {
        Ok(value) => println!("unexpected value {}", value),
        Err(e) => println!("lookup failed: {}", e),
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
