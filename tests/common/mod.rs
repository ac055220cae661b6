// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use layercfg::prelude::*;
use std::collections::HashMap;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

/// A builder that never looks at the host: no default files, no process
/// environment, no process arguments.
#[allow(dead_code)]
pub fn hermetic(name: &str) -> ConfigBuilder {
    Config::builder(name)
        .without_default_locations()
        .with_env(EnvVarAdapter::with_values(HashMap::new()))
        .with_args(CommandLineAdapter::from_args(Vec::<String>::new()))
}

/// Writes `content` to a temporary `.cfg` file that lives as long as the handle.
#[allow(dead_code)]
pub fn cfg_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".cfg")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Builds an injected environment from `(name, value)` pairs.
#[allow(dead_code)]
pub fn env_of(pairs: &[(&str, &str)]) -> EnvVarAdapter {
    EnvVarAdapter::with_values(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

/// Helper to set and clean up process environment variables
#[allow(dead_code)]
pub struct EnvGuard {
    keys: Vec<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}
