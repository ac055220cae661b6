// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line argument configuration source adapter.
//!
//! This module provides an adapter that reads option values from command-line
//! arguments of the form `--{config}-{option} value`.

use crate::domain::{ConfigValue, Result, SourceTag};
use crate::ports::ConfigSource;

/// Configuration source adapter for command-line arguments.
///
/// For configuration `myconfig`, the flag `--myconfig-foo` sets option `foo` to the
/// token that follows it. The configuration prefix is matched in lower case; the
/// option part is matched case-insensitively. A flag in the last position has no
/// value and is ignored, as are flags for unknown options. When a flag is repeated,
/// the last occurrence wins.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::CommandLineAdapter;
/// use layercfg::ports::ConfigSource;
///
/// let args = vec!["--myconfig-foo", "3", "positional"];
/// let adapter = CommandLineAdapter::from_args(args);
/// assert!(adapter.get("myconfig", "FOO").unwrap().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandLineAdapter {
    /// Arguments, without the program name
    args: Vec<String>,
}

impl CommandLineAdapter {
    /// Creates a new command-line adapter with no arguments.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Creates a new command-line adapter from a vector of arguments.
    ///
    /// The arguments must not include the program name.
    pub fn from_args<S: AsRef<str>>(args: Vec<S>) -> Self {
        Self {
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
        }
    }

    /// Creates a new command-line adapter from the process's command-line arguments.
    ///
    /// This skips the first argument (the program name). Arguments that are not
    /// valid Unicode are dropped.
    ///
    /// ```rust,no_run
    /// use layercfg::adapters::CommandLineAdapter;
    ///
    /// let adapter = CommandLineAdapter::from_env_args();
    /// ```
    pub fn from_env_args() -> Self {
        let args: Vec<String> = std::env::args_os()
            .skip(1)
            .filter_map(|arg| arg.into_string().ok())
            .collect();
        Self::from_args(args)
    }

    /// The flag prefix for a configuration: `--{lowercase config}-`.
    ///
    /// ```rust
    /// use layercfg::adapters::CommandLineAdapter;
    ///
    /// assert_eq!(CommandLineAdapter::flag_prefix("MyConfig"), "--myconfig-");
    /// ```
    pub fn flag_prefix(config_name: &str) -> String {
        format!("--{}-", config_name.to_lowercase())
    }

    /// The arguments this adapter scans.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl ConfigSource for CommandLineAdapter {
    fn name(&self) -> &str {
        "cli"
    }

    fn tag(&self) -> SourceTag {
        SourceTag::Argv
    }

    fn get(&self, config_name: &str, option: &str) -> Result<Option<ConfigValue>> {
        let prefix = Self::flag_prefix(config_name);
        let option = option.to_lowercase();

        let found = self
            .args
            .windows(2)
            .filter(|pair| {
                pair[0]
                    .strip_prefix(&prefix)
                    .is_some_and(|name| name.to_lowercase() == option)
            })
            .map(|pair| pair[1].clone())
            .last();

        Ok(found.map(ConfigValue::from))
    }
}
