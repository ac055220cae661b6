// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration source adapter.
//!
//! This module provides an adapter that reads option values from environment
//! variables named `{CONFIG}_{OPTION}` in upper case.

use crate::domain::{ConfigValue, Result, SourceTag};
use crate::ports::ConfigSource;
use std::collections::HashMap;
use std::env;

/// Configuration source adapter for environment variables.
///
/// The value of option `foo` of configuration `myconfig` is read from `MYCONFIG_FOO`.
/// A variable that is unset or set to the empty string provides no value.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::EnvVarAdapter;
/// use layercfg::ports::ConfigSource;
/// use std::collections::HashMap;
///
/// // Read the process environment
/// let adapter = EnvVarAdapter::new();
///
/// // Or a synthetic one
/// let mut values = HashMap::new();
/// values.insert("MYCONFIG_FOO".to_string(), "3".to_string());
/// let adapter = EnvVarAdapter::with_values(values);
/// assert!(adapter.get("myconfig", "foo").unwrap().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvVarAdapter {
    /// Injected variables, keyed by upper-cased name. `None` reads the process environment.
    values: Option<HashMap<String, String>>,
}

impl EnvVarAdapter {
    /// Creates an adapter that reads the process environment at lookup time.
    pub fn new() -> Self {
        Self { values: None }
    }

    /// Creates an adapter with pre-populated values instead of the process environment.
    ///
    /// Variable names are matched case-insensitively, as on hosts whose environment
    /// is case-insensitive.
    ///
    /// # Arguments
    ///
    /// * `values` - A HashMap of variable names to values
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            values: Some(
                values
                    .into_iter()
                    .map(|(k, v)| (k.to_uppercase(), v))
                    .collect(),
            ),
        }
    }

    /// The variable name consulted for `option` of configuration `config_name`.
    ///
    /// ```rust
    /// use layercfg::adapters::EnvVarAdapter;
    ///
    /// assert_eq!(EnvVarAdapter::variable_name("myconfig", "Foo"), "MYCONFIG_FOO");
    /// ```
    pub fn variable_name(config_name: &str, option: &str) -> String {
        format!("{}_{}", config_name, option).to_uppercase()
    }

    fn lookup(&self, variable: &str) -> Option<String> {
        match &self.values {
            Some(values) => values.get(variable).cloned(),
            None => env::var(variable).ok(),
        }
    }
}

impl ConfigSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn tag(&self) -> SourceTag {
        SourceTag::Environ
    }

    fn get(&self, config_name: &str, option: &str) -> Result<Option<ConfigValue>> {
        let variable = Self::variable_name(config_name, option);
        let Some(value) = self.lookup(&variable) else {
            return Ok(None);
        };

        if value.is_empty() {
            tracing::debug!("Ignoring empty environment variable {}", variable);
            return Ok(None);
        }

        Ok(Some(ConfigValue::from(value)))
    }
}
