// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, the port through which process-wide
//! state (environment variables, command-line arguments) is read. Sources are
//! injected into the builder, so tests can supply synthetic state without touching
//! the real process.

use crate::domain::{ConfigValue, Result, SourceTag};

/// A read-only source of raw option values keyed by configuration and option name.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded contexts.
///
/// # Examples
///
/// ```rust
/// use layercfg::ports::ConfigSource;
/// use layercfg::domain::{ConfigValue, Result, SourceTag};
///
/// struct Fixed;
///
/// impl ConfigSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn tag(&self) -> SourceTag {
///         SourceTag::Environ
///     }
///
///     fn get(&self, config_name: &str, option: &str) -> Result<Option<ConfigValue>> {
///         Ok((option == "debug").then(|| ConfigValue::from("yes")))
///     }
/// }
///
/// let source = Fixed;
/// assert!(source.get("app", "debug").unwrap().is_some());
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this source, used for logging.
    fn name(&self) -> &str;

    /// The tag recorded in an option's history for values from this source.
    fn tag(&self) -> SourceTag;

    /// Looks up the raw value for `option` of configuration `config_name`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` - The source provides a value
    /// * `Ok(None)` - The source has nothing for this option
    /// * `Err(ConfigError)` - The source could not be read
    fn get(&self, config_name: &str, option: &str) -> Result<Option<ConfigValue>>;
}
