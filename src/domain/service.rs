// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration service trait definition.
//!
//! This module defines the `ConfigurationService` trait, the case-insensitive access
//! surface shared by every configuration object. Code that only needs to read or
//! write options by name can depend on this trait instead of a concrete type.

use crate::domain::{ConfigValue, Result, ValueHistory};

/// Case-insensitive, name-based access to typed options.
///
/// Names are case-folded before lookup. Unknown names fail with
/// [`ConfigError::UnknownOption`](crate::domain::ConfigError::UnknownOption) on both
/// reads and writes. Writes go through the option's coercion and are recorded with
/// the [`SourceTag::Set`](crate::domain::SourceTag::Set) tag.
///
/// # Examples
///
/// ```rust
/// use layercfg::prelude::*;
///
/// fn bump(service: &mut dyn ConfigurationService) -> Result<()> {
///     let current = service.get("retries")?.as_int().unwrap_or(0);
///     service.set("RETRIES", ConfigValue::from(current + 1))
/// }
///
/// # fn main() -> Result<()> {
/// let mut config = Config::builder("app")
///     .without_default_locations()
///     .option("retries", (2, OptionKind::Integer, "Retry count"))
///     .build()?;
/// bump(&mut config)?;
/// assert_eq!(config.get("retries")?, &ConfigValue::from(3));
/// # Ok(())
/// # }
/// ```
pub trait ConfigurationService {
    /// Returns the current value of an option.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` if no option has this name (ignoring case).
    fn get(&self, name: &str) -> Result<&ConfigValue>;

    /// Coerces `value` and records it as the option's current value.
    ///
    /// On a coercion failure the option's history is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` for unknown names and `Coercion` for values that
    /// do not fit the option's kind.
    fn set(&mut self, name: &str, value: ConfigValue) -> Result<()>;

    /// Returns `true` if an option with this name (ignoring case) exists.
    fn has(&self, name: &str) -> bool;

    /// Returns the full value history of an option.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` if no option has this name (ignoring case).
    fn history(&self, name: &str) -> Result<&ValueHistory>;

    /// Returns the registered option names in registration order.
    fn option_names(&self) -> Vec<&str>;
}
