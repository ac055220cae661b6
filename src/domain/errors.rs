// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur while building a configuration
//! object, resolving its sources, and reading or writing option values.
//! All errors use `thiserror` for proper error handling and conversion.

use crate::domain::config_value::ConfigValue;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// The variants fall into four groups:
///
/// - **Schema errors** (`InvalidName`, `InvalidOptionName`, `UnsupportedType`,
///   `InvalidSource`) are raised while a [`Config`](crate::service::Config) is built.
///   An object whose construction failed must not be used.
/// - **Source errors** (`SourceError`, `ParseError`) describe a broken file
///   or text source. Construction logs and skips them.
/// - **Lookup errors** (`UnknownOption`) affect only the call that raised them.
/// - **Coercion errors** (`Coercion`) reject a single write and leave the option's
///   history untouched.
///
/// # Examples
///
/// ```
/// use layercfg::domain::errors::ConfigError;
///
/// fn lookup() -> Result<(), ConfigError> {
///     Err(ConfigError::UnknownOption {
///         name: "colour".to_string(),
///     })
/// }
///
/// assert!(lookup().unwrap_err().to_string().contains("colour"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration name is not a valid, public identifier.
    #[error("Invalid configuration name '{name}': must be an identifier not starting with '_'")]
    InvalidName {
        /// The rejected name
        name: String,
    },

    /// An option name is not a valid, public identifier, or collides with another
    /// option once case-folded.
    #[error("Invalid option name '{name}': {reason}")]
    InvalidOptionName {
        /// The rejected option name
        name: String,
        /// Why the name was rejected
        reason: String,
    },

    /// An option was declared with a kind that is not supported.
    #[error("Unsupported option type '{kind}' for option '{name}'")]
    UnsupportedType {
        /// The option being declared (empty when parsing a bare kind name)
        name: String,
        /// The offending kind description
        kind: String,
    },

    /// A source passed to the builder is neither literal text nor a path.
    #[error("Invalid configuration source {value}: sources must be text or file paths")]
    InvalidSource {
        /// A rendering of the rejected source
        value: String,
    },

    /// The requested option is not registered on this configuration.
    #[error("Configuration has no option '{name}'")]
    UnknownOption {
        /// The name that was looked up
        name: String,
    },

    /// A raw value could not be coerced to the option's declared kind.
    #[error("Cannot convert {value} to {kind}: {reason}")]
    Coercion {
        /// Label of the target kind
        kind: String,
        /// A rendering of the rejected value
        value: String,
        /// Why the conversion failed
        reason: String,
    },

    /// A text source could not be parsed.
    #[error("Failed to parse configuration from {origin} at line {line}: {message}")]
    ParseError {
        /// Path or `<string>` marker of the text being parsed
        origin: String,
        /// One-based line number of the failure
        line: usize,
        /// The error message
        message: String,
    },

    /// An error occurred while reading a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a coercion error for `value` targeting the kind labelled `kind`.
    pub fn coercion(kind: &str, value: &ConfigValue, reason: impl Into<String>) -> Self {
        ConfigError::Coercion {
            kind: kind.to_string(),
            value: value.repr(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for errors that make a configuration object unusable.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            ConfigError::InvalidName { .. }
                | ConfigError::InvalidOptionName { .. }
                | ConfigError::UnsupportedType { .. }
                | ConfigError::InvalidSource { .. }
        )
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
