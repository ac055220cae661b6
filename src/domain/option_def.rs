// SPDX-License-Identifier: MIT OR Apache-2.0

//! Option specifications and registered option definitions.
//!
//! An [`OptionSpec`] is what a caller declares: a raw default, a kind, and a doc
//! string. Registering it produces an immutable [`OptionDef`] whose default has been
//! coerced to the declared kind.

use crate::domain::config_value::ConfigValue;
use crate::domain::errors::{ConfigError, Result};
use crate::domain::option_kind::OptionKind;

/// Marker that reserves a name for private use.
pub const RESERVED_PREFIX: char = '_';

/// Returns `true` if `name` is a non-empty identifier that does not start with the
/// reserved prefix.
///
/// An identifier starts with a letter and continues with letters, digits or
/// underscores.
///
/// # Examples
///
/// ```
/// use layercfg::domain::option_def::is_valid_name;
///
/// assert!(is_valid_name("myconfig"));
/// assert!(is_valid_name("x01"));
/// assert!(!is_valid_name("0aa"));
/// assert!(!is_valid_name("_aa"));
/// assert!(!is_valid_name("my-config"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == RESERVED_PREFIX)
}

/// Case-folds an option name for lookup.
pub fn fold(name: &str) -> String {
    name.to_lowercase()
}

/// A declared option: `(default, kind, doc)`.
///
/// # Examples
///
/// ```
/// use layercfg::domain::{OptionKind, OptionSpec};
///
/// let spec = OptionSpec::new(3, OptionKind::Integer, "Number of retries");
/// let from_tuple: OptionSpec = (3, OptionKind::Integer, "Number of retries").into();
/// assert_eq!(spec, from_tuple);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct OptionSpec {
    /// Raw default, coerced at registration
    pub default: ConfigValue,
    /// Declared kind
    pub kind: OptionKind,
    /// Free-form documentation
    pub doc: String,
}

impl OptionSpec {
    /// Creates a new option specification.
    pub fn new(default: impl Into<ConfigValue>, kind: OptionKind, doc: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            kind,
            doc: doc.into(),
        }
    }
}

impl<D, S> From<(D, OptionKind, S)> for OptionSpec
where
    D: Into<ConfigValue>,
    S: Into<String>,
{
    fn from((default, kind, doc): (D, OptionKind, S)) -> Self {
        OptionSpec::new(default, kind, doc)
    }
}

/// A registered option. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionDef {
    name: String,
    kind: OptionKind,
    default: ConfigValue,
    doc: String,
}

impl OptionDef {
    /// Validates `spec` under `name` and coerces its default.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidOptionName`] if the name is not a valid public identifier
    /// - [`ConfigError::UnsupportedType`] if the kind cannot be bound to an option
    /// - [`ConfigError::Coercion`] if the default does not fit the kind
    pub fn new(name: &str, spec: OptionSpec) -> Result<Self> {
        if !is_valid_name(name) {
            return Err(ConfigError::InvalidOptionName {
                name: name.to_string(),
                reason: "option names must be identifiers starting with a letter".to_string(),
            });
        }
        if !spec.kind.is_supported() {
            return Err(ConfigError::UnsupportedType {
                name: name.to_string(),
                kind: spec.kind.label(),
            });
        }
        let default = spec.kind.coerce(&spec.default)?;
        Ok(Self {
            name: name.to_string(),
            kind: spec.kind,
            default,
            doc: spec.doc,
        })
    }

    /// The name as registered, with its original case.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The case-folded lookup key.
    pub fn key(&self) -> String {
        fold(&self.name)
    }

    /// The declared kind.
    pub fn kind(&self) -> &OptionKind {
        &self.kind
    }

    /// The coerced default value.
    pub fn default_value(&self) -> &ConfigValue {
        &self.default
    }

    /// The documentation string.
    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// One documentation line: `name (kind): doc (default value)`.
    pub fn describe(&self) -> String {
        format!(
            "{} ({}): {} (default {})",
            self.name,
            self.kind.label(),
            self.doc,
            self.default.repr()
        )
    }
}
