// SPDX-License-Identifier: MIT OR Apache-2.0

//! Option kinds and their coercion rules.
//!
//! Every option declares an [`OptionKind`]. The kind owns a single dispatch function,
//! [`OptionKind::coerce`], which maps any raw [`ConfigValue`] to the canonical value
//! for that kind or rejects it. Coercion is pure: identical input always yields an
//! identical result, and coercing a canonical value returns it unchanged.

use crate::domain::config_value::ConfigValue;
use crate::domain::errors::{ConfigError, Result};
use std::fmt;
use std::str::FromStr;

/// Strings accepted as `true` by the boolean kind (compared case-insensitively).
const TRUTHY: [&str; 4] = ["1", "yes", "true", "on"];

/// Strings accepted as `false` by the boolean kind (compared case-insensitively).
const FALSY: [&str; 4] = ["0", "no", "false", "off"];

/// The declared type of an option.
///
/// # Examples
///
/// ```
/// use layercfg::domain::{ConfigValue, OptionKind};
///
/// let kind = OptionKind::tuple_of(OptionKind::Integer);
/// let value = kind.coerce(&ConfigValue::from("1, 2,-3,4")).unwrap();
/// assert_eq!(value, ConfigValue::from(vec![1, 2, -3, 4]));
/// assert_eq!(kind.label(), "int-tuple");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// Any value, stored as its textual representation.
    String,
    /// `true`/`false`, or one of the recognised yes/no strings.
    Boolean,
    /// A signed 64-bit integer.
    Integer,
    /// A 64-bit float.
    Float,
    /// A fixed-order sequence whose elements all have the inner kind.
    Tuple(Box<OptionKind>),
}

impl OptionKind {
    /// Shorthand for `OptionKind::Tuple(Box::new(element))`.
    pub fn tuple_of(element: OptionKind) -> Self {
        OptionKind::Tuple(Box::new(element))
    }

    /// Human-readable label used in documentation and errors.
    ///
    /// Tuple kinds are labelled with their element label followed by `-tuple`.
    pub fn label(&self) -> String {
        match self {
            OptionKind::String => "str".to_string(),
            OptionKind::Boolean => "bool".to_string(),
            OptionKind::Integer => "int".to_string(),
            OptionKind::Float => "float".to_string(),
            OptionKind::Tuple(element) => format!("{}-tuple", element.label()),
        }
    }

    /// Returns `true` if this kind can be bound to an option.
    ///
    /// Tuples may only contain scalar kinds; a tuple of tuples is rejected.
    pub fn is_supported(&self) -> bool {
        match self {
            OptionKind::Tuple(element) => !matches!(**element, OptionKind::Tuple(_)),
            _ => true,
        }
    }

    /// Coerces a raw value to the canonical value of this kind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Coercion`] when the value does not fit the kind.
    pub fn coerce(&self, value: &ConfigValue) -> Result<ConfigValue> {
        match self {
            OptionKind::String => Ok(ConfigValue::Str(value.to_string())),
            OptionKind::Boolean => as_bool(value).map(ConfigValue::Bool),
            OptionKind::Integer => as_int(value).map(ConfigValue::Int),
            OptionKind::Float => as_float(value).map(ConfigValue::Float),
            OptionKind::Tuple(element) => as_tuple(element, value).map(ConfigValue::List),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for OptionKind {
    type Err = ConfigError;

    /// Parses a kind name: `str`, `bool`, `int`, `float`, or a tuple written as
    /// `[int]` or `int-tuple`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let unsupported = || ConfigError::UnsupportedType {
            name: String::new(),
            kind: s.to_string(),
        };

        if let Some(inner) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .or_else(|| trimmed.strip_suffix("-tuple"))
        {
            let element: OptionKind = inner.parse().map_err(|_| unsupported())?;
            let kind = OptionKind::tuple_of(element);
            return if kind.is_supported() {
                Ok(kind)
            } else {
                Err(unsupported())
            };
        }

        match trimmed {
            "str" | "string" => Ok(OptionKind::String),
            "bool" | "boolean" => Ok(OptionKind::Boolean),
            "int" | "integer" => Ok(OptionKind::Integer),
            "float" => Ok(OptionKind::Float),
            _ => Err(unsupported()),
        }
    }
}

fn as_bool(value: &ConfigValue) -> Result<bool> {
    match value {
        ConfigValue::Bool(b) => Ok(*b),
        ConfigValue::Str(s) => {
            let folded = s.to_lowercase();
            if TRUTHY.contains(&folded.as_str()) {
                Ok(true)
            } else if FALSY.contains(&folded.as_str()) {
                Ok(false)
            } else {
                Err(ConfigError::coercion(
                    "bool",
                    value,
                    "expected one of 1/yes/true/on or 0/no/false/off",
                ))
            }
        }
        // Numbers are deliberately not accepted as booleans.
        other => Err(ConfigError::coercion(
            "bool",
            other,
            format!("{} values cannot be used as booleans", other.type_name()),
        )),
    }
}

fn as_int(value: &ConfigValue) -> Result<i64> {
    match value {
        ConfigValue::Int(n) => Ok(*n),
        ConfigValue::Float(x) => {
            let truncated = x.trunc();
            // `as` saturates, so range-check before converting
            if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64
            {
                Ok(truncated as i64)
            } else {
                Err(ConfigError::coercion("int", value, "float is out of integer range"))
            }
        }
        ConfigValue::Str(s) => parse_int(s)
            .ok_or_else(|| ConfigError::coercion("int", value, "not a base-10 integer")),
        other => Err(ConfigError::coercion(
            "int",
            other,
            format!("{} values cannot be used as integers", other.type_name()),
        )),
    }
}

/// Parses an optionally signed run of ASCII digits, ignoring surrounding whitespace.
fn parse_int(s: &str) -> Option<i64> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

fn as_float(value: &ConfigValue) -> Result<f64> {
    match value {
        ConfigValue::Int(n) => Ok(*n as f64),
        ConfigValue::Float(x) => Ok(*x),
        ConfigValue::Str(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| ConfigError::coercion("float", value, e.to_string())),
        other => Err(ConfigError::coercion(
            "float",
            other,
            format!("{} values cannot be used as floats", other.type_name()),
        )),
    }
}

fn as_tuple(element: &OptionKind, value: &ConfigValue) -> Result<Vec<ConfigValue>> {
    let label = format!("{}-tuple", element.label());
    match value {
        ConfigValue::List(items) => items
            .iter()
            .map(|item| element.coerce(item))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| ConfigError::coercion(&label, value, e.to_string())),
        ConfigValue::Str(s) => s
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(|field| element.coerce(&ConfigValue::from(field)))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| ConfigError::coercion(&label, value, e.to_string())),
        other => Err(ConfigError::coercion(
            &label,
            other,
            format!("{} values cannot be used as tuples", other.type_name()),
        )),
    }
}
