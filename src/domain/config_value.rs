// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dynamically typed configuration values.
//!
//! This module provides the `ConfigValue` type. It plays two roles: it is the raw
//! input handed to a coercion (an already-typed Rust value, or a string read from a
//! file, the environment or the command line), and it is the canonical typed value
//! stored in an option's history once coercion succeeded.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw or canonical configuration value.
///
/// Values serialize untagged, so a `ConfigValue` round-trips through any
/// self-describing serde format as the corresponding native value.
///
/// # Examples
///
/// ```
/// use layercfg::domain::ConfigValue;
///
/// let value = ConfigValue::from(42);
/// assert_eq!(value.as_int(), Some(42));
/// assert_eq!(value.to_string(), "42");
///
/// let list = ConfigValue::from(vec![1, 2, 3]);
/// assert_eq!(list.to_string(), "[1, 2, 3]");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// The absence of a value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered sequence of values. Canonical tuple values use this variant.
    List(Vec<ConfigValue>),
}

impl ConfigValue {
    /// Returns the boolean if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int`.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the number if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is a `List`.
    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns `true` if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Renders the value the way it would be written as a literal: strings are
    /// quoted, everything else matches `Display`.
    ///
    /// ```
    /// use layercfg::domain::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::from("a b").repr(), "\"a b\"");
    /// assert_eq!(ConfigValue::from(vec!["x"]).repr(), "[\"x\"]");
    /// ```
    pub fn repr(&self) -> String {
        match self {
            ConfigValue::Str(s) => format!("{:?}", s),
            ConfigValue::List(items) => {
                let inner: Vec<String> = items.iter().map(ConfigValue::repr).collect();
                format!("[{}]", inner.join(", "))
            }
            other => other.to_string(),
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Int(_) => "int",
            ConfigValue::Float(_) => "float",
            ConfigValue::Str(_) => "str",
            ConfigValue::List(_) => "list",
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => write!(f, "null"),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Int(n) => write!(f, "{}", n),
            // Debug keeps the fractional part of whole numbers ("3.0")
            ConfigValue::Float(x) => write!(f, "{:?}", x),
            ConfigValue::Str(s) => write!(f, "{}", s),
            ConfigValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Int(n)
    }
}

impl From<i32> for ConfigValue {
    fn from(n: i32) -> Self {
        ConfigValue::Int(i64::from(n))
    }
}

impl From<u32> for ConfigValue {
    fn from(n: u32) -> Self {
        ConfigValue::Int(i64::from(n))
    }
}

impl From<f64> for ConfigValue {
    fn from(x: f64) -> Self {
        ConfigValue::Float(x)
    }
}

impl From<f32> for ConfigValue {
    fn from(x: f32) -> Self {
        ConfigValue::Float(f64::from(x))
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Str(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Str(s.to_string())
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(items: Vec<T>) -> Self {
        ConfigValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ConfigValue>, const N: usize> From<[T; N]> for ConfigValue {
    fn from(items: [T; N]) -> Self {
        ConfigValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ConfigValue>> From<Option<T>> for ConfigValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ConfigValue::Null, Into::into)
    }
}

impl TryFrom<ConfigValue> for bool {
    type Error = ConfigError;

    fn try_from(value: ConfigValue) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| ConfigError::coercion("bool", &value, "value is not a boolean"))
    }
}

impl TryFrom<ConfigValue> for i64 {
    type Error = ConfigError;

    fn try_from(value: ConfigValue) -> Result<Self> {
        value
            .as_int()
            .ok_or_else(|| ConfigError::coercion("int", &value, "value is not an integer"))
    }
}

impl TryFrom<ConfigValue> for f64 {
    type Error = ConfigError;

    fn try_from(value: ConfigValue) -> Result<Self> {
        value
            .as_float()
            .ok_or_else(|| ConfigError::coercion("float", &value, "value is not a float"))
    }
}

impl TryFrom<ConfigValue> for String {
    type Error = ConfigError;

    fn try_from(value: ConfigValue) -> Result<Self> {
        match value {
            ConfigValue::Str(s) => Ok(s),
            other => Err(ConfigError::coercion("str", &other, "value is not a string")),
        }
    }
}

impl<T> TryFrom<ConfigValue> for Vec<T>
where
    T: TryFrom<ConfigValue, Error = ConfigError>,
{
    type Error = ConfigError;

    fn try_from(value: ConfigValue) -> Result<Self> {
        match value {
            ConfigValue::List(items) => items.into_iter().map(T::try_from).collect(),
            other => Err(ConfigError::coercion("list", &other, "value is not a list")),
        }
    }
}
