// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-option value history.
//!
//! Every option keeps an ordered record of the values written to it and where each
//! one came from. The current value is always the last entry. Precedence between
//! sources is therefore nothing more than the order in which they are applied.

use crate::domain::config_value::ConfigValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Where a value came from.
///
/// Two tags are equal when they name the same origin. Writing with a tag equal to
/// the current last entry's tag replaces that entry instead of appending.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceTag {
    /// The option's declared default.
    Default,
    /// A configuration file, identified by its path.
    File(PathBuf),
    /// Literal configuration text supplied by the caller.
    Text,
    /// An environment variable.
    Environ,
    /// A command-line argument.
    Argv,
    /// Direct assignment through the access surface.
    Set,
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceTag::Default => write!(f, "default"),
            SourceTag::File(path) => write!(f, "{}", path.display()),
            SourceTag::Text => write!(f, "<string>"),
            SourceTag::Environ => write!(f, "environ"),
            SourceTag::Argv => write!(f, "argv"),
            SourceTag::Set => write!(f, "set"),
        }
    }
}

/// One `(source, value)` record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Where the value came from
    pub source: SourceTag,
    /// The coerced value
    pub value: ConfigValue,
}

/// The ordered record of values written to a single option, oldest first.
///
/// # Examples
///
/// ```
/// use layercfg::domain::{ConfigValue, SourceTag, ValueHistory};
///
/// let mut history = ValueHistory::new();
/// history.record(SourceTag::Default, ConfigValue::from(1));
/// history.record(SourceTag::Set, ConfigValue::from(2));
/// history.record(SourceTag::Set, ConfigValue::from(3));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.current(), Some(&ConfigValue::from(3)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueHistory {
    entries: Vec<HistoryEntry>,
}

impl ValueHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an already-coerced value.
    ///
    /// If the last entry came from the same source it is overwritten in place,
    /// otherwise a new entry is appended.
    pub fn record(&mut self, source: SourceTag, value: ConfigValue) {
        match self.entries.last_mut() {
            Some(last) if last.source == source => {
                tracing::trace!(source = %source, "overwriting last history entry");
                last.value = value;
            }
            _ => {
                tracing::trace!(source = %source, "appending history entry");
                self.entries.push(HistoryEntry { source, value });
            }
        }
    }

    /// The current value, i.e. the value of the last entry.
    pub fn current(&self) -> Option<&ConfigValue> {
        self.entries.last().map(|entry| &entry.value)
    }

    /// The source of the current value.
    pub fn current_source(&self) -> Option<&SourceTag> {
        self.entries.last().map(|entry| &entry.source)
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history() {
        let history = ValueHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.current(), None);
        assert_eq!(history.current_source(), None);
    }

    #[test]
    fn test_same_source_overwrites() {
        let mut history = ValueHistory::new();
        history.record(SourceTag::Environ, ConfigValue::from(1));
        history.record(SourceTag::Environ, ConfigValue::from(2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(&ConfigValue::from(2)));
    }

    #[test]
    fn test_new_source_appends() {
        let mut history = ValueHistory::new();
        history.record(SourceTag::Default, ConfigValue::from(1));
        history.record(SourceTag::Argv, ConfigValue::from(2));
        history.record(SourceTag::Set, ConfigValue::from(3));
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_source(), Some(&SourceTag::Set));
        assert_eq!(history.entries()[1].source, SourceTag::Argv);
    }

    #[test]
    fn test_only_last_entry_is_overwritten() {
        let mut history = ValueHistory::new();
        history.record(SourceTag::Set, ConfigValue::from(1));
        history.record(SourceTag::Argv, ConfigValue::from(2));
        history.record(SourceTag::Set, ConfigValue::from(3));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_distinct_files_append() {
        let mut history = ValueHistory::new();
        history.record(SourceTag::File("a.cfg".into()), ConfigValue::from(1));
        history.record(SourceTag::File("b.cfg".into()), ConfigValue::from(2));
        history.record(SourceTag::File("b.cfg".into()), ConfigValue::from(3));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(SourceTag::Default.to_string(), "default");
        assert_eq!(SourceTag::Text.to_string(), "<string>");
        assert_eq!(SourceTag::Environ.to_string(), "environ");
        assert_eq!(SourceTag::Argv.to_string(), "argv");
        assert_eq!(SourceTag::Set.to_string(), "set");
        assert_eq!(SourceTag::File("/tmp/x.cfg".into()).to_string(), "/tmp/x.cfg");
    }
}
