// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the option schema, the value model with its coercion rules,
//! the per-option value history, and the error taxonomy. It performs no I/O.

pub mod config_value;
pub mod errors;
pub mod history;
pub mod option_def;
pub mod option_kind;
pub mod service;

// Re-export commonly used types
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use history::{HistoryEntry, SourceTag, ValueHistory};
pub use option_def::{OptionDef, OptionSpec};
pub use option_kind::OptionKind;
pub use service::ConfigurationService;
