// SPDX-License-Identifier: MIT OR Apache-2.0

//! A layered configuration crate built on hexagonal architecture.
//!
//! An application declares a named configuration with a fixed set of typed options.
//! Values are resolved from several layers, each overriding the previous one:
//! declared defaults, per-user and application INI files, caller-supplied files or
//! INI text, environment variables, command-line arguments and finally direct
//! assignment in code. Every option keeps a history of which source set which value.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and rules (`ConfigValue`, `OptionKind`, `OptionDef`,
//!   `ValueHistory`, errors)
//! - **Ports**: Trait definitions for reading text and process state (`ConfigParser`,
//!   `ConfigSource`)
//! - **Adapters**: The INI parser, environment and command-line sources, and default
//!   file locations
//! - **Service**: The `Config` object and the builder that resolves its sources
//!
//! # Feature Flags
//!
//! - `env`: Read `{CONFIG}_{OPTION}` environment variables (default)
//! - `cli`: Read `--{config}-{option} value` command-line arguments (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use layercfg::prelude::*;
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<()> {
//! let mut env = HashMap::new();
//! env.insert("MYCONFIG_FOO".to_string(), "off".to_string());
//!
//! let mut config = Config::builder("myconfig")
//!     .without_default_locations()
//!     .with_text("[myconfig]\nfoo = yes\nbar = 42\n")
//!     .with_env(EnvVarAdapter::with_values(env))
//!     .with_args(CommandLineAdapter::from_args(vec!["--myconfig-baz", "2.5"]))
//!     .option("foo", (true, OptionKind::Boolean, "Whether to foo"))
//!     .option("bar", (0, OptionKind::Integer, "How many bars"))
//!     .option("baz", (1.0, OptionKind::Float, "Scale of the baz"))
//!     .build()?;
//!
//! assert_eq!(config.get("foo")?, &ConfigValue::from(false));
//! assert_eq!(config.get("bar")?, &ConfigValue::from(42));
//! assert_eq!(config.get("baz")?, &ConfigValue::from(2.5));
//!
//! config.set("BAR", "7")?;
//! assert_eq!(config.source_of("bar")?, &SourceTag::Set);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigValue, ConfigurationService, HistoryEntry, OptionDef, OptionKind,
        OptionSpec, Result, SourceTag, ValueHistory,
    };
    pub use crate::ports::{ConfigParser, ConfigSource};
    pub use crate::service::{Config, ConfigBuilder};

    // Re-export adapters based on feature flags
    pub use crate::adapters::IniParser;
    #[cfg(feature = "cli")]
    pub use crate::adapters::CommandLineAdapter;
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
}
