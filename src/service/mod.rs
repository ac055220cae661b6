// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration object.
//!
//! This module contains [`Config`], the concrete implementation of the
//! `ConfigurationService` trait, and the builder that resolves its sources.

pub mod layered_config;

// Re-export commonly used types
pub use layered_config::{Config, ConfigBuilder, OptionNames};
