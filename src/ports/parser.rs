// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which provides an interface for
//! turning configuration text into a flat key-value structure.

use crate::domain::Result;
use std::collections::HashMap;

/// A trait for parsing configuration text.
///
/// # Key Format
///
/// Parsers flatten sectioned text into `section.key` entries. Section names keep
/// their case; keys are case-folded. For example:
///
/// ```ini
/// [myapp]
/// Retries = 3
/// ```
///
/// is parsed into `myapp.retries` -> `"3"`.
///
/// # Examples
///
/// ```rust
/// use layercfg::ports::ConfigParser;
/// use layercfg::domain::Result;
/// use std::collections::HashMap;
///
/// struct MyParser;
///
/// impl ConfigParser for MyParser {
///     fn parse(&self, content: &str, origin: &str) -> Result<HashMap<String, String>> {
///         // Implementation here
///         Ok(HashMap::new())
///     }
///
///     fn format_name(&self) -> &str {
///         "myformat"
///     }
/// }
/// ```
pub trait ConfigParser {
    /// Parses configuration text into a flat `section.key` map.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw text
    /// * `origin` - File path or `<string>`, used in error messages
    ///
    /// # Returns
    ///
    /// * `Ok(HashMap<String, String>)` - The parsed configuration as key-value pairs
    /// * `Err(ConfigError)` - The text is malformed
    fn parse(&self, content: &str, origin: &str) -> Result<HashMap<String, String>>;

    /// Returns a short name for the format, used in diagnostics.
    fn format_name(&self) -> &str;

    /// Looks up `key` of `section` in a map produced by [`parse`](Self::parse).
    ///
    /// The section must match exactly; the key is case-folded.
    fn lookup<'a>(
        &self,
        parsed: &'a HashMap<String, String>,
        section: &str,
        key: &str,
    ) -> Option<&'a str> {
        parsed
            .get(&format!("{}.{}", section, key.to_lowercase()))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test implementation that treats every line as `section.key=value`
    struct LineParser;

    impl ConfigParser for LineParser {
        fn parse(&self, content: &str, _origin: &str) -> Result<HashMap<String, String>> {
            Ok(content
                .lines()
                .filter_map(|line| line.split_once('='))
                .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
                .collect())
        }

        fn format_name(&self) -> &str {
            "lines"
        }
    }

    #[test]
    fn test_parser_parse() {
        let parser = LineParser;
        let result = parser.parse("app.host = localhost\napp.port=80", "<string>").unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.get("app.host"), Some(&"localhost".to_string()));
    }

    #[test]
    fn test_parser_lookup_folds_key() {
        let parser = LineParser;
        let result = parser.parse("app.port=80", "<string>").unwrap();
        assert_eq!(parser.lookup(&result, "app", "PORT"), Some("80"));
        assert_eq!(parser.lookup(&result, "APP", "port"), None);
    }

    #[test]
    fn test_parser_format_name() {
        assert_eq!(LineParser.format_name(), "lines");
    }
}
