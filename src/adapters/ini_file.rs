// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI configuration text adapter.
//!
//! This module provides the parser for the INI dialect read from configuration
//! files and literal text sources, and the bounded file reader used to load them.

use crate::domain::{ConfigError, Result};
use crate::ports::ConfigParser;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Maximum allowed file size for configuration files (10MB)
/// This prevents denial of service attacks via extremely large files
const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Name of the section whose keys every other section inherits.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// INI parser implementation.
///
/// The dialect:
///
/// - `[section]` headers, optionally followed by a `#` or `;` comment; section
///   names are case-sensitive
/// - `key = value` or `key: value`, split at the first delimiter; keys are case-folded
/// - full-line comments starting with `#` or `;`
/// - indented lines continue the previous value (joined with `\n`)
/// - keys of a `[DEFAULT]` section are inherited by every other section
/// - a key before any header, a line without a delimiter, a duplicate section or a
///   duplicate key within a section is a parse error
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::IniParser;
/// use layercfg::ports::ConfigParser;
///
/// let parser = IniParser::new();
/// let parsed = parser.parse("[myapp]\nFoo = yes\n", "<string>").unwrap();
/// assert_eq!(parsed.get("myapp.foo"), Some(&"yes".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IniParser;

impl IniParser {
    /// Creates a new INI parser.
    pub fn new() -> Self {
        IniParser
    }
}

impl ConfigParser for IniParser {
    fn parse(&self, content: &str, origin: &str) -> Result<HashMap<String, String>> {
        let error = |line: usize, message: &str| ConfigError::ParseError {
            origin: origin.to_string(),
            line,
            message: message.to_string(),
        };

        let mut sections: Vec<(String, Vec<(String, String)>)> = Vec::new();
        // Whether the last non-comment line was a key line that may continue
        let mut in_value = false;

        for (index, raw_line) in content.lines().enumerate() {
            let line_no = index + 1;
            let trimmed = raw_line.trim();

            if trimmed.is_empty() {
                in_value = false;
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let indented = raw_line.starts_with(char::is_whitespace);
            if indented && in_value {
                if let Some((_, entries)) = sections.last_mut() {
                    if let Some((_, value)) = entries.last_mut() {
                        if !value.is_empty() {
                            value.push('\n');
                        }
                        value.push_str(trimmed);
                        continue;
                    }
                }
            }

            if let Some(rest) = trimmed.strip_prefix('[') {
                let Some((header, trailing)) = rest.split_once(']') else {
                    return Err(error(line_no, "unterminated section header"));
                };
                let trailing = trailing.trim_start();
                if !(trailing.is_empty() || trailing.starts_with(&['#', ';'][..])) {
                    return Err(error(line_no, "unexpected text after section header"));
                }
                if header.is_empty() {
                    return Err(error(line_no, "empty section header"));
                }
                if sections.iter().any(|(name, _)| name == header) {
                    return Err(error(line_no, &format!("duplicate section '{}'", header)));
                }
                sections.push((header.to_string(), Vec::new()));
                in_value = false;
                continue;
            }

            let Some((_, entries)) = sections.last_mut() else {
                return Err(error(line_no, "key found before any section header"));
            };

            let split_at = trimmed.find(&['=', ':'][..]);
            let Some(pos) = split_at else {
                return Err(error(line_no, "expected 'key = value'"));
            };
            let key = trimmed[..pos].trim().to_lowercase();
            let value = trimmed[pos + 1..].trim().to_string();
            if key.is_empty() {
                return Err(error(line_no, "empty key"));
            }
            if entries.iter().any(|(k, _)| *k == key) {
                return Err(error(line_no, &format!("duplicate key '{}'", key)));
            }
            entries.push((key, value));
            in_value = true;
        }

        let defaults: Vec<(String, String)> = sections
            .iter()
            .find(|(name, _)| name == DEFAULT_SECTION)
            .map(|(_, entries)| entries.clone())
            .unwrap_or_default();

        let mut result = HashMap::new();
        for (section, entries) in &sections {
            if section != DEFAULT_SECTION {
                for (key, value) in &defaults {
                    result.insert(format!("{}.{}", section, key), value.clone());
                }
            }
            for (key, value) in entries {
                result.insert(format!("{}.{}", section, key), value.clone());
            }
        }
        Ok(result)
    }

    fn format_name(&self) -> &str {
        "ini"
    }
}

/// Reads a configuration file as UTF-8 text.
///
/// The file is opened, read fully and closed before this returns, also on failure.
///
/// # Errors
///
/// Returns [`ConfigError::SourceError`] if the file cannot be inspected, is larger
/// than 10MB, cannot be read, or is not valid UTF-8.
pub fn read_config_file(path: &Path) -> Result<String> {
    // Check file size before reading to prevent DoS via large files
    let metadata = fs::metadata(path).map_err(|e| ConfigError::SourceError {
        source_name: "file".to_string(),
        message: format!("Failed to read file metadata: {}", path.display()),
        source: Some(Box::new(e)),
    })?;

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::SourceError {
            source_name: "file".to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            ),
            source: None,
        });
    }

    let bytes = fs::read(path).map_err(|e| ConfigError::SourceError {
        source_name: "file".to_string(),
        message: format!("Failed to read configuration file: {}", path.display()),
        source: Some(Box::new(e)),
    })?;

    String::from_utf8(bytes).map_err(|e| ConfigError::SourceError {
        source_name: "file".to_string(),
        message: format!("Configuration file is not valid UTF-8: {}", path.display()),
        source: Some(Box::new(e)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(content: &str) -> Result<HashMap<String, String>> {
        IniParser::new().parse(content, "<string>")
    }

    #[test]
    fn test_ini_parser_simple() {
        let result = parse("\n\n[testconfig]\n\nfoo = yes\nbar = 3\nspam = 2.3\neggs = bla bla\n\n").unwrap();
        assert_eq!(result.get("testconfig.foo"), Some(&"yes".to_string()));
        assert_eq!(result.get("testconfig.bar"), Some(&"3".to_string()));
        assert_eq!(result.get("testconfig.spam"), Some(&"2.3".to_string()));
        assert_eq!(result.get("testconfig.eggs"), Some(&"bla bla".to_string()));
    }

    #[test]
    fn test_ini_parser_colon_delimiter_and_case() {
        let result = parse("[App]\nHost: localhost\nURL = http://x:80/").unwrap();
        assert_eq!(result.get("App.host"), Some(&"localhost".to_string()));
        assert_eq!(result.get("App.url"), Some(&"http://x:80/".to_string()));
        assert_eq!(result.get("app.host"), None);
    }

    #[test]
    fn test_ini_parser_comments() {
        let result = parse("# leading\n[a]\n; note\nx = 1 ; kept\n").unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.get("a.x"), Some(&"1 ; kept".to_string()));
    }

    #[test]
    fn test_ini_parser_continuation() {
        let result = parse("[a]\nmsg = first\n  second\n\tthird\nother = 2").unwrap();
        assert_eq!(result.get("a.msg"), Some(&"first\nsecond\nthird".to_string()));
        assert_eq!(result.get("a.other"), Some(&"2".to_string()));
    }

    #[test]
    fn test_ini_parser_empty_value() {
        let result = parse("[a]\nx =\n").unwrap();
        assert_eq!(result.get("a.x"), Some(&String::new()));
    }

    #[test]
    fn test_ini_parser_default_section() {
        let result = parse("[DEFAULT]\nlevel = 1\nname = base\n[a]\nlevel = 2\n[b]\n").unwrap();
        assert_eq!(result.get("a.level"), Some(&"2".to_string()));
        assert_eq!(result.get("a.name"), Some(&"base".to_string()));
        assert_eq!(result.get("b.level"), Some(&"1".to_string()));
    }

    #[test]
    fn test_ini_parser_errors() {
        let cases = [
            ("x = 1\n[a]", 1),
            ("[a]\njust words", 2),
            ("[a]\nx = 1\n[a]", 3),
            ("[a]\nx = 1\nX = 2", 3),
            ("[a]\n = 1", 2),
            ("[]", 1),
            ("[a", 1),
            ("[a] x = 1", 1),
        ];
        for (content, expected_line) in cases {
            match parse(content) {
                Err(ConfigError::ParseError { line, origin, .. }) => {
                    assert_eq!(line, expected_line, "{:?}", content);
                    assert_eq!(origin, "<string>");
                }
                other => panic!("expected parse error for {:?}, got {:?}", content, other),
            }
        }
    }

    #[test]
    fn test_ini_parser_header_comment() {
        let result = parse("[app] # main settings\nlevel = 3\n[other]; more\nx = 1\n").unwrap();
        assert_eq!(result.get("app.level"), Some(&"3".to_string()));
        assert_eq!(result.get("other.x"), Some(&"1".to_string()));
    }

    #[test]
    fn test_ini_parser_format_name() {
        assert_eq!(IniParser::default().format_name(), "ini");
    }

    #[test]
    fn test_read_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[a]\nx = 1").unwrap();

        let text = read_config_file(temp_file.path()).unwrap();
        assert!(text.starts_with("[a]"));
    }

    #[test]
    fn test_read_config_file_not_utf8() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let result = read_config_file(temp_file.path());
        assert!(matches!(result, Err(ConfigError::SourceError { .. })));
    }

    #[test]
    fn test_read_config_file_missing() {
        let result = read_config_file(Path::new("/nonexistent/path/to/config.cfg"));
        assert!(result.is_err());
    }
}
