// SPDX-License-Identifier: MIT OR Apache-2.0

//! The layered configuration object and its builder.
//!
//! A [`Config`] is built in one call from a name, a set of option specifications and
//! any number of extra text or file sources. Construction applies every source in
//! precedence order before it returns:
//!
//! 1. the declared defaults
//! 2. the default file candidates for the configuration name, then the caller's
//!    sources in the order given
//! 3. environment variables
//! 4. command-line arguments
//!
//! Direct assignment can happen at any time afterwards. Because each step simply
//! records into the option's history, the last write always wins.

use crate::adapters::ini_file::{read_config_file, IniParser};
use crate::adapters::locate;
use crate::domain::option_def::{fold, is_valid_name};
use crate::domain::{
    ConfigError, ConfigValue, ConfigurationService, OptionDef, OptionSpec, Result, SourceTag,
    ValueHistory,
};
use crate::ports::{ConfigParser, ConfigSource};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::PathBuf;

/// A file or text source, classified from what the caller handed to the builder.
#[derive(Clone, Debug, PartialEq)]
enum TextSource {
    Text(String),
    Path(PathBuf),
}

impl TextSource {
    /// Strings containing a newline are literal text; other strings are paths.
    fn classify(value: ConfigValue) -> Result<Self> {
        match value {
            ConfigValue::Str(s) if s.contains('\n') => Ok(TextSource::Text(s)),
            ConfigValue::Str(s) => Ok(TextSource::Path(PathBuf::from(s))),
            other => Err(ConfigError::InvalidSource {
                value: other.repr(),
            }),
        }
    }
}

/// Builder for constructing a [`Config`].
///
/// By default the builder reads the process environment and command-line arguments
/// (when the `env` and `cli` features are enabled) and looks for the default files
/// of the configuration name. Each of these can be replaced for tests or embedded use.
///
/// # Examples
///
/// ```rust
/// use layercfg::prelude::*;
/// use std::collections::HashMap;
///
/// # fn main() -> Result<()> {
/// let config = Config::builder("myconfig")
///     .without_default_locations()
///     .with_text("[myconfig]\nfoo = yes\n")
///     .with_env(EnvVarAdapter::with_values(HashMap::new()))
///     .with_args(CommandLineAdapter::from_args(vec!["--myconfig-bar", "0.5"]))
///     .option("foo", (false, OptionKind::Boolean, "Whether to foo"))
///     .option("bar", (0.0, OptionKind::Float, "The size of the bar"))
///     .build()?;
///
/// assert_eq!(config.get("foo")?, &ConfigValue::from(true));
/// assert_eq!(config.get("BAR")?, &ConfigValue::from(0.5));
/// # Ok(())
/// # }
/// ```
pub struct ConfigBuilder {
    name: String,
    options: Vec<(String, OptionSpec)>,
    sources: Vec<ConfigValue>,
    default_locations: bool,
    env: Option<Box<dyn ConfigSource>>,
    args: Option<Box<dyn ConfigSource>>,
}

impl ConfigBuilder {
    /// Creates a new builder for the configuration called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            sources: Vec::new(),
            default_locations: true,
            env: default_env_source(),
            args: default_args_source(),
        }
    }

    /// Declares an option. Options are registered in the order they are declared.
    pub fn option(mut self, name: impl Into<String>, spec: impl Into<OptionSpec>) -> Self {
        self.options.push((name.into(), spec.into()));
        self
    }

    /// Declares several options at once.
    pub fn options<I, N, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<OptionSpec>,
    {
        self.options
            .extend(options.into_iter().map(|(n, s)| (n.into(), s.into())));
        self
    }

    /// Adds a source. A string containing a newline is literal INI text; any other
    /// string is a file path. Any non-string value makes [`build`](Self::build) fail
    /// with [`ConfigError::InvalidSource`].
    pub fn with_source(mut self, source: impl Into<ConfigValue>) -> Self {
        self.sources.push(source.into());
        self
    }

    /// Adds literal INI text as a source, whether or not it contains a newline.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        let mut text = text.into();
        if !text.contains('\n') {
            text.push('\n');
        }
        self.with_source(text)
    }

    /// Adds a file path as a source. Missing files are skipped at build time.
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.with_source(path.into().to_string_lossy().into_owned())
    }

    /// Skips the per-user and application default file candidates.
    pub fn without_default_locations(mut self) -> Self {
        self.default_locations = false;
        self
    }

    /// Replaces the environment-variable source.
    pub fn with_env(mut self, source: impl ConfigSource + 'static) -> Self {
        self.env = Some(Box::new(source));
        self
    }

    /// Replaces the command-line source.
    pub fn with_args(mut self, source: impl ConfigSource + 'static) -> Self {
        self.args = Some(Box::new(source));
        self
    }

    /// Validates the schema and resolves every source.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidName`] for a bad configuration name
    /// - [`ConfigError::InvalidOptionName`] for a bad or duplicate option name
    /// - [`ConfigError::UnsupportedType`] for a kind that cannot be bound
    /// - [`ConfigError::Coercion`] for a default, environment variable or
    ///   command-line value that does not fit its kind
    /// - [`ConfigError::InvalidSource`] for a source that is not a string
    ///
    /// Unreadable or unparsable file and text sources are logged and skipped; they
    /// never fail the build.
    pub fn build(self) -> Result<Config> {
        if !is_valid_name(&self.name) {
            return Err(ConfigError::InvalidName { name: self.name });
        }

        let mut config = Config {
            name: self.name,
            options: Vec::with_capacity(self.options.len()),
            histories: Vec::with_capacity(self.options.len()),
            index: HashMap::new(),
            fields: HashMap::new(),
        };

        let mut seen = HashSet::new();
        for (name, spec) in self.options {
            if !seen.insert(fold(&name)) {
                return Err(ConfigError::InvalidOptionName {
                    reason: "another option has the same name ignoring case".to_string(),
                    name,
                });
            }
            config.register(OptionDef::new(&name, spec)?);
        }

        let explicit = self
            .sources
            .into_iter()
            .map(TextSource::classify)
            .collect::<Result<Vec<_>>>()?;

        let mut candidates: Vec<TextSource> = Vec::new();
        if self.default_locations {
            candidates.extend(
                locate::default_candidates(&config.name)
                    .into_iter()
                    .map(TextSource::Path),
            );
        }
        candidates.extend(explicit);

        let parser = IniParser::new();
        for candidate in candidates {
            config.load_text_source(&parser, candidate);
        }

        for source in [self.env, self.args].into_iter().flatten() {
            config.load_process_source(source.as_ref())?;
        }

        Ok(config)
    }
}

#[cfg(feature = "env")]
fn default_env_source() -> Option<Box<dyn ConfigSource>> {
    Some(Box::new(crate::adapters::EnvVarAdapter::new()))
}

#[cfg(not(feature = "env"))]
fn default_env_source() -> Option<Box<dyn ConfigSource>> {
    None
}

#[cfg(feature = "cli")]
fn default_args_source() -> Option<Box<dyn ConfigSource>> {
    Some(Box::new(crate::adapters::CommandLineAdapter::from_env_args()))
}

#[cfg(not(feature = "cli"))]
fn default_args_source() -> Option<Box<dyn ConfigSource>> {
    None
}

/// A configuration object: a fixed set of typed options and their value histories.
///
/// Options are read and written two ways:
///
/// - case-insensitively with [`get`](Config::get) / [`set`](Config::set), which fail
///   with [`ConfigError::UnknownOption`] for unknown names
/// - case-sensitively with [`attr`](Config::attr) / [`set_attr`](Config::set_attr),
///   where a name that is not exactly a registered option refers to a user field
///   kept in a separate namespace
///
/// Both paths read the last history entry and write through the same coercion with
/// the `set` source tag.
#[derive(Clone, Debug)]
pub struct Config {
    name: String,
    /// Registration order
    options: Vec<OptionDef>,
    /// Parallel to `options`
    histories: Vec<ValueHistory>,
    /// Case-folded name to position in `options`
    index: HashMap<String, usize>,
    /// Values written through the case-sensitive path under non-option names
    fields: HashMap<String, ConfigValue>,
}

impl Config {
    /// Creates a builder for a configuration called `name`.
    pub fn builder(name: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder::new(name)
    }

    /// The configuration name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if no options are registered.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Iterates over option names in registration order.
    pub fn iter(&self) -> OptionNames<'_> {
        OptionNames {
            inner: self.options.iter(),
        }
    }

    /// The registered option definitions in registration order.
    pub fn options(&self) -> &[OptionDef] {
        &self.options
    }

    /// Returns `true` if an option with this name exists, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&fold(name))
    }

    /// Looks up an option definition, ignoring case.
    pub fn option(&self, name: &str) -> Result<&OptionDef> {
        self.position(name).map(|i| &self.options[i])
    }

    /// Returns the current value of an option, ignoring case.
    pub fn get(&self, name: &str) -> Result<&ConfigValue> {
        let i = self.position(name)?;
        self.histories[i]
            .current()
            .ok_or_else(|| ConfigError::UnknownOption {
                name: name.to_string(),
            })
    }

    /// Returns the current value of an option converted to a Rust type.
    ///
    /// ```rust
    /// use layercfg::prelude::*;
    ///
    /// # fn main() -> Result<()> {
    /// let config = Config::builder("app")
    ///     .without_default_locations()
    ///     .option("ports", ("80, 443", OptionKind::tuple_of(OptionKind::Integer), ""))
    ///     .build()?;
    /// let ports: Vec<i64> = config.get_as("ports")?;
    /// assert_eq!(ports, vec![80, 443]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_as<T>(&self, name: &str) -> Result<T>
    where
        T: TryFrom<ConfigValue, Error = ConfigError>,
    {
        T::try_from(self.get(name)?.clone())
    }

    /// Coerces `value` and records it as the current value, ignoring case in `name`.
    ///
    /// On a coercion failure the option is left unchanged.
    pub fn set(&mut self, name: &str, value: impl Into<ConfigValue>) -> Result<()> {
        self.apply(SourceTag::Set, name, &value.into())
    }

    /// Case-sensitive read.
    ///
    /// Returns the option's current value when `name` is exactly a registered option
    /// name, otherwise the user field of that name, if any.
    pub fn attr(&self, name: &str) -> Option<&ConfigValue> {
        match self.exact_position(name) {
            Some(i) => self.histories[i].current(),
            None => self.fields.get(name),
        }
    }

    /// Case-sensitive write.
    ///
    /// When `name` is exactly a registered option name this is the same as
    /// [`set`](Config::set). Any other name stores an uncoerced user field that
    /// never affects an option.
    pub fn set_attr(&mut self, name: &str, value: impl Into<ConfigValue>) -> Result<()> {
        let value = value.into();
        match self.exact_position(name) {
            Some(_) => self.apply(SourceTag::Set, name, &value),
            None => {
                self.fields.insert(name.to_string(), value);
                Ok(())
            }
        }
    }

    /// The value history of an option, ignoring case.
    pub fn history(&self, name: &str) -> Result<&ValueHistory> {
        self.position(name).map(|i| &self.histories[i])
    }

    /// The tag of the source that provided the current value, ignoring case.
    pub fn source_of(&self, name: &str) -> Result<&SourceTag> {
        let i = self.position(name)?;
        self.histories[i]
            .current_source()
            .ok_or_else(|| ConfigError::UnknownOption {
                name: name.to_string(),
            })
    }

    /// Human-readable documentation of every option, in registration order.
    pub fn describe(&self) -> String {
        let mut text = format!(
            "Configuration object for {}\n\n\
             The options below can be set via a .cfg file, environment variable,\n\
             command-line argument, or directly in code.\n\n\
             Parameters:\n",
            self.name
        );
        for option in &self.options {
            text.push_str("    ");
            text.push_str(&option.describe());
            text.push('\n');
        }
        text
    }

    fn register(&mut self, option: OptionDef) {
        let mut history = ValueHistory::new();
        history.record(SourceTag::Default, option.default_value().clone());
        self.index.insert(option.key(), self.options.len());
        self.options.push(option);
        self.histories.push(history);
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.index
            .get(&fold(name))
            .copied()
            .ok_or_else(|| ConfigError::UnknownOption {
                name: name.to_string(),
            })
    }

    fn exact_position(&self, name: &str) -> Option<usize> {
        self.index
            .get(&fold(name))
            .copied()
            .filter(|&i| self.options[i].name() == name)
    }

    /// Coerces and records a value. The history is only touched on success.
    fn apply(&mut self, source: SourceTag, name: &str, value: &ConfigValue) -> Result<()> {
        let i = self.position(name)?;
        let coerced = self.options[i].kind().coerce(value)?;
        self.histories[i].record(source, coerced);
        Ok(())
    }

    fn load_text_source(&mut self, parser: &IniParser, source: TextSource) {
        let (tag, text) = match source {
            TextSource::Text(text) => (SourceTag::Text, text),
            TextSource::Path(path) => {
                if !path.is_file() {
                    tracing::debug!("No configuration file at {}", path.display());
                    return;
                }
                match read_config_file(&path) {
                    Ok(text) => (SourceTag::File(path), text),
                    Err(e) => {
                        tracing::warn!("Could not read config from {}: {}", path.display(), e);
                        return;
                    }
                }
            }
        };

        let origin = tag.to_string();
        let parsed = match parser.parse(&text, &origin) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Could not parse config from {}: {}", origin, e);
                return;
            }
        };

        let found: Vec<(String, String)> = self
            .options
            .iter()
            .filter_map(|option| {
                parser
                    .lookup(&parsed, &self.name, option.name())
                    .map(|raw| (option.name().to_string(), raw.to_string()))
            })
            .collect();

        for (name, raw) in found {
            match self.apply(tag.clone(), &name, &ConfigValue::from(raw)) {
                Ok(()) => tracing::debug!("Set {}.{} from {}", self.name, name, origin),
                Err(e) => tracing::warn!("Invalid value for {} in {}: {}", name, origin, e),
            }
        }
    }

    /// Applies every value `source` has for this configuration. The first value
    /// that fails coercion is returned as the error.
    fn load_process_source(&mut self, source: &dyn ConfigSource) -> Result<()> {
        let names: Vec<String> = self.iter().map(str::to_string).collect();
        for name in names {
            let raw = match source.get(&self.name, &name) {
                Ok(Some(raw)) => raw,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!("Could not read {} from source '{}': {}", name, source.name(), e);
                    continue;
                }
            };
            self.apply(source.tag(), &name, &raw)?;
            tracing::debug!("Set {}.{} from {}", self.name, name, source.tag());
        }
        Ok(())
    }
}

impl ConfigurationService for Config {
    fn get(&self, name: &str) -> Result<&ConfigValue> {
        Config::get(self, name)
    }

    fn set(&mut self, name: &str, value: ConfigValue) -> Result<()> {
        Config::set(self, name, value)
    }

    fn has(&self, name: &str) -> bool {
        self.contains(name)
    }

    fn history(&self, name: &str) -> Result<&ValueHistory> {
        Config::history(self, name)
    }

    fn option_names(&self) -> Vec<&str> {
        self.iter().collect()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Config '{}' with {} options>", self.name, self.options.len())
    }
}

/// Iterator over option names in registration order.
#[derive(Clone, Debug)]
pub struct OptionNames<'a> {
    inner: std::slice::Iter<'a, OptionDef>,
}

impl<'a> Iterator for OptionNames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(OptionDef::name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for OptionNames<'_> {}

impl<'a> IntoIterator for &'a Config {
    type Item = &'a str;
    type IntoIter = OptionNames<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
