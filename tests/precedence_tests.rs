// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for configuration source precedence.

mod common;

use common::{cfg_file, env_of, hermetic, EnvGuard};
use layercfg::prelude::*;
use std::collections::HashMap;

fn level(builder: ConfigBuilder) -> Config {
    builder
        .option("level", (0, OptionKind::Integer, "Level"))
        .build()
        .unwrap()
}

#[test]
fn test_precedence_ladder() {
    let file = cfg_file("[prec]\nlevel = 1\n");
    let env = || env_of(&[("PREC_LEVEL", "2")]);
    let args = || CommandLineAdapter::from_args(vec!["--prec-level", "3"]);

    // All four layers present: command line wins
    let config = level(hermetic("prec").with_file(file.path()).with_env(env()).with_args(args()));
    assert_eq!(config.get("level").unwrap(), &ConfigValue::from(3));
    assert_eq!(config.source_of("level").unwrap(), &SourceTag::Argv);

    // Without the argument: environment wins
    let config = level(hermetic("prec").with_file(file.path()).with_env(env()));
    assert_eq!(config.get("level").unwrap(), &ConfigValue::from(2));
    assert_eq!(config.source_of("level").unwrap(), &SourceTag::Environ);

    // Without the variable: the file wins
    let config = level(hermetic("prec").with_file(file.path()));
    assert_eq!(config.get("level").unwrap(), &ConfigValue::from(1));

    // Without the file: the default
    let config = level(hermetic("prec"));
    assert_eq!(config.get("level").unwrap(), &ConfigValue::from(0));
}

#[test]
fn test_set_beats_everything() {
    let mut config = level(
        hermetic("prec")
            .with_text("[prec]\nlevel = 1\n")
            .with_env(env_of(&[("PREC_LEVEL", "2")]))
            .with_args(CommandLineAdapter::from_args(vec!["--prec-level", "3"])),
    );
    config.set("level", 4).unwrap();

    let sources: Vec<String> = config
        .history("level")
        .unwrap()
        .entries()
        .iter()
        .map(|entry| entry.source.to_string())
        .collect();
    assert_eq!(sources, vec!["default", "<string>", "environ", "argv", "set"]);
    assert_eq!(config.get("level").unwrap(), &ConfigValue::from(4));
}

#[test]
fn test_later_files_win() {
    let first = cfg_file("[prec]\nlevel = 1\n");
    let second = cfg_file("[prec]\nlevel = 2\n");
    let config = level(hermetic("prec").with_file(first.path()).with_file(second.path()));

    assert_eq!(config.get("level").unwrap(), &ConfigValue::from(2));
    assert_eq!(config.history("level").unwrap().len(), 3);
}

#[test]
fn test_same_tag_overwrites_history() {
    let file = cfg_file("[prec]\nlevel = 1\n");
    let config = level(hermetic("prec").with_file(file.path()).with_file(file.path()));
    assert_eq!(config.history("level").unwrap().len(), 2);

    let mut config = level(hermetic("prec"));
    config.set("level", 5).unwrap();
    config.set("level", 6).unwrap();
    assert_eq!(config.history("level").unwrap().len(), 2);
}

#[test]
fn test_text_after_file_wins() {
    let file = cfg_file("[prec]\nlevel = 1\n");
    let config = level(
        hermetic("prec")
            .with_file(file.path())
            .with_text("[prec]\nlevel = 7\n"),
    );
    assert_eq!(config.get("level").unwrap(), &ConfigValue::from(7));
}

#[test]
fn test_empty_environment_value_is_unset() {
    let config = level(hermetic("prec").with_env(env_of(&[("PREC_LEVEL", "")])));
    assert_eq!(config.source_of("level").unwrap(), &SourceTag::Default);
}

#[test]
fn test_large_environment_value_is_applied() {
    let large = "n".repeat(1024 * 1024 + 1);
    let config = hermetic("app")
        .with_env(env_of(&[("APP_NAME", large.as_str())]))
        .option("name", ("", OptionKind::String, ""))
        .build()
        .unwrap();
    assert_eq!(config.source_of("name").unwrap(), &SourceTag::Environ);
    assert_eq!(config.get("name").unwrap(), &ConfigValue::from(large));
}

#[test]
fn test_environment_name_is_upper_case() {
    let config = level(hermetic("Prec").with_env(env_of(&[("PREC_LEVEL", "9")])));
    assert_eq!(config.get("level").unwrap(), &ConfigValue::from(9));
}

#[test]
fn test_invalid_argument_fails_construction() {
    let err = hermetic("prec")
        .with_env(env_of(&[("PREC_LEVEL", "2")]))
        .with_args(CommandLineAdapter::from_args(vec!["--prec-level", "high"]))
        .option("level", (0, OptionKind::Integer, "Level"))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Coercion { .. }));
}

#[test]
fn test_invalid_environment_value_fails_construction() {
    let err = hermetic("app")
        .with_env(env_of(&[("APP_LEVEL", "lots")]))
        .option("level", (1, OptionKind::Integer, ""))
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Coercion { .. }));
    assert!(err.to_string().contains("lots"));
}

#[test]
fn test_invalid_file_value_does_not_fail_construction() {
    let config = level(hermetic("prec").with_text("[prec]\nlevel = high\n"));
    assert_eq!(config.get("level").unwrap(), &ConfigValue::from(0));
}

#[test]
#[cfg(feature = "env")]
fn test_process_environment_is_read_by_default() {
    let mut env_guard = EnvGuard::new();
    env_guard.set("LAYERCFGPRECPROBE_LEVEL", "11");

    let config = Config::builder("layercfgprecprobe")
        .without_default_locations()
        .with_args(CommandLineAdapter::from_args(Vec::<String>::new()))
        .option("level", (0, OptionKind::Integer, "Level"))
        .build()
        .unwrap();
    assert_eq!(config.get("level").unwrap(), &ConfigValue::from(11));
}

#[test]
fn test_injected_environment_ignores_process() {
    let mut env_guard = EnvGuard::new();
    env_guard.set("LAYERCFGINJECTPROBE_LEVEL", "11");

    let config = level(
        hermetic("layercfginjectprobe").with_env(EnvVarAdapter::with_values(HashMap::new())),
    );
    assert_eq!(config.get("level").unwrap(), &ConfigValue::from(0));
}
