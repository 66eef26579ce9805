// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Rill configuration system.

use rill_config::{load_and_validate_str, load_config_from_str, ConfigError, FunctionStep};
use serde_json::json;

#[test]
fn full_pipeline_config_deserializes() {
    let toml = r#"
[logging]
level = "debug"

[registry]
builtins = false

[pipeline]
source = "memory"
datasource = "demo"
source_props = { data = [{ msg = "hi" }, { msg = "there" }] }
sink = "log"

[[pipeline.functions]]
name = "upper"
args = ["msg"]
output = "shout"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.logging.level, "debug");
    assert!(!config.registry.builtins);
    assert_eq!(config.pipeline.source.as_deref(), Some("memory"));
    assert_eq!(config.pipeline.datasource, "demo");
    assert_eq!(
        config.pipeline.source_props["data"],
        json!([{ "msg": "hi" }, { "msg": "there" }])
    );
    assert_eq!(config.pipeline.sink.as_deref(), Some("log"));
    assert!(config.pipeline.sink_props.is_empty());
    assert_eq!(
        config.pipeline.functions,
        vec![FunctionStep {
            name: "upper".into(),
            args: vec!["msg".into()],
            output: "shout".into(),
        }]
    );
}

#[test]
fn empty_config_uses_defaults() {
    let config = load_and_validate_str("").expect("empty config is valid");
    assert_eq!(config.logging.level, "info");
    assert!(config.registry.builtins);
    assert!(config.pipeline.functions.is_empty());
    assert_eq!(config.pipeline.datasource, "default");
}

#[test]
fn pipeline_section_without_datasource_keeps_default() {
    let config = load_and_validate_str("[pipeline]\nsource = \"memory\"\n").unwrap();
    assert_eq!(config.pipeline.source.as_deref(), Some("memory"));
    assert_eq!(config.pipeline.datasource, "default");
}

#[test]
fn unknown_key_suggests_correction() {
    let toml = "[pipeline]\nsourse = \"memory\"\n";
    let errors = load_and_validate_str(toml).unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "sourse");
            assert_eq!(suggestion.as_deref(), Some("source"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_section_is_rejected() {
    let errors = load_and_validate_str("[plugins]\ndir = \"/tmp\"\n").unwrap_err();
    assert!(matches!(errors[0], ConfigError::UnknownKey { ref key, .. } if key == "plugins"));
}

#[test]
fn wrong_type_is_reported() {
    let errors = load_and_validate_str("[registry]\nbuiltins = \"yes\"\n").unwrap_err();
    assert!(matches!(errors[0], ConfigError::InvalidType { ref key, .. } if key.contains("builtins")));
}

#[test]
fn function_step_without_output_is_missing_key() {
    let toml = "[[pipeline.functions]]\nname = \"upper\"\n";
    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(matches!(errors[0], ConfigError::MissingKey { ref key } if key == "output"));
}

#[test]
fn invalid_log_level_fails_validation() {
    let errors = load_and_validate_str("[logging]\nlevel = \"chatty\"\n").unwrap_err();
    assert!(matches!(errors[0], ConfigError::Validation { .. }));
}
