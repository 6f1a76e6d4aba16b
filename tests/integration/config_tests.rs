//! Integration tests for configuration loading and merging.

use runx::config::{
    generate_example_config, load_config, Config, ConfigLayer, GeneralLayer, PickerConfig, Theme,
    WorkspaceConfig,
};
use runx::error::RunxError;
use runx::package::Runner;

use crate::integration::fixtures::{create_project_with_config, standard_scripts};

// ==================== Config Defaults ====================

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.general.auto_start);
    assert_eq!(config.general.command, None);
    assert_eq!(config.general.preferred_scripts, vec!["dev", "start", "serve"]);
    assert_eq!(config.general.runner, None);
    assert!(config.workspace.exclude_playground);
    assert!(config.workspace.skip_libraries);
}

#[test]
fn test_config_new() {
    assert_eq!(Config::new(), Config::default());
}

#[test]
fn test_section_defaults() {
    let workspace = WorkspaceConfig::default();
    assert!(workspace.exclude_playground);
    assert!(workspace.skip_libraries);

    let picker = PickerConfig::default();
    assert!(picker.match_on_description);
    assert!(picker.match_on_detail);
    assert_eq!(picker.theme, Theme::Default);
}

// ==================== Layering ====================

#[test]
fn test_layer_overrides_only_what_it_sets() {
    let mut config = Config::default();
    config.general.preferred_scripts = vec!["start".to_string()];

    config.apply(ConfigLayer {
        general: GeneralLayer {
            auto_start: Some(false),
            ..Default::default()
        },
        ..Default::default()
    });

    assert!(!config.general.auto_start);
    assert_eq!(config.general.preferred_scripts, vec!["start"]);
}

#[test]
fn test_later_layer_can_restore_default() {
    let mut config = Config::default();

    let disable: ConfigLayer = toml::from_str("[workspace]\nskip_libraries = false\n").unwrap();
    config.apply(disable);
    assert!(!config.workspace.skip_libraries);

    let enable: ConfigLayer = toml::from_str("[workspace]\nskip_libraries = true\n").unwrap();
    config.apply(enable);
    assert!(config.workspace.skip_libraries);
}

#[test]
fn test_empty_command_clears_lower_layer() {
    let mut config = Config::default();
    config.apply(toml::from_str("[general]\ncommand = \"dev\"\n").unwrap());
    assert_eq!(config.general.command.as_deref(), Some("dev"));

    config.apply(toml::from_str("[general]\ncommand = \"\"\n").unwrap());
    assert_eq!(config.general.command, None);
}

// ==================== Parsing ====================

#[test]
fn test_partial_config_parsing() {
    let layer: ConfigLayer = toml::from_str("[picker]\ntheme = \"minimal\"\n").unwrap();

    let mut config = Config::default();
    config.apply(layer);

    assert_eq!(config.picker.theme, Theme::Minimal);
    assert!(config.picker.match_on_detail);
}

#[test]
fn test_unknown_keys_rejected() {
    let result: Result<ConfigLayer, _> = toml::from_str("[general]\nautostart = true\n");
    assert!(result.is_err());
}

#[test]
fn test_invalid_runner_rejected() {
    let result: Result<ConfigLayer, _> = toml::from_str("[general]\nrunner = \"cargo\"\n");
    assert!(result.is_err());
}

#[test]
fn test_example_config_is_valid() {
    let layer: ConfigLayer =
        toml::from_str(&generate_example_config()).expect("example config should parse");

    let mut config = Config::default();
    config.apply(layer);
    assert_eq!(config, Config::default());
}

// ==================== Loading ====================

#[test]
fn test_load_project_config() {
    let project = create_project_with_config(
        &standard_scripts(),
        r#"
[general]
runner = "bun"
preferred_scripts = ["start"]

[picker]
match_on_detail = false
"#,
    );

    let config = load_config(None, project.path()).unwrap();

    assert_eq!(config.general.runner, Some(Runner::Bun));
    assert_eq!(config.general.preferred_scripts, vec!["start"]);
    assert!(!config.picker.match_on_detail);
}

#[test]
fn test_cli_config_overrides_project_config() {
    let project = create_project_with_config(
        &standard_scripts(),
        "[general]\nrunner = \"bun\"\nauto_start = false\n",
    );
    let cli_path = project.path().join("override.toml");
    std::fs::write(&cli_path, "[general]\nrunner = \"yarn\"\n").unwrap();

    let config = load_config(Some(&cli_path), project.path()).unwrap();

    assert_eq!(config.general.runner, Some(Runner::Yarn));
    // Not set by the CLI layer, so the project value stays.
    assert!(!config.general.auto_start);
}

#[test]
fn test_invalid_cli_config_is_an_error() {
    let project = create_project_with_config(&standard_scripts(), "");
    let cli_path = project.path().join("broken.toml");
    std::fs::write(&cli_path, "[general]\nauto_start = 1\n").unwrap();

    let err = load_config(Some(&cli_path), project.path()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RunxError>(),
        Some(RunxError::InvalidConfig { .. })
    ));
}

#[test]
fn test_missing_cli_config_is_an_error() {
    let project = create_project_with_config(&standard_scripts(), "");
    let missing = project.path().join("missing.toml");

    let err = load_config(Some(&missing), project.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read config file"));
}

#[test]
fn test_invalid_project_config_falls_back() {
    let project = create_project_with_config(&standard_scripts(), "[general\nnot toml");

    let config = load_config(None, project.path()).unwrap();
    assert_eq!(config.workspace, WorkspaceConfig::default());
    assert!(config.general.auto_start);
}
