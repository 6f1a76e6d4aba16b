//! Configuration file loading and parsing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::types::{Config, ConfigLayer};
use crate::error::RunxError;
use crate::utils::{global_config_file, local_config_file};

/// Load a single configuration layer from the specified path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
fn load_layer_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&content).map_err(|e| {
        RunxError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string().trim_end().to_string(),
        }
        .into()
    })
}

/// Load configuration with proper priority and merging.
///
/// Layers, lowest priority first:
/// 1. `~/.config/runx/config.toml` (user-level)
/// 2. `.runxrc.toml` in the project root
/// 3. `--config <path>`
///
/// Each layer only overrides the values it sets. A broken user or project
/// file is reported and skipped; a broken file passed explicitly is an error.
///
/// # Errors
///
/// Returns an error if the CLI-specified config file cannot be read or parsed.
pub fn load_config(cli_config_path: Option<&Path>, project_dir: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(user_config_path) = global_config_file().filter(|p| p.is_file()) {
        apply_optional_layer(&mut config, &user_config_path);
    }

    if let Some(project_config_path) = local_config_file(project_dir) {
        apply_optional_layer(&mut config, &project_config_path);
    }

    if let Some(cli_path) = cli_config_path {
        let layer = load_layer_from_path(cli_path)?;
        debug!(path = %cli_path.display(), "loaded config");
        config.apply(layer);
    }

    Ok(config)
}

fn apply_optional_layer(config: &mut Config, path: &Path) {
    match load_layer_from_path(path) {
        Ok(layer) => {
            debug!(path = %path.display(), "loaded config");
            config.apply(layer);
        }
        Err(e) => warn!("Ignoring config at {}: {e:#}", path.display()),
    }
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    r#"# runx configuration
# Place this file at ~/.config/runx/config.toml for global settings
# or .runxrc.toml in your project root for project-specific settings.

[general]
# In a single package, run the default command or the first preferred
# script without showing the picker.
auto_start = true

# Default script. In a single package it is started directly; in a
# monorepo the picker only lists this script for each package.
# command = "dev"

# Auto-start candidates, first match wins
preferred_scripts = ["dev", "start", "serve"]

# Package manager override: "npm", "yarn", "pnpm", "bun", "deno"
# runner = "pnpm"

[workspace]
# Ignore workspace patterns that mention "playground"
exclude_playground = true

# Skip member packages with an "exports" field (libraries)
skip_libraries = true

[picker]
# Also match the filter against the script command
match_on_description = true

# Also match the filter against the package directory
match_on_detail = true

# Color theme: "default", "minimal", "none"
theme = "default"
"#
    .to_string()
}
