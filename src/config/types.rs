//! Configuration type definitions.
//!
//! [`Config`] is the resolved configuration with every value filled in.
//! Files deserialize into [`ConfigLayer`], where every value is optional,
//! and layers are applied on top of each other so a file only overrides
//! what it actually sets.

use serde::{Deserialize, Serialize};

use crate::package::Runner;

/// Script names auto-started in a single package, in priority order.
pub const DEFAULT_PREFERRED_SCRIPTS: &[&str] = &["dev", "start", "serve"];

/// Color theme for the quick-pick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Full color theme.
    #[default]
    Default,
    /// Minimal colors.
    Minimal,
    /// No colors (monochrome).
    None,
}

/// What to run and when to skip the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralConfig {
    /// In a single-package project, run the default command or a preferred
    /// script without asking.
    pub auto_start: bool,
    /// Default script name. Takes precedence over `preferred_scripts` and
    /// narrows the monorepo list to this script.
    pub command: Option<String>,
    /// Auto-start candidates, first match wins.
    pub preferred_scripts: Vec<String>,
    /// Override package manager detection.
    pub runner: Option<Runner>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            auto_start: true,
            command: None,
            preferred_scripts: DEFAULT_PREFERRED_SCRIPTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            runner: None,
        }
    }
}

/// Monorepo enumeration settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceConfig {
    /// Drop workspace patterns that mention `playground`.
    pub exclude_playground: bool,
    /// Skip member packages with an `exports` map.
    pub skip_libraries: bool,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            exclude_playground: true,
            skip_libraries: true,
        }
    }
}

/// Quick-pick settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    /// Filter also matches the script's command.
    pub match_on_description: bool,
    /// Filter also matches the package directory.
    pub match_on_detail: bool,
    pub theme: Theme,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            match_on_description: true,
            match_on_detail: true,
            theme: Theme::default(),
        }
    }
}

/// Resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub general: GeneralConfig,
    pub workspace: WorkspaceConfig,
    pub picker: PickerConfig,
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a layer on top of this config. Only values set in the layer
    /// change anything.
    pub fn apply(&mut self, layer: ConfigLayer) {
        let ConfigLayer {
            general,
            workspace,
            picker,
        } = layer;

        if let Some(auto_start) = general.auto_start {
            self.general.auto_start = auto_start;
        }
        if let Some(command) = general.command {
            // An empty string clears a default set by a lower layer.
            let command = command.trim();
            self.general.command = (!command.is_empty()).then(|| command.to_string());
        }
        if let Some(preferred) = general.preferred_scripts {
            self.general.preferred_scripts = preferred;
        }
        if general.runner.is_some() {
            self.general.runner = general.runner;
        }

        if let Some(exclude_playground) = workspace.exclude_playground {
            self.workspace.exclude_playground = exclude_playground;
        }
        if let Some(skip_libraries) = workspace.skip_libraries {
            self.workspace.skip_libraries = skip_libraries;
        }

        if let Some(v) = picker.match_on_description {
            self.picker.match_on_description = v;
        }
        if let Some(v) = picker.match_on_detail {
            self.picker.match_on_detail = v;
        }
        if let Some(theme) = picker.theme {
            self.picker.theme = theme;
        }
    }
}

/// One configuration file, as written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    #[serde(default)]
    pub general: GeneralLayer,
    #[serde(default)]
    pub workspace: WorkspaceLayer,
    #[serde(default)]
    pub picker: PickerLayer,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralLayer {
    pub auto_start: Option<bool>,
    pub command: Option<String>,
    pub preferred_scripts: Option<Vec<String>>,
    pub runner: Option<Runner>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceLayer {
    pub exclude_playground: Option<bool>,
    pub skip_libraries: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PickerLayer {
    pub match_on_description: Option<bool>,
    pub match_on_detail: Option<bool>,
    pub theme: Option<Theme>,
}
