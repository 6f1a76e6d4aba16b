//! Configuration module for runx.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI arguments (highest priority)
//! - `--config <path>`
//! - Project-level `.runxrc.toml`
//! - User-level `~/.config/runx/config.toml`

mod file;
mod types;

pub use file::{generate_example_config, load_config};
pub use types::{
    Config, ConfigLayer, GeneralConfig, GeneralLayer, PickerConfig, PickerLayer, Theme,
    WorkspaceConfig, WorkspaceLayer, DEFAULT_PREFERRED_SCRIPTS,
};
