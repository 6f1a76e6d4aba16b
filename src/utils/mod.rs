//! Path helpers shared by the CLI and config loader.

mod paths;

pub use paths::{
    config_dir, find_project_root, global_config_file, local_config_file, relative_dir,
    LOCAL_CONFIG_FILE, MAX_SEARCH_DEPTH,
};
