//! Runner module for runx.
//!
//! Launches the selected script with the appropriate package manager.

mod executor;

pub use executor::{
    launch, normalize_cwd, split_args, ExecutionResult, Launch, LaunchOptions, TERMINAL_NAME,
};
