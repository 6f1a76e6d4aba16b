//! runx - pick a package script and run it
//!
//! Finds the project around a directory, works out whether it is a
//! monorepo, lists the runnable scripts of every package and runs the one
//! you pick with the package manager the project uses.
//!
//! # Features
//!
//! - **Monorepo aware**: pnpm workspaces, `package.json` workspaces, lerna
//!   and a plain `packages/` directory
//! - **Auto-start**: single-package projects start `dev`/`start`/`serve`
//!   without asking
//! - **Quick-pick**: fuzzy filter over script names, commands and
//!   package directories
//! - **Agent detection**: npm, yarn, pnpm, bun and deno from
//!   `packageManager` or lock files
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Configuration file loading and types
//! - [`error`] - Error types and exit codes
//! - [`filter`] - Fuzzy filtering for pick items
//! - [`logging`] - `tracing` subscriber setup
//! - [`package`] - Manifest parsing, monorepo detection, package enumeration
//! - [`runner`] - Script execution
//! - [`select`] - Auto-start and pick list planning
//! - [`tui`] - Terminal quick-pick
//! - [`utils`] - Path utilities
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use runx::package::{detect_runner, get_all_packages, EnumerateOptions};
//!
//! let root = Path::new("./my-monorepo");
//! let packages = get_all_packages(root, &EnumerateOptions::default())
//!     .expect("Failed to enumerate packages");
//!
//! for package in &packages {
//!     let runner = detect_runner(&package.dir);
//!     for script in package.scripts.iter() {
//!         println!("{}: {}", package.name, runner.format_command(script.name(), &[]));
//!     }
//! }
//! ```

/// CLI argument definitions.
pub mod cli;

/// Configuration system for loading and merging settings.
pub mod config;

/// Error types and exit codes.
pub mod error;

/// Fuzzy filtering for pick items.
pub mod filter;

/// Diagnostic logging setup.
pub mod logging;

/// Manifests, monorepo detection and package manager detection.
pub mod package;

/// Script execution.
pub mod runner;

/// Selection planning.
pub mod select;

/// Terminal user interface.
pub mod tui;

/// Path utilities.
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use error::RunxError;
pub use package::{MonorepoPackage, Runner, Script, Scripts};
