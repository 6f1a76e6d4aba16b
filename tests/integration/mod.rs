//! Integration tests for runx.
//!
//! - `fixtures` - Test helpers for creating temporary projects and monorepos
//! - `cli_tests` - CLI interface tests
//! - `config_tests` - Configuration loading and layering tests
//! - `detection_tests` - Project root, monorepo and package manager detection
//! - `snapshot_tests` - Output snapshot tests using insta

pub mod config_tests;
pub mod detection_tests;
pub mod fixtures;
pub mod snapshot_tests;
