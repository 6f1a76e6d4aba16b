//! Package module for runx.
//!
//! Manifest parsing, monorepo detection, package enumeration and package
//! manager detection.

mod enumerate;
mod manager;
pub mod manifest;
mod monorepo;

pub use enumerate::{
    discover, expand_patterns, get_all_packages, Discovery, EnumerateOptions, MonorepoPackage,
};
pub use manager::{detect_runner, detect_runner_reason, Detection, Runner};
pub use manifest::{parse_manifest, read_manifest, Manifest, Script, Scripts, MANIFEST_FILE};
pub use monorepo::{detect_monorepo, WorkspacePatterns, WorkspaceSource, PNPM_WORKSPACE_FILE};
