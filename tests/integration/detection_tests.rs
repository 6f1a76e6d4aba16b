//! Integration tests for project layout and package manager detection.
//!
//! These tests verify that runx finds the project root, recognises each
//! monorepo flavour, enumerates the right packages and picks the package
//! manager from the `packageManager` field or lock files.

use std::fs;

use runx::package::{
    detect_monorepo, detect_runner, detect_runner_reason, discover, get_all_packages, Detection,
    EnumerateOptions, Runner, WorkspaceSource,
};
use runx::utils::find_project_root;

use crate::integration::fixtures::{
    canonical, create_pnpm_monorepo, create_project, create_project_with_lockfile,
    create_project_with_package_manager, create_workspaces_monorepo, standard_scripts,
    write_manifest, write_package, LockfileType,
};

// ==================== Lock File Detection ====================

#[test]
fn test_detect_from_lockfiles() {
    for (lockfile, expected) in [
        (LockfileType::Npm, Runner::Npm),
        (LockfileType::Yarn, Runner::Yarn),
        (LockfileType::Pnpm, Runner::Pnpm),
        (LockfileType::Bun, Runner::Bun),
        (LockfileType::Deno, Runner::Deno),
    ] {
        let project = create_project_with_lockfile(&standard_scripts(), lockfile);
        assert_eq!(detect_runner(project.path()), expected, "{lockfile:?}");
    }
}

#[test]
fn test_detect_reports_lockfile() {
    let project = create_project_with_lockfile(&standard_scripts(), LockfileType::Pnpm);
    let (runner, reason) = detect_runner_reason(project.path());

    assert_eq!(runner, Runner::Pnpm);
    assert!(matches!(reason, Detection::LockFile(path) if path.ends_with("pnpm-lock.yaml")));
}

// ==================== packageManager Field Detection ====================

#[test]
fn test_detect_from_package_manager_field() {
    for (field, expected) in [
        ("npm@10.0.0", Runner::Npm),
        ("yarn@4.0.0", Runner::Yarn),
        ("pnpm@8.15.0", Runner::Pnpm),
        ("bun@1.0.0", Runner::Bun),
        ("pnpm", Runner::Pnpm),
    ] {
        let project = create_project_with_package_manager(&standard_scripts(), field);
        assert_eq!(detect_runner(project.path()), expected, "{field}");
    }
}

#[test]
fn test_package_manager_field_beats_lockfile() {
    let project = create_project_with_package_manager(&standard_scripts(), "yarn@4.1.0");
    fs::write(project.path().join("package-lock.json"), "{}").unwrap();

    let (runner, reason) = detect_runner_reason(project.path());
    assert_eq!(runner, Runner::Yarn);
    assert!(matches!(reason, Detection::PackageManagerField(_)));
}

#[test]
fn test_fallback_to_npm() {
    let project = create_project(&standard_scripts());
    let (runner, reason) = detect_runner_reason(project.path());

    assert_eq!(runner, Runner::Npm);
    assert_eq!(reason, Detection::Fallback);
}

#[test]
fn test_member_inherits_root_lockfile() {
    let repo = create_pnpm_monorepo();
    assert_eq!(detect_runner(&repo.path().join("apps/web")), Runner::Pnpm);
}

// ==================== Project Root ====================

#[test]
fn test_project_root_from_nested_dir() {
    let repo = create_pnpm_monorepo();
    let nested = repo.path().join("apps");

    let root = find_project_root(&nested).unwrap();
    assert_eq!(root, canonical(repo.path()));
}

#[test]
fn test_project_root_from_workspace_file_only() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(temp.path().join("pnpm-workspace.yaml"), "packages:\n  - 'libs/*'\n").unwrap();
    fs::create_dir_all(temp.path().join("libs")).unwrap();

    let root = find_project_root(&temp.path().join("libs")).unwrap();
    assert_eq!(root, canonical(temp.path()));
}

// ==================== Monorepo Detection ====================

#[test]
fn test_detect_pnpm_workspace() {
    let repo = create_pnpm_monorepo();
    let ws = detect_monorepo(repo.path(), true).expect("pnpm workspace");

    assert_eq!(ws.source, WorkspaceSource::Pnpm);
    assert_eq!(ws.patterns, vec!["apps/*", "packages/*"]);

    let ws = detect_monorepo(repo.path(), false).expect("pnpm workspace");
    assert_eq!(ws.patterns.len(), 3);
}

#[test]
fn test_detect_workspaces_object_form() {
    let repo = create_workspaces_monorepo();
    let ws = detect_monorepo(repo.path(), true).expect("workspaces field");

    assert_eq!(ws.source, WorkspaceSource::Manifest);
    assert_eq!(ws.patterns, vec!["services/*"]);
}

#[test]
fn test_detect_lerna() {
    let temp = tempfile::tempdir().unwrap();
    write_manifest(temp.path(), &serde_json::json!({ "name": "lerna-root" }));
    fs::write(
        temp.path().join("lerna.json"),
        r#"{ "packages": ["modules/*"], "version": "1.0.0" }"#,
    )
    .unwrap();

    let ws = detect_monorepo(temp.path(), true).expect("lerna");
    assert_eq!(ws.source, WorkspaceSource::Lerna);
    assert_eq!(ws.patterns, vec!["modules/*"]);
}

#[test]
fn test_detect_packages_dir_fallback() {
    let project = create_project(&standard_scripts());
    write_package(&project.path().join("packages/core"), "core", &[("build", "tsc")]);

    let ws = detect_monorepo(project.path(), true).expect("packages dir");
    assert_eq!(ws.source, WorkspaceSource::PackagesDir);
    assert_eq!(ws.patterns, vec!["packages/*"]);
}

#[test]
fn test_plain_project_is_not_monorepo() {
    let project = create_project(&standard_scripts());
    assert!(detect_monorepo(project.path(), true).is_none());
}

#[test]
fn test_empty_workspaces_is_single_package() {
    let project = tempfile::TempDir::new().unwrap();
    write_manifest(
        project.path(),
        &serde_json::json!({ "name": "solo", "workspaces": [], "scripts": { "dev": "vite" } }),
    );

    let discovery = discover(project.path(), &EnumerateOptions::default()).unwrap();

    assert!(!discovery.is_monorepo());
    assert_eq!(discovery.packages.len(), 1);
    assert_eq!(discovery.packages[0].name, "solo");
}

// ==================== Enumeration ====================

#[test]
fn test_discover_monorepo_members() {
    let repo = create_pnpm_monorepo();
    let discovery = discover(repo.path(), &EnumerateOptions::default()).unwrap();

    assert!(discovery.is_monorepo());
    let names: Vec<&str> = discovery.packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["@acme/api", "@acme/web"]);
}

#[test]
fn test_discover_with_libraries_and_playground() {
    let repo = create_pnpm_monorepo();
    let options = EnumerateOptions {
        exclude_playground: false,
        skip_libraries: false,
    };

    let packages = get_all_packages(repo.path(), &options).unwrap();
    let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["@acme/api", "@acme/web", "@acme/ui", "sandbox"]);
}

#[test]
fn test_discover_drops_members_without_scripts() {
    let repo = create_workspaces_monorepo();
    let packages = get_all_packages(repo.path(), &EnumerateOptions::default()).unwrap();

    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0].name, "cart");
}

#[test]
fn test_discover_single_package_keeps_empty_scripts() {
    let project = create_project(&[]);
    let discovery = discover(project.path(), &EnumerateOptions::default()).unwrap();

    assert!(!discovery.is_monorepo());
    assert_eq!(discovery.packages.len(), 1);
    assert!(discovery.packages[0].scripts.is_empty());
}

#[test]
fn test_discover_keeps_script_order() {
    let project = create_project(&[("zeta", "z"), ("alpha", "a"), ("mid", "m")]);
    let packages = get_all_packages(project.path(), &EnumerateOptions::default()).unwrap();

    assert_eq!(packages[0].scripts.names(), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_unnamed_member_uses_dir_name() {
    let repo = create_pnpm_monorepo();
    write_manifest(
        &repo.path().join("apps/admin"),
        &serde_json::json!({ "scripts": { "dev": "next dev" } }),
    );

    let packages = get_all_packages(repo.path(), &EnumerateOptions::default()).unwrap();
    assert!(packages.iter().any(|p| p.name == "admin"));
}
