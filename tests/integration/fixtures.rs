//! Test fixtures for creating temporary projects and monorepos.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};
use tempfile::TempDir;

/// Lock file flavours.
#[derive(Debug, Clone, Copy)]
pub enum LockfileType {
    Npm,
    Yarn,
    Pnpm,
    Bun,
    Deno,
}

impl LockfileType {
    pub fn file_name(self) -> &'static str {
        match self {
            LockfileType::Npm => "package-lock.json",
            LockfileType::Yarn => "yarn.lock",
            LockfileType::Pnpm => "pnpm-lock.yaml",
            LockfileType::Bun => "bun.lockb",
            LockfileType::Deno => "deno.lock",
        }
    }
}

/// The usual front-end scripts.
pub fn standard_scripts() -> Vec<(&'static str, &'static str)> {
    vec![
        ("dev", "vite"),
        ("build", "vite build"),
        ("test", "vitest"),
        ("lint", "eslint ."),
    ]
}

/// Scripts with no auto-start candidate among them.
pub fn tooling_scripts() -> Vec<(&'static str, &'static str)> {
    vec![("build", "tsc"), ("lint", "eslint src")]
}

fn scripts_value(scripts: &[(&str, &str)]) -> Value {
    let map: Map<String, Value> = scripts
        .iter()
        .map(|(name, cmd)| (name.to_string(), Value::String(cmd.to_string())))
        .collect();
    Value::Object(map)
}

/// Write a `package.json` into `dir`, creating it if needed.
pub fn write_manifest(dir: &Path, manifest: &Value) {
    fs::create_dir_all(dir).expect("Failed to create package dir");
    fs::write(
        dir.join("package.json"),
        serde_json::to_string_pretty(manifest).expect("Failed to serialize manifest"),
    )
    .expect("Failed to write package.json");
}

/// Write a named package with scripts into `dir`.
pub fn write_package(dir: &Path, name: &str, scripts: &[(&str, &str)]) {
    write_manifest(dir, &json!({ "name": name, "scripts": scripts_value(scripts) }));
}

/// A single-package project.
pub fn create_project(scripts: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_package(temp.path(), "demo", scripts);
    temp
}

/// A single-package project with a lock file.
pub fn create_project_with_lockfile(scripts: &[(&str, &str)], lockfile: LockfileType) -> TempDir {
    let temp = create_project(scripts);
    fs::write(temp.path().join(lockfile.file_name()), "").expect("Failed to write lock file");
    temp
}

/// A single-package project with a `packageManager` field.
pub fn create_project_with_package_manager(
    scripts: &[(&str, &str)],
    package_manager: &str,
) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_manifest(
        temp.path(),
        &json!({
            "name": "demo",
            "packageManager": package_manager,
            "scripts": scripts_value(scripts),
        }),
    );
    temp
}

/// A single-package project with a `.runxrc.toml`.
pub fn create_project_with_config(scripts: &[(&str, &str)], config: &str) -> TempDir {
    let temp = create_project(scripts);
    fs::write(temp.path().join(".runxrc.toml"), config).expect("Failed to write config");
    temp
}

/// A pnpm monorepo:
///
/// - `apps/web` (`@acme/web`): dev, build
/// - `apps/api` (`@acme/api`): dev, start
/// - `packages/ui` (`@acme/ui`): a library with `exports`
/// - `playground/sandbox`: only matched through the playground pattern
pub fn create_pnpm_monorepo() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = temp.path();

    write_manifest(root, &json!({ "name": "acme", "private": true }));
    fs::write(
        root.join("pnpm-workspace.yaml"),
        "packages:\n  - 'apps/*'\n  - 'packages/*'\n  - 'playground/*'\n",
    )
    .expect("Failed to write pnpm-workspace.yaml");
    fs::write(root.join("pnpm-lock.yaml"), "lockfileVersion: '9.0'\n")
        .expect("Failed to write lock file");

    write_package(
        &root.join("apps/web"),
        "@acme/web",
        &[("dev", "vite"), ("build", "vite build")],
    );
    write_package(
        &root.join("apps/api"),
        "@acme/api",
        &[("dev", "tsx watch src/main.ts"), ("start", "node dist/main.js")],
    );
    write_manifest(
        &root.join("packages/ui"),
        &json!({
            "name": "@acme/ui",
            "exports": { ".": "./dist/index.js" },
            "scripts": { "build": "tsup" },
        }),
    );
    write_package(
        &root.join("playground/sandbox"),
        "sandbox",
        &[("dev", "vite --open")],
    );

    temp
}

/// A yarn monorepo using the `workspaces` field.
pub fn create_workspaces_monorepo() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = temp.path();

    write_manifest(
        root,
        &json!({
            "name": "shop",
            "private": true,
            "workspaces": { "packages": ["services/*"] },
        }),
    );
    fs::write(root.join("yarn.lock"), "").expect("Failed to write lock file");

    write_package(
        &root.join("services/cart"),
        "cart",
        &[("serve", "node server.js"), ("test", "jest")],
    );
    write_package(&root.join("services/empty"), "empty", &[]);

    temp
}

/// Canonical root path, as runx reports it.
pub fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().expect("Failed to canonicalize")
}

/// Replace the project root in `output` with `<ROOT>`.
pub fn normalize_root(output: &str, root: &Path) -> String {
    output
        .replace(&canonical(root).display().to_string(), "<ROOT>")
        .replace("\r\n", "\n")
}
