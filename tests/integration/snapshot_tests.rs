//! Snapshot tests using insta.
//!
//! These tests capture and verify the output format of various commands.

use assert_cmd::Command;

use crate::integration::fixtures::{
    create_pnpm_monorepo, create_project, normalize_root, standard_scripts,
};

/// Get a Command for the runx binary, isolated from the user's config.
fn runx() -> Command {
    let mut cmd = Command::cargo_bin("runx").expect("Failed to find runx binary");
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/runx-tests")
        .env_remove("RUNX_LOG");
    cmd
}

/// Run in `dir` and return normalized (stdout, stderr).
fn run_in(dir: &std::path::Path, args: &[&str]) -> (String, String) {
    let output = runx()
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run runx");

    (
        normalize_root(&String::from_utf8_lossy(&output.stdout), dir)
            .trim_end()
            .to_string(),
        normalize_root(&String::from_utf8_lossy(&output.stderr), dir)
            .trim_end()
            .to_string(),
    )
}

// ==================== List Output Snapshots ====================

#[test]
fn test_snapshot_list_single_package() {
    let project = create_project(&standard_scripts());
    let (stdout, _) = run_in(project.path(), &["--list"]);

    insta::assert_snapshot!(stdout, @r"
    demo . (npm)
      dev    vite
      build  vite build
      test   vitest
      lint   eslint .

    4 scripts in 1 package
    ");
}

#[test]
fn test_snapshot_list_monorepo() {
    let repo = create_pnpm_monorepo();
    let (stdout, _) = run_in(repo.path(), &["--list"]);

    insta::assert_snapshot!(stdout, @r"
    @acme/api apps/api (pnpm)
      dev    tsx watch src/main.ts
      start  node dist/main.js

    @acme/web apps/web (pnpm)
      dev    vite
      build  vite build

    4 scripts in 2 packages
    ");
}

#[test]
fn test_snapshot_list_long_names_and_commands() {
    let project = create_project(&[
        ("dev", "vite"),
        (
            "codegen:graphql:client:watch-mode",
            "graphql-codegen --config codegen.yml --watch 'src/**/*.graphql' --verbose",
        ),
    ]);
    let (stdout, _) = run_in(project.path(), &["--list"]);

    insta::assert_snapshot!(stdout, @r"
    demo . (npm)
      dev                             vite
      codegen:graphql:client:watch-mode  graphql-codegen --config codegen.yml --watch 'src/**/*.gr...

    2 scripts in 1 package
    ");
}

// ==================== Dry Run Output Snapshots ====================

#[test]
fn test_snapshot_dry_run_npm() {
    let project = create_project(&standard_scripts());
    let (stdout, _) = run_in(project.path(), &["--script", "dev", "--dry-run"]);

    insta::assert_snapshot!(stdout, @"Would run: npm run dev (in <ROOT>)");
}

#[test]
fn test_snapshot_dry_run_yarn() {
    let project = create_project(&standard_scripts());
    let (stdout, _) = run_in(
        project.path(),
        &["--script", "dev", "--dry-run", "--runner", "yarn"],
    );

    insta::assert_snapshot!(stdout, @"Would run: yarn run dev (in <ROOT>)");
}

#[test]
fn test_snapshot_dry_run_with_args() {
    let project = create_project(&standard_scripts());
    let (stdout, _) = run_in(
        project.path(),
        &["--script", "test", "--dry-run", "--args", "--watch --coverage"],
    );

    insta::assert_snapshot!(stdout, @"Would run: npm run test -- --watch --coverage (in <ROOT>)");
}

#[test]
fn test_snapshot_auto_start() {
    let project = create_project(&standard_scripts());
    let (stdout, stderr) = run_in(project.path(), &["--dry-run"]);

    insta::assert_snapshot!(stderr, @"Auto-started script: dev");
    insta::assert_snapshot!(stdout, @"Would run: npm run dev (in <ROOT>)");
}

#[test]
fn test_snapshot_monorepo_package_dry_run() {
    let repo = create_pnpm_monorepo();
    let (stdout, _) = run_in(repo.path(), &["-n", "build", "-p", "web", "-d"]);

    insta::assert_snapshot!(stdout, @"Would run: pnpm run build (in <ROOT>/apps/web)");
}

// ==================== Error Message Snapshots ====================

#[test]
fn test_snapshot_error_script_not_found_with_suggestion() {
    let project = create_project(&standard_scripts());
    let (_, stderr) = run_in(project.path(), &["--script", "devv"]);

    insta::assert_snapshot!(stderr, @r"
    Error: Script 'devv' not found

    Did you mean: 'dev', 'test'?

    Run 'runx --list' to see all available scripts.
    ");
}

#[test]
fn test_snapshot_error_ambiguous_script() {
    let repo = create_pnpm_monorepo();
    let (_, stderr) = run_in(repo.path(), &["--script", "dev"]);

    insta::assert_snapshot!(stderr, @r"
    Error: Script 'dev' exists in several packages: @acme/api, @acme/web

    Tip: Use --package to pick one.
    ");
}

#[test]
fn test_snapshot_error_no_project() {
    let temp = tempfile::tempdir().unwrap();
    let (_, stderr) = run_in(temp.path(), &["--list"]);

    insta::assert_snapshot!(
        stderr,
        @"Error: No package.json or pnpm-workspace.yaml found in <ROOT> or any parent directory (searched up to 10 levels)"
    );
}

#[test]
fn test_snapshot_error_no_scripts() {
    let project = create_project(&[]);
    let (_, stderr) = run_in(project.path(), &["--list"]);

    insta::assert_snapshot!(stderr, @r#"
    Error: No runnable scripts found under <ROOT>

    Tip: Library packages (those with an "exports" field) are skipped; pass --include-libraries to list them.
    "#);
}
