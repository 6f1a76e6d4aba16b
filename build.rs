//! Build script for runx.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// Mirrors `src/cli.rs`; the library is not available to build scripts.
#[derive(Parser)]
#[command(name = "runx")]
#[command(
    author,
    version,
    about = "Pick a script from a project or monorepo and run it with the right package manager"
)]
#[command(
    long_about = "runx finds the project around the current directory, detects whether it is a \
    monorepo (pnpm workspaces, package.json workspaces, lerna or a packages/ directory) and \
    lists the scripts of every package.\n\n\
    In a single-package project the dev, start or serve script is started right away. \
    Otherwise a quick-pick opens: type to filter, Enter to run, Esc to cancel. The script \
    runs in its package directory through npm, yarn, pnpm, bun or deno, whichever the \
    project uses."
)]
struct Cli {
    /// Path inside the project (default: current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Run a script directly without the picker
    #[arg(short = 'n', long = "script", value_name = "NAME")]
    script: Option<String>,

    /// Only consider this package (manifest name or directory name)
    #[arg(short, long, value_name = "NAME")]
    package: Option<String>,

    /// Default script to start or narrow the list to
    #[arg(short, long, value_name = "NAME")]
    command: Option<String>,

    /// Always show the picker, even for a single package
    #[arg(long)]
    no_auto_start: bool,

    /// Keep workspace patterns that mention "playground"
    #[arg(long)]
    include_playground: bool,

    /// Keep packages that declare an "exports" map
    #[arg(long)]
    include_libraries: bool,

    /// List scripts non-interactively
    #[arg(short, long)]
    list: bool,

    /// Override package manager
    #[arg(short, long, value_name = "RUNNER", value_enum)]
    runner: Option<Runner>,

    /// Arguments to pass to the script
    #[arg(short, long, value_name = "ARGS", allow_hyphen_values = true)]
    args: Option<String>,

    /// Show the command without running it
    #[arg(short, long)]
    dry_run: bool,

    /// Path to config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    no_config: bool,

    /// Print an example config file and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Runner {
    Npm,
    Yarn,
    Pnpm,
    Bun,
    Deno,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=RUNX_GEN_MANPAGE");

    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("RUNX_GEN_MANPAGE").is_err() {
        return;
    }

    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return;
    };

    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer = Vec::new();
    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to generate man page: {e}");
        return;
    }

    let man_path = out_dir.join("runx.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {e}");
        return;
    }

    // Also copy to docs directory for distribution
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("runx.1"));
        }
    }
}
