//! CLI argument definitions for runx.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use runx::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Start dir: {:?}", cli.start_dir());
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};

use crate::config::Config;
use crate::package::Runner;

/// Pick a script from a project or monorepo and run it with the right
/// package manager.
#[derive(Parser, Debug)]
#[command(name = "runx")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path inside the project (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Run a script directly without the picker
    #[arg(short = 'n', long = "script", value_name = "NAME")]
    pub script: Option<String>,

    /// Only consider this package (manifest name or directory name)
    #[arg(short, long, value_name = "NAME")]
    pub package: Option<String>,

    /// Default script to start or narrow the list to
    #[arg(short, long, value_name = "NAME")]
    pub command: Option<String>,

    /// Always show the picker, even for a single package
    #[arg(long)]
    pub no_auto_start: bool,

    /// Keep workspace patterns that mention "playground"
    #[arg(long)]
    pub include_playground: bool,

    /// Keep packages that declare an "exports" map
    #[arg(long)]
    pub include_libraries: bool,

    /// List scripts non-interactively
    #[arg(short, long)]
    pub list: bool,

    /// Override package manager
    #[arg(short, long, value_name = "RUNNER", value_enum)]
    pub runner: Option<CliRunner>,

    /// Arguments to pass to the script
    #[arg(short, long, value_name = "ARGS", allow_hyphen_values = true)]
    pub args: Option<String>,

    /// Show the command without running it
    #[arg(short, long)]
    pub dry_run: bool,

    /// Path to config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    pub no_config: bool,

    /// Print an example config file and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

/// Package manager for CLI parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliRunner {
    Npm,
    Yarn,
    Pnpm,
    Bun,
    Deno,
}

impl From<CliRunner> for Runner {
    fn from(runner: CliRunner) -> Self {
        match runner {
            CliRunner::Npm => Runner::Npm,
            CliRunner::Yarn => Runner::Yarn,
            CliRunner::Pnpm => Runner::Pnpm,
            CliRunner::Bun => Runner::Bun,
            CliRunner::Deno => Runner::Deno,
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Directory to start the project root search from.
    pub fn start_dir(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Get the runner override.
    pub fn runner_override(&self) -> Option<Runner> {
        self.runner.map(Into::into)
    }

    /// Apply flags on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(command) = &self.command {
            let command = command.trim();
            config.general.command = (!command.is_empty()).then(|| command.to_string());
        }
        if self.no_auto_start {
            config.general.auto_start = false;
        }
        if let Some(runner) = self.runner_override() {
            config.general.runner = Some(runner);
        }
        if self.include_playground {
            config.workspace.exclude_playground = false;
        }
        if self.include_libraries {
            config.workspace.skip_libraries = false;
        }
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "runx", &mut std::io::stdout());
    }
}
