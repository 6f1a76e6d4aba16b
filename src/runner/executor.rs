//! Script execution.
//!
//! Runs the chosen script with the detected package manager in the
//! package's directory, or prints what would run in dry-run mode.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use anyhow::Result;
use tracing::{error, info};

use crate::error::{exit_code, RunxError};
use crate::package::Runner;
use crate::select::ScriptTarget;

/// Title printed above every launched command.
pub const TERMINAL_NAME: &str = "RunX Terminal";

/// A script bound to the package manager that will run it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    pub target: ScriptTarget,
    pub runner: Runner,
    /// Extra arguments passed through to the script.
    pub args: Vec<String>,
}

impl Launch {
    pub fn new(target: ScriptTarget, runner: Runner, args: Vec<String>) -> Self {
        Self {
            target,
            runner,
            args,
        }
    }

    /// Program and arguments to spawn.
    pub fn command_parts(&self) -> Vec<String> {
        self.runner.run_command(&self.target.script, &self.args)
    }

    /// The command as a single display line.
    pub fn command_line(&self) -> String {
        self.runner.format_command(&self.target.script, &self.args)
    }

    /// Normalised working directory.
    pub fn cwd(&self) -> PathBuf {
        PathBuf::from(normalize_cwd(&self.target.dir.to_string_lossy()))
    }
}

/// How to launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Print the command instead of running it.
    pub dry_run: bool,
}

/// Result of script execution.
#[derive(Debug)]
pub struct ExecutionResult {
    /// Exit status of the script, `None` for a dry run.
    pub status: Option<ExitStatus>,
    /// The command that was executed.
    pub command: String,
    /// Directory it ran in.
    pub cwd: PathBuf,
}

impl ExecutionResult {
    /// Check if the execution was successful.
    pub fn success(&self) -> bool {
        self.status.map_or(true, |s| s.success())
    }

    /// Exit code to hand back to the shell.
    ///
    /// A child killed by a signal reports [`exit_code::INTERRUPTED`].
    pub fn exit_code(&self) -> i32 {
        match self.status {
            None => exit_code::SUCCESS,
            Some(status) => status.code().unwrap_or(exit_code::INTERRUPTED),
        }
    }
}

/// Normalise a working directory path.
///
/// Surrounding whitespace is trimmed. On Windows, backslashes become
/// forward slashes and a lowercase drive letter is uppercased, so
/// `c:\repo\web` becomes `C:/repo/web`.
pub fn normalize_cwd(raw: &str) -> String {
    normalize_cwd_with(raw, cfg!(windows))
}

fn normalize_cwd_with(raw: &str, windows: bool) -> String {
    let trimmed = raw.trim();
    if !windows {
        return trimmed.to_string();
    }

    let slashed = trimmed.replace('\\', "/");
    let mut chars = slashed.chars();
    match (chars.next(), chars.next()) {
        (Some(drive), Some(':')) if drive.is_ascii_alphabetic() => {
            format!("{}{}", drive.to_ascii_uppercase(), &slashed[1..])
        }
        _ => slashed,
    }
}

/// Split a `--args` string into words, keeping quoted groups together.
///
/// Input that does not tokenize (an unbalanced quote) is passed as a
/// single argument.
pub fn split_args(args: Option<&str>) -> Vec<String> {
    args.map(|a| shell_words::split(a).unwrap_or_else(|_| vec![a.to_string()]))
        .unwrap_or_default()
}

/// Header printed before the child starts. Colours only for a terminal.
fn banner(cwd: &Path, command: &str, use_colors: bool) -> String {
    if use_colors {
        format!(
            "\x1b[1;36m{TERMINAL_NAME}\x1b[0m \x1b[2m{}\x1b[0m\n\x1b[1m> {command}\x1b[0m\n\n",
            cwd.display()
        )
    } else {
        format!("{TERMINAL_NAME} {}\n> {command}\n\n", cwd.display())
    }
}

/// Run a script in its package directory.
///
/// Prints a banner with the directory and command, then runs the package
/// manager with inherited stdio and waits for it. In dry-run mode only
/// `Would run: <command> (in <dir>)` is printed.
///
/// # Errors
///
/// Returns [`RunxError::SpawnFailed`] if the package manager cannot be
/// started.
pub fn launch(launch: &Launch, options: LaunchOptions) -> Result<ExecutionResult> {
    let cwd = launch.cwd();
    let command_str = launch.command_line();

    if options.dry_run {
        println!("Would run: {command_str} (in {})", cwd.display());
        return Ok(ExecutionResult {
            status: None,
            command: command_str,
            cwd,
        });
    }

    print!("{}", banner(&cwd, &command_str, io::stdout().is_terminal()));
    io::stdout().flush().ok();

    info!(command = %command_str, cwd = %cwd.display(), "launching script");

    let parts = launch.command_parts();
    let status = Command::new(&parts[0])
        .args(&parts[1..])
        .current_dir(&cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| {
            error!(command = %command_str, cwd = %cwd.display(), "failed to start: {source}");
            RunxError::SpawnFailed {
                command: command_str.clone(),
                dir: cwd.clone(),
                source,
            }
        })?;

    Ok(ExecutionResult {
        status: Some(status),
        command: command_str,
        cwd,
    })
}
