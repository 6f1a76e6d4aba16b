//! Package manager detection and command building.
//!
//! Detection walks from the package directory up to the filesystem root.
//! In each directory:
//! 1. `packageManager` field in package.json
//! 2. Lock files
//!
//! The first directory with an answer wins; npm is the fallback.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::manifest::read_manifest;

/// Supported package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Runner {
    /// Node Package Manager (npm)
    #[default]
    Npm,
    /// Yarn (classic and berry)
    Yarn,
    /// pnpm
    Pnpm,
    /// Bun
    Bun,
    /// Deno, which runs package.json scripts as tasks
    Deno,
}

/// Lock files in detection order, most specific first.
const LOCK_FILES: &[(&str, Runner)] = &[
    ("bun.lock", Runner::Bun),
    ("bun.lockb", Runner::Bun),
    ("deno.lock", Runner::Deno),
    ("pnpm-lock.yaml", Runner::Pnpm),
    ("yarn.lock", Runner::Yarn),
    ("package-lock.json", Runner::Npm),
    ("npm-shrinkwrap.json", Runner::Npm),
];

impl Runner {
    /// Get the executable name for this runner.
    pub fn executable(&self) -> &'static str {
        match self {
            Runner::Npm => "npm",
            Runner::Yarn => "yarn",
            Runner::Pnpm => "pnpm",
            Runner::Bun => "bun",
            Runner::Deno => "deno",
        }
    }

    /// Subcommand that runs a package.json script.
    fn run_verb(&self) -> &'static str {
        match self {
            Runner::Deno => "task",
            _ => "run",
        }
    }

    /// Get the command to run a script, with optional extra arguments.
    ///
    /// The explicit `run` verb is used for every agent so a script named
    /// like a builtin (`install`, `test`) still resolves to the script.
    /// npm needs `--` before arguments meant for the script.
    ///
    /// # Examples
    ///
    /// ```
    /// use runx::package::Runner;
    ///
    /// assert_eq!(Runner::Pnpm.run_command("dev", &[]), vec!["pnpm", "run", "dev"]);
    ///
    /// let args = vec!["--port".to_string(), "3000".to_string()];
    /// assert_eq!(
    ///     Runner::Npm.run_command("dev", &args),
    ///     vec!["npm", "run", "dev", "--", "--port", "3000"]
    /// );
    /// ```
    pub fn run_command(&self, script: &str, args: &[String]) -> Vec<String> {
        let mut cmd = vec![
            self.executable().to_string(),
            self.run_verb().to_string(),
            script.to_string(),
        ];

        if !args.is_empty() {
            if matches!(self, Runner::Npm) {
                cmd.push("--".into());
            }
            cmd.extend(args.iter().cloned());
        }

        cmd
    }

    /// Format the run command as a single line for display.
    pub fn format_command(&self, script: &str, args: &[String]) -> String {
        self.run_command(script, args).join(" ")
    }
}

impl std::fmt::Display for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.executable())
    }
}

impl std::str::FromStr for Runner {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(Runner::Npm),
            "yarn" => Ok(Runner::Yarn),
            "pnpm" => Ok(Runner::Pnpm),
            "bun" => Ok(Runner::Bun),
            "deno" => Ok(Runner::Deno),
            _ => Err(format!(
                "Unknown package manager: '{s}'. Valid options are: npm, yarn, pnpm, bun, deno"
            )),
        }
    }
}

/// Why a runner was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// `packageManager` field in the manifest at this path.
    PackageManagerField(PathBuf),
    /// Lock file at this path.
    LockFile(PathBuf),
    /// Nothing found; npm assumed.
    Fallback,
}

impl std::fmt::Display for Detection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Detection::PackageManagerField(path) => {
                write!(f, "packageManager field in {}", path.display())
            }
            Detection::LockFile(path) => write!(f, "found {}", path.display()),
            Detection::Fallback => f.write_str("default (no lock file found)"),
        }
    }
}

/// Detect the package manager for a directory.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use runx::package::detect_runner;
///
/// let runner = detect_runner(Path::new("/path/to/repo/packages/web"));
/// println!("Using: {runner}");
/// ```
pub fn detect_runner(dir: &Path) -> Runner {
    detect_runner_reason(dir).0
}

/// Detect the package manager and report why it was chosen.
pub fn detect_runner_reason(dir: &Path) -> (Runner, Detection) {
    for current in dir.ancestors() {
        if let Some(found) = detect_in_dir(current) {
            debug!(runner = %found.0, reason = %found.1, "detected package manager");
            return found;
        }
    }

    debug!(dir = %dir.display(), "no package manager hints, assuming npm");
    (Runner::Npm, Detection::Fallback)
}

/// Check a single directory for a package manager hint.
fn detect_in_dir(dir: &Path) -> Option<(Runner, Detection)> {
    // An unreadable manifest is not fatal here: lock files may still answer.
    if let Ok(Some(manifest)) = read_manifest(dir) {
        if let Some(runner) = manifest
            .package_manager
            .as_deref()
            .and_then(parse_package_manager_field)
        {
            return Some((
                runner,
                Detection::PackageManagerField(dir.join("package.json")),
            ));
        }
    }

    LOCK_FILES.iter().find_map(|(file, runner)| {
        let path = dir.join(file);
        path.is_file().then(|| (*runner, Detection::LockFile(path)))
    })
}

/// Parse the packageManager field value to extract the runner.
///
/// Handles `pnpm@8.0.0`, `yarn@4.0.0+sha256.abc123` and bare `npm`.
fn parse_package_manager_field(value: &str) -> Option<Runner> {
    let name = value.split('@').next()?;
    name.trim().parse().ok()
}
