//! runx - pick a script from a project or monorepo and run it.
//!
//! Entry point for the runx CLI application.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;

use runx::cli::Cli;
use runx::config::{generate_example_config, load_config, Config};
use runx::error::{exit_code, RunxError};
use runx::filter::MatchFields;
use runx::logging;
use runx::package::{
    detect_runner, detect_runner_reason, discover, Discovery, EnumerateOptions, MonorepoPackage,
};
use runx::runner::{launch, split_args, Launch, LaunchOptions};
use runx::select::{
    filter_packages, find_script, plan_selection, ScriptTarget, SelectionOptions, SelectionPlan,
};
use runx::tui::{run_tui, App, Outcome, Theme};
use runx::utils::{find_project_root, relative_dir};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            if let Some(runx_err) = err.downcast_ref::<RunxError>() {
                eprintln!("Error: {runx_err}");
                return ExitCode::from(runx_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    // Handle shell completions early
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    if cli.print_config {
        print!("{}", generate_example_config());
        return Ok(exit_code::SUCCESS);
    }

    logging::init(cli.debug);
    debug!(version = env!("CARGO_PKG_VERSION"), ?cli, "starting");

    let root = find_project_root(&cli.start_dir()).context("Failed to find project directory")?;
    debug!(root = %root.display(), "project root");

    let mut config = if cli.no_config {
        Config::default()
    } else {
        load_config(cli.config.as_deref(), &root)?
    };
    cli.apply_to(&mut config);
    debug!(?config, "effective configuration");

    let Discovery {
        workspace,
        packages,
    } = discover(&root, &EnumerateOptions::from(&config.workspace))?;
    match &workspace {
        Some(ws) => debug!(source = %ws.source, patterns = ?ws.patterns, "monorepo detected"),
        None => debug!("single package project"),
    }

    let packages = match &cli.package {
        Some(name) => filter_packages(packages, name)?,
        None => packages,
    };
    debug!(count = packages.len(), "packages enumerated");

    if cli.list {
        return list_packages(&root, &packages);
    }

    if let Some(name) = &cli.script {
        let target = find_script(&packages, name)?;
        return run_target(target, &cli, &config);
    }

    let options = SelectionOptions::from(&config.general);
    match plan_selection(&root, &packages, &options)? {
        SelectionPlan::AutoRun { target, message } => {
            eprintln!("{message}");
            run_target(target, &cli, &config)
        }
        SelectionPlan::Pick(items) => {
            let title = dir_name(&root);
            let info = match &workspace {
                Some(ws) => format!("{} · {} packages", ws.source, packages.len()),
                None => detect_runner(&root).to_string(),
            };

            let app = App::new(items, MatchFields::from(&config.picker), title, info);
            let theme = Theme::new(&config.picker.theme);

            match run_tui(app, &theme).context("TUI error")? {
                Outcome::Accepted(target) => run_target(target, &cli, &config),
                Outcome::Cancelled => {
                    debug!("selection cancelled");
                    Ok(exit_code::SUCCESS)
                }
            }
        }
    }
}

/// Launch `target` with the configured or detected package manager.
fn run_target(target: ScriptTarget, cli: &Cli, config: &Config) -> Result<i32> {
    let runner = match config.general.runner {
        Some(runner) => {
            debug!(%runner, "package manager overridden");
            runner
        }
        None => {
            let (runner, reason) = detect_runner_reason(&target.dir);
            debug!(%runner, %reason, "package manager detected");
            runner
        }
    };

    let request = Launch::new(target, runner, split_args(cli.args.as_deref()));
    let result = launch(
        &request,
        LaunchOptions {
            dry_run: cli.dry_run,
        },
    )?;

    Ok(result.exit_code())
}

/// Print every package and its scripts (non-TUI mode).
fn list_packages(root: &Path, packages: &[MonorepoPackage]) -> Result<i32> {
    let total: usize = packages.iter().map(|p| p.scripts.len()).sum();
    if total == 0 {
        return Err(RunxError::NoRunnableScripts {
            root: root.to_path_buf(),
        }
        .into());
    }

    let use_colors = io::stdout().is_terminal();

    for package in packages.iter().filter(|p| !p.scripts.is_empty()) {
        let relative = relative_dir(&package.dir, root);
        let runner = detect_runner(&package.dir);

        if use_colors {
            println!(
                "\x1b[1;36m{}\x1b[0m \x1b[2m{} ({})\x1b[0m",
                package.name, relative, runner
            );
        } else {
            println!("{} {} ({})", package.name, relative, runner);
        }

        let max_name_len = package
            .scripts
            .iter()
            .map(|s| s.name().chars().count())
            .max()
            .unwrap_or(0)
            .min(30);

        for script in package.scripts.iter() {
            let command = truncate_string(script.command(), 60);
            if use_colors {
                println!(
                    "  \x1b[1;32m{:width$}\x1b[0m  \x1b[2m{}\x1b[0m",
                    script.name(),
                    command,
                    width = max_name_len
                );
            } else {
                println!("  {:width$}  {}", script.name(), command, width = max_name_len);
            }
        }
        println!();
    }

    let summary = format!(
        "{} in {}",
        plural(total, "script"),
        plural(packages.len(), "package")
    );
    if use_colors {
        println!("\x1b[2m{summary}\x1b[0m");
    } else {
        println!("{summary}");
    }

    Ok(exit_code::SUCCESS)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("project")
        .to_string()
}

/// Truncate a string to a maximum length, adding ellipsis if needed.
fn truncate_string(s: &str, max_len: usize) -> String {
    if max_len < 4 {
        return s.chars().take(max_len).collect();
    }

    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
