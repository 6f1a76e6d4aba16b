//! Selection planning: decide between auto-starting a script and asking.

use std::path::Path;

use tracing::debug;

use super::item::{PickItem, ScriptTarget};
use crate::config::{GeneralConfig, DEFAULT_PREFERRED_SCRIPTS};
use crate::error::RunxError;
use crate::package::MonorepoPackage;

/// Inputs to [`plan_selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOptions {
    /// Start a script without asking when there is exactly one package.
    pub auto_start: bool,
    /// Default script name.
    pub command: Option<String>,
    /// Auto-start candidates in priority order.
    pub preferred_scripts: Vec<String>,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            auto_start: true,
            command: None,
            preferred_scripts: DEFAULT_PREFERRED_SCRIPTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl From<&GeneralConfig> for SelectionOptions {
    fn from(general: &GeneralConfig) -> Self {
        Self {
            auto_start: general.auto_start,
            command: general.command.clone(),
            preferred_scripts: general.preferred_scripts.clone(),
        }
    }
}

/// What to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionPlan {
    /// Run this script immediately and report `message`.
    AutoRun {
        target: ScriptTarget,
        message: String,
    },
    /// Let the user choose from these items.
    Pick(Vec<PickItem>),
}

/// Build the selection for the discovered packages.
///
/// With a single package and auto-start on, the configured command is
/// started if the package has it, otherwise the first preferred script it
/// has. Failing both, or with auto-start off, every script is listed.
///
/// With zero or several packages, each package gets a separator followed by
/// just the configured command (if set, and only where present) or all its
/// scripts. Separators with nothing under them are left out.
///
/// # Errors
///
/// Returns [`RunxError::NoRunnableScripts`] when the list would be empty.
pub fn plan_selection(
    root: &Path,
    packages: &[MonorepoPackage],
    options: &SelectionOptions,
) -> anyhow::Result<SelectionPlan> {
    let items = match packages {
        [package] => {
            if options.auto_start {
                if let Some(plan) = auto_start(package, options) {
                    return Ok(plan);
                }
            }
            single_package_items(package)
        }
        _ => monorepo_items(packages, options.command.as_deref()),
    };

    if !items.iter().any(|item| !item.is_separator()) {
        return Err(RunxError::NoRunnableScripts {
            root: root.to_path_buf(),
        }
        .into());
    }

    debug!(items = items.len(), "selection list built");
    Ok(SelectionPlan::Pick(items))
}

fn auto_start(package: &MonorepoPackage, options: &SelectionOptions) -> Option<SelectionPlan> {
    if let Some(script) = options
        .command
        .as_deref()
        .and_then(|name| package.scripts.get(name))
    {
        return Some(SelectionPlan::AutoRun {
            target: ScriptTarget::new(package, script),
            message: format!("Started command: {}", script.name()),
        });
    }

    options
        .preferred_scripts
        .iter()
        .find_map(|name| package.scripts.get(name))
        .map(|script| SelectionPlan::AutoRun {
            target: ScriptTarget::new(package, script),
            message: format!("Auto-started script: {}", script.name()),
        })
}

fn single_package_items(package: &MonorepoPackage) -> Vec<PickItem> {
    package
        .scripts
        .iter()
        .map(|script| PickItem::Script(ScriptTarget::new(package, script)))
        .collect()
}

fn monorepo_items(packages: &[MonorepoPackage], command: Option<&str>) -> Vec<PickItem> {
    let mut items = Vec::new();

    for package in packages {
        let scripts: Vec<PickItem> = match command {
            Some(name) => package
                .scripts
                .get(name)
                .map(|script| PickItem::Script(ScriptTarget::new(package, script)))
                .into_iter()
                .collect(),
            None => single_package_items(package),
        };

        if scripts.is_empty() {
            continue;
        }

        items.push(PickItem::separator(&package.name));
        items.extend(scripts);
    }

    items
}
