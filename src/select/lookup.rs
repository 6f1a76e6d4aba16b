//! Direct lookups for `--package` and `--script`.

use anyhow::Result;

use super::item::ScriptTarget;
use crate::error::RunxError;
use crate::package::MonorepoPackage;

/// Keep only the package named `name`.
///
/// Matches the manifest name first, then the directory name, so both
/// `@acme/web` and `web` select `packages/web`.
///
/// # Errors
///
/// Returns [`RunxError::PackageNotFound`] listing the available names.
pub fn filter_packages(packages: Vec<MonorepoPackage>, name: &str) -> Result<Vec<MonorepoPackage>> {
    let by_name: Vec<usize> = matching(&packages, |p| p.name == name);
    let indices = if by_name.is_empty() {
        matching(&packages, |p| p.dir.file_name().is_some_and(|d| d == name))
    } else {
        by_name
    };

    if indices.is_empty() {
        let available = packages
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(RunxError::PackageNotFound {
            name: name.to_string(),
            available,
        }
        .into());
    }

    Ok(packages
        .into_iter()
        .enumerate()
        .filter(|(i, _)| indices.contains(i))
        .map(|(_, p)| p)
        .collect())
}

fn matching(packages: &[MonorepoPackage], pred: impl Fn(&MonorepoPackage) -> bool) -> Vec<usize> {
    packages
        .iter()
        .enumerate()
        .filter(|(_, p)| pred(p))
        .map(|(i, _)| i)
        .collect()
}

/// Find the script `name` across `packages`.
///
/// # Errors
///
/// - Not found anywhere: [`RunxError::ScriptNotFound`] or
///   [`RunxError::ScriptNotFoundWithSuggestions`].
/// - Found in more than one package: [`RunxError::AmbiguousScript`].
pub fn find_script(packages: &[MonorepoPackage], name: &str) -> Result<ScriptTarget> {
    let mut found = packages
        .iter()
        .filter_map(|p| p.scripts.get(name).map(|s| ScriptTarget::new(p, s)));

    match (found.next(), found.next()) {
        (Some(target), None) => Ok(target),
        (None, _) => {
            let known: Vec<&str> = packages.iter().flat_map(|p| p.scripts.names()).collect();
            Err(RunxError::script_not_found(name, &known).into())
        }
        (Some(_), Some(_)) => {
            let packages = packages
                .iter()
                .filter(|p| p.scripts.contains(name))
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Err(RunxError::AmbiguousScript {
                name: name.to_string(),
                packages,
            }
            .into())
        }
    }
}
