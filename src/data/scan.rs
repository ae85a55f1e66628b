use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::NaturalKey;

// ---------------------------------------------------------------------------
// File enumeration
// ---------------------------------------------------------------------------

/// Names of the regular files directly inside `dir` that end with `suffix`.
///
/// Not recursive. Sub-directories and names that are not valid UTF-8 are
/// skipped. The order is whatever the file system returns; see
/// [`natural_sort`].
pub fn list_files(dir: &Path, suffix: &str) -> Result<Vec<String>> {
    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("listing directory {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("reading entry of {}", dir.display()))?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("inspecting {}", entry.path().display()))?;
        if file_type.is_dir() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            log::debug!("skipping non UTF-8 file name in {}", dir.display());
            continue;
        };
        if name.ends_with(suffix) {
            names.push(name);
        }
    }
    Ok(names)
}

// ---------------------------------------------------------------------------
// Natural ordering
// ---------------------------------------------------------------------------

/// Order file names so that `run2.out` comes before `run10.out`.
///
/// Stable: names with equal keys (e.g. `Run1` and `run1`) keep their input
/// order.
pub fn natural_sort(mut names: Vec<String>) -> Vec<String> {
    names.sort_by_cached_key(|name| NaturalKey::new(name));
    names
}
