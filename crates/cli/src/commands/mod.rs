//! Subcommand implementations.

pub mod deploy;
pub mod generate;
pub mod status;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{eyre, Result};
use walkdir::WalkDir;

/// Collect the given files and directories into a path -> content bundle.
/// Directory entries are walked recursively; paths are stored relative to
/// the argument so the bundle layout matches what the user passed in.
pub fn collect_bundle(paths: &[PathBuf]) -> Result<HashMap<String, String>> {
    let mut bundle = HashMap::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
                if entry.file_type().is_file() {
                    insert_file(&mut bundle, entry.path(), Some(path))?;
                }
            }
        } else if path.is_file() {
            insert_file(&mut bundle, path, None)?;
        } else {
            return Err(eyre!("no such file or directory: {}", path.display()));
        }
    }
    if bundle.is_empty() {
        return Err(eyre!("no files found in the given paths"));
    }
    Ok(bundle)
}

fn insert_file(
    bundle: &mut HashMap<String, String>,
    file: &Path,
    root: Option<&Path>,
) -> Result<()> {
    let key = match root {
        Some(root) => file.strip_prefix(root).unwrap_or(file),
        None => file,
    };
    let content = std::fs::read_to_string(file)
        .map_err(|e| eyre!("failed to read {}: {e}", file.display()))?;
    bundle.insert(key.to_string_lossy().into_owned(), content);
    Ok(())
}
