//! Input discovery
//!
//! Inputs may name export files directly or directories holding them.

use crate::constants::CATALOG_FILE_EXTENSION;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Expand input paths into the list of export files to read
///
/// Files are kept in the order given. Directories are walked recursively for
/// `*.csv` files, which are sorted by path so repeated runs read the same
/// sequence.
pub fn discover_catalog_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            let found = discover_in_directory(input)?;
            if found.is_empty() {
                warn!("No .{} files found in {}", CATALOG_FILE_EXTENSION, input.display());
            }
            files.extend(found);
        } else {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                input.display()
            )));
        }
    }

    debug!("Discovered {} catalog file(s)", files.len());
    Ok(files)
}

fn discover_in_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        if entry.file_type().is_file() && is_catalog_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn is_catalog_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CATALOG_FILE_EXTENSION))
}
