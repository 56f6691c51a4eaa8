//! Block and stylesheet discovery.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::error::{at, IoError, Result};

/// Names of the block directories directly under `source_root`, sorted.
///
/// Files at the top level (such as `bemgen.toml`) are skipped.
pub fn list_blocks(source_root: &Path) -> Result<Vec<String>> {
    let mut blocks = Vec::new();

    for entry in fs::read_dir(source_root).map_err(at(source_root))? {
        let entry = entry.map_err(at(source_root))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(at(&path))?;

        if file_type.is_dir() {
            blocks.push(entry.file_name().to_string_lossy().into_owned());
        } else {
            debug!("skipping {}: not a block directory", path.display());
        }
    }

    blocks.sort();
    Ok(blocks)
}

/// Copy the tree at `from` into `to`, creating `to` if needed.
pub fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    for entry in WalkDir::new(from).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(from) else {
            continue;
        };
        let target = to.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(at(&target))?;
        } else {
            fs::copy(entry.path(), &target).map_err(at(&target))?;
        }
    }
    Ok(())
}

/// Every file beneath `dir` named `*.<suffix>`, in path order.
///
/// Paths are compared component by component, so `a/b.post.css` sorts
/// before `a-x.post.css` even though `-` is lower than `/` as text.
pub fn find_stylesheets(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/**/*.{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        glob::Pattern::escape(suffix)
    );

    let paths = glob::glob(&pattern).map_err(|source| IoError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for path in paths {
        let path = path?;
        if path.is_file() {
            files.push(path);
        }
    }

    // load-bearing: emission order follows this order
    files.sort();
    Ok(files)
}

/// Remove `dir` if present and create it empty.
pub fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(at(dir))?;
    }
    fs::create_dir_all(dir).map_err(at(dir))
}
