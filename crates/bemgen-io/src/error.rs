//! Error types for bemgen-io.

use std::path::{Path, PathBuf};
use thiserror::Error;

use bemgen_codegen::CodegenError;

use crate::config::ConfigError;

/// Result type for bemgen-io operations.
pub type Result<T> = std::result::Result<T, IoError>;

/// Errors from discovery, copying, writing, or generation.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem operation failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The stylesheet search pattern could not be compiled.
    #[error("Invalid stylesheet pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// A path matched during stylesheet search could not be read.
    #[error(transparent)]
    Glob(#[from] glob::GlobError),

    /// Directory traversal failed while copying a block.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    /// The output root would remove the source root.
    #[error(
        "Output directory {} contains the source directory {}",
        .output.display(),
        .source_root.display()
    )]
    OutputContainsSource {
        output: PathBuf,
        source_root: PathBuf,
    },

    /// Descriptor building or emission failed (includes naming errors).
    #[error(transparent)]
    Codegen(#[from] CodegenError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Map an `std::io::Error` to `IoError::Io` at `path`.
pub(crate) fn at(path: &Path) -> impl FnOnce(std::io::Error) -> IoError + '_ {
    move |source| IoError::Io {
        path: path.to_path_buf(),
        source,
    }
}
