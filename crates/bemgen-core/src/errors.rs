//! Error types shared across bemgen crates.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while parsing a BEM identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty BEM identifier")]
    Empty,

    #[error("Invalid BEM identifier {identifier:?}: unexpected {found:?} at offset {offset}")]
    UnexpectedInput {
        identifier: String,
        found: String,
        offset: usize,
    },
}

/// A stylesheet whose file name is not a valid BEM identifier.
///
/// Fatal for a generation run.
#[derive(Debug, Error)]
#[error("File \"{}\" has incorrect name: not in BEM methodology", .path.display())]
pub struct NamingError {
    pub path: PathBuf,
    #[source]
    pub source: ParseError,
}

impl NamingError {
    pub fn new(path: impl Into<PathBuf>, source: ParseError) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naming_error_mentions_path() {
        let err = NamingError::new("/out/Button/css/Button.post.css", ParseError::Empty);
        let message = err.to_string();
        assert!(message.contains("/out/Button/css/Button.post.css"));
        assert!(message.contains("not in BEM methodology"));
    }
}
