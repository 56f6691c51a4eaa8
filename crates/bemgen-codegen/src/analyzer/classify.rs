//! Classification of stylesheet files by their BEM name.

use bemgen_core::{BemEntity, NamingError, NamingParser};
use log::debug;

use crate::model::{SourceFile, StyleRef};

/// One stylesheet, reduced to what the descriptor builder needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Parsed BEM identifier; the variant selects the merge rule.
    pub entity: BemEntity,
    /// The raw identifier as class name, plus the relative stylesheet path.
    pub style: StyleRef,
}

/// Turns stylesheet files into `Classification`s.
pub struct Classifier<'a> {
    naming: &'a dyn NamingParser,
    suffix: String,
}

impl<'a> Classifier<'a> {
    /// `suffix` is the fixed file name ending without its leading dot, e.g. `post.css`.
    pub fn new(naming: &'a dyn NamingParser, suffix: impl Into<String>) -> Self {
        Self {
            naming,
            suffix: suffix.into(),
        }
    }

    /// Identifier part of a file name: `button_size_l.post.css` -> `button_size_l`.
    pub fn identifier<'f>(&self, file_name: &'f str) -> &'f str {
        file_name
            .strip_suffix(self.suffix.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or(file_name)
    }

    /// Classify one file. Fails when its name is not a BEM identifier.
    pub fn classify(&self, file: &SourceFile) -> Result<Classification, NamingError> {
        let file_name = file.file_name();
        let identifier = self.identifier(&file_name);

        let entity = self
            .naming
            .parse(identifier)
            .map_err(|source| NamingError::new(&file.path, source))?;

        debug!(
            "classified {} as {:?} ({} naming)",
            file.css_path,
            entity,
            self.naming.name()
        );

        Ok(Classification {
            entity,
            style: StyleRef::new(identifier, file.css_path.as_str()),
        })
    }
}
