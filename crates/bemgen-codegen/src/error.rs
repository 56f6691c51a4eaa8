//! Error types for code generation.

use bemgen_core::NamingError;
use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur while building or rendering descriptors.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// A stylesheet name is not a BEM identifier.
    #[error(transparent)]
    Naming(#[from] NamingError),

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),
}
