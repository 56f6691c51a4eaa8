//! Code generators for block descriptors.

mod react;
mod templates;

pub use react::ReactEmitter;
pub use templates::TemplateEngine;

use crate::error::Result;
use crate::model::Descriptor;

/// Common trait for component emitters.
///
/// Emitters are pure: the same descriptor always renders to the same text.
pub trait ComponentEmitter {
    /// Target framework name.
    fn framework_name(&self) -> &'static str;

    /// Render the source of one block, with its elements attached.
    fn emit(&self, descriptor: &Descriptor) -> Result<String>;
}
