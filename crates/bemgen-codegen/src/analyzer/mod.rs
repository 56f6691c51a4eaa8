//! Stylesheet analysis: file names in, block descriptors out.

mod builder;
mod classify;

pub use builder::DescriptorBuilder;
pub use classify::{Classification, Classifier};

use bemgen_core::NamingParser;
use log::debug;

use crate::error::Result;
use crate::model::{Descriptor, SourceFile};

/// Builds the descriptor of one block from its stylesheet files.
pub struct BlockAnalyzer<'a> {
    classifier: Classifier<'a>,
}

impl<'a> BlockAnalyzer<'a> {
    /// Create an analyzer for files named `<identifier>.<suffix>`.
    pub fn new(naming: &'a dyn NamingParser, suffix: impl Into<String>) -> Self {
        Self {
            classifier: Classifier::new(naming, suffix),
        }
    }

    /// Fold `files`, in the given order, into the descriptor of block `dir_name`.
    ///
    /// Stops at the first file whose name is not a BEM identifier.
    pub fn analyze(&self, dir_name: &str, files: &[SourceFile]) -> Result<Descriptor> {
        let mut builder = DescriptorBuilder::new(dir_name);

        for file in files {
            let record = self.classifier.classify(file)?;
            builder = builder.apply(&record);
        }

        let descriptor = builder.build();
        debug!(
            "block {}: {} modifier values, {} elements",
            descriptor.name,
            descriptor.modifier_count(),
            descriptor.children.len()
        );
        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodegenError;
    use bemgen_parser::BemNaming;
    use std::path::Path;

    fn files(names: &[&str]) -> Vec<SourceFile> {
        let dir = Path::new("/out/MyBlock");
        names
            .iter()
            .map(|n| SourceFile::relative_to(dir, dir.join("css").join(n)))
            .collect()
    }

    #[test]
    fn test_analyze_scenario() {
        let naming = BemNaming::origin();
        let analyzer = BlockAnalyzer::new(&naming, "post.css");
        let descriptor = analyzer
            .analyze(
                "my-block",
                &files(&[
                    "my-block.post.css",
                    "my-block__icon.post.css",
                    "my-block__icon_size_big.post.css",
                    "my-block_theme_red.post.css",
                ]),
            )
            .unwrap();

        assert_eq!(descriptor.name, "MyBlock");
        assert_eq!(descriptor.class_name, "my-block");
        assert_eq!(
            descriptor.prop("theme", "red").unwrap().css_path,
            "./css/my-block_theme_red.post.css"
        );
        let icon = &descriptor.children["icon"];
        assert_eq!(icon.name, "Icon");
        assert_eq!(icon.class_name, "my-block__icon");
        assert_eq!(
            icon.prop("size", "big").unwrap().class_name,
            "my-block__icon_size_big"
        );
    }

    #[test]
    fn test_analyze_aborts_on_bad_name() {
        let naming = BemNaming::origin();
        let analyzer = BlockAnalyzer::new(&naming, "post.css");
        let err = analyzer
            .analyze("my-block", &files(&["my-block.post.css", "My_Block.post.css"]))
            .unwrap_err();

        match err {
            CodegenError::Naming(e) => {
                assert!(e.path.ends_with("My_Block.post.css"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
