//! Builds a block `Descriptor` from a sequence of classifications.
//!
//! Each call to [`DescriptorBuilder::apply`] takes the previous snapshot and
//! one record and returns the next snapshot, so every merge rule can be
//! exercised on its own.

use bemgen_core::BemEntity;
use indexmap::IndexMap;

use super::Classification;
use crate::ident::to_component_name;
use crate::model::{Descriptor, Props};

/// Intermediate state of one block while its files are being folded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorBuilder {
    dir_name: String,
    name: String,
    class_name: Option<String>,
    css_path: Option<String>,
    props: Props,
    children: IndexMap<String, Descriptor>,
}

impl DescriptorBuilder {
    /// Start a block named after its source directory.
    pub fn new(dir_name: impl Into<String>) -> Self {
        let dir_name = dir_name.into();
        Self {
            name: to_component_name(&dir_name),
            dir_name,
            class_name: None,
            css_path: None,
            props: Props::new(),
            children: IndexMap::new(),
        }
    }

    /// Fold one classification into the snapshot.
    pub fn apply(mut self, record: &Classification) -> Self {
        let style = &record.style;
        match &record.entity {
            BemEntity::Block { block } => {
                self.name = to_component_name(block);
                self.class_name = Some(style.class_name.clone());
                self.css_path = Some(style.css_path.clone());
            }
            BemEntity::BlockMod { modifier, .. } => {
                self.props
                    .entry(modifier.name.clone())
                    .or_default()
                    .insert(modifier.val.clone(), style.clone());
            }
            BemEntity::ElemMod {
                block,
                elem,
                modifier,
            } => {
                self.element(block, elem)
                    .set_prop(&modifier.name, &modifier.val, style.clone());
            }
            BemEntity::Elem { block, elem } => {
                let child = self.element(block, elem);
                child.name = to_component_name(elem);
                child.class_name = style.class_name.clone();
                child.css_path = Some(style.css_path.clone());
            }
        }
        self
    }

    /// The element descriptor, created with default name and class on first touch.
    fn element(&mut self, block: &str, elem: &str) -> &mut Descriptor {
        self.children
            .entry(elem.to_string())
            .or_insert_with(|| {
                Descriptor::new(to_component_name(elem), format!("{}__{}", block, elem))
            })
    }

    /// Finish the block. A block without a root stylesheet is classed by its directory name.
    pub fn build(self) -> Descriptor {
        Descriptor {
            name: self.name,
            class_name: self.class_name.unwrap_or(self.dir_name),
            css_path: self.css_path,
            props: self.props,
            children: self.children,
        }
    }
}
