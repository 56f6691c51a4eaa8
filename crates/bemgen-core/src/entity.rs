//! Parsed BEM identifiers.

use crate::errors::ParseError;

/// Value given to a modifier written without one (`button_disabled`).
pub const BOOLEAN_MOD_VALUE: &str = "true";

/// A modifier on a block or element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Modifier {
    pub name: String,
    pub val: String,
}

impl Modifier {
    pub fn new(name: impl Into<String>, val: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            val: val.into(),
        }
    }

    /// A modifier written without a value.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, BOOLEAN_MOD_VALUE)
    }
}

/// A parsed BEM identifier.
///
/// The four variants are the only shapes the generator distinguishes:
/// whether an element is present, and whether a modifier is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BemEntity {
    /// `block`
    Block { block: String },
    /// `block_mod_val`
    BlockMod { block: String, modifier: Modifier },
    /// `block__elem`
    Elem { block: String, elem: String },
    /// `block__elem_mod_val`
    ElemMod {
        block: String,
        elem: String,
        modifier: Modifier,
    },
}

impl BemEntity {
    /// Block name, present in every variant.
    pub fn block(&self) -> &str {
        match self {
            Self::Block { block }
            | Self::BlockMod { block, .. }
            | Self::Elem { block, .. }
            | Self::ElemMod { block, .. } => block,
        }
    }

    /// Element name, if this identifier refers to an element.
    pub fn elem(&self) -> Option<&str> {
        match self {
            Self::Elem { elem, .. } | Self::ElemMod { elem, .. } => Some(elem),
            Self::Block { .. } | Self::BlockMod { .. } => None,
        }
    }

    /// Modifier, if any.
    pub fn modifier(&self) -> Option<&Modifier> {
        match self {
            Self::BlockMod { modifier, .. } | Self::ElemMod { modifier, .. } => Some(modifier),
            Self::Block { .. } | Self::Elem { .. } => None,
        }
    }

    /// Build an entity from its optional parts.
    pub fn from_parts(block: String, elem: Option<String>, modifier: Option<Modifier>) -> Self {
        match (elem, modifier) {
            (None, None) => Self::Block { block },
            (None, Some(modifier)) => Self::BlockMod { block, modifier },
            (Some(elem), None) => Self::Elem { block, elem },
            (Some(elem), Some(modifier)) => Self::ElemMod {
                block,
                elem,
                modifier,
            },
        }
    }
}

/// The capability of turning a BEM identifier string into a `BemEntity`.
///
/// Implementations own the naming grammar; the generator only branches on
/// the variant that comes back.
pub trait NamingParser {
    /// Human-readable name of the convention (e.g. "origin").
    fn name(&self) -> &'static str;

    /// Parse one identifier, such as `button__icon_size_big`.
    fn parse(&self, identifier: &str) -> Result<BemEntity, ParseError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let entity = BemEntity::ElemMod {
            block: "card".into(),
            elem: "title".into(),
            modifier: Modifier::new("size", "l"),
        };
        assert_eq!(entity.block(), "card");
        assert_eq!(entity.elem(), Some("title"));
        assert_eq!(entity.modifier(), Some(&Modifier::new("size", "l")));
    }

    #[test]
    fn test_from_parts_picks_variant() {
        let block = BemEntity::from_parts("card".into(), None, None);
        assert!(matches!(block, BemEntity::Block { .. }));

        let block_mod = BemEntity::from_parts("card".into(), None, Some(Modifier::boolean("flat")));
        assert_eq!(block_mod.modifier().map(|m| m.val.as_str()), Some("true"));
        assert_eq!(block_mod.elem(), None);

        let elem = BemEntity::from_parts("card".into(), Some("title".into()), None);
        assert!(matches!(elem, BemEntity::Elem { .. }));
    }
}
