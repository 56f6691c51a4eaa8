//! Grammar rules for BEM identifiers.
//!
//! An identifier is `block[<elem>elem][<mod>name[<val>value]]`, where the
//! three delimiters come from a `NamingConvention`.

use std::fmt;
use std::str::FromStr;

use nom::{
    bytes::complete::tag,
    combinator::opt,
    sequence::{pair, preceded},
    IResult,
};
use serde::{Deserialize, Serialize};

use bemgen_core::{BemEntity, Modifier, NamingParser, ParseError};

use crate::lexer::word;

/// Delimiters of a BEM naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingConvention {
    /// Between block and element.
    pub elem: &'static str,
    /// Before the modifier name.
    pub mod_name: &'static str,
    /// Between modifier name and value.
    pub mod_val: &'static str,
}

impl NamingConvention {
    /// `block__elem_mod_val`
    pub const fn origin() -> Self {
        Self {
            elem: "__",
            mod_name: "_",
            mod_val: "_",
        }
    }

    /// `block__elem--mod_val`
    pub const fn two_dashes() -> Self {
        Self {
            elem: "__",
            mod_name: "--",
            mod_val: "_",
        }
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::origin()
    }
}

/// Named conventions selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[default]
    Origin,
    TwoDashes,
}

impl Preset {
    pub fn convention(self) -> NamingConvention {
        match self {
            Self::Origin => NamingConvention::origin(),
            Self::TwoDashes => NamingConvention::two_dashes(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Origin => write!(f, "origin"),
            Self::TwoDashes => write!(f, "two-dashes"),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "origin" => Ok(Self::Origin),
            "two-dashes" => Ok(Self::TwoDashes),
            other => Err(format!(
                "unknown naming preset '{}' (expected 'origin' or 'two-dashes')",
                other
            )),
        }
    }
}

/// `NamingParser` backed by nom combinators.
#[derive(Debug, Clone, Copy, Default)]
pub struct BemNaming {
    convention: NamingConvention,
    preset: Preset,
}

impl BemNaming {
    pub fn new(preset: Preset) -> Self {
        Self {
            convention: preset.convention(),
            preset,
        }
    }

    pub fn origin() -> Self {
        Self::new(Preset::Origin)
    }

    pub fn two_dashes() -> Self {
        Self::new(Preset::TwoDashes)
    }

    pub fn convention(&self) -> NamingConvention {
        self.convention
    }

    fn entity<'a>(&self, input: &'a str) -> IResult<&'a str, BemEntity> {
        let delims = self.convention;

        let (input, block) = word(input)?;
        let (input, elem) = opt(preceded(tag(delims.elem), word))(input)?;
        let (input, modifier) = opt(pair(
            preceded(tag(delims.mod_name), word),
            opt(preceded(tag(delims.mod_val), word)),
        ))(input)?;

        let modifier = modifier.map(|(name, val)| match val {
            Some(val) => Modifier::new(name, val),
            None => Modifier::boolean(name),
        });

        Ok((
            input,
            BemEntity::from_parts(block.to_string(), elem.map(str::to_string), modifier),
        ))
    }
}

impl NamingParser for BemNaming {
    fn name(&self) -> &'static str {
        match self.preset {
            Preset::Origin => "origin",
            Preset::TwoDashes => "two-dashes",
        }
    }

    fn parse(&self, identifier: &str) -> Result<BemEntity, ParseError> {
        if identifier.is_empty() {
            return Err(ParseError::Empty);
        }

        match self.entity(identifier) {
            Ok(("", entity)) => Ok(entity),
            Ok((rest, _)) => Err(unexpected(identifier, rest)),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                Err(unexpected(identifier, e.input))
            }
            Err(nom::Err::Incomplete(_)) => Err(unexpected(identifier, "")),
        }
    }
}

/// Build an error pointing at the unparsed remainder of `identifier`.
fn unexpected(identifier: &str, rest: &str) -> ParseError {
    ParseError::UnexpectedInput {
        identifier: identifier.to_string(),
        found: rest.to_string(),
        offset: identifier.len() - rest.len(),
    }
}
