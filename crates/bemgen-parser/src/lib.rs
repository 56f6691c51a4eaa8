//! Parser for BEM identifiers.
//!
//! This crate implements the `NamingParser` capability from `bemgen-core`
//! using `nom` combinators. Two conventions are provided:
//!
//! | Preset | Element | Modifier | Example |
//! |--------|---------|----------|---------|
//! | `origin` | `__` | `_name_val` | `button__icon_size_big` |
//! | `two-dashes` | `__` | `--name_val` | `button__icon--size_big` |
//!
//! # Example
//!
//! ```
//! use bemgen_core::NamingParser;
//! use bemgen_parser::BemNaming;
//!
//! let naming = BemNaming::origin();
//! let entity = naming.parse("button__icon").unwrap();
//! assert_eq!(entity.elem(), Some("icon"));
//! ```

mod grammar;
mod lexer;

pub use grammar::{BemNaming, NamingConvention, Preset};
