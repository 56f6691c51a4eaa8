//! Core types for the bemgen component generator.
//!
//! This crate provides the foundational types shared by the other bemgen crates:
//! - The parsed form of a BEM identifier (`BemEntity`)
//! - The `NamingParser` capability used to produce it
//! - Error types

pub mod entity;
pub mod errors;

pub use entity::*;
pub use errors::*;
