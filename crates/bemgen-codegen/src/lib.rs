//! Component generation from BEM stylesheets.
//!
//! This crate turns classified stylesheet files into `Descriptor` trees
//! (one per block) and renders them as React components.
//!
//! # Pipeline
//!
//! ```text
//! SourceFile ─> Classifier ─> Classification
//!            ─> DescriptorBuilder ─> Descriptor ─> ReactEmitter ─> String
//! ```
//!
//! # Example
//!
//! ```ignore
//! use bemgen_codegen::{BlockAnalyzer, ComponentEmitter, ReactEmitter};
//! use bemgen_parser::BemNaming;
//!
//! let naming = BemNaming::origin();
//! let analyzer = BlockAnalyzer::new(&naming, "post.css");
//! let descriptor = analyzer.analyze("button", &files)?;
//! let code = ReactEmitter::new()?.emit(&descriptor)?;
//! ```

pub mod analyzer;
pub mod error;
pub mod generators;
pub mod ident;
pub mod model;

pub use analyzer::{BlockAnalyzer, Classification, Classifier, DescriptorBuilder};
pub use error::{CodegenError, Result};
pub use generators::{ComponentEmitter, ReactEmitter, TemplateEngine};
pub use ident::to_component_name;
pub use model::{Descriptor, Props, SourceFile, StyleRef};
