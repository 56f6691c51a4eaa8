//! bemgen-io: filesystem side of the bemgen generator.
//!
//! This crate discovers block directories, copies their stylesheets into the
//! output tree, hands the discovered files to `bemgen-codegen`, and writes
//! the generated components.
//!
//! # Layout
//!
//! ```text
//! source/                      output/
//! ├── my-block/                ├── MyBlock/
//! │   ├── my-block.post.css    │   ├── css/          (copy of source/my-block)
//! │   └── __icon/...           │   └── index.js
//! └── bemgen.toml (optional)   └── ...
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use bemgen_io::{Generator, GeneratorConfig};
//!
//! let generator = Generator::new(GeneratorConfig::default())?;
//! let report = generator.generate(&source, &output)?;
//! println!("{} components", report.blocks.len());
//! ```

pub mod config;
pub mod discover;
pub mod error;
pub mod generate;

pub use config::{ConfigError, GeneratorConfig, CONFIG_FILE_NAME};
pub use discover::{copy_tree, find_stylesheets, list_blocks, reset_dir};
pub use error::{IoError, Result};
pub use generate::{GeneratedBlock, GenerationReport, Generator};
