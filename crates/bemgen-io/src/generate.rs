//! The generation run: one React component per block directory.

use std::fs;
use std::path::{Component, Path, PathBuf};

use bemgen_codegen::{
    to_component_name, BlockAnalyzer, ComponentEmitter, ReactEmitter, SourceFile,
};
use bemgen_core::NamingParser;
use bemgen_parser::BemNaming;
use log::{debug, info};

use crate::config::GeneratorConfig;
use crate::discover::{copy_tree, find_stylesheets, list_blocks, reset_dir};
use crate::error::{at, IoError, Result};

/// Summary of one generated block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBlock {
    /// Source directory name, e.g. `my-block`.
    pub block: String,
    /// Component name, e.g. `MyBlock`.
    pub component: String,
    /// Written component file.
    pub index_path: PathBuf,
    /// Number of stylesheets classified.
    pub stylesheets: usize,
    /// Number of block-level modifier values.
    pub modifiers: usize,
    /// Number of elements.
    pub elements: usize,
}

/// Summary of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub blocks: Vec<GeneratedBlock>,
}

impl GenerationReport {
    pub fn stylesheet_count(&self) -> usize {
        self.blocks.iter().map(|b| b.stylesheets).sum()
    }
}

/// Turns a source root of block directories into an output root of components.
///
/// Blocks are processed one at a time. The first failure ends the run and
/// leaves already written blocks in place.
pub struct Generator {
    config: GeneratorConfig,
    naming: Box<dyn NamingParser>,
    emitter: Box<dyn ComponentEmitter>,
}

impl Generator {
    /// Create a generator with the configured naming preset and the React emitter.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let naming = Box::new(BemNaming::new(config.naming));
        let emitter = Box::new(ReactEmitter::new()?);
        Ok(Self {
            config,
            naming,
            emitter,
        })
    }

    /// Replace the naming parser.
    pub fn with_naming(mut self, naming: Box<dyn NamingParser>) -> Self {
        self.naming = naming;
        self
    }

    /// Replace the component emitter.
    pub fn with_emitter(mut self, emitter: Box<dyn ComponentEmitter>) -> Self {
        self.emitter = emitter;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Wipe `output_root`, then generate every block under `source_root`.
    pub fn generate(&self, source_root: &Path, output_root: &Path) -> Result<GenerationReport> {
        let source = fs::canonicalize(source_root).map_err(at(source_root))?;
        if source.starts_with(resolve_path(output_root)?) {
            return Err(IoError::OutputContainsSource {
                output: output_root.to_path_buf(),
                source_root: source_root.to_path_buf(),
            });
        }

        let blocks = list_blocks(source_root)?;
        reset_dir(output_root)?;
        info!(
            "generating {} blocks from {} with {} ({} naming)",
            blocks.len(),
            source_root.display(),
            self.emitter.framework_name(),
            self.naming.name()
        );

        let analyzer = BlockAnalyzer::new(&*self.naming, self.config.suffix.as_str());
        let mut report = GenerationReport::default();
        for block in &blocks {
            let generated = self.generate_block(&analyzer, source_root, output_root, block)?;
            report.blocks.push(generated);
        }

        info!(
            "generated {} components from {} stylesheets into {}",
            report.blocks.len(),
            report.stylesheet_count(),
            output_root.display()
        );
        Ok(report)
    }

    /// Copy, discover, classify, emit and write one block.
    fn generate_block(
        &self,
        analyzer: &BlockAnalyzer<'_>,
        source_root: &Path,
        output_root: &Path,
        block: &str,
    ) -> Result<GeneratedBlock> {
        let component_dir = output_root.join(to_component_name(block));
        let css_dir = component_dir.join(&self.config.css_dir);
        copy_tree(&source_root.join(block), &css_dir)?;

        let files: Vec<SourceFile> = find_stylesheets(&component_dir, &self.config.suffix)?
            .into_iter()
            .map(|path| SourceFile::relative_to(&component_dir, path))
            .collect();
        debug!("block {}: {} stylesheets", block, files.len());

        let descriptor = analyzer.analyze(block, &files)?;
        let code = self.emitter.emit(&descriptor)?;

        let index_path = component_dir.join(&self.config.index_file);
        fs::write(&index_path, code).map_err(at(&index_path))?;
        info!("wrote {}", index_path.display());

        Ok(GeneratedBlock {
            block: block.to_string(),
            component: descriptor.name.clone(),
            index_path,
            stylesheets: files.len(),
            modifiers: descriptor.modifier_count(),
            elements: descriptor.children.len(),
        })
    }
}

/// `path` with symlinks, `.` and `..` resolved.
///
/// Components that do not exist yet are applied lexically on top of the
/// nearest existing ancestor.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    for ancestor in path.ancestors() {
        let existing = if ancestor.as_os_str().is_empty() {
            Path::new(".")
        } else {
            ancestor
        };
        let Ok(mut resolved) = fs::canonicalize(existing) else {
            continue;
        };
        let Ok(rest) = path.strip_prefix(ancestor) else {
            continue;
        };

        for component in rest.components() {
            match component {
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::Normal(name) => resolved.push(name),
                Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            }
        }
        return Ok(resolved);
    }

    Err(IoError::Io {
        path: path.to_path_buf(),
        source: std::io::ErrorKind::NotFound.into(),
    })
}
