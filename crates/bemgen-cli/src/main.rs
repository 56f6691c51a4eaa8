use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bemgen_io::{Generator, GeneratorConfig};
use bemgen_parser::Preset;
use clap::Parser;

#[derive(Parser)]
#[command(name = "bemgen", version)]
#[command(about = "Generate React components from a directory of BEM stylesheets")]
struct Args {
    /// Source root; every subdirectory is one block
    source: PathBuf,

    /// Output root; removed and recreated on every run
    output: PathBuf,

    /// Config file (defaults to <SOURCE>/bemgen.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stylesheet suffix, e.g. "post.css"
    #[arg(long)]
    suffix: Option<String>,

    /// BEM naming convention (origin, two-dashes)
    #[arg(long)]
    naming: Option<Preset>,

    /// Log every classified stylesheet
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let source = absolute(&args.source)?;
    let output = absolute(&args.output)?;
    let config = load_config(&args, &source)?;

    let generator = Generator::new(config)?;
    log::debug!("config: {:?}", generator.config());
    let report = generator
        .generate(&source, &output)
        .with_context(|| format!("Failed to generate components from {}", source.display()))?;

    for block in &report.blocks {
        log::debug!(
            "{} -> {} ({} modifiers, {} elements)",
            block.block,
            block.index_path.display(),
            block.modifiers,
            block.elements
        );
    }
    log::info!("Done: {} components", report.blocks.len());
    Ok(())
}

/// Explicit `--config`, else `<source>/bemgen.toml`, else defaults; then flags on top.
fn load_config(args: &Args, source: &Path) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::load_from_path(path)?,
        None => GeneratorConfig::discover(source)?.unwrap_or_default(),
    };

    if let Some(suffix) = &args.suffix {
        config = config.with_suffix(suffix.as_str());
    }
    if let Some(naming) = args.naming {
        config = config.with_naming(naming);
    }

    Ok(config)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("Invalid path {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(bemgen_io::CONFIG_FILE_NAME),
            "suffix = \"css\"\nindex_file = \"index.jsx\"\n",
        )
        .unwrap();

        let args = Args::parse_from(["bemgen", "src", "out", "--naming", "two-dashes"]);
        let config = load_config(&args, dir.path()).unwrap();
        assert_eq!(config.suffix, "css");
        assert_eq!(config.index_file, "index.jsx");
        assert_eq!(config.naming, Preset::TwoDashes);

        let args = Args::parse_from(["bemgen", "src", "out", "--suffix", ".post.css"]);
        let config = load_config(&args, dir.path()).unwrap();
        assert_eq!(config.suffix, "post.css");
    }

    #[test]
    fn test_rejects_unknown_naming() {
        let result = Args::try_parse_from(["bemgen", "src", "out", "--naming", "react"]);
        assert!(result.is_err());
    }
}
