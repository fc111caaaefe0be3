use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use autodoc::{Generator, LayoutConfig};

#[derive(Parser, Debug)]
#[command(name = "autodoc")]
#[command(about = "Generate markdown documentation for a module/component source tree")]
#[command(version)]
#[command(after_long_help = r#"
LAYOUT:
    <src>/<module>/docs/desc.txt                    module description
    <src>/<module>/docs/diagram.{jpg,jpeg,png,svg}  module diagram
    <src>/<module>/components/<component>/...       components, same docs/ layout

    Functions documented in files under a `useCases` or `services` folder of a
    component are listed in the output.

EXAMPLES:
    # Generate docs/modules.md from ./src
    autodoc ./src ./docs

    # Use a custom layout
    autodoc ./src ./docs --config autodoc.toml
"#)]
pub struct Cli {
    /// Source folder containing the modules
    pub src_folder: PathBuf,

    /// Documentation folder to save the markdown file in
    pub doc_folder: PathBuf,

    /// Layout config (TOML); built-in defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

pub fn load_config(path: Option<&PathBuf>) -> anyhow::Result<LayoutConfig> {
    match path {
        Some(path) => LayoutConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(LayoutConfig::default()),
    }
}

pub fn generate(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_ref())?;
    let generator = Generator::new(config).context("Invalid layout config")?;

    let report = generator
        .generate(&cli.src_folder, &cli.doc_folder)
        .with_context(|| {
            format!(
                "Failed to generate documentation from {}",
                cli.src_folder.display()
            )
        })?;

    println!(
        "Generated documentation in {}",
        report.output_path.display()
    );

    Ok(())
}
