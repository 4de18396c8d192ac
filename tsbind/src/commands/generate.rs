use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tsbind_manifest::TsbindToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to tsbind.toml (defaults to ./tsbind.toml)
    #[arg(short, long, default_value = "tsbind.toml")]
    pub config: PathBuf,

    /// Output file (overrides the manifest setting)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Type name to always emit, in addition to the manifest's include list
    #[arg(long = "include", value_name = "TYPE")]
    pub include: Vec<String>,

    /// Print the generated module without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Also show informational diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let tsbind_toml = TsbindToml::open(&self.config).unwrap_or_exit();
        let modules = tsbind_toml.load_modules().unwrap_or_exit();
        let templates = tsbind_toml.load_templates().unwrap_or_exit();

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| tsbind_toml.output_path());
        let include: Vec<String> = tsbind_toml
            .manifest()
            .project
            .include
            .iter()
            .chain(&self.include)
            .cloned()
            .collect();

        let report = ops::generate(
            &modules,
            &templates,
            ops::generate::GenerateOptions {
                output: &output,
                include: &include,
                dry_run: self.dry_run,
                verbose: self.verbose,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
