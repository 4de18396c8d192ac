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
pub struct CheckCommand {
    /// Path to tsbind.toml (defaults to ./tsbind.toml)
    #[arg(short, long, default_value = "tsbind.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let tsbind_toml = TsbindToml::open(&self.config).unwrap_or_exit();
        let modules = tsbind_toml.load_modules().unwrap_or_exit();
        // Templates are not rendered, but a missing file should fail here too
        tsbind_toml.load_templates().unwrap_or_exit();

        let report = ops::check(
            &modules,
            &tsbind_toml.manifest().project.include,
            &self.config,
        );
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
