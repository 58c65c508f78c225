use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mapgen_manifest::MapgenToml;

use super::{UnwrapOrExit, exit_on_source_error};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to mapgen.toml (defaults to ./mapgen.toml)
    #[arg(short, long, default_value = "mapgen.toml")]
    pub config: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON snapshot of every pipeline phase to .mapgen/debug/
    #[arg(long)]
    pub visualize: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = MapgenToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            &file,
            GenerateOptions {
                dry_run: self.dry_run,
                visualize: self.visualize,
            },
        )
        .map_err(exit_on_source_error)?;

        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }

        Ok(())
    }
}
