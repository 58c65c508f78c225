use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use mapgen_manifest::MapgenToml;

use super::{UnwrapOrExit, exit_on_source_error};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to mapgen.toml (defaults to ./mapgen.toml)
    #[arg(short, long, default_value = "mapgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = MapgenToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(&file).map_err(exit_on_source_error)?;

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
