mod check;
mod completions;
mod generate;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for mapgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Render Go source errors with their spans and exit; pass anything else on.
pub(crate) fn exit_on_source_error(err: eyre::Report) -> eyre::Report {
    match err.downcast::<mapgen_source::Error>() {
        Ok(source) => {
            eprintln!("{:?}", miette::Report::new(source));
            std::process::exit(1);
        }
        Err(err) => err,
    }
}

#[derive(Parser)]
#[command(name = "mapgen")]
#[command(version)]
#[command(about = "Generate Go DTO mappers from domain structs")]
pub(crate) struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the mapping file from mapgen.toml
    Generate(GenerateCommand),

    /// Validate mapgen.toml and the domain sources without writing
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
