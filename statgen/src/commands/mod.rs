mod check;
mod generate;
mod list;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;
use miette::Diagnostic;
use statgen_manifest::Manifest;

/// Extension trait for exiting on diagnostic errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, Box<E>>
where
    E: Diagnostic + Send + Sync + 'static,
{
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

#[derive(Parser)]
#[command(name = "statgen")]
#[command(version)]
#[command(about = "Generate Rust enums from C/C++ statistics headers")]
pub(crate) struct Cli {
    /// Log extraction details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Generate(cmd)) => cmd.run(),
            Some(Commands::Check(cmd)) => cmd.run(),
            Some(Commands::List(cmd)) => cmd.run(),
            None => GenerateCommand::default().run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the bindings (the default when no command is given)
    Generate(GenerateCommand),

    /// Extract every enum without writing, optionally comparing to an existing file
    Check(CheckCommand),

    /// Show the task table
    List(ListCommand),
}

/// Selects the task table and the directory header paths resolve against.
#[derive(Args, Default)]
pub struct TableArgs {
    /// Task table file (defaults to the built-in RocksDB and Titan table)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory relative header paths resolve against (defaults to the
    /// task table's directory, or the current directory for the built-in table)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl TableArgs {
    /// Load the task table, exiting with a diagnostic if it is invalid.
    pub fn load(&self) -> (Manifest, PathBuf) {
        match &self.config {
            Some(path) => {
                let manifest = Manifest::from_file(path).unwrap_or_exit();
                let root = self.root.clone().unwrap_or_else(|| {
                    path.parent().map(Path::to_path_buf).unwrap_or_default()
                });
                (manifest, root)
            }
            None => {
                let root = self.root.clone().unwrap_or_else(|| PathBuf::from("."));
                (Manifest::builtin(), root)
            }
        }
    }

    /// Human-readable name of the task table in use.
    pub fn label(&self) -> String {
        match &self.config {
            Some(path) => path.display().to_string(),
            None => "built-in task table".to_string(),
        }
    }
}
