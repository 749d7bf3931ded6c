use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use statgen_codegen::Generator;

use super::TableArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub table: TableArgs,

    /// Fail if this previously generated file differs from fresh output
    #[arg(long)]
    pub against: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let (manifest, root) = self.table.load();
        let generator = Generator::new(&manifest, root);
        let report = ops::check(&generator, self.table.label(), self.against.as_deref())?;

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
