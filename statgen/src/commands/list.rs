use clap::Args;
use eyre::Result;

use super::TableArgs;
use crate::reports::{ListReport, Report, TerminalOutput};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub table: TableArgs,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let (manifest, root) = self.table.load();
        let report = ListReport::new(&manifest, &root);
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
