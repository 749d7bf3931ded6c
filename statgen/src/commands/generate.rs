use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::Args;
use eyre::{Context, Result};
use statgen_codegen::Generator;

use super::{TableArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args, Default)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub table: TableArgs,

    /// Write the bindings to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let (manifest, root) = self.table.load();
        let generated = Generator::new(&manifest, root).generate().unwrap_or_exit();

        match &self.output {
            Some(path) => {
                let report = ops::write_bindings(&generated, path)?;
                report.render(&mut TerminalOutput::new());
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(generated.content.as_bytes())
                    .and_then(|()| stdout.flush())
                    .wrap_err("Failed to write bindings to stdout")?;
            }
        }

        Ok(())
    }
}
