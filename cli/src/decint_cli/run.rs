use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use decint_calc::eval::Evaluator;

use crate::{exec_program, FormatArgs};

#[derive(Debug, Args)]
pub struct RunArgs {
  src: PathBuf,
}

impl RunArgs {
  pub fn execute(self, format: FormatArgs) -> Result<()> {
    let src = fs::read_to_string(&self.src)
      .with_context(|| format!("cannot read file `{}`", self.src.display()))?;
    exec_program(&mut Evaluator::new(), &src, format)?;
    Ok(())
  }
}
