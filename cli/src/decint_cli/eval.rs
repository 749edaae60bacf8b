use anyhow::Result;
use clap::Args;
use decint_calc::eval::Evaluator;

use crate::{exec_program, FormatArgs};

#[derive(Debug, Args)]
pub struct EvalArgs {
  /// Programs to run in order; later ones see earlier bindings
  #[arg(required = true, allow_hyphen_values = true)]
  srcs: Vec<String>,
}

impl EvalArgs {
  pub fn execute(self, format: FormatArgs) -> Result<()> {
    let mut evaluator = Evaluator::new();
    for src in &self.srcs {
      exec_program(&mut evaluator, src, format)?;
    }
    Ok(())
  }
}
