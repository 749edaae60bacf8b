use std::fmt::Display;

use clap::Args;
use decint_calc::{
  eval::{EvalError, Evaluator},
  parser::CalcParser,
};
use log::info;

#[derive(Debug, Default, Clone, Copy, Args)]
pub struct FormatArgs {
  /// Prefix positive values with `+`
  #[arg(long, global = true)]
  plus_sign: bool,
}

impl FormatArgs {
  pub fn show(&self, value: &impl Display) -> String {
    if self.plus_sign {
      format!("{value:+}")
    } else {
      format!("{value}")
    }
  }
}

/// Runs every statement of `src`, printing each outcome as it is produced.
///
/// Nothing runs if `src` does not parse.
pub fn exec_program(
  evaluator: &mut Evaluator,
  src: &str,
  format: FormatArgs,
) -> Result<(), EvalError> {
  let stmts = CalcParser::parse(src)?;
  info!("running {} statements", stmts.len());
  for stmt in stmts {
    let outcome = evaluator.exec_stmt(stmt)?;
    println!("{}", format.show(&outcome));
  }
  Ok(())
}
