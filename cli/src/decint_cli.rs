mod eval;
mod fib;
mod pow;
mod repl;
mod run;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::FormatArgs;

pub use eval::EvalArgs;
pub use fib::FibArgs;
pub use pow::PowArgs;
pub use repl::ReplArgs;
pub use run::RunArgs;

#[derive(Debug, Parser)]
#[command(name = "decint", version, about = "Decimal integer calculator", propagate_version = true)]
pub struct DecintArgs {
  #[command(flatten)]
  format: FormatArgs,
  #[command(subcommand)]
  command: DecintCommand,
}

impl DecintArgs {
  pub fn execute(self) -> Result<()> {
    let DecintArgs { format, command } = self;
    match command {
      DecintCommand::Eval(args) => args.execute(format),
      DecintCommand::Run(args) => args.execute(format),
      DecintCommand::Repl(args) => args.execute(format),
      DecintCommand::Fib(args) => args.execute(format),
      DecintCommand::Pow(args) => args.execute(format),
    }
  }
}

#[derive(Debug, Subcommand)]
pub enum DecintCommand {
  #[command(about = "Evaluate statements given as arguments")]
  Eval(EvalArgs),
  #[command(about = "Evaluate a program file")]
  Run(RunArgs),
  #[command(about = "Evaluate statements read line by line")]
  Repl(ReplArgs),
  #[command(about = "Print the n-th Fibonacci number")]
  Fib(FibArgs),
  #[command(about = "Raise an integer to a non-negative power")]
  Pow(PowArgs),
}
