use anyhow::Result;
use clap::Args;
use decint::BigInt;
use decint_calc::eval::fib;

use crate::FormatArgs;

#[derive(Debug, Args)]
pub struct FibArgs {
  /// 1-based index, at most 50000; `fib 0` prints 0
  n: u64,
}

impl FibArgs {
  pub fn execute(self, format: FormatArgs) -> Result<()> {
    println!("{}", format.show(&fib(&BigInt::from(self.n))?));
    Ok(())
  }
}
