use anyhow::Result;
use clap::Args;
use decint::BigInt;
use decint_calc::eval::power;

use crate::FormatArgs;

#[derive(Debug, Args)]
pub struct PowArgs {
  #[arg(allow_negative_numbers = true)]
  base: String,
  /// Refused when the result would exceed 50000 digits
  #[arg(allow_negative_numbers = true)]
  exponent: i64,
}

impl PowArgs {
  pub fn execute(self, format: FormatArgs) -> Result<()> {
    let base = BigInt::parse(&self.base)?;
    let value = power(&base, &BigInt::from(self.exponent))?;
    println!("{}", format.show(&value));
    Ok(())
  }
}
