use anyhow::Result;
use clap::Parser;
use decint_cli::DecintArgs;

fn main() -> Result<()> {
  env_logger::init();
  DecintArgs::parse().execute()
}
