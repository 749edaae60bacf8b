mod common;
mod decint_cli;

pub use common::*;
pub use decint_cli::*;
