use std::io::{self, BufRead, IsTerminal};

use anyhow::Result;
use clap::Args;
use decint_calc::eval::Evaluator;
use rustyline::{error::ReadlineError, DefaultEditor};

use crate::{exec_program, FormatArgs};

#[derive(Debug, Args)]
pub struct ReplArgs {
  /// Print each input line before its output
  #[arg(long)]
  echo: bool,
}

impl ReplArgs {
  pub fn execute(self, format: FormatArgs) -> Result<()> {
    let mut repl = Repl { evaluator: Evaluator::new(), format, echo: self.echo };
    if !io::stdin().is_terminal() {
      for line in io::stdin().lock().lines() {
        repl.line(&line?);
      }
      return Ok(());
    }
    let mut editor = DefaultEditor::new()?;
    loop {
      match editor.readline("> ") {
        Ok(line) => {
          editor.add_history_entry(line.as_str())?;
          repl.line(&line);
        }
        Err(ReadlineError::Interrupted) => continue,
        Err(ReadlineError::Eof) => return Ok(()),
        Err(err) => return Err(err.into()),
      }
    }
  }
}

struct Repl {
  evaluator: Evaluator,
  format: FormatArgs,
  echo: bool,
}

impl Repl {
  fn line(&mut self, line: &str) {
    if self.echo {
      println!("> {line}");
    }
    if line.trim() == ":vars" {
      for (name, value) in self.evaluator.vars() {
        println!("{name} = {}", self.format.show(value));
      }
      return;
    }
    if let Err(err) = exec_program(&mut self.evaluator, line, self.format) {
      println!("error: {err}");
    }
  }
}
