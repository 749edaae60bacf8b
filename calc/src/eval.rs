use std::fmt::{self, Display};

use decint::{BigInt, BigIntError, Fibonacci};
use indexmap::IndexMap;
use log::debug;

use crate::{
  ast::{BinaryOp, Expr, Stmt},
  parser::{CalcParser, ParseError},
};

/// The variable that always holds the value of the last statement.
pub const LAST: &str = "_";

/// Largest index `fib` accepts; `fib(50000)` has about ten thousand digits.
pub const MAX_FIB_INDEX: usize = 50_000;

/// Largest result, in digits, that `^` and `pow` will compute. The size is
/// estimated as `len(base) * exponent`, so a base of zero or one is never
/// refused.
pub const MAX_POWER_DIGITS: usize = 50_000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
  #[error(transparent)]
  Parse(#[from] ParseError),
  #[error(transparent)]
  BigInt(#[from] BigIntError),
  #[error("unbound variable `{0}`")]
  UnboundVariable(String),
  #[error("unknown function `{0}`")]
  UnknownFunction(String),
  #[error("`{name}` takes {expected} argument{}; got {got}", plural(.expected))]
  BadArgCount { name: String, expected: usize, got: usize },
  #[error("argument {0} is too large")]
  ArgumentTooLarge(BigInt),
  #[error("argument {0} must not be negative")]
  NegativeArgument(BigInt),
}

fn plural(n: &usize) -> &'static str {
  if *n == 1 {
    ""
  } else {
    "s"
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  Assigned(String, BigInt),
  Value(BigInt),
}

impl Outcome {
  pub fn value(&self) -> &BigInt {
    match self {
      Outcome::Assigned(_, value) | Outcome::Value(value) => value,
    }
  }
}

/// Formatting flags such as `{:+}` apply to the value.
impl Display for Outcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Outcome::Assigned(name, _) = self {
      write!(f, "{name} = ")?;
    }
    Display::fmt(self.value(), f)
  }
}

#[derive(Debug, Default)]
pub struct Evaluator {
  vars: IndexMap<String, BigInt>,
}

impl Evaluator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn vars(&self) -> &IndexMap<String, BigInt> {
    &self.vars
  }

  /// Parses `src` in full, then runs its statements in order. Statements that
  /// ran before a failing one keep their effects.
  pub fn exec(&mut self, src: &str) -> Result<Vec<Outcome>, EvalError> {
    let stmts = CalcParser::parse(src)?;
    stmts.into_iter().map(|stmt| self.exec_stmt(stmt)).collect()
  }

  pub fn exec_stmt(&mut self, stmt: Stmt) -> Result<Outcome, EvalError> {
    debug!("exec {stmt:?}");
    let outcome = match stmt {
      Stmt::Assign(name, expr) => {
        let value = self.eval(&expr)?;
        self.vars.insert(name.clone(), value.clone());
        Outcome::Assigned(name, value)
      }
      Stmt::Expr(expr) => Outcome::Value(self.eval(&expr)?),
    };
    self.vars.insert(LAST.to_owned(), outcome.value().clone());
    Ok(outcome)
  }

  pub fn eval(&self, expr: &Expr) -> Result<BigInt, EvalError> {
    Ok(match expr {
      Expr::Num(value) => value.clone(),
      Expr::Var(name) => {
        self.vars.get(name).cloned().ok_or_else(|| EvalError::UnboundVariable(name.clone()))?
      }
      Expr::Neg(inner) => -self.eval(inner)?,
      Expr::Binary(op, lhs, rhs) => {
        let lhs = self.eval(lhs)?;
        let rhs = self.eval(rhs)?;
        match op {
          BinaryOp::Add => lhs + rhs,
          BinaryOp::Sub => lhs - rhs,
          BinaryOp::Mul => lhs * rhs,
          BinaryOp::Pow => power(&lhs, &rhs)?,
        }
      }
      Expr::Comparison(first, rest) => {
        let mut lhs = self.eval(first)?;
        let mut holds = true;
        for (op, rhs) in rest {
          let rhs = self.eval(rhs)?;
          holds &= op.holds(lhs.cmp(&rhs));
          lhs = rhs;
        }
        BigInt::from(holds as u8)
      }
      Expr::Call(name, args) => {
        let args = args.iter().map(|arg| self.eval(arg)).collect::<Result<Vec<_>, _>>()?;
        call(name, &args)?
      }
    })
  }
}

fn call(name: &str, args: &[BigInt]) -> Result<BigInt, EvalError> {
  debug!("call {name}{args:?}");
  let bad_arg_count =
    |expected| EvalError::BadArgCount { name: name.to_owned(), expected, got: args.len() };
  Ok(match (name, args) {
    ("fib", [n]) => fib(n)?,
    ("abs", [x]) => x.abs(),
    ("len", [x]) => BigInt::from(x.len()),
    ("sign", [x]) => BigInt::from(x.sign_class().signum()),
    ("cmp", [a, b]) => BigInt::from(a.compare(b)),
    ("pow", [base, n]) => power(base, n)?,
    ("fib" | "abs" | "len" | "sign", _) => return Err(bad_arg_count(1)),
    ("cmp" | "pow", _) => return Err(bad_arg_count(2)),
    _ => return Err(EvalError::UnknownFunction(name.to_owned())),
  })
}

/// The `n`th Fibonacci number, refusing indices above [`MAX_FIB_INDEX`].
pub fn fib(n: &BigInt) -> Result<BigInt, EvalError> {
  if n.is_negative() {
    return Err(EvalError::NegativeArgument(n.clone()));
  }
  let too_large = || EvalError::ArgumentTooLarge(n.clone());
  let index = n.int_value().and_then(|n| usize::try_from(n).ok()).ok_or_else(too_large)?;
  if index > MAX_FIB_INDEX {
    return Err(too_large());
  }
  Ok(Fibonacci::number(index))
}

/// `base ^ exponent`, refusing results estimated above [`MAX_POWER_DIGITS`].
pub fn power(base: &BigInt, exponent: &BigInt) -> Result<BigInt, EvalError> {
  let too_large = || EvalError::ArgumentTooLarge(exponent.clone());
  let n = exponent.int_value().ok_or_else(too_large)?;
  if n > 0 && !base.is_zero() && !base.is_one() {
    let limit = (MAX_POWER_DIGITS / base.len()) as u64;
    if n.unsigned_abs() > limit {
      return Err(too_large());
    }
  }
  Ok(base.power(n)?)
}
