use std::cmp::Ordering;

use decint::BigInt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
  Assign(String, Expr),
  Expr(Expr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
  Num(BigInt),
  Var(String),
  Neg(Box<Expr>),
  Binary(BinaryOp, Box<Expr>, Box<Expr>),
  /// A chain such as `a < b <= c`, which holds when every adjacent pair does.
  Comparison(Box<Expr>, Vec<(ComparisonOp, Expr)>),
  Call(String, Vec<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
  Add,
  Sub,
  Mul,
  Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
  Eq,
  Ne,
  Lt,
  Gt,
  Le,
  Ge,
}

impl ComparisonOp {
  pub fn holds(self, ordering: Ordering) -> bool {
    match self {
      ComparisonOp::Eq => ordering.is_eq(),
      ComparisonOp::Ne => ordering.is_ne(),
      ComparisonOp::Lt => ordering.is_lt(),
      ComparisonOp::Gt => ordering.is_gt(),
      ComparisonOp::Le => ordering.is_le(),
      ComparisonOp::Ge => ordering.is_ge(),
    }
  }
}
