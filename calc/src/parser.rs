use std::mem::transmute;

use decint::{BigInt, BigIntError};
use decint_util::{
  lexer::TokenSet,
  parser::{Parser, ParserState},
};

use crate::{
  ast::{BinaryOp, ComparisonOp, Expr, Stmt},
  lexer::Token,
};

pub struct CalcParser<'src> {
  pub state: ParserState<'src, Token>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
  #[error("lexing error at byte {0}")]
  LexError(usize),
  #[error("expected one of {expected:?}; found {found}")]
  UnexpectedToken { expected: TokenSet<Token>, found: String },
  #[error("invalid numeric literal `{0}`: {1}")]
  InvalidNum(String, BigIntError),
  #[error("only a variable can be assigned to")]
  InvalidAssignTarget,
}

type Parse<T = ()> = Result<T, ParseError>;

impl<'src> Parser<'src> for CalcParser<'src> {
  type Token = Token;
  type Error = ParseError;

  fn state(&mut self) -> &mut ParserState<'src, Self::Token> {
    &mut self.state
  }

  fn lex_error(&self) -> Self::Error {
    ParseError::LexError(self.state.lexer.span().start)
  }

  fn unexpected_error(&self) -> ParseError {
    let found = match self.state.token {
      None => "end of input".to_owned(),
      Some(Token::Newline) => "end of line".to_owned(),
      Some(_) => format!("`{}`", self.state.lexer.slice()),
    };
    ParseError::UnexpectedToken { expected: self.state.expected, found }
  }
}

impl<'src> CalcParser<'src> {
  /// Parses a program: statements separated by `;` or newlines.
  pub fn parse(src: &'src str) -> Parse<Vec<Stmt>> {
    let mut parser = CalcParser { state: ParserState::new(src) };
    parser.bump()?;
    let mut stmts = Vec::new();
    loop {
      while parser.eat_separator()? {}
      if parser.state.token.is_none() {
        return Ok(stmts);
      }
      stmts.push(parser.parse_stmt()?);
      if parser.state.token.is_some() && !parser.check_separator() {
        return parser.unexpected();
      }
    }
  }

  fn check_separator(&mut self) -> bool {
    self.check(Token::Semi) || self.check(Token::Newline)
  }

  fn eat_separator(&mut self) -> Parse<bool> {
    Ok(self.eat(Token::Semi)? || self.eat(Token::Newline)?)
  }

  fn parse_stmt(&mut self) -> Parse<Stmt> {
    let expr = self.parse_expr()?;
    if self.eat(Token::Eq)? {
      let Expr::Var(name) = expr else {
        return Err(ParseError::InvalidAssignTarget);
      };
      return Ok(Stmt::Assign(name, self.parse_expr()?));
    }
    Ok(Stmt::Expr(expr))
  }

  pub fn parse_expr(&mut self) -> Parse<Expr> {
    self.parse_expr_bp(BP::Min)
  }

  fn parse_expr_bp(&mut self, bp: BP) -> Parse<Expr> {
    let mut expr = self.parse_expr_prefix()?;
    loop {
      expr = match self.parse_expr_postfix(expr, bp)? {
        Ok(expr) => expr,
        Err(expr) => return Ok(expr),
      }
    }
  }

  fn parse_expr_prefix(&mut self) -> Parse<Expr> {
    if self.eat(Token::Minus)? {
      return Ok(Expr::Neg(Box::new(self.parse_expr_bp(BP::Prefix)?)));
    }
    if self.eat(Token::Plus)? {
      return self.parse_expr_bp(BP::Prefix);
    }
    if self.check(Token::Num) {
      return self.parse_num();
    }
    if self.check(Token::Ident) {
      let name = self.expect(Token::Ident)?.to_owned();
      if self.check(Token::OpenParen) {
        let args = self.parse_delimited(PAREN_COMMA, Self::parse_expr)?;
        return Ok(Expr::Call(name, args));
      }
      return Ok(Expr::Var(name));
    }
    if self.eat(Token::OpenParen)? {
      let expr = self.parse_expr()?;
      self.expect(Token::CloseParen)?;
      return Ok(expr);
    }
    self.unexpected()
  }

  /// Returns `Ok(expr)` if an operator extended `lhs`, and `Err(lhs)` if
  /// nothing binding at least as tightly as `bp` follows it.
  fn parse_expr_postfix(&mut self, lhs: Expr, bp: BP) -> Parse<Result<Expr, Expr>> {
    for &(lbp, token, op) in BINARY_OP_TABLE {
      let rbp = lbp.inc(); // left-associative
      if bp.permits(lbp) && self.eat(token)? {
        return Ok(Ok(Expr::Binary(op, Box::new(lhs), Box::new(self.parse_expr_bp(rbp)?))));
      }
    }

    if bp.permits(BP::Power) && self.eat(Token::Caret)? {
      let rhs = self.parse_expr_bp(BP::Power)?; // right-associative
      return Ok(Ok(Expr::Binary(BinaryOp::Pow, Box::new(lhs), Box::new(rhs))));
    }

    if bp.permits(BP::Comparison) {
      let mut rhs = Vec::new();
      'main: loop {
        for &(token, op) in COMPARISON_OP_TABLE {
          if self.eat(token)? {
            rhs.push((op, self.parse_expr_bp(BP::Comparison.inc())?));
            continue 'main;
          }
        }
        break;
      }
      if !rhs.is_empty() {
        return Ok(Ok(Expr::Comparison(Box::new(lhs), rhs)));
      }
    }

    Ok(Err(lhs))
  }

  fn parse_num(&mut self) -> Parse<Expr> {
    let token = self.expect(Token::Num)?;
    match BigInt::parse(token) {
      Ok(value) => Ok(Expr::Num(value)),
      Err(err) => Err(ParseError::InvalidNum(token.to_owned(), err)),
    }
  }
}

#[allow(clippy::absolute_paths)]
type Delimiters = decint_util::parser::Delimiters<Token>;

const PAREN_COMMA: Delimiters = Delimiters {
  open: Some(Token::OpenParen),
  close: Some(Token::CloseParen),
  separator: Some(Token::Comma),
};

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
enum BP {
  Min,
  Comparison,
  Additive,
  Multiplicative,
  Prefix,
  Power,
  Max,
}

impl BP {
  const fn inc(self) -> Self {
    if self as u8 == BP::Max as u8 {
      self
    } else {
      unsafe { transmute::<u8, BP>(self as u8 + 1) }
    }
  }

  fn permits(self, other: Self) -> bool {
    other >= self
  }
}

#[rustfmt::skip]
const BINARY_OP_TABLE: &[(BP, Token, BinaryOp)] = &[
  (BP::Additive,       Token::Plus,  BinaryOp::Add),
  (BP::Additive,       Token::Minus, BinaryOp::Sub),
  (BP::Multiplicative, Token::Star,  BinaryOp::Mul),
];

#[rustfmt::skip]
const COMPARISON_OP_TABLE: &[(Token, ComparisonOp)] = &[
  (Token::EqEq, ComparisonOp::Eq),
  (Token::Ne,   ComparisonOp::Ne),
  (Token::Lt,   ComparisonOp::Lt),
  (Token::Gt,   ComparisonOp::Gt),
  (Token::Le,   ComparisonOp::Le),
  (Token::Ge,   ComparisonOp::Ge),
];
