use std::{fmt::Debug, mem::transmute};

use decint_util::lexer::Token as TokenTrait;
use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[logos(skip r"[ \t\r\f]+")]
#[repr(u8)]
pub enum Token {
  #[token("+")]
  Plus,
  #[token("-")]
  Minus,
  #[token("*")]
  Star,
  #[token("^")]
  Caret,
  #[token("(")]
  OpenParen,
  #[token(")")]
  CloseParen,
  #[token(",")]
  Comma,
  #[token(";")]
  Semi,
  #[token("\n")]
  Newline,
  #[token("=")]
  Eq,
  #[token("==")]
  EqEq,
  #[token("!=")]
  Ne,
  #[token("<")]
  Lt,
  #[token(">")]
  Gt,
  #[token("<=")]
  Le,
  #[token(">=")]
  Ge,

  #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
  Ident,
  #[regex(r"[0-9][0-9A-Za-z]*")]
  Num,

  #[regex("#[^\n]*", logos::skip)]
  Skip,
}

impl TokenTrait for Token {
  fn into_u8(self) -> u8 {
    self as u8
  }

  unsafe fn from_u8(value: u8) -> Self {
    unsafe { transmute::<u8, Token>(value) }
  }
}
