use logos::Lexer;

use crate::lexer::{Token, TokenSet};

pub struct ParserState<'src, T: Token> {
  pub lexer: Lexer<'src, T>,
  pub token: Option<T>,
  pub last_token_end: usize,
  pub expected: TokenSet<T>,
}

impl<'src, T: Token> ParserState<'src, T> {
  pub fn new(src: &'src str) -> Self {
    ParserState {
      lexer: T::lexer(src),
      token: None,
      last_token_end: 0,
      expected: TokenSet::default(),
    }
  }
}

pub trait Parser<'src> {
  type Token: Token;
  type Error;

  fn state(&mut self) -> &mut ParserState<'src, Self::Token>;

  fn lex_error(&self) -> Self::Error;

  fn unexpected_error(&self) -> Self::Error;

  fn bump(&mut self) -> Result<(), Self::Error> {
    let state = self.state();
    state.expected.reset();
    state.last_token_end = state.lexer.span().end;
    let next = state.lexer.next();
    match next {
      Some(Ok(token)) => {
        self.state().token = Some(token);
        Ok(())
      }
      Some(Err(_)) => Err(self.lex_error()),
      None => {
        self.state().token = None;
        Ok(())
      }
    }
  }

  fn check(&mut self, kind: Self::Token) -> bool {
    self.state().expected.add(kind);
    self.state().token == Some(kind)
  }

  fn eat(&mut self, kind: Self::Token) -> Result<bool, Self::Error> {
    let matches = self.check(kind);
    if matches {
      self.bump()?;
    }
    Ok(matches)
  }

  fn expect(&mut self, kind: Self::Token) -> Result<&'src str, Self::Error> {
    if self.check(kind) {
      let token = self.state().lexer.slice();
      self.bump()?;
      Ok(token)
    } else {
      self.unexpected()
    }
  }

  fn unexpected<T>(&self) -> Result<T, Self::Error> {
    Err(self.unexpected_error())
  }

  fn parse_delimited<T>(
    &mut self,
    delims: Delimiters<Self::Token>,
    mut parse_el: impl FnMut(&mut Self) -> Result<T, Self::Error>,
  ) -> Result<Vec<T>, Self::Error> {
    if let Some(open) = delims.open {
      self.expect(open)?;
    }
    let mut items = Vec::new();
    loop {
      if delims.close.is_some_and(|close| self.check(close)) {
        break;
      }
      items.push(parse_el(self)?);
      if let Some(separator) = delims.separator {
        if !self.eat(separator)? {
          break;
        }
      }
      if delims.separator.is_none() && delims.close.is_none() {
        break;
      }
    }
    if let Some(close) = delims.close {
      self.expect(close)?;
    }
    Ok(items)
  }
}

pub struct Delimiters<T: Token> {
  pub open: Option<T>,
  pub close: Option<T>,
  pub separator: Option<T>,
}
