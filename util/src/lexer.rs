use std::{
  fmt::{self, Debug},
  marker::PhantomData,
};

use logos::Logos;

pub trait Token: for<'src> Logos<'src, Source = str, Extras = ()> + Copy + Eq + Debug {
  fn into_u8(self) -> u8;
  /// ## Safety
  /// `value` was returned by `Self::into_u8`
  unsafe fn from_u8(value: u8) -> Self;
}

/// A set of up to 128 token kinds, used to report what a parser expected.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet<T: Token>(u128, PhantomData<T>);

impl<T: Token> Default for TokenSet<T> {
  fn default() -> Self {
    Self(0, PhantomData)
  }
}

impl<T: Token> TokenSet<T> {
  pub fn reset(&mut self) {
    self.0 = 0;
  }

  pub fn add(&mut self, kind: T) {
    self.0 |= 1 << kind.into_u8();
  }

  pub fn contains(&self, kind: T) -> bool {
    self.0 & (1 << kind.into_u8()) != 0
  }

  pub fn is_empty(&self) -> bool {
    self.0 == 0
  }
}

impl<T: Token> IntoIterator for TokenSet<T> {
  type Item = T;
  type IntoIter = TokenSetIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    TokenSetIter(self.0, PhantomData)
  }
}

#[derive(Clone, Copy)]
pub struct TokenSetIter<T: Token>(u128, PhantomData<T>);

impl<T: Token> Iterator for TokenSetIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<Self::Item> {
    if self.0 == 0 {
      None
    } else {
      let x = self.0.trailing_zeros() as u8;
      self.0 ^= 1 << x;
      Some(unsafe { T::from_u8(x) })
    }
  }
}

impl<T: Token> Debug for TokenSet<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(*self).finish()
  }
}

#[cfg(test)]
mod tests {
  use std::mem::transmute;

  use logos::Logos;

  use super::*;

  #[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
  #[logos(skip " +")]
  #[repr(u8)]
  enum Abc {
    #[token("a")]
    A,
    #[token("b")]
    B,
    #[token("c")]
    C,
  }

  impl Token for Abc {
    fn into_u8(self) -> u8 {
      self as u8
    }

    unsafe fn from_u8(value: u8) -> Self {
      unsafe { transmute::<u8, Abc>(value) }
    }
  }

  #[test]
  fn token_set() {
    let mut set = TokenSet::default();
    assert!(set.is_empty());
    set.add(Abc::C);
    set.add(Abc::A);
    set.add(Abc::C);
    assert!(set.contains(Abc::A));
    assert!(!set.contains(Abc::B));
    assert_eq!(set.into_iter().collect::<Vec<_>>(), [Abc::A, Abc::C]);
    assert_eq!(format!("{set:?}"), "{A, C}");
    set.reset();
    assert!(set.is_empty());
  }
}
