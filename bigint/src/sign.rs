use std::ops::Neg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
  Positive,
  Negative,
}

impl Sign {
  pub fn opposite(self) -> Sign {
    match self {
      Sign::Positive => Sign::Negative,
      Sign::Negative => Sign::Positive,
    }
  }

  /// The product sign of two non-zero factors.
  pub fn mul(self, other: Sign) -> Sign {
    if self == other {
      Sign::Positive
    } else {
      Sign::Negative
    }
  }

  pub fn token(self) -> &'static str {
    match self {
      Sign::Positive => "+",
      Sign::Negative => "-",
    }
  }
}

impl Neg for Sign {
  type Output = Sign;

  fn neg(self) -> Sign {
    self.opposite()
  }
}

/// The sign of a value with zero as its own class; doubles as the row and
/// column index of the dispatch tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SignClass {
  Positive = 0,
  Zero = 1,
  Negative = 2,
}

impl SignClass {
  pub fn of(sign: Option<Sign>) -> SignClass {
    match sign {
      Some(Sign::Positive) => SignClass::Positive,
      None => SignClass::Zero,
      Some(Sign::Negative) => SignClass::Negative,
    }
  }

  pub fn signum(self) -> i8 {
    match self {
      SignClass::Positive => 1,
      SignClass::Zero => 0,
      SignClass::Negative => -1,
    }
  }

  pub(crate) fn index(self) -> usize {
    self as usize
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn opposite_is_an_involution() {
    for sign in [Sign::Positive, Sign::Negative] {
      assert_ne!(sign.opposite(), sign);
      assert_eq!(-(-sign), sign);
    }
  }

  #[test]
  fn mul_follows_the_sign_rule() {
    use Sign::{Negative as N, Positive as P};
    assert_eq!(P.mul(P), P);
    assert_eq!(N.mul(N), P);
    assert_eq!(P.mul(N), N);
    assert_eq!(N.mul(P), N);
  }

  #[test]
  fn class_indices() {
    assert_eq!(SignClass::of(Some(Sign::Positive)).index(), 0);
    assert_eq!(SignClass::of(None).index(), 1);
    assert_eq!(SignClass::of(Some(Sign::Negative)).index(), 2);
    assert_eq!(SignClass::Negative.signum(), -1);
  }
}
