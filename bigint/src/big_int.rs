use std::{cmp::Ordering, str::FromStr};

use crate::{magnitude, BigIntError, Sign, SignClass};

/// An arbitrary-precision signed integer stored as base-10 digits.
///
/// The representation is canonical: `digits` is never empty, has no most
/// significant zero unless the value is zero (which is exactly `[0]`), and
/// `sign` is `None` if and only if the value is zero. Derived equality and
/// hashing are therefore numeric equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
  /// Least significant digit first.
  pub(crate) digits: Vec<u8>,
  pub(crate) sign: Option<Sign>,
}

/// Digit count above which [`BigInt::int_value`] gives up; one less than the
/// number of digits in `i64::MAX`.
pub const MAX_INT_DIGITS: usize = i64::MAX.ilog10() as usize;

impl BigInt {
  pub fn zero() -> BigInt {
    BigInt { digits: vec![0], sign: None }
  }

  pub fn one() -> BigInt {
    BigInt { digits: vec![1], sign: Some(Sign::Positive) }
  }

  /// Builds a value from a magnitude and the sign it should carry if it is
  /// non-zero.
  pub(crate) fn from_magnitude(mut digits: Vec<u8>, sign: Sign) -> BigInt {
    magnitude::trim(&mut digits);
    let sign = (digits != [0]).then_some(sign);
    BigInt { digits, sign }
  }

  /// Builds a value from digits given most significant first. Each digit is
  /// taken modulo 10 and leading zeros are dropped; an all-zero input is
  /// zero regardless of `sign`.
  pub fn from_digits(digits: impl IntoIterator<Item = u32>, sign: Sign) -> BigInt {
    let mut digits: Vec<u8> = digits.into_iter().map(|d| (d % 10) as u8).collect();
    digits.reverse();
    BigInt::from_magnitude(digits, sign)
  }

  /// Parses an optionally `-`-prefixed decimal literal.
  ///
  /// A literal whose first digit is `0` parses as zero, whatever follows:
  /// `"0123"` and `"-07"` are both zero.
  pub fn parse(src: &str) -> Result<BigInt, BigIntError> {
    let (sign, body, offset) = match src.strip_prefix('-') {
      Some(rest) => (Sign::Negative, rest, 1),
      None => (Sign::Positive, src, 0),
    };
    if body.is_empty() {
      return Err(BigIntError::Empty);
    }
    let mut digits = body
      .char_indices()
      .map(|(i, c)| {
        let invalid = BigIntError::InvalidDigit { digit: c, index: offset + i };
        c.to_digit(10).map(|d| d as u8).ok_or(invalid)
      })
      .collect::<Result<Vec<_>, _>>()?;
    if digits[0] == 0 {
      return Ok(BigInt::zero());
    }
    digits.reverse();
    Ok(BigInt::from_magnitude(digits, sign))
  }

  pub fn sign(&self) -> Option<Sign> {
    self.sign
  }

  pub fn sign_class(&self) -> SignClass {
    SignClass::of(self.sign)
  }

  pub fn is_zero(&self) -> bool {
    self.sign.is_none()
  }

  /// Whether the magnitude is one; the sign is not considered.
  pub fn is_one(&self) -> bool {
    self.digits == [1]
  }

  pub fn is_negative(&self) -> bool {
    self.sign == Some(Sign::Negative)
  }

  /// Number of decimal digits; zero has one.
  #[allow(clippy::len_without_is_empty)]
  pub fn len(&self) -> usize {
    self.digits.len()
  }

  /// Digits, most significant first.
  pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
    self.digits.iter().rev().copied()
  }

  /// Flips the sign in place; zero is left alone.
  pub fn negate(&mut self) {
    self.sign = self.sign.map(Sign::opposite);
  }

  pub fn abs(&self) -> BigInt {
    BigInt { digits: self.digits.clone(), sign: self.sign.map(|_| Sign::Positive) }
  }

  /// Magnitude equality: same digits, sign ignored.
  pub fn equals(&self, other: &BigInt) -> bool {
    self.digits == other.digits
  }

  /// Orders by magnitude alone.
  pub fn magnitude_cmp(&self, other: &BigInt) -> Ordering {
    magnitude::cmp(&self.digits, &other.digits)
  }

  /// Total order as `-1`, `0` or `1`.
  pub fn compare(&self, other: &BigInt) -> i8 {
    self.cmp(other) as i8
  }

  /// Converts to an `i64` when the value has at most [`MAX_INT_DIGITS`]
  /// digits.
  pub fn int_value(&self) -> Option<i64> {
    if self.digits.len() > MAX_INT_DIGITS {
      return None;
    }
    let magnitude = self.digits.iter().rev().fold(0i64, |acc, &d| acc * 10 + d as i64);
    Some(if self.is_negative() { -magnitude } else { magnitude })
  }
}

impl Default for BigInt {
  fn default() -> Self {
    BigInt::zero()
  }
}

impl FromStr for BigInt {
  type Err = BigIntError;

  fn from_str(src: &str) -> Result<Self, Self::Err> {
    BigInt::parse(src)
  }
}

impl TryFrom<&str> for BigInt {
  type Error = BigIntError;

  fn try_from(src: &str) -> Result<Self, Self::Error> {
    BigInt::parse(src)
  }
}

/// Fails under the same digit limit as [`BigInt::int_value`].
impl TryFrom<&BigInt> for i64 {
  type Error = BigIntError;

  fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
    value.int_value().ok_or_else(|| BigIntError::Overflow { digits: value.len() })
  }
}

impl Ord for BigInt {
  fn cmp(&self, other: &Self) -> Ordering {
    let by_sign = self.sign_class().signum().cmp(&other.sign_class().signum());
    by_sign.then_with(|| match self.sign {
      Some(Sign::Negative) => magnitude::cmp(&other.digits, &self.digits),
      _ => magnitude::cmp(&self.digits, &other.digits),
    })
  }
}

impl PartialOrd for BigInt {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

macro_rules! from_signed {
  ($($ty:ty),*) => {
    $(
      impl From<$ty> for BigInt {
        fn from(value: $ty) -> BigInt {
          let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
          BigInt::from_magnitude(magnitude::from_u128(value.unsigned_abs() as u128), sign)
        }
      }
    )*
  };
}

macro_rules! from_unsigned {
  ($($ty:ty),*) => {
    $(
      impl From<$ty> for BigInt {
        fn from(value: $ty) -> BigInt {
          BigInt::from_magnitude(magnitude::from_u128(value as u128), Sign::Positive)
        }
      }
    )*
  };
}

from_signed!(i8, i16, i32, i64, i128, isize);
from_unsigned!(u8, u16, u32, u64, u128, usize);
