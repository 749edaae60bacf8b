use std::{iter::FusedIterator, mem};

use crate::BigInt;

/// The Fibonacci numbers 1, 1, 2, 3, 5, … without end.
#[derive(Debug, Clone)]
pub struct Fibonacci {
  current: BigInt,
  next: BigInt,
}

impl Fibonacci {
  pub fn new() -> Self {
    Fibonacci { current: BigInt::one(), next: BigInt::one() }
  }

  /// The `n`th Fibonacci number, with `number(0) = 0` and
  /// `number(1) = number(2) = 1`.
  pub fn number(n: usize) -> BigInt {
    match n.checked_sub(1) {
      None => BigInt::zero(),
      Some(index) => Fibonacci::new().nth(index).unwrap_or_default(),
    }
  }
}

impl Default for Fibonacci {
  fn default() -> Self {
    Self::new()
  }
}

impl Iterator for Fibonacci {
  type Item = BigInt;

  fn next(&mut self) -> Option<BigInt> {
    let upcoming = &self.current + &self.next;
    let next = mem::replace(&mut self.next, upcoming);
    Some(mem::replace(&mut self.current, next))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (usize::MAX, None)
  }
}

impl FusedIterator for Fibonacci {}

#[test]
fn test() {
  let first: Vec<_> = Fibonacci::new().take(10).map(|n| n.int_value().unwrap()).collect();
  assert_eq!(first, [1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);

  let hundredth = Fibonacci::new().nth(99).unwrap();
  assert_eq!(hundredth.to_string(), "354224848179261915075");
  assert_eq!(Fibonacci::number(100), hundredth);
  assert_eq!(Fibonacci::number(0), BigInt::zero());
  assert_eq!(Fibonacci::number(2), BigInt::one());

  let first_with_1000_digits = Fibonacci::new().position(|n| n.len() == 1000).unwrap() + 1;
  assert_eq!(first_with_1000_digits, 4782);
}
