//! Schoolbook arithmetic on unsigned base-10 digit slices, least
//! significant digit first.

use std::cmp::Ordering;

pub(crate) fn from_u128(mut n: u128) -> Vec<u8> {
  let mut digits = Vec::new();
  loop {
    digits.push((n % 10) as u8);
    n /= 10;
    if n == 0 {
      return digits;
    }
  }
}

/// Drops most significant zeros, keeping at least one digit.
pub(crate) fn trim(digits: &mut Vec<u8>) {
  while digits.len() > 1 && digits.last() == Some(&0) {
    digits.pop();
  }
  if digits.is_empty() {
    digits.push(0);
  }
}

pub(crate) fn cmp(a: &[u8], b: &[u8]) -> Ordering {
  a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

pub(crate) fn sum(a: &[u8], b: &[u8]) -> Vec<u8> {
  let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
  let mut out = Vec::with_capacity(long.len() + 1);
  let mut carry = 0;
  for (i, &d) in long.iter().enumerate() {
    let total = d + short.get(i).copied().unwrap_or(0) + carry;
    out.push(total % 10);
    carry = total / 10;
  }
  if carry != 0 {
    out.push(carry);
  }
  out
}

/// `big - small`; `big` must not be smaller than `small`.
pub(crate) fn diff(big: &[u8], small: &[u8]) -> Vec<u8> {
  debug_assert!(cmp(big, small) != Ordering::Less);
  let mut out = Vec::with_capacity(big.len());
  let mut borrow = 0;
  for (i, &d) in big.iter().enumerate() {
    let sub = small.get(i).copied().unwrap_or(0) + borrow;
    if d >= sub {
      out.push(d - sub);
      borrow = 0;
    } else {
      out.push(d + 10 - sub);
      borrow = 1;
    }
  }
  trim(&mut out);
  out
}

/// Long multiplication: one shifted partial product per digit of `b`,
/// accumulated with [`sum`].
pub(crate) fn product(a: &[u8], b: &[u8]) -> Vec<u8> {
  let mut acc = vec![0];
  for (place, &m) in b.iter().enumerate() {
    let mut partial = vec![0; place];
    partial.reserve(a.len() + 1);
    let mut carry = 0;
    for &d in a {
      let p = d * m + carry;
      partial.push(p % 10);
      carry = p / 10;
    }
    if carry != 0 {
      partial.push(carry);
    }
    acc = sum(&acc, &partial);
  }
  acc
}
