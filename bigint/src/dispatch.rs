use std::cmp::Ordering;

use log::trace;

use crate::{magnitude, BigInt, Sign};

/// One of the specialized routines an add or subtract can dispatch to once
/// the sign classes of both operands are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handler {
  /// `|lhs| + |rhs|`, carrying the given sign.
  Sum(Sign),
  /// `|lhs| - |rhs|` taken large minus small; carries the given sign when
  /// `|lhs| >= |rhs|` and its opposite otherwise.
  Diff(Sign),
  Lhs,
  Rhs,
  NegRhs,
  Zero,
}

#[rustfmt::skip]
use Handler::{
  Lhs    as L,
  Rhs    as R,
  NegRhs as N,
  Zero   as Z,
};

const SP: Handler = Handler::Sum(Sign::Positive);
const SN: Handler = Handler::Sum(Sign::Negative);
const DP: Handler = Handler::Diff(Sign::Positive);
const DN: Handler = Handler::Diff(Sign::Negative);

// Rows are the left operand's sign class and columns the right's, both in
// `SignClass` order: positive, zero, negative.

#[rustfmt::skip]
const ADD: [[Handler; 3]; 3] = [
  [SP, L, DP],
  [R,  R, R ],
  [DN, L, SN],
];

#[rustfmt::skip]
const SUB: [[Handler; 3]; 3] = [
  [DP, L, SP],
  [N,  Z, N ],
  [SN, L, DN],
];

impl Handler {
  fn apply(self, lhs: &BigInt, rhs: &BigInt) -> BigInt {
    match self {
      Handler::Sum(sign) => BigInt::from_magnitude(magnitude::sum(&lhs.digits, &rhs.digits), sign),
      Handler::Diff(sign) => {
        let (big, small, sign) = match magnitude::cmp(&lhs.digits, &rhs.digits) {
          Ordering::Less => (rhs, lhs, sign.opposite()),
          Ordering::Equal | Ordering::Greater => (lhs, rhs, sign),
        };
        BigInt::from_magnitude(magnitude::diff(&big.digits, &small.digits), sign)
      }
      Handler::Lhs => lhs.clone(),
      Handler::Rhs => rhs.clone(),
      Handler::NegRhs => -rhs,
      Handler::Zero => BigInt::zero(),
    }
  }
}

fn dispatch(table: &[[Handler; 3]; 3], op: &str, lhs: &BigInt, rhs: &BigInt) -> BigInt {
  let (row, col) = (lhs.sign_class(), rhs.sign_class());
  let handler = table[row.index()][col.index()];
  trace!("{op}: {row:?} x {col:?} -> {handler:?}");
  handler.apply(lhs, rhs)
}

pub(crate) fn add(lhs: &BigInt, rhs: &BigInt) -> BigInt {
  dispatch(&ADD, "add", lhs, rhs)
}

pub(crate) fn subtract(lhs: &BigInt, rhs: &BigInt) -> BigInt {
  dispatch(&SUB, "subtract", lhs, rhs)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn samples() -> impl Iterator<Item = i64> {
    [-1000, -999, -11, -6, -5, -1, 0, 1, 5, 6, 11, 999, 1000, 123456789].into_iter()
  }

  #[test]
  fn add_matches_machine_arithmetic() {
    for a in samples() {
      for b in samples() {
        let sum = add(&BigInt::from(a), &BigInt::from(b));
        assert_eq!(sum, BigInt::from(a + b), "{a} + {b}");
      }
    }
  }

  #[test]
  fn subtract_matches_machine_arithmetic() {
    for a in samples() {
      for b in samples() {
        let diff = subtract(&BigInt::from(a), &BigInt::from(b));
        assert_eq!(diff, BigInt::from(a - b), "{a} - {b}");
      }
    }
  }

  #[test]
  fn equal_magnitudes_cancel_to_signless_zero() {
    let a = BigInt::from(4321);
    let b = BigInt::from(-4321);
    for zero in [add(&a, &b), add(&b, &a), subtract(&a, &a), subtract(&b, &b)] {
      assert_eq!(zero.sign(), None);
      assert_eq!(zero.digits, [0]);
    }
  }

  #[test]
  fn zero_rows_and_columns() {
    let zero = BigInt::zero();
    let seven = BigInt::from(7);
    let neg_seven = BigInt::from(-7);
    assert_eq!(add(&zero, &seven), seven);
    assert_eq!(add(&neg_seven, &zero), neg_seven);
    assert_eq!(add(&zero, &zero), zero);
    assert_eq!(subtract(&zero, &seven), neg_seven);
    assert_eq!(subtract(&zero, &neg_seven), seven);
    assert_eq!(subtract(&seven, &zero), seven);
    assert_eq!(subtract(&zero, &zero).sign(), None);
  }

  #[test]
  fn tables_cover_each_sign_combination() {
    assert_eq!(ADD[0], [SP, L, DP]);
    assert_eq!(SUB[2], [SN, L, DN]);
    for (row, (add, sub)) in ADD.iter().zip(&SUB).enumerate() {
      assert_eq!(add[1], if row == 1 { R } else { L });
      assert_eq!(sub[1], if row == 1 { Z } else { L });
    }
  }
}
