use log::debug;

use crate::{magnitude, BigInt, BigIntError};

pub(crate) fn multiply(lhs: &BigInt, rhs: &BigInt) -> BigInt {
  let (Some(lhs_sign), Some(rhs_sign)) = (lhs.sign, rhs.sign) else {
    return BigInt::zero();
  };
  let sign = lhs_sign.mul(rhs_sign);
  if lhs.is_one() {
    return BigInt { digits: rhs.digits.clone(), sign: Some(sign) };
  }
  if rhs.is_one() {
    return BigInt { digits: lhs.digits.clone(), sign: Some(sign) };
  }
  BigInt::from_magnitude(magnitude::product(&lhs.digits, &rhs.digits), sign)
}

impl BigInt {
  /// Raises `self` to a non-negative power by repeated squaring;
  /// `x.power(0)` is one for every `x`, zero included.
  pub fn power(&self, exponent: i64) -> Result<BigInt, BigIntError> {
    let mut remaining =
      u64::try_from(exponent).map_err(|_| BigIntError::InvalidArgument(exponent))?;
    debug!("power: {} digits ^ {exponent}", self.len());
    let mut result = BigInt::one();
    let mut base = self.clone();
    while remaining != 0 {
      if remaining & 1 == 1 {
        result = multiply(&result, &base);
      }
      remaining >>= 1;
      if remaining != 0 {
        base = multiply(&base, &base);
      }
    }
    Ok(result)
  }

  /// `self * self`.
  pub fn square(&self) -> BigInt {
    multiply(self, self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn multiply_matches_machine_arithmetic() {
    let samples = [-40503, -1001, -99, -10, -1, 0, 1, 2, 7, 10, 99, 1001, 40503];
    for a in samples {
      for b in samples {
        let product = multiply(&BigInt::from(a), &BigInt::from(b));
        assert_eq!(product, BigInt::from(a * b), "{a} * {b}");
      }
    }
  }

  #[test]
  fn zero_product_is_signless() {
    let product = multiply(&BigInt::from(-12), &BigInt::zero());
    assert_eq!(product.sign(), None);
    assert_eq!(product, BigInt::zero());
  }

  #[test]
  fn one_short_circuit_keeps_the_product_sign() {
    let neg_one = BigInt::from(-1);
    assert_eq!(multiply(&neg_one, &BigInt::from(5)), BigInt::from(-5));
    assert_eq!(multiply(&BigInt::from(5), &neg_one), BigInt::from(-5));
    assert_eq!(multiply(&neg_one, &neg_one), BigInt::one());
    assert_eq!(multiply(&BigInt::one(), &BigInt::from(-8)), BigInt::from(-8));
  }

  #[test]
  fn cross_checks_through_int_value() {
    let product = multiply(&BigInt::from(13419), &BigInt::from(45763));
    assert_eq!(product.int_value(), Some(13419 * 45763));
    assert_eq!(product.to_string(), "614093697");
  }

  #[test]
  fn power_of_two() {
    assert_eq!(BigInt::from(2).power(10), Ok(BigInt::from(1024)));
    assert_eq!(BigInt::from(2).power(64), Ok(BigInt::from(1u128 << 64)));
  }

  #[test]
  fn power_edges() {
    assert_eq!(BigInt::from(3).power(0), Ok(BigInt::one()));
    assert_eq!(BigInt::zero().power(0), Ok(BigInt::one()));
    assert_eq!(BigInt::zero().power(5), Ok(BigInt::zero()));
    assert_eq!(BigInt::from(-77).power(1), Ok(BigInt::from(-77)));
    assert_eq!(BigInt::from(-3).power(3), Ok(BigInt::from(-27)));
    assert_eq!(BigInt::from(-3).power(4), Ok(BigInt::from(81)));
    assert_eq!(BigInt::from(2).power(-1), Err(BigIntError::InvalidArgument(-1)));
  }

  #[test]
  fn power_table() {
    // 2..=5 raised to 2..=5
    let mut powers = Vec::new();
    for a in 2..=5i64 {
      for b in 2..=5u32 {
        let power = BigInt::from(a).power(b as i64).unwrap();
        assert_eq!(power.int_value(), Some(a.pow(b)));
        powers.push(power);
      }
    }
    powers.sort();
    powers.dedup();
    assert_eq!(powers.len(), 15);
    assert_eq!(powers.first(), Some(&BigInt::from(4)));
    assert_eq!(powers.last(), Some(&BigInt::from(3125)));
  }

  #[test]
  fn square() {
    assert_eq!(BigInt::from(-111).square(), BigInt::from(12321));
  }
}
