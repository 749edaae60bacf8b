use std::{
  iter::{Product, Sum},
  ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{dispatch, mul, BigInt};

macro_rules! binop {
  ($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident, $f:path) => {
    impl $Op<&BigInt> for &BigInt {
      type Output = BigInt;
      fn $op(self, rhs: &BigInt) -> BigInt {
        $f(self, rhs)
      }
    }

    impl $Op<BigInt> for &BigInt {
      type Output = BigInt;
      fn $op(self, rhs: BigInt) -> BigInt {
        $f(self, &rhs)
      }
    }

    impl $Op<&BigInt> for BigInt {
      type Output = BigInt;
      fn $op(self, rhs: &BigInt) -> BigInt {
        $f(&self, rhs)
      }
    }

    impl $Op<BigInt> for BigInt {
      type Output = BigInt;
      fn $op(self, rhs: BigInt) -> BigInt {
        $f(&self, &rhs)
      }
    }

    impl $OpAssign<&BigInt> for BigInt {
      fn $op_assign(&mut self, rhs: &BigInt) {
        *self = $f(self, rhs);
      }
    }

    impl $OpAssign<BigInt> for BigInt {
      fn $op_assign(&mut self, rhs: BigInt) {
        *self = $f(self, &rhs);
      }
    }
  };
}

binop!(Add::add, AddAssign::add_assign, dispatch::add);
binop!(Sub::sub, SubAssign::sub_assign, dispatch::subtract);
binop!(Mul::mul, MulAssign::mul_assign, mul::multiply);

impl Neg for BigInt {
  type Output = BigInt;

  fn neg(mut self) -> BigInt {
    self.negate();
    self
  }
}

impl Neg for &BigInt {
  type Output = BigInt;

  fn neg(self) -> BigInt {
    -self.clone()
  }
}

impl Sum for BigInt {
  fn sum<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
    iter.fold(BigInt::zero(), |acc, n| acc + n)
  }
}

impl<'a> Sum<&'a BigInt> for BigInt {
  fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
    iter.fold(BigInt::zero(), |acc, n| acc + n)
  }
}

impl Product for BigInt {
  fn product<I: Iterator<Item = BigInt>>(iter: I) -> BigInt {
    iter.fold(BigInt::one(), |acc, n| acc * n)
  }
}

impl<'a> Product<&'a BigInt> for BigInt {
  fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> BigInt {
    iter.fold(BigInt::one(), |acc, n| acc * n)
  }
}
