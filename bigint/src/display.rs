use std::fmt::{self, Alignment, Debug, Display, Write};

use crate::{BigInt, Sign};

/// Negative values print a `-`. Positive values print bare unless the `+`
/// flag is given (`{:+}`), which shows their sign token too. Zero never
/// carries a sign. Width, fill, alignment and `0` padding behave as they do
/// for the primitive integers; precision is ignored.
impl Display for BigInt {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_zero() && f.sign_plus() {
      return pad_signless_zero(f);
    }
    let mut digits = String::with_capacity(self.digits.len());
    for d in self.digits() {
      digits.write_char(char::from(b'0' + d))?;
    }
    f.pad_integral(self.sign != Some(Sign::Negative), "", &digits)
  }
}

/// `pad_integral` would print `+0` under the `+` flag.
fn pad_signless_zero(f: &mut fmt::Formatter<'_>) -> fmt::Result {
  let padding = f.width().unwrap_or(0).saturating_sub(1);
  let (before, after) = match f.align() {
    _ if f.sign_aware_zero_pad() => {
      for _ in 0..padding {
        f.write_char('0')?;
      }
      (0, 0)
    }
    Some(Alignment::Left) => (0, padding),
    Some(Alignment::Center) => (padding / 2, (padding + 1) / 2),
    Some(Alignment::Right) | None => (padding, 0),
  };
  let fill = f.fill();
  for _ in 0..before {
    f.write_char(fill)?;
  }
  f.write_char('0')?;
  for _ in 0..after {
    f.write_char(fill)?;
  }
  Ok(())
}

impl Debug for BigInt {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    Display::fmt(self, f)
  }
}

#[cfg(test)]
mod tests {
  use crate::BigInt;

  #[test]
  fn smart_sign() {
    assert_eq!(BigInt::from(1234).to_string(), "1234");
    assert_eq!(BigInt::from(-1234).to_string(), "-1234");
    assert_eq!(BigInt::zero().to_string(), "0");
  }

  #[test]
  fn always_shown_sign() {
    assert_eq!(format!("{:+}", BigInt::from(1234)), "+1234");
    assert_eq!(format!("{:+}", BigInt::from(-1234)), "-1234");
    assert_eq!(format!("{:+}", BigInt::zero()), "0");
  }

  #[test]
  fn padding() {
    assert_eq!(format!("{:>6}", BigInt::from(-42)), "   -42");
    assert_eq!(format!("{:<5}|", BigInt::from(7)), "7    |");
    assert_eq!(format!("{:?}", BigInt::from(-3)), "-3");
  }

  #[test]
  fn formats_like_i64() {
    for n in [-12345i64, 12345, -7, 0, 7] {
      let big = BigInt::from(n);
      assert_eq!(format!("{big:.2}"), format!("{n:.2}"));
      assert_eq!(format!("{big:8}"), format!("{n:8}"));
      assert_eq!(format!("{big:08}"), format!("{n:08}"));
      assert_eq!(format!("{big:<8}|"), format!("{n:<8}|"));
      assert_eq!(format!("{big:>8}"), format!("{n:>8}"));
      assert_eq!(format!("{big:*^9}"), format!("{n:*^9}"));
      assert_eq!(format!("{big:3}"), format!("{n:3}"));
      assert_eq!(format!("{big:?}"), format!("{n:?}"));
    }
    for n in [-12345i64, 12345] {
      let big = BigInt::from(n);
      assert_eq!(format!("{big:+08}"), format!("{n:+08}"));
      assert_eq!(format!("{big:>+9}"), format!("{n:>+9}"));
    }
    assert_eq!(format!("{:.2}", BigInt::from(-12345)), "-12345");
    assert_eq!(format!("{:08}", BigInt::from(-12345)), "-0012345");
  }

  #[test]
  fn plus_flag_keeps_zero_signless() {
    let zero = BigInt::zero();
    assert_eq!(format!("{zero:+5}"), "    0");
    assert_eq!(format!("{zero:+05}"), "00000");
    assert_eq!(format!("{zero:<+4}|"), "0   |");
    assert_eq!(format!("{zero:_^+5}"), "__0__");
  }

  #[test]
  fn round_trips_through_parse() {
    for n in [i64::MIN, -1_000_000_007, -1, 0, 1, 42, i64::MAX] {
      let big = BigInt::from(n);
      assert_eq!(big.to_string().parse::<BigInt>(), Ok(big));
    }
  }
}
