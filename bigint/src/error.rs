#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
  #[error("invalid digit {digit:?} at byte {index}")]
  InvalidDigit { digit: char, index: usize },
  #[error("expected at least one digit")]
  Empty,
  #[error("invalid argument {0}; exponent must not be negative")]
  InvalidArgument(i64),
  #[error("value with {digits} digits does not fit in an i64")]
  Overflow { digits: usize },
}
