use std::fmt;

use serde::{
  de::{self, Visitor},
  Deserialize, Deserializer, Serialize, Serializer,
};

use crate::BigInt;

/// Serializes as the decimal string, which is the only lossless form for
/// values wider than any machine integer.
impl Serialize for BigInt {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

/// Self-describing formats may hold the decimal string or a plain integer.
/// Compact formats carry no type tags, so they must hold the string written
/// by `Serialize`.
impl<'de> Deserialize<'de> for BigInt {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    if deserializer.is_human_readable() {
      deserializer.deserialize_any(BigIntVisitor)
    } else {
      deserializer.deserialize_str(BigIntVisitor)
    }
  }
}

struct BigIntVisitor;

impl Visitor<'_> for BigIntVisitor {
  type Value = BigInt;

  fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("a decimal integer string")
  }

  fn visit_str<E: de::Error>(self, value: &str) -> Result<BigInt, E> {
    value.parse().map_err(E::custom)
  }

  fn visit_i64<E: de::Error>(self, value: i64) -> Result<BigInt, E> {
    Ok(BigInt::from(value))
  }

  fn visit_u64<E: de::Error>(self, value: u64) -> Result<BigInt, E> {
    Ok(BigInt::from(value))
  }

  fn visit_i128<E: de::Error>(self, value: i128) -> Result<BigInt, E> {
    Ok(BigInt::from(value))
  }

  fn visit_u128<E: de::Error>(self, value: u128) -> Result<BigInt, E> {
    Ok(BigInt::from(value))
  }
}

#[cfg(test)]
mod tests {
  use serde::{
    de::{self, value, IntoDeserializer, Visitor},
    forward_to_deserialize_any, Deserialize, Deserializer,
  };

  use crate::BigInt;

  /// Stands in for a binary format: no type tags, so `deserialize_any` fails.
  struct Untagged<'a>(&'a str);

  impl<'de> Deserializer<'de> for Untagged<'_> {
    type Error = value::Error;

    fn deserialize_any<V: Visitor<'de>>(self, _: V) -> Result<V::Value, Self::Error> {
      Err(de::Error::custom("format is not self-describing"))
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
      visitor.visit_str(self.0)
    }

    fn is_human_readable(&self) -> bool {
      false
    }

    forward_to_deserialize_any! {
      bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char string bytes byte_buf option
      unit unit_struct newtype_struct seq tuple tuple_struct map struct enum identifier
      ignored_any
    }
  }

  #[test]
  fn json_uses_the_decimal_string() {
    let n: BigInt = "-123456789012345678901234567890".parse().unwrap();
    let json = serde_json::to_string(&n).unwrap();
    assert_eq!(json, r#""-123456789012345678901234567890""#);
    assert_eq!(serde_json::from_str::<BigInt>(&json).unwrap(), n);
  }

  #[test]
  fn json_accepts_numbers() {
    assert_eq!(serde_json::from_str::<BigInt>("-17").unwrap(), BigInt::from(-17));
    let max = serde_json::from_str::<BigInt>("18446744073709551615").unwrap();
    assert_eq!(max, BigInt::from(u64::MAX));
  }

  #[test]
  fn json_rejects_bad_digits() {
    let err = serde_json::from_str::<BigInt>(r#""12x""#).unwrap_err();
    assert!(err.to_string().contains("invalid digit 'x' at byte 2"));
  }

  #[test]
  fn untagged_formats_read_the_string() {
    let n = BigInt::deserialize(Untagged("-340282366920938463463374607431768211455")).unwrap();
    assert_eq!(n, -BigInt::from(u128::MAX));
    assert!(BigInt::deserialize(Untagged("4x")).is_err());
  }

  #[test]
  fn accepts_128_bit_integers() {
    let de: value::U128Deserializer<value::Error> = u128::MAX.into_deserializer();
    assert_eq!(BigInt::deserialize(de).unwrap(), BigInt::from(u128::MAX));
    let de: value::I128Deserializer<value::Error> = i128::MIN.into_deserializer();
    assert_eq!(BigInt::deserialize(de).unwrap(), BigInt::from(i128::MIN));
  }
}
