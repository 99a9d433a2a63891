//! CID serde (de)serialization.
//!
//! Human-readable formats carry the default text form of a CID, binary
//! formats its canonical bytes. Both go through the same validation as
//! [`Cid::parse`] and [`Cid::decode`].

use crate::Cid;
use alloc::{
  string::ToString,
  vec::Vec,
};
use core::fmt;
use serde::{
  de,
  ser,
};

impl ser::Serialize for Cid {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where S: ser::Serializer {
    if serializer.is_human_readable() {
      serializer.serialize_str(&self.to_string())
    }
    else {
      serializer.serialize_bytes(self.as_bytes())
    }
  }
}

/// Visitor accepting either form of a CID.
struct CidVisitor;

impl<'de> de::Visitor<'de> for CidVisitor {
  type Value = Cid;

  fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    write!(fmt, "a cid as text or bytes")
  }

  fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
  where E: de::Error {
    Cid::parse(value).map_err(de::Error::custom)
  }

  fn visit_bytes<E>(self, value: &[u8]) -> Result<Self::Value, E>
  where E: de::Error {
    Cid::decode(value).map_err(de::Error::custom)
  }

  fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
  where A: de::SeqAccess<'de> {
    let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(64));
    while let Some(byte) = seq.next_element::<u8>()? {
      bytes.push(byte);
    }
    self.visit_bytes(&bytes)
  }
}

impl<'de> de::Deserialize<'de> for Cid {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where D: de::Deserializer<'de> {
    if deserializer.is_human_readable() {
      deserializer.deserialize_str(CidVisitor)
    }
    else {
      deserializer.deserialize_bytes(CidVisitor)
    }
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;

  const V1: &str = "bafybeihdwdcefgh4dqkjv67uzcmw7ojee6xedzdetojuzjevtenxquvyku";

  #[test]
  fn json_uses_text() {
    let cid = Cid::parse(V1).unwrap();
    let json = serde_json::to_string(&cid).unwrap();
    assert_eq!(json, format!("\"{}\"", V1));
    assert_eq!(serde_json::from_str::<Cid>(&json).unwrap(), cid);
  }

  #[test]
  fn json_rejects_invalid_text() {
    assert!(serde_json::from_str::<Cid>("\"bafy=\"").is_err());
    assert!(serde_json::from_str::<Cid>("\"\"").is_err());
  }

  #[test]
  fn byte_sequences_are_decoded() {
    let cid = Cid::parse(V1).unwrap();
    let value = serde_json::Value::from(cid.to_bytes());
    let visited: Cid =
      de::Deserializer::deserialize_seq(value, CidVisitor).unwrap();
    assert_eq!(visited, cid);
  }
}
