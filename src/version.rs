use crate::error::{
  Error,
  Result,
};
use sp_std::convert::TryFrom;

/// The version of a CID.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub enum Version {
  /// CID version 0: a bare sha2-256 multihash of dag-pb content.
  V0,
  /// CID version 1: version, codec and multihash, all self-describing.
  V1,
}

impl Version {
  /// Returns true if `data` has the shape of a legacy base58 CIDv0 string.
  pub fn is_v0_str(data: &str) -> bool {
    data.len() == 46 && data.starts_with("Qm")
  }

  /// Returns true if `data` has the shape of a binary CIDv0.
  pub fn is_v0_binary(data: &[u8]) -> bool {
    data.len() == 34 && data.starts_with(&[0x12, 0x20])
  }
}

impl TryFrom<u64> for Version {
  type Error = Error;

  fn try_from(raw: u64) -> Result<Self> {
    match raw {
      0 => Ok(Self::V0),
      1 => Ok(Self::V1),
      2 | 3 => Err(Error::ReservedVersion(raw)),
      _ => Err(Error::UnsupportedVersion(raw)),
    }
  }
}

impl From<Version> for u64 {
  fn from(ver: Version) -> u64 {
    match ver {
      Version::V0 => 0,
      Version::V1 => 1,
    }
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;

  #[test]
  fn reserved_and_unsupported_versions_differ() {
    assert_eq!(Version::try_from(0), Ok(Version::V0));
    assert_eq!(Version::try_from(1), Ok(Version::V1));
    assert_eq!(Version::try_from(2), Err(Error::ReservedVersion(2)));
    assert_eq!(Version::try_from(3), Err(Error::ReservedVersion(3)));
    assert_eq!(Version::try_from(4), Err(Error::UnsupportedVersion(4)));
  }

  #[test]
  fn v0_shapes() {
    assert!(Version::is_v0_str("QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1n"));
    assert!(!Version::is_v0_str("zQmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1n"));
    let mut bytes = vec![0x12, 0x20];
    bytes.extend_from_slice(&[0u8; 32]);
    assert!(Version::is_v0_binary(&bytes));
    bytes.push(0);
    assert!(!Version::is_v0_binary(&bytes));
  }
}
