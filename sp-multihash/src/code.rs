//! Hash function codes and the digest-provider seam.
//!
//! The constants name the well-known entries of the multihash code table.
//! Only the functions listed in [`Code`] can actually be computed here; other
//! providers implement [`MultihashDigest`] themselves.

use crate::{
  error::Error,
  multihash::Multihash,
};
use sp_std::convert::TryFrom;

pub const IDENTITY: u64 = 0x00;
pub const SHA1: u64 = 0x11;
pub const SHA2_256: u64 = 0x12;
pub const SHA2_512: u64 = 0x13;
pub const SHA3_512: u64 = 0x14;
pub const SHA3_384: u64 = 0x15;
pub const SHA3_256: u64 = 0x16;
pub const SHA3_224: u64 = 0x17;
pub const SHAKE_128: u64 = 0x18;
pub const SHAKE_256: u64 = 0x19;
pub const KECCAK_224: u64 = 0x1a;
pub const KECCAK_256: u64 = 0x1b;
pub const KECCAK_384: u64 = 0x1c;
pub const KECCAK_512: u64 = 0x1d;
pub const BLAKE3: u64 = 0x1e;

const NAMES: &[(u64, &str)] = &[
  (IDENTITY, "identity"),
  (SHA1, "sha1"),
  (SHA2_256, "sha2-256"),
  (SHA2_512, "sha2-512"),
  (SHA3_512, "sha3-512"),
  (SHA3_384, "sha3-384"),
  (SHA3_256, "sha3-256"),
  (SHA3_224, "sha3-224"),
  (SHAKE_128, "shake-128"),
  (SHAKE_256, "shake-256"),
  (KECCAK_224, "keccak-224"),
  (KECCAK_256, "keccak-256"),
  (KECCAK_384, "keccak-384"),
  (KECCAK_512, "keccak-512"),
  (BLAKE3, "blake3"),
];

/// Returns the name of the hash function `code`, if it is a known one.
pub fn name(code: u64) -> Option<&'static str> {
  NAMES.iter().find(|(c, _)| *c == code).map(|(_, n)| *n)
}

/// A trait for anything that can produce a [`Multihash`] from input bytes.
pub trait MultihashDigest {
  /// Hashes `input` and wraps the result with this function's code.
  fn digest(&self, input: &[u8]) -> Multihash;
}

/// The hash functions this crate can compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Code {
  /// SHA-256 (32-byte digest)
  Sha2_256,
  /// SHA-512 (64-byte digest)
  Sha2_512,
}

impl Code {
  /// Returns the length of the digests this function produces.
  pub const fn digest_len(self) -> usize {
    match self {
      Self::Sha2_256 => 32,
      Self::Sha2_512 => 64,
    }
  }
}

impl From<Code> for u64 {
  fn from(code: Code) -> Self {
    match code {
      Code::Sha2_256 => SHA2_256,
      Code::Sha2_512 => SHA2_512,
    }
  }
}

impl TryFrom<u64> for Code {
  type Error = Error;

  fn try_from(code: u64) -> Result<Self, Self::Error> {
    match code {
      SHA2_256 => Ok(Self::Sha2_256),
      SHA2_512 => Ok(Self::Sha2_512),
      _ => Err(Error::UnsupportedCode(code)),
    }
  }
}

#[cfg(feature = "sha2")]
impl MultihashDigest for Code {
  fn digest(&self, input: &[u8]) -> Multihash {
    use digest::Digest;
    let digest = match self {
      Self::Sha2_256 => sha_2::Sha256::digest(input).to_vec(),
      Self::Sha2_512 => sha_2::Sha512::digest(input).to_vec(),
    };
    Multihash::from_parts(u64::from(*self), digest)
  }
}
