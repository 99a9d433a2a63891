use crate::{
  error::{
    Error,
    Result,
  },
  varint,
};
use sp_std::{
  convert::TryFrom,
  fmt,
  vec::Vec,
};
use unsigned_varint::encode as varint_encode;

/// A self-describing digest: the code of the hash function that produced it,
/// followed by the digest bytes.
///
/// On the wire this is `varint(code) || varint(len) || digest`. The length is
/// never stored; it is derived from the digest on every encode and checked
/// against the input on every decode.
///
/// The digest is opaque here. Nothing checks that its length matches what the
/// hash function named by `code` would produce.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Multihash {
  code: u64,
  digest: Vec<u8>,
}

impl Multihash {
  /// Wraps a digest that was produced by the hash function `code`.
  ///
  /// # Errors
  ///
  /// Will return `Err` if `code` does not fit in a varint.
  pub fn wrap(code: u64, digest: &[u8]) -> Result<Self> {
    if code > varint::MAX_VALUE {
      return Err(Error::VarintOutOfRange(code));
    }
    Ok(Self { code, digest: digest.to_vec() })
  }

  #[cfg(any(feature = "sha2", feature = "arb", test))]
  pub(crate) fn from_parts(code: u64, digest: Vec<u8>) -> Self {
    Self { code, digest }
  }

  /// Returns the code of the hash function.
  pub const fn code(&self) -> u64 { self.code }

  /// Returns the digest bytes.
  pub fn digest(&self) -> &[u8] { &self.digest }

  /// Returns the length of the digest in bytes.
  pub fn size(&self) -> usize { self.digest.len() }

  /// Returns the length of [`Multihash::to_bytes`] without allocating.
  pub fn encoded_len(&self) -> usize {
    let mut buf = varint_encode::u64_buffer();
    let code_len = varint_encode::u64(self.code, &mut buf).len();
    let mut size_buf = varint_encode::usize_buffer();
    let size_len = varint_encode::usize(self.size(), &mut size_buf).len();
    code_len + size_len + self.size()
  }

  /// Reads a multihash from the front of `bytes`, returning it together with
  /// the number of bytes it occupied. Bytes after the digest are ignored.
  ///
  /// # Errors
  ///
  /// Will return `Err` if either varint is malformed, or if fewer bytes
  /// remain than the declared digest length.
  pub fn read(bytes: &[u8]) -> Result<(Self, usize)> {
    let (code, code_len) = varint::decode(bytes)?;
    let (declared, size_len) = varint::decode(&bytes[code_len..])?;
    let size =
      usize::try_from(declared).map_err(|_| Error::DigestTooLarge(declared))?;
    let start = code_len + size_len;
    let end = start.checked_add(size).ok_or(Error::DigestTooLarge(declared))?;
    let digest = bytes
      .get(start..end)
      .ok_or(Error::InputTooShort { declared, available: bytes.len() - start })?;
    Ok((Self { code, digest: digest.to_vec() }, end))
  }

  /// Like [`Multihash::read`], but returns `None` instead of an error.
  pub fn try_read(bytes: &[u8]) -> Option<(Self, usize)> {
    Self::read(bytes).ok()
  }

  /// Parses a multihash that spans all of `bytes`.
  ///
  /// # Errors
  ///
  /// Will return `Err` if `bytes` is not a valid multihash or has bytes left
  /// over after the digest.
  pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
    let (mh, read) = Self::read(bytes)?;
    if read != bytes.len() {
      return Err(Error::TrailingBytes(bytes.len() - read));
    }
    Ok(mh)
  }

  /// Returns the bytes of the multihash.
  pub fn to_bytes(&self) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(self.encoded_len());
    let mut buf = varint_encode::u64_buffer();
    bytes.extend_from_slice(varint_encode::u64(self.code, &mut buf));
    let mut buf = varint_encode::usize_buffer();
    bytes.extend_from_slice(varint_encode::usize(self.size(), &mut buf));
    bytes.extend_from_slice(&self.digest);
    bytes
  }

  /// Hashes `input` with sha2-256.
  #[cfg(feature = "sha2")]
  pub fn sha2_256(input: &[u8]) -> Self {
    use crate::code::MultihashDigest;
    crate::Code::Sha2_256.digest(input)
  }

  /// Hashes `input` with sha2-512.
  #[cfg(feature = "sha2")]
  pub fn sha2_512(input: &[u8]) -> Self {
    use crate::code::MultihashDigest;
    crate::Code::Sha2_512.digest(input)
  }
}

impl fmt::Debug for Multihash {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Multihash(0x{:x}, ", self.code)?;
    for byte in &self.digest {
      write!(f, "{:02x}", byte)?;
    }
    write!(f, ")")
  }
}

impl TryFrom<&[u8]> for Multihash {
  type Error = Error;

  fn try_from(bytes: &[u8]) -> Result<Self> { Self::from_bytes(bytes) }
}

impl From<Multihash> for Vec<u8> {
  fn from(mh: Multihash) -> Self { mh.to_bytes() }
}
