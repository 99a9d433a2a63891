//! This module contains the main CID type.
//!
//! A CID is held as its canonical byte form. The version, codec and multihash
//! are decoded once on construction and kept beside the bytes, but equality,
//! ordering and hashing only ever look at the bytes.

use crate::{
  codec,
  error::{
    Error,
    Result,
  },
  limits::ParseLimits,
  version::Version,
};
use alloc::{
  borrow::Cow,
  string::{
    String,
    ToString,
  },
};
use sp_multibase::Base;
use sp_multihash::{
  code,
  varint,
  Multihash,
};
use sp_std::{
  cmp::Ordering,
  convert::TryFrom,
  fmt,
  hash,
  str::FromStr,
  vec::Vec,
};
use tracing::debug;

/// Representation of a CID.
#[derive(Clone)]
pub struct Cid {
  version: Version,
  codec: u64,
  hash: Multihash,
  bytes: Vec<u8>,
}

impl Cid {
  /// Create a new CIDv0.
  ///
  /// # Errors
  ///
  /// Will return `Err` if `hash` is not a sha2-256 multihash with a 32 byte
  /// digest.
  pub fn new_v0(hash: Multihash) -> Result<Self> {
    if hash.code() != code::SHA2_256 || hash.size() != 32 {
      return Err(Error::InvalidV0Multihash);
    }
    let bytes = hash.to_bytes();
    Ok(Self { version: Version::V0, codec: codec::DAG_PB, hash, bytes })
  }

  /// Create a new CIDv1.
  ///
  /// # Errors
  ///
  /// Will return `Err` if `codec` does not fit in a varint.
  pub fn new_v1(codec: u64, hash: Multihash) -> Result<Self> {
    if codec > varint::MAX_VALUE {
      return Err(Error::CodecOutOfRange(codec));
    }
    Self::v1(codec, hash)
  }

  /// Hashes `data` with the hash function `hash_code` and wraps the digest in
  /// a CIDv1 of content type `codec`.
  ///
  /// # Errors
  ///
  /// Will return `Err` if `hash_code` is not one of the hash functions in
  /// [`sp_multihash::Code`], or `codec` does not fit in a varint.
  #[cfg(feature = "sha2")]
  pub fn from_content(data: &[u8], codec: u64, hash_code: u64) -> Result<Self> {
    use sp_multihash::{
      Code,
      MultihashDigest,
    };
    let hasher = Code::try_from(hash_code)?;
    tracing::trace!(codec, hash_code, len = data.len(), "hashing cid content");
    Self::new_v1(codec, hasher.digest(data))
  }

  /// Builds a CIDv1, writing the version and codec varints in place.
  fn v1(codec: u64, hash: Multihash) -> Result<Self> {
    let version = u64::from(Version::V1);
    let prefix_len = varint::encoded_len(version)? + varint::encoded_len(codec)?;
    let mut bytes = Vec::with_capacity(prefix_len + hash.encoded_len());
    bytes.resize(prefix_len, 0);
    let written = varint::write(version, &mut bytes)?;
    varint::write(codec, &mut bytes[written..])?;
    bytes.extend_from_slice(&hash.to_bytes());
    Ok(Self { version: Version::V1, codec, hash, bytes })
  }

  /// Decodes a binary CID using the default [`ParseLimits`].
  ///
  /// # Errors
  ///
  /// Will return `Err` if `bytes` is not exactly one canonical CID.
  pub fn decode(bytes: &[u8]) -> Result<Self> {
    Self::decode_with_limits(bytes, &ParseLimits::default())
  }

  /// Decodes a binary CID, rejecting input longer than
  /// `limits.max_input_byte_length()` before looking at it.
  ///
  /// # Errors
  ///
  /// Will return `Err` if `bytes` is empty or too long, carries a reserved or
  /// unsupported version, has a malformed varint or multihash, or is followed
  /// by trailing bytes.
  pub fn decode_with_limits(bytes: &[u8], limits: &ParseLimits) -> Result<Self> {
    Self::read_bytes(bytes, limits).map_err(|err| {
      debug!(error = %err, len = bytes.len(), "rejected binary cid");
      err
    })
  }

  /// Like [`Cid::decode`], but returns `None` instead of an error.
  pub fn try_decode(bytes: &[u8]) -> Option<Self> { Self::decode(bytes).ok() }

  /// Like [`Cid::decode_with_limits`], but returns `None` instead of an error.
  pub fn try_decode_with_limits(
    bytes: &[u8],
    limits: &ParseLimits,
  ) -> Option<Self> {
    Self::decode_with_limits(bytes, limits).ok()
  }

  fn read_bytes(bytes: &[u8], limits: &ParseLimits) -> Result<Self> {
    if bytes.is_empty() {
      return Err(Error::InputEmpty);
    }
    limits.check_bytes(bytes)?;

    if Version::is_v0_binary(bytes) {
      let hash = Multihash::from_bytes(bytes)?;
      return Ok(Self {
        version: Version::V0,
        codec: codec::DAG_PB,
        hash,
        bytes: bytes.to_vec(),
      });
    }

    let (raw_version, version_len) = varint::decode(bytes)?;
    match Version::try_from(raw_version)? {
      Version::V1 => {}
      // a v0 only exists in its bare 34 byte form
      Version::V0 => return Err(Error::UnsupportedVersion(raw_version)),
    }
    let (codec, codec_len) = varint::decode(&bytes[version_len..])?;
    let rest = &bytes[version_len + codec_len..];
    let (hash, read) = Multihash::read(rest)?;
    if read != rest.len() {
      return Err(Error::TrailingData(rest.len() - read));
    }
    Ok(Self { version: Version::V1, codec, hash, bytes: bytes.to_vec() })
  }

  /// Parses CID text using the default [`ParseLimits`].
  ///
  /// # Errors
  ///
  /// Will return `Err` if `text` is not the text of exactly one CID.
  pub fn parse(text: &str) -> Result<Self> {
    Self::parse_with_limits(text, &ParseLimits::default())
  }

  /// Parses CID text: either a legacy base58 CIDv0 without a prefix, or any
  /// CIDv1 in a supported multibase.
  ///
  /// # Errors
  ///
  /// Will return `Err` if `text` is blank or longer than
  /// `limits.max_input_string_length()`, is not valid multibase, decodes to a
  /// CIDv0 behind a multibase prefix, or decodes to an invalid binary CID.
  pub fn parse_with_limits(text: &str, limits: &ParseLimits) -> Result<Self> {
    Self::read_str(text, limits).map_err(|err| {
      debug!(error = %err, len = text.len(), "rejected cid text");
      err
    })
  }

  /// Like [`Cid::parse`], but returns `None` instead of an error.
  pub fn try_parse(text: &str) -> Option<Self> { Self::parse(text).ok() }

  /// Like [`Cid::parse_with_limits`], but returns `None` instead of an error.
  pub fn try_parse_with_limits(
    text: &str,
    limits: &ParseLimits,
  ) -> Option<Self> {
    Self::parse_with_limits(text, limits).ok()
  }

  fn read_str(text: &str, limits: &ParseLimits) -> Result<Self> {
    if text.trim().is_empty() {
      return Err(Error::InputEmpty);
    }
    limits.check_str(text)?;

    if Version::is_v0_str(text) {
      let bytes = Base::Base58Btc.decode(text)?;
      return Self::read_bytes(&bytes, limits);
    }

    let (_, bytes) = sp_multibase::decode(text)?;
    if bytes.first() == Some(&(code::SHA2_256 as u8)) {
      return Err(Error::PrefixedV0);
    }
    Self::read_bytes(&bytes, limits)
  }

  /// Returns the cid version.
  pub const fn version(&self) -> Version { self.version }

  /// Returns the cid codec.
  pub const fn codec(&self) -> u64 { self.codec }

  /// Returns the name of the codec, or its code in hex if it has none.
  pub fn codec_name(&self) -> Cow<'static, str> {
    match codec::name(self.codec) {
      Some(name) => Cow::Borrowed(name),
      None => Cow::Owned(format!("0x{:x}", self.codec)),
    }
  }

  /// Returns the cid multihash.
  pub const fn hash(&self) -> &Multihash { &self.hash }

  /// Returns the canonical bytes of the cid.
  pub fn as_bytes(&self) -> &[u8] { &self.bytes }

  /// Returns a copy of the canonical bytes of the cid.
  pub fn to_bytes(&self) -> Vec<u8> { self.bytes.clone() }

  /// Returns the length of the canonical bytes.
  pub fn encoded_len(&self) -> usize { self.bytes.len() }

  /// Converts to a CIDv0.
  ///
  /// # Errors
  ///
  /// Will return `Err` if the codec is not dag-pb or the multihash is not a
  /// 32 byte sha2-256 digest.
  pub fn to_v0(&self) -> Result<Self> {
    match self.version {
      Version::V0 => Ok(self.clone()),
      Version::V1 if self.codec != codec::DAG_PB => {
        Err(Error::InvalidV0Codec(self.codec))
      }
      Version::V1 => Self::new_v0(self.hash.clone()),
    }
  }

  /// Converts to a CIDv1, keeping the codec. A CIDv0 becomes a dag-pb CIDv1.
  ///
  /// # Errors
  ///
  /// Will return `Err` if the CIDv1 prefix cannot be encoded.
  pub fn to_v1(&self) -> Result<Self> {
    match self.version {
      Version::V0 => Self::v1(self.codec, self.hash.clone()),
      Version::V1 => Ok(self.clone()),
    }
  }

  /// Converts to a CIDv1 of content type `codec` over the same multihash.
  ///
  /// # Errors
  ///
  /// Will return `Err` if `codec` does not fit in a varint.
  pub fn to_v1_with_codec(&self, codec: u64) -> Result<Self> {
    if self.version == Version::V1 && self.codec == codec {
      return Ok(self.clone());
    }
    Self::new_v1(codec, self.hash.clone())
  }

  /// Renders the cid in `base`.
  ///
  /// A CIDv0 in base58btc is rendered bare, without a multibase prefix. A
  /// CIDv0 in any other base is first converted to a CIDv1.
  ///
  /// # Errors
  ///
  /// Will return `Err` if a CIDv0 cannot be converted to a CIDv1.
  pub fn to_string_of_base(&self, base: Base) -> Result<String> {
    match (self.version, base) {
      (Version::V0, Base::Base58Btc) => Ok(base.encode(&self.bytes)),
      (Version::V0, _) => self.to_v1()?.to_string_of_base(base),
      (Version::V1, _) => Ok(sp_multibase::encode(base, &self.bytes)),
    }
  }
}

impl PartialEq for Cid {
  fn eq(&self, other: &Self) -> bool { self.bytes == other.bytes }
}

impl Eq for Cid {}

impl PartialOrd for Cid {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Cid {
  fn cmp(&self, other: &Self) -> Ordering { self.bytes.cmp(&other.bytes) }
}

impl hash::Hash for Cid {
  fn hash<H: hash::Hasher>(&self, state: &mut H) { self.bytes.hash(state) }
}

impl fmt::Display for Cid {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let text = match self.version {
      Version::V0 => Base::Base58Btc.encode(&self.bytes),
      Version::V1 => sp_multibase::encode(Base::Base32Lower, &self.bytes),
    };
    f.write_str(&text)
  }
}

impl fmt::Debug for Cid {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Cid")
      .field("version", &self.version)
      .field("codec", &self.codec_name())
      .field("hash", &self.hash)
      .finish()
  }
}

impl FromStr for Cid {
  type Err = Error;

  fn from_str(text: &str) -> Result<Self> { Self::parse(text) }
}

impl TryFrom<&str> for Cid {
  type Error = Error;

  fn try_from(text: &str) -> Result<Self> { Self::parse(text) }
}

impl TryFrom<String> for Cid {
  type Error = Error;

  fn try_from(text: String) -> Result<Self> { Self::parse(&text) }
}

impl TryFrom<&[u8]> for Cid {
  type Error = Error;

  fn try_from(bytes: &[u8]) -> Result<Self> { Self::decode(bytes) }
}

impl TryFrom<Vec<u8>> for Cid {
  type Error = Error;

  fn try_from(bytes: Vec<u8>) -> Result<Self> { Self::decode(&bytes) }
}

impl From<Cid> for Vec<u8> {
  fn from(cid: Cid) -> Self { cid.bytes }
}

impl From<&Cid> for String {
  fn from(cid: &Cid) -> Self { cid.to_string() }
}

impl From<Cid> for String {
  fn from(cid: Cid) -> Self { cid.to_string() }
}
