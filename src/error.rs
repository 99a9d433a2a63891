use sp_multihash::ErrorKind;
use thiserror::Error;

/// Type alias to use this library's [`Error`] type in a `Result`.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
  #[error(transparent)]
  Multihash(#[from] sp_multihash::Error),
  #[error(transparent)]
  Multibase(#[from] sp_multibase::Error),
  #[error("input is empty")]
  InputEmpty,
  #[error("input of {len} characters exceeds the limit of {limit}")]
  StringTooLong { len: usize, limit: usize },
  #[error("input of {len} bytes exceeds the limit of {limit}")]
  BytesTooLong { len: usize, limit: usize },
  #[error("cid version {0} is reserved")]
  ReservedVersion(u64),
  #[error("unsupported cid version {0}")]
  UnsupportedVersion(u64),
  #[error("cid is followed by {0} trailing bytes")]
  TrailingData(usize),
  #[error("a cidv0 must not carry a multibase prefix")]
  PrefixedV0,
  #[error("a cidv0 requires a 32 byte sha2-256 multihash")]
  InvalidV0Multihash,
  #[error("codec 0x{0:x} cannot be expressed as a cidv0")]
  InvalidV0Codec(u64),
  #[error("codec {0} exceeds the varint maximum")]
  CodecOutOfRange(u64),
  #[error("parse limits must be at least 1")]
  InvalidLimit,
}

impl Error {
  /// Returns the class this error belongs to.
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::Multihash(err) => err.kind(),
      Self::InvalidV0Multihash | Self::InvalidV0Codec(_) => {
        ErrorKind::DomainValidation
      }
      Self::CodecOutOfRange(_) | Self::InvalidLimit => ErrorKind::Range,
      Self::Multibase(_)
      | Self::InputEmpty
      | Self::StringTooLong { .. }
      | Self::BytesTooLong { .. }
      | Self::ReservedVersion(_)
      | Self::UnsupportedVersion(_)
      | Self::TrailingData(_)
      | Self::PrefixedV0 => ErrorKind::Format,
    }
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;

  #[test]
  fn kinds() {
    assert_eq!(Error::ReservedVersion(2).kind(), ErrorKind::Format);
    assert_eq!(Error::InvalidV0Codec(0x55).kind(), ErrorKind::DomainValidation);
    assert_eq!(
      Error::from(sp_multihash::Error::UnsupportedCode(0x1e)).kind(),
      ErrorKind::DomainValidation
    );
    assert_eq!(
      Error::from(sp_multibase::Error::Padding).kind(),
      ErrorKind::Format
    );
    assert_eq!(Error::CodecOutOfRange(u64::MAX).kind(), ErrorKind::Range);
  }

  #[test]
  fn wrapped_errors_display_transparently() {
    let err = Error::from(sp_multibase::Error::UnknownBase('f'));
    assert_eq!(err.to_string(), sp_multibase::Error::UnknownBase('f').to_string());
  }
}
