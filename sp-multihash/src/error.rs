use thiserror::Error;

/// Type alias to use this library's [`Error`] type in a `Result`.
pub type Result<T> = core::result::Result<T, Error>;

/// Broad classes of failure, so callers can tell untrusted-input problems
/// apart from misuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  /// The input bytes or text are malformed.
  Format,
  /// The input is well-formed but not allowed for the requested operation.
  DomainValidation,
  /// A value lies outside the representable range.
  Range,
  /// A caller-supplied buffer is too small.
  Capacity,
}

/// Error types
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
  #[error("varint value {0} exceeds the maximum of 2^63 - 1")]
  VarintOutOfRange(u64),
  #[error("destination holds {available} bytes but {required} are required")]
  BufferTooSmall { required: usize, available: usize },
  #[error("unsigned varint is truncated")]
  VarintTruncated,
  #[error("unsigned varint exceeds 63 bits")]
  VarintOverflow,
  #[error("unsigned varint is not minimally encoded")]
  VarintNotMinimal,
  #[error("multihash declares {declared} digest bytes but only {available} remain")]
  InputTooShort { declared: u64, available: usize },
  #[error("multihash digest length {0} is not addressable")]
  DigestTooLarge(u64),
  #[error("multihash is followed by {0} trailing bytes")]
  TrailingBytes(usize),
  #[error("unsupported hash function 0x{0:x}")]
  UnsupportedCode(u64),
}

impl Error {
  /// Returns the class this error belongs to.
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::VarintOutOfRange(_) => ErrorKind::Range,
      Self::BufferTooSmall { .. } => ErrorKind::Capacity,
      Self::UnsupportedCode(_) => ErrorKind::DomainValidation,
      Self::VarintTruncated
      | Self::VarintOverflow
      | Self::VarintNotMinimal
      | Self::InputTooShort { .. }
      | Self::DigestTooLarge(_)
      | Self::TrailingBytes(_) => ErrorKind::Format,
    }
  }
}

impl From<unsigned_varint::decode::Error> for Error {
  fn from(err: unsigned_varint::decode::Error) -> Self {
    use unsigned_varint::decode::Error::*;
    match err {
      Insufficient => Self::VarintTruncated,
      NotMinimal => Self::VarintNotMinimal,
      _ => Self::VarintOverflow,
    }
  }
}
