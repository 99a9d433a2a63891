use thiserror::Error;

/// Type alias to use this library's [`Error`] type in a `Result`.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
  #[error("multibase text is empty")]
  EmptyInput,
  #[error("unknown multibase code {0:?}")]
  UnknownBase(char),
  #[error("padding is not allowed")]
  Padding,
  #[error("invalid symbol {ch:?} at index {index}")]
  InvalidCharacter { ch: char, index: usize },
  /// Every symbol is valid, but the payload has a dangling symbol or set
  /// trailing bits.
  #[error("trailing bits are not canonical")]
  NonCanonicalTrailingBits,
}

impl From<multibase::Error> for Error {
  fn from(err: multibase::Error) -> Self {
    match err {
      multibase::Error::UnknownBase(code) => Self::UnknownBase(code),
      _ => Self::NonCanonicalTrailingBits,
    }
  }
}
