//! Size limits applied before any CID input is parsed.

use crate::error::{
  Error,
  Result,
};
use sp_std::convert::TryFrom;

/// Default for [`ParseLimits::max_input_string_length`].
pub const DEFAULT_MAX_INPUT_STRING_LENGTH: usize = 4096;
/// Default for [`ParseLimits::max_input_byte_length`].
pub const DEFAULT_MAX_INPUT_BYTE_LENGTH: usize = 1024 * 1024;

/// Upper bounds on the size of untrusted CID input.
///
/// Positional bases cost quadratic time in the length of the text, so every
/// parse checks these before decoding anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
  feature = "serde-codec",
  derive(serde::Serialize, serde::Deserialize),
  serde(try_from = "RawParseLimits")
)]
pub struct ParseLimits {
  max_input_string_length: usize,
  max_input_byte_length: usize,
}

impl ParseLimits {
  /// Creates limits for text and binary input.
  ///
  /// # Errors
  ///
  /// Will return `Err` if either limit is zero.
  pub fn new(
    max_input_string_length: usize,
    max_input_byte_length: usize,
  ) -> Result<Self> {
    if max_input_string_length == 0 || max_input_byte_length == 0 {
      return Err(Error::InvalidLimit);
    }
    Ok(Self { max_input_string_length, max_input_byte_length })
  }

  /// Longest accepted CID text, in bytes of UTF-8.
  pub const fn max_input_string_length(&self) -> usize {
    self.max_input_string_length
  }

  /// Longest accepted binary CID.
  pub const fn max_input_byte_length(&self) -> usize {
    self.max_input_byte_length
  }

  pub(crate) fn check_str(&self, input: &str) -> Result<()> {
    if input.len() > self.max_input_string_length {
      return Err(Error::StringTooLong {
        len: input.len(),
        limit: self.max_input_string_length,
      });
    }
    Ok(())
  }

  pub(crate) fn check_bytes(&self, input: &[u8]) -> Result<()> {
    if input.len() > self.max_input_byte_length {
      return Err(Error::BytesTooLong {
        len: input.len(),
        limit: self.max_input_byte_length,
      });
    }
    Ok(())
  }
}

impl Default for ParseLimits {
  fn default() -> Self {
    Self {
      max_input_string_length: DEFAULT_MAX_INPUT_STRING_LENGTH,
      max_input_byte_length: DEFAULT_MAX_INPUT_BYTE_LENGTH,
    }
  }
}

/// Unvalidated form of [`ParseLimits`] as it appears in configuration.
#[cfg_attr(feature = "serde-codec", derive(serde::Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct RawParseLimits {
  #[cfg_attr(
    feature = "serde-codec",
    serde(default = "default_max_input_string_length")
  )]
  pub max_input_string_length: usize,
  #[cfg_attr(
    feature = "serde-codec",
    serde(default = "default_max_input_byte_length")
  )]
  pub max_input_byte_length: usize,
}

#[cfg(feature = "serde-codec")]
fn default_max_input_string_length() -> usize {
  DEFAULT_MAX_INPUT_STRING_LENGTH
}

#[cfg(feature = "serde-codec")]
fn default_max_input_byte_length() -> usize { DEFAULT_MAX_INPUT_BYTE_LENGTH }

impl TryFrom<RawParseLimits> for ParseLimits {
  type Error = Error;

  fn try_from(raw: RawParseLimits) -> Result<Self> {
    Self::new(raw.max_input_string_length, raw.max_input_byte_length)
  }
}
