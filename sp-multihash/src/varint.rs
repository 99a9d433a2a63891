//! Unsigned varints restricted to 63 bits, as required by the multiformats
//! [unsigned-varint](https://github.com/multiformats/unsigned-varint) spec.
//!
//! Each byte carries 7 bits of the value, least significant group first, with
//! the high bit set on every byte but the last. Only the minimal encoding of a
//! value is accepted, and no encoding may be longer than [`MAX_LEN`] bytes.

use crate::error::{
  Error,
  Result,
};
use sp_std::vec::Vec;
use unsigned_varint::{
  decode as varint_decode,
  encode as varint_encode,
};

/// Largest value a varint may carry.
pub const MAX_VALUE: u64 = 0x7FFF_FFFF_FFFF_FFFF;

/// Longest accepted encoding, in bytes.
pub const MAX_LEN: usize = 9;

/// Returns the number of bytes needed to encode `value`.
///
/// # Errors
///
/// Will return `Err` if `value` is greater than [`MAX_VALUE`].
pub fn encoded_len(value: u64) -> Result<usize> {
  ensure_in_range(value)?;
  let mut value = value;
  let mut len = 1;
  while value >= 0x80 {
    value >>= 7;
    len += 1;
  }
  Ok(len)
}

/// Encodes `value` into a freshly allocated buffer.
///
/// # Errors
///
/// Will return `Err` if `value` is greater than [`MAX_VALUE`].
pub fn encode(value: u64) -> Result<Vec<u8>> {
  ensure_in_range(value)?;
  let mut buf = varint_encode::u64_buffer();
  Ok(varint_encode::u64(value, &mut buf).to_vec())
}

/// Writes the encoding of `value` to the front of `dest` and returns the
/// number of bytes written.
///
/// # Errors
///
/// Will return `Err` if `value` is greater than [`MAX_VALUE`] or `dest` is
/// shorter than [`encoded_len`] of `value`.
pub fn write(value: u64, dest: &mut [u8]) -> Result<usize> {
  let required = encoded_len(value)?;
  if dest.len() < required {
    return Err(Error::BufferTooSmall { required, available: dest.len() });
  }
  let mut buf = varint_encode::u64_buffer();
  let encoded = varint_encode::u64(value, &mut buf);
  dest[..encoded.len()].copy_from_slice(encoded);
  Ok(encoded.len())
}

/// Decodes a varint from the front of `source`, returning the value and the
/// number of bytes it occupied. Bytes after the varint are ignored.
///
/// # Errors
///
/// Will return `Err` if `source` is empty or ends mid-varint, if the varint
/// is not minimally encoded, or if it does not fit in 63 bits.
pub fn decode(source: &[u8]) -> Result<(u64, usize)> {
  let window = &source[..source.len().min(MAX_LEN)];
  match varint_decode::u64(window) {
    Ok((value, rest)) => {
      if value > MAX_VALUE {
        return Err(Error::VarintOverflow);
      }
      Ok((value, window.len() - rest.len()))
    }
    // nine bytes with the continuation bit still set on the last one
    Err(varint_decode::Error::Insufficient) if window.len() == MAX_LEN => {
      Err(Error::VarintOverflow)
    }
    Err(e) => Err(e.into()),
  }
}

/// Like [`decode`], but returns `None` instead of an error.
pub fn try_decode(source: &[u8]) -> Option<(u64, usize)> { decode(source).ok() }

fn ensure_in_range(value: u64) -> Result<()> {
  if value > MAX_VALUE {
    Err(Error::VarintOutOfRange(value))
  }
  else {
    Ok(())
  }
}
