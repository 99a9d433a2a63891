//! # sp-multibase
//!
//! Implementation of [multibase](https://github.com/multiformats/multibase)
//! for `no_std`, restricted to the canonical forms used by content
//! identifiers: no padding, one case per base, no stray trailing bits.

#![deny(
  clippy::missing_errors_doc,
  clippy::missing_panics_doc,
  clippy::missing_safety_doc
)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod alphabet;
mod base;
mod error;

pub use self::base::Base;
pub use self::error::{
  Error,
  Result,
};

use alloc::string::String;
use sp_std::vec::Vec;

/// Encodes `input` in `base`, prefixed with the base's code character.
pub fn encode<T: AsRef<[u8]>>(base: Base, input: T) -> String {
  let payload = base.encode(input);
  let mut text = String::with_capacity(payload.len() + 1);
  text.push(base.code());
  text.push_str(&payload);
  text
}

/// Decodes multibase text, using its first character to pick the base.
///
/// # Errors
///
/// Will return `Err` if `input` is empty, starts with an unknown code
/// character, or its payload is not canonical text in that base.
pub fn decode<T: AsRef<str>>(input: T) -> Result<(Base, Vec<u8>)> {
  let input = input.as_ref();
  let code = input.chars().next().ok_or(Error::EmptyInput)?;
  let base = Base::from_code(code)?;
  let bytes = base.decode(&input[code.len_utf8()..])?;
  Ok((base, bytes))
}

/// Like [`decode`], but returns `None` instead of an error.
pub fn try_decode<T: AsRef<str>>(input: T) -> Option<(Base, Vec<u8>)> {
  decode(input).ok()
}
