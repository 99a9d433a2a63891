//! # sp-multihash
//!
//! Unsigned varints and self-describing digests as used by
//! [multihash](https://github.com/multiformats/multihash), for `no_std` use.

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

#[cfg(any(test, feature = "arb"))]
mod arb;
pub mod code;
mod error;
mod multihash;
pub mod varint;

pub use self::code::{
  Code,
  MultihashDigest,
};
pub use self::error::{
  Error,
  ErrorKind,
  Result,
};
pub use self::multihash::Multihash;
