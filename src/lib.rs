//! # sp-cid
//!
//! Implementation of [cid](https://github.com/multiformats/cid) for `no_std`
//! use within Substrate.
//!
//! A [`Cid`] names content by a version, a content type from the multicodec
//! table and a [`Multihash`] of the content. It has exactly one binary form
//! and, per multibase, exactly one text form; every decoder here rejects
//! anything else.

#![deny(
  clippy::missing_errors_doc,
  clippy::missing_panics_doc,
  clippy::missing_safety_doc
)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
#[cfg(test)]
extern crate rand;

#[cfg(any(test, feature = "arb"))]
mod arb;
mod cid;
pub mod codec;
mod error;
mod limits;
#[cfg(feature = "serde-codec")]
mod serde_codec;
mod version;

pub use self::cid::Cid;
pub use self::error::{
  Error,
  Result,
};
pub use self::limits::{
  ParseLimits,
  RawParseLimits,
  DEFAULT_MAX_INPUT_BYTE_LENGTH,
  DEFAULT_MAX_INPUT_STRING_LENGTH,
};
pub use self::version::Version;

pub use sp_multibase as multibase;
pub use sp_multibase::Base;
pub use sp_multihash as multihash;
pub use sp_multihash::{
  Code,
  ErrorKind,
  Multihash,
  MultihashDigest,
};
