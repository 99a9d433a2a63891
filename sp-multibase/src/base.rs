use crate::{
  alphabet::{
    self,
    Alphabet,
  },
  error::{
    Error,
    Result,
  },
};
use alloc::string::String;
use sp_std::vec::Vec;

/// The multibase encodings this crate understands. Each is named on the wire
/// by a single leading code character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
  /// RFC 4648 base32, lowercase, no padding (`b`).
  Base32Lower,
  /// RFC 4648 base32, uppercase, no padding (`B`).
  Base32Upper,
  /// Base36, lowercase (`k`).
  Base36Lower,
  /// Base36, uppercase (`K`).
  Base36Upper,
  /// Base58 with the bitcoin alphabet (`z`).
  Base58Btc,
}

impl Base {
  /// Every supported base.
  pub const ALL: &'static [Base] = &[
    Base::Base32Lower,
    Base::Base32Upper,
    Base::Base36Lower,
    Base::Base36Upper,
    Base::Base58Btc,
  ];

  /// Returns the base named by the code character `code`.
  ///
  /// # Errors
  ///
  /// Will return `Err` if `code` names no supported base.
  pub fn from_code(code: char) -> Result<Self> {
    match code {
      'b' => Ok(Self::Base32Lower),
      'B' => Ok(Self::Base32Upper),
      'k' => Ok(Self::Base36Lower),
      'K' => Ok(Self::Base36Upper),
      'z' => Ok(Self::Base58Btc),
      _ => Err(Error::UnknownBase(code)),
    }
  }

  /// Returns the code character of the base.
  pub const fn code(&self) -> char {
    match self {
      Self::Base32Lower => 'b',
      Self::Base32Upper => 'B',
      Self::Base36Lower => 'k',
      Self::Base36Upper => 'K',
      Self::Base58Btc => 'z',
    }
  }

  /// Returns the multibase name of the base.
  pub const fn name(&self) -> &'static str {
    match self {
      Self::Base32Lower => "base32",
      Self::Base32Upper => "base32upper",
      Self::Base36Lower => "base36",
      Self::Base36Upper => "base36upper",
      Self::Base58Btc => "base58btc",
    }
  }

  /// Encodes `input` in this base, without the code character.
  pub fn encode<I: AsRef<[u8]>>(&self, input: I) -> String {
    self.codec().encode(input)
  }

  /// Decodes text in this base that carries no code character.
  ///
  /// # Errors
  ///
  /// Will return `Err` if `input` contains a symbol outside the base's
  /// alphabet, or is not the canonical encoding of any byte string.
  pub fn decode<I: AsRef<str>>(&self, input: I) -> Result<Vec<u8>> {
    let input = input.as_ref();
    self.alphabet().check(input)?;
    if input.is_empty() {
      return Ok(Vec::new());
    }
    Ok(self.codec().decode(input)?)
  }

  fn codec(&self) -> multibase::Base {
    match self {
      Self::Base32Lower => multibase::Base::Base32Lower,
      Self::Base32Upper => multibase::Base::Base32Upper,
      Self::Base36Lower => multibase::Base::Base36Lower,
      Self::Base36Upper => multibase::Base::Base36Upper,
      Self::Base58Btc => multibase::Base::Base58Btc,
    }
  }

  fn alphabet(&self) -> &'static Alphabet {
    match self {
      Self::Base32Lower => &alphabet::BASE32_LOWER,
      Self::Base32Upper => &alphabet::BASE32_UPPER,
      Self::Base36Lower => &alphabet::BASE36_LOWER,
      Self::Base36Upper => &alphabet::BASE36_UPPER,
      Self::Base58Btc => &alphabet::BASE58_BTC,
    }
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use quickcheck::{
    Arbitrary,
    Gen,
  };

  impl Arbitrary for Base {
    fn arbitrary(g: &mut Gen) -> Self {
      *g.choose(Base::ALL).unwrap_or(&Base::Base58Btc)
    }
  }

  #[test]
  fn code_round_trip() {
    for base in Base::ALL {
      assert_eq!(Base::from_code(base.code()), Ok(*base));
    }
    assert_eq!(Base::from_code('f'), Err(Error::UnknownBase('f')));
  }

  #[test]
  fn rfc4648_base32_vectors() {
    let vectors: &[(&[u8], &str)] = &[
      (b"", ""),
      (b"f", "my"),
      (b"fo", "mzxq"),
      (b"foo", "mzxw6"),
      (b"foob", "mzxw6yq"),
      (b"fooba", "mzxw6ytb"),
      (b"foobar", "mzxw6ytboi"),
    ];
    for (bytes, text) in vectors {
      assert_eq!(Base::Base32Lower.encode(bytes), *text);
      assert_eq!(Base::Base32Upper.encode(bytes), text.to_uppercase());
      assert_eq!(Base::Base32Lower.decode(text), Ok(bytes.to_vec()));
      assert_eq!(Base::Base32Upper.decode(text.to_uppercase()), Ok(bytes.to_vec()));
    }
  }

  #[test]
  fn base32_trailing_bits_must_be_zero() {
    // "my" is 'f'; "mz" sets one of the two trailing bits
    assert_eq!(Base::Base32Lower.decode("mz"), Err(Error::NonCanonicalTrailingBits));
    assert_eq!(Base::Base32Lower.decode("mzxr"), Err(Error::NonCanonicalTrailingBits));
  }

  #[test]
  fn base32_dangling_symbol_is_rejected() {
    assert_eq!(Base::Base32Lower.decode("a"), Err(Error::NonCanonicalTrailingBits));
    assert_eq!(Base::Base32Lower.decode("mzxqaa"), Err(Error::NonCanonicalTrailingBits));
    assert_eq!(Base::Base32Lower.decode("mzxqa"), Ok(b"fo\0".to_vec()));
  }

  #[test]
  fn base32_is_case_strict() {
    assert_eq!(
      Base::Base32Lower.decode("MY"),
      Err(Error::InvalidCharacter { ch: 'M', index: 0 })
    );
    assert_eq!(
      Base::Base32Upper.decode("My"),
      Err(Error::InvalidCharacter { ch: 'y', index: 1 })
    );
  }

  #[test]
  fn base58_vectors() {
    let vectors: &[(&[u8], &str)] = &[
      (b"", ""),
      (&[0], "1"),
      (&[0, 0, 0], "111"),
      (&[0x61], "2g"),
      (&[0x62, 0x62, 0x62], "a3gV"),
      (b"hello world", "StV1DL6CwTryKyV"),
      (&[0, 0, b'a', b'b', b'c'], "11ZiCa"),
      (&[0, 0, 0, 0x28, 0x7f, 0xb4, 0xcd], "111233QC4"),
    ];
    for (bytes, text) in vectors {
      assert_eq!(Base::Base58Btc.encode(bytes), *text);
      assert_eq!(Base::Base58Btc.decode(text), Ok(bytes.to_vec()));
    }
  }

  #[test]
  fn base36_vectors() {
    let bytes = [0, 1, 2, 3, 4, 5, 255];
    assert_eq!(Base::Base36Lower.encode(bytes), "0e52t6l8f");
    assert_eq!(Base::Base36Upper.encode(bytes), "0E52T6L8F");
    assert_eq!(Base::Base36Lower.encode([0xff]), "73");
    assert_eq!(Base::Base36Upper.decode("0E52T6L8F"), Ok(bytes.to_vec()));
    assert_eq!(
      Base::Base36Lower.decode("0E52t6l8f"),
      Err(Error::InvalidCharacter { ch: 'E', index: 1 })
    );
  }

  #[test]
  fn only_zero_symbols_decode_to_zero_bytes() {
    assert_eq!(Base::Base58Btc.decode("1111"), Ok(vec![0, 0, 0, 0]));
    assert_eq!(Base::Base36Lower.decode("00"), Ok(vec![0, 0]));
    assert_eq!(Base::Base36Upper.decode("000"), Ok(vec![0, 0, 0]));
  }

  #[test]
  fn foreign_symbols_are_rejected() {
    assert_eq!(
      Base::Base58Btc.decode("2g0"),
      Err(Error::InvalidCharacter { ch: '0', index: 2 })
    );
    assert_eq!(
      Base::Base58Btc.decode("2 g"),
      Err(Error::InvalidCharacter { ch: ' ', index: 1 })
    );
    assert_eq!(Base::Base32Lower.decode("my======"), Err(Error::Padding));
  }
}
