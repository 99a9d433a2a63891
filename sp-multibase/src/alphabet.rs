use crate::error::{
  Error,
  Result,
};

/// Marks bytes that are not symbols of an alphabet in its lookup table.
const INVALID: u8 = 0xff;

/// The symbols of a base with a reverse lookup table for ASCII input.
///
/// The codecs themselves accept more than one spelling of some payloads, so
/// text is checked against the selector's own alphabet before it is decoded.
pub struct Alphabet {
  digits: [u8; 128],
}

impl Alphabet {
  const fn new(symbols: &'static [u8]) -> Self {
    let mut digits = [INVALID; 128];
    let mut i = 0;
    while i < symbols.len() {
      digits[symbols[i] as usize] = i as u8;
      i += 1;
    }
    Self { digits }
  }

  /// Returns true if `ch` is a symbol of the alphabet.
  pub fn contains(&self, ch: char) -> bool {
    ch.is_ascii() && self.digits[ch as usize] != INVALID
  }

  /// Checks that every character of `payload` is a symbol of the alphabet.
  pub fn check(&self, payload: &str) -> Result<()> {
    for (index, ch) in payload.chars().enumerate() {
      if ch == '=' {
        return Err(Error::Padding);
      }
      if !self.contains(ch) {
        return Err(Error::InvalidCharacter { ch, index });
      }
    }
    Ok(())
  }
}

pub static BASE32_LOWER: Alphabet = Alphabet::new(b"abcdefghijklmnopqrstuvwxyz234567");
pub static BASE32_UPPER: Alphabet = Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");
pub static BASE36_LOWER: Alphabet = Alphabet::new(b"0123456789abcdefghijklmnopqrstuvwxyz");
pub static BASE36_UPPER: Alphabet = Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");
pub static BASE58_BTC: Alphabet =
  Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");
