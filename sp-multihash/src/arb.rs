use crate::{
  code::{
    self,
    Code,
  },
  varint,
  Multihash,
};
use quickcheck::{
  Arbitrary,
  Gen,
};
use rand::Rng;
use sp_std::{
  boxed::Box,
  vec::Vec,
};

impl Arbitrary for Code {
  fn arbitrary(g: &mut Gen) -> Self {
    *g.choose(&[Code::Sha2_256, Code::Sha2_512]).unwrap_or(&Code::Sha2_256)
  }
}

impl Arbitrary for Multihash {
  fn arbitrary(g: &mut Gen) -> Self {
    let mut rng = rand::thread_rng();
    // mostly well-known codes, sometimes anything up to the varint limit
    let code = if rng.gen_bool(0.8) {
      *g.choose(&[code::SHA2_256, code::SHA2_512, code::BLAKE3, code::IDENTITY])
        .unwrap_or(&code::SHA2_256)
    }
    else {
      rng.gen_range(0..=varint::MAX_VALUE)
    };
    let size = rng.gen_range(0..=64);
    let digest: Vec<u8> = (0..size).map(|_| u8::arbitrary(g)).collect();
    Multihash::from_parts(code, digest)
  }

  fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
    let code = self.code();
    Box::new(
      self
        .digest()
        .to_vec()
        .shrink()
        .map(move |digest| Multihash::from_parts(code, digest)),
    )
  }
}
