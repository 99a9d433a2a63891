use crate::{
  codec,
  Cid,
  Version,
};
use quickcheck::{
  Arbitrary,
  Gen,
};
use rand::Rng;
use sp_multihash::{
  code,
  varint,
  Multihash,
};
use sp_std::{
  boxed::Box,
  vec::Vec,
};

impl Arbitrary for Version {
  fn arbitrary(g: &mut Gen) -> Self {
    *g.choose(&[Version::V0, Version::V1]).unwrap_or(&Version::V1)
  }
}

fn sha2_256_digest(g: &mut Gen) -> Multihash {
  let digest: Vec<u8> = (0..32).map(|_| u8::arbitrary(g)).collect();
  Multihash::wrap(code::SHA2_256, &digest).unwrap_or_else(|_| Multihash::arbitrary(g))
}

impl Arbitrary for Cid {
  fn arbitrary(g: &mut Gen) -> Self {
    let mut rng = rand::thread_rng();
    match Version::arbitrary(g) {
      Version::V0 => match Cid::new_v0(sha2_256_digest(g)) {
        Ok(cid) => cid,
        Err(_) => Cid::arbitrary(g),
      },
      Version::V1 => {
        // mostly registered codecs, sometimes anything up to the varint limit
        let codec = if rng.gen_bool(0.8) {
          let codes: Vec<u64> = codec::entries().map(|(c, _)| c).collect();
          *g.choose(&codes).unwrap_or(&codec::RAW)
        }
        else {
          rng.gen_range(0..=varint::MAX_VALUE)
        };
        let hash = if rng.gen_bool(0.5) {
          sha2_256_digest(g)
        }
        else {
          Multihash::arbitrary(g)
        };
        match Cid::new_v1(codec, hash) {
          Ok(cid) => cid,
          Err(_) => Cid::arbitrary(g),
        }
      }
    }
  }

  fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
    match self.version() {
      Version::V0 => Box::new(sp_std::iter::empty()),
      Version::V1 => {
        let codec = self.codec();
        Box::new(
          self
            .hash()
            .shrink()
            .filter_map(move |hash| Cid::new_v1(codec, hash).ok()),
        )
      }
    }
  }
}
