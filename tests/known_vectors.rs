use sp_cid::{
  codec,
  multihash::code,
  Base,
  Cid,
  Error,
  ErrorKind,
  Multihash,
  ParseLimits,
  Version,
};

/// A raw sha2-256 CIDv1 published as an interop vector, with its renderings.
const RAW_V1_HEX: &str =
  "015512206e6ff7950a36187a801613426e858dce686cd7d7e3c0fc42ee0330072d245c95";
const RAW_V1_BASE58: &str = "zb2rhe5P4gXftAwvA4eXQ5HJwsER2owDyS9sKaQRRVQPn93bA";
const RAW_V1_BASE32: &str =
  "bafkreidon73zkcrwdb5iafqtijxildoonbwnpv7dyd6ef3qdgads2jc4su";
const RAW_V1_BASE36: &str =
  "k2cwuebehu25964wkyur07ojbfw5otexdh4mq0cbtw10597acwdqhtat";

/// The CIDv0 of the empty dag-pb node digest.
const LEGACY_V0: &str = "QmdfTbBqBPQ7VNxZEYEj14VmRuZBkqFbiwReogJgS1zR1n";

#[test]
fn raw_v1_renders_in_every_base() {
  let bytes = hex::decode(RAW_V1_HEX).unwrap();
  let cid = Cid::decode(&bytes).unwrap();
  assert_eq!(cid.version(), Version::V1);
  assert_eq!(cid.codec(), codec::RAW);
  assert_eq!(cid.hash().code(), code::SHA2_256);
  assert_eq!(cid.to_string(), RAW_V1_BASE32);
  assert_eq!(cid.to_string_of_base(Base::Base58Btc), Ok(RAW_V1_BASE58.to_string()));
  assert_eq!(cid.to_string_of_base(Base::Base36Lower), Ok(RAW_V1_BASE36.to_string()));
}

#[test]
fn every_rendering_parses_to_the_same_bytes() {
  let bytes = hex::decode(RAW_V1_HEX).unwrap();
  for text in &[RAW_V1_BASE58, RAW_V1_BASE32, RAW_V1_BASE36] {
    let cid = Cid::parse(text).unwrap();
    assert_eq!(cid.as_bytes(), bytes.as_slice());
  }
  assert_eq!(Cid::parse(RAW_V1_BASE58), Cid::parse(RAW_V1_BASE32));
}

#[test]
fn hello_world_content() {
  let cid = Cid::from_content(b"hello world", codec::RAW, code::SHA2_256).unwrap();
  assert_eq!(
    cid.to_string(),
    "bafkreifzjut3te2nhyekklss27nh3k72ysco7y32koao5eei66wof36n5e"
  );
  assert_eq!(cid.hash(), &Multihash::sha2_256(b"hello world"));
}

#[test]
fn legacy_v0_round_trips() {
  let cid = Cid::parse(LEGACY_V0).unwrap();
  assert_eq!(cid.version(), Version::V0);
  assert_eq!(cid.codec(), codec::DAG_PB);
  assert_eq!(cid.to_string(), LEGACY_V0);
  assert_eq!(cid.to_v1().and_then(|v1| v1.to_v0()), Ok(cid));
}

#[test]
fn reserved_version() {
  let err = Cid::decode(&[0x02, 0x70, 0x12, 0x20]).unwrap_err();
  assert_eq!(err, Error::ReservedVersion(2));
  assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn legacy_v0_behind_a_prefix() {
  for prefix in &['z', 'b', 'k'] {
    let text = format!("{}{}", prefix, LEGACY_V0);
    assert!(Cid::parse(&text).is_err(), "{} parsed", text);
  }
  assert_eq!(Cid::parse(&format!("z{}", LEGACY_V0)), Err(Error::PrefixedV0));
}

#[test]
fn oversized_input_fails_first() {
  let limits = ParseLimits::new(16, 16).unwrap();
  assert_eq!(
    Cid::parse_with_limits(RAW_V1_BASE32, &limits),
    Err(Error::StringTooLong { len: RAW_V1_BASE32.len(), limit: 16 })
  );
  let bytes = hex::decode(RAW_V1_HEX).unwrap();
  assert_eq!(
    Cid::decode_with_limits(&bytes, &limits),
    Err(Error::BytesTooLong { len: 36, limit: 16 })
  );
}
