//! Multicodec content-type tags.
//!
//! This table is only used to name codecs in diagnostics. A CID may carry any
//! codec that fits in a varint, listed here or not.

pub const RAW: u64 = 0x55;
pub const DAG_PB: u64 = 0x70;
pub const DAG_CBOR: u64 = 0x71;
pub const LIBP2P_KEY: u64 = 0x72;
pub const GIT_RAW: u64 = 0x78;
pub const TORRENT_INFO: u64 = 0x7b;
pub const TORRENT_FILE: u64 = 0x7c;
pub const LEOFCOIN_BLOCK: u64 = 0x81;
pub const LEOFCOIN_TX: u64 = 0x82;
pub const ETH_BLOCK: u64 = 0x90;
pub const ETH_BLOCK_LIST: u64 = 0x91;
pub const ETH_TX_TRIE: u64 = 0x92;
pub const ETH_TX: u64 = 0x93;
pub const ETH_TX_RECEIPT_TRIE: u64 = 0x94;
pub const ETH_TX_RECEIPT: u64 = 0x95;
pub const ETH_STATE_TRIE: u64 = 0x96;
pub const ETH_ACCOUNT_SNAPSHOT: u64 = 0x97;
pub const ETH_STORAGE_TRIE: u64 = 0x98;
pub const BITCOIN_BLOCK: u64 = 0xb0;
pub const BITCOIN_TX: u64 = 0xb1;
pub const ZCASH_BLOCK: u64 = 0xc0;
pub const ZCASH_TX: u64 = 0xc1;
pub const DAG_JSON: u64 = 0x0129;

const ENTRIES: &[(u64, &str)] = &[
  (RAW, "raw"),
  (DAG_PB, "dag-pb"),
  (DAG_CBOR, "dag-cbor"),
  (LIBP2P_KEY, "libp2p-key"),
  (GIT_RAW, "git-raw"),
  (TORRENT_INFO, "torrent-info"),
  (TORRENT_FILE, "torrent-file"),
  (LEOFCOIN_BLOCK, "leofcoin-block"),
  (LEOFCOIN_TX, "leofcoin-tx"),
  (ETH_BLOCK, "eth-block"),
  (ETH_BLOCK_LIST, "eth-block-list"),
  (ETH_TX_TRIE, "eth-tx-trie"),
  (ETH_TX, "eth-tx"),
  (ETH_TX_RECEIPT_TRIE, "eth-tx-receipt-trie"),
  (ETH_TX_RECEIPT, "eth-tx-receipt"),
  (ETH_STATE_TRIE, "eth-state-trie"),
  (ETH_ACCOUNT_SNAPSHOT, "eth-account-snapshot"),
  (ETH_STORAGE_TRIE, "eth-storage-trie"),
  (BITCOIN_BLOCK, "bitcoin-block"),
  (BITCOIN_TX, "bitcoin-tx"),
  (ZCASH_BLOCK, "zcash-block"),
  (ZCASH_TX, "zcash-tx"),
  (DAG_JSON, "dag-json"),
];

/// Returns the name of `code`, if it is in the table.
pub fn name(code: u64) -> Option<&'static str> {
  ENTRIES.iter().find(|(c, _)| *c == code).map(|(_, n)| *n)
}

/// Returns the code named `name`, if it is in the table.
pub fn code(name: &str) -> Option<u64> {
  ENTRIES.iter().find(|(_, n)| *n == name).map(|(c, _)| *c)
}

/// Every `(code, name)` pair in the table.
pub fn entries() -> impl Iterator<Item = (u64, &'static str)> {
  ENTRIES.iter().copied()
}
