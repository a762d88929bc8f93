//! Metainfo documents and info-hash computation ([BEP-3]).
//!
//! A metainfo document (a `.torrent` file) is a bencoded dictionary whose
//! `info` entry is itself a dictionary. Peers and trackers identify a
//! torrent by its info-hash: the SHA-1 digest of the canonical bencode
//! encoding of that `info` value.
//!
//! This module stops at the digest boundary. It does not interpret the
//! fields inside `info` (file lists, piece hashes, tracker URLs); callers
//! descend into the [`Value`](crate::bencode::Value) tree themselves for
//! that.
//!
//! # Examples
//!
//! ```
//! use benco::metainfo::Metainfo;
//!
//! let data = b"d8:announce15:http://test.com4:infod3:cow3:moo4:spam4:eggsee";
//! let metainfo = Metainfo::from_bytes(data).unwrap();
//! let hash = metainfo.info_hash().unwrap();
//! assert_eq!(hash.to_hex().len(), 40);
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod document;
mod error;
mod info_hash;

pub use document::Metainfo;
pub use error::MetainfoError;
pub use info_hash::InfoHash;

#[cfg(test)]
mod tests;
