//! benco - Bencode encoding, decoding, and info-hash computation.
//!
//! Bencode ([BEP-3]) is the serialization format used by BitTorrent for
//! `.torrent` files and tracker responses. This crate provides:
//!
//! - [`bencode`] - Decoding byte buffers into [`Value`] trees and encoding
//!   them back to canonical bytes
//! - [`metainfo`] - Extracting the `info` dictionary from a metainfo
//!   document and computing its SHA-1 info-hash
//!
//! The encoder is canonical: two semantically equal values always produce
//! byte-identical output, which is what makes info-hashes deterministic.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

pub mod bencode;
pub mod metainfo;

pub use bencode::{decode, encode, BencodeError, Decoder, Limits, Value};
pub use metainfo::{InfoHash, Metainfo, MetainfoError};
