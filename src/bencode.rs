//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is a compact, self-delimiting, byte-oriented serialization format
//! with four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! # Examples
//!
//! ## Decoding
//!
//! ```
//! use benco::bencode::decode;
//!
//! let value = decode(b"i23e").unwrap();
//! assert_eq!(value.as_integer(), Some(23));
//!
//! let value = decode(b"l4:spam4:eggse").unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list[0].as_str(), Some("spam"));
//! assert_eq!(list[1].as_str(), Some("eggs"));
//!
//! let value = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
//! assert_eq!(value.get(b"cow").and_then(|v| v.as_str()), Some("moo"));
//! ```
//!
//! ## Encoding
//!
//! Encoding is canonical: dictionary keys are always emitted in ascending
//! byte order, regardless of insertion order.
//!
//! ```
//! use benco::bencode::{encode, Value};
//! use bytes::Bytes;
//! use std::collections::BTreeMap;
//!
//! let mut dict = BTreeMap::new();
//! dict.insert(Bytes::from_static(b"spam"), Value::string("eggs"));
//! dict.insert(Bytes::from_static(b"cow"), Value::string("moo"));
//! let encoded = encode(&Value::Dict(dict)).unwrap();
//! assert_eq!(encoded, b"d3:cow3:moo4:spam4:eggse");
//! ```
//!
//! ## Streams with several documents
//!
//! A [`Decoder`] owns a cursor into the input and can pull values one at a
//! time, or all at once:
//!
//! ```
//! use benco::bencode::Decoder;
//!
//! let mut dec = Decoder::new(b"i23e4:spam");
//! let values = dec.decode_all().unwrap();
//! assert_eq!(values.len(), 2);
//! assert!(dec.is_consumed());
//! ```
//!
//! # Error Handling
//!
//! Decoding fails with a [`BencodeError`] describing the first problem
//! encountered; no partial value is returned. See the individual variants
//! for the conditions they cover.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, Decoder, Limits};
pub use encode::encode;
pub use error::BencodeError;
pub use value::Value;
