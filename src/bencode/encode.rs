use super::error::BencodeError;
use super::value::Value;
use std::io::Write;

/// Encodes a value to its canonical bencode byte form.
///
/// The encoding of a given value is unique: dictionary entries are emitted
/// in ascending byte-lexicographic key order (the iteration order of the
/// backing map, raw byte comparison, never locale-aware), integers carry no
/// leading zeros, and an empty string still emits its `0:` length prefix.
/// Two equal values therefore always encode to identical bytes, no matter
/// how they were built — the property info-hash computation depends on.
///
/// # Errors
///
/// Returns an error only if writing to the output buffer fails.
///
/// # Examples
///
/// ```
/// use benco::bencode::{encode, Value};
/// use bytes::Bytes;
/// use std::collections::BTreeMap;
///
/// assert_eq!(encode(&Value::Integer(42)).unwrap(), b"i42e");
/// assert_eq!(encode(&Value::string("hello")).unwrap(), b"5:hello");
/// assert_eq!(encode(&Value::string("")).unwrap(), b"0:");
/// assert_eq!(encode(&Value::List(vec![])).unwrap(), b"le");
///
/// let mut dict = BTreeMap::new();
/// dict.insert(Bytes::from_static(b"b"), Value::Integer(2));
/// dict.insert(Bytes::from_static(b"a"), Value::Integer(1));
/// assert_eq!(encode(&Value::Dict(dict)).unwrap(), b"d1:ai1e1:bi2ee");
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>, BencodeError> {
    let mut buf = Vec::new();
    encode_value(value, &mut buf)?;
    Ok(buf)
}

fn encode_value<W: Write>(value: &Value, writer: &mut W) -> Result<(), BencodeError> {
    match value {
        Value::Integer(i) => {
            write!(writer, "i{}e", i)?;
        }
        Value::Bytes(b) => {
            write!(writer, "{}:", b.len())?;
            writer.write_all(b)?;
        }
        Value::List(l) => {
            writer.write_all(b"l")?;
            for item in l {
                encode_value(item, writer)?;
            }
            writer.write_all(b"e")?;
        }
        Value::Dict(d) => {
            writer.write_all(b"d")?;
            for (key, val) in d {
                write!(writer, "{}:", key.len())?;
                writer.write_all(key)?;
                encode_value(val, writer)?;
            }
            writer.write_all(b"e")?;
        }
    }
    Ok(())
}
