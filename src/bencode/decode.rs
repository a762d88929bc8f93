use super::error::BencodeError;
use super::value::Value;
use bytes::Bytes;
use std::collections::BTreeMap;

/// Resource ceilings applied while decoding.
///
/// The bencode grammar allows unbounded nesting and arbitrarily large string
/// length prefixes, so untrusted input can otherwise exhaust the stack or
/// force huge allocations. The defaults allow 64 levels of nesting and place
/// no ceiling on string lengths beyond the size of the input buffer.
///
/// # Examples
///
/// ```
/// use benco::bencode::{Decoder, Limits};
///
/// let limits = Limits { max_depth: 4, ..Limits::default() };
/// let mut dec = Decoder::with_limits(b"lllllllli1eeeeeeeee", limits);
/// assert!(dec.decode_one().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// Maximum list/dictionary nesting depth.
    pub max_depth: usize,
    /// Maximum declared length of a single byte string.
    pub max_string_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_depth: 64,
            max_string_len: usize::MAX,
        }
    }
}

/// Decodes a single bencode document from `data`.
///
/// The entire buffer must be consumed by one value; trailing bytes are
/// rejected with [`BencodeError::TrailingData`]. Use [`Decoder`] directly
/// for streams holding several top-level values.
///
/// # Examples
///
/// ```
/// use benco::bencode::decode;
///
/// let value = decode(b"4:spam").unwrap();
/// assert_eq!(value.as_str(), Some("spam"));
///
/// assert!(decode(b"i42eextra").is_err());
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    let mut dec = Decoder::new(data);
    let value = dec.decode_one()?;

    if !dec.is_consumed() {
        return Err(BencodeError::TrailingData);
    }

    Ok(value)
}

/// A single-pass bencode decoder over an in-memory buffer.
///
/// The decoder owns a cursor into the input and advances it one top-level
/// value per [`decode_one`](Decoder::decode_one) call. It is exclusively
/// owned and never shared, so the cursor cannot be observed mid-parse. On
/// error the cursor position is unspecified and the decoder should be
/// discarded; no partial value is ever returned.
///
/// Duplicate dictionary keys are resolved last-write-wins: decoding is
/// strictly left to right, so the resolution is deterministic.
///
/// # Examples
///
/// ```
/// use benco::bencode::Decoder;
///
/// let mut dec = Decoder::new(b"i23e4:testi123e");
/// while !dec.is_consumed() {
///     let value = dec.decode_one().unwrap();
///     println!("{:?}", value);
/// }
/// ```
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    limits: Limits,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over `data` with default [`Limits`].
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_limits(data, Limits::default())
    }

    /// Creates a decoder over `data` with explicit resource limits.
    pub fn with_limits(data: &'a [u8], limits: Limits) -> Self {
        Decoder {
            data,
            pos: 0,
            limits,
        }
    }

    /// Returns the cursor position: the offset of the first unconsumed byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns true once every byte of the input has been consumed.
    pub fn is_consumed(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Decodes the next top-level value, advancing the cursor past it.
    ///
    /// # Errors
    ///
    /// Returns [`BencodeError::ExhaustedStream`] if the input is already
    /// fully consumed, or the parse error for the first malformed byte
    /// otherwise.
    pub fn decode_one(&mut self) -> Result<Value, BencodeError> {
        if self.is_consumed() {
            return Err(BencodeError::ExhaustedStream);
        }
        self.next_value(0)
    }

    /// Decodes every remaining value until the input is consumed.
    ///
    /// Fails on the first malformed value; values decoded before the
    /// failure are discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use benco::bencode::Decoder;
    ///
    /// let values = Decoder::new(b"i1ei2ei3e").decode_all().unwrap();
    /// assert_eq!(values.len(), 3);
    /// ```
    pub fn decode_all(&mut self) -> Result<Vec<Value>, BencodeError> {
        let mut values = Vec::new();
        while !self.is_consumed() {
            values.push(self.next_value(0)?);
        }
        Ok(values)
    }

    fn next_value(&mut self, depth: usize) -> Result<Value, BencodeError> {
        if depth > self.limits.max_depth {
            return Err(BencodeError::NestingTooDeep);
        }

        // decode_one screens the empty case at the top level, so running
        // out of bytes here means an enclosing container never closed.
        match *self
            .data
            .get(self.pos)
            .ok_or(BencodeError::UnterminatedContainer)?
        {
            b'i' => self.next_integer(),
            b'l' => self.next_list(depth),
            b'd' => self.next_dict(depth),
            b'0'..=b'9' => self.next_bytes().map(Value::Bytes),
            c => Err(BencodeError::UnknownTag(c as char)),
        }
    }

    fn next_integer(&mut self) -> Result<Value, BencodeError> {
        self.pos += 1;

        let start = self.pos;
        let mut idx = start;
        if self.data.get(idx) == Some(&b'-') {
            idx += 1;
        }
        let digits = idx;

        loop {
            match self.data.get(idx) {
                None => return Err(BencodeError::UnterminatedInteger),
                Some(b'e') => break,
                Some(b) if b.is_ascii_digit() => idx += 1,
                Some(&b) => {
                    return Err(BencodeError::MalformedInteger(format!(
                        "unexpected byte {:?}",
                        b as char
                    )))
                }
            }
        }

        if idx == digits {
            return Err(BencodeError::MalformedInteger("no digits".into()));
        }
        if self.data[digits] == b'0' {
            if digits > start {
                return Err(BencodeError::MalformedInteger("negative zero".into()));
            }
            if idx - digits > 1 {
                return Err(BencodeError::MalformedInteger("leading zero".into()));
            }
        }

        // The run is all ASCII by now, so the only way parsing can fail is
        // a value outside the i64 range.
        let text = std::str::from_utf8(&self.data[start..idx])
            .map_err(|_| BencodeError::MalformedInteger("invalid utf8".into()))?;
        let value: i64 = text.parse().map_err(|_| BencodeError::IntegerOverflow)?;

        self.pos = idx + 1;
        Ok(Value::Integer(value))
    }

    fn next_bytes(&mut self) -> Result<Bytes, BencodeError> {
        let len_start = self.pos;

        loop {
            match self.data.get(self.pos) {
                None => return Err(BencodeError::MalformedStringLength),
                Some(b':') => break,
                Some(b) if b.is_ascii_digit() => self.pos += 1,
                Some(_) => return Err(BencodeError::MalformedStringLength),
            }
        }

        let len_str = std::str::from_utf8(&self.data[len_start..self.pos])
            .map_err(|_| BencodeError::MalformedStringLength)?;
        let len: usize = len_str
            .parse()
            .map_err(|_| BencodeError::MalformedStringLength)?;

        if len > self.limits.max_string_len {
            return Err(BencodeError::StringTooLong(len));
        }

        self.pos += 1;

        if len > self.data.len() - self.pos {
            return Err(BencodeError::InsufficientData);
        }

        let bytes = Bytes::copy_from_slice(&self.data[self.pos..self.pos + len]);
        self.pos += len;

        Ok(bytes)
    }

    fn next_list(&mut self, depth: usize) -> Result<Value, BencodeError> {
        self.pos += 1;
        let mut list = Vec::new();

        loop {
            match self.data.get(self.pos) {
                None => return Err(BencodeError::UnterminatedContainer),
                Some(b'e') => break,
                Some(_) => list.push(self.next_value(depth + 1)?),
            }
        }

        self.pos += 1;
        Ok(Value::List(list))
    }

    fn next_dict(&mut self, depth: usize) -> Result<Value, BencodeError> {
        self.pos += 1;
        let mut dict = BTreeMap::new();

        loop {
            match self.data.get(self.pos) {
                None => return Err(BencodeError::UnterminatedContainer),
                Some(b'e') => break,
                Some(_) => {
                    // Keys must be strings; next_bytes rejects anything else.
                    let key = self.next_bytes()?;
                    let value = self.next_value(depth + 1)?;
                    // Last write wins on duplicate keys.
                    dict.insert(key, value);
                }
            }
        }

        self.pos += 1;
        Ok(Value::Dict(dict))
    }
}
