use bytes::Bytes;
use std::collections::BTreeMap;

/// A decoded bencode value.
///
/// The four variants mirror the four bencode data types. Dictionaries are
/// backed by a [`BTreeMap`] keyed on raw bytes, so key uniqueness and the
/// byte-lexicographic ordering required for canonical encoding are
/// guaranteed by construction rather than checked at encode time.
///
/// A `Value` tree is built once (by [`decode`](super::decode) or by hand)
/// and read thereafter; it holds no shared mutable state, so it can be
/// inspected from multiple threads freely.
///
/// # Examples
///
/// ```
/// use benco::bencode::Value;
///
/// let int = Value::Integer(42);
/// let string = Value::string("hello");
/// let list = Value::List(vec![int.clone(), string.clone()]);
///
/// assert_eq!(int.as_integer(), Some(42));
/// assert_eq!(string.as_str(), Some("hello"));
/// assert_eq!(list.as_list().map(|l| l.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A byte string; not necessarily valid UTF-8.
    Bytes(Bytes),
    /// An ordered list of values. Order is significant and preserved.
    List(Vec<Value>),
    /// A dictionary with byte string keys, iterated in ascending byte order.
    Dict(BTreeMap<Bytes, Value>),
}

impl Value {
    /// Creates a byte string value from a UTF-8 string.
    ///
    /// # Examples
    ///
    /// ```
    /// use benco::bencode::Value;
    ///
    /// let value = Value::string("spam");
    /// assert_eq!(value.as_str(), Some("spam"));
    /// ```
    pub fn string(s: &str) -> Self {
        Value::Bytes(Bytes::copy_from_slice(s.as_bytes()))
    }

    /// Creates a byte string value from a byte slice.
    pub fn bytes(b: &[u8]) -> Self {
        Value::Bytes(Bytes::copy_from_slice(b))
    }

    /// Returns the value as an integer, if it is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use benco::bencode::Value;
    ///
    /// assert_eq!(Value::Integer(42).as_integer(), Some(42));
    /// assert_eq!(Value::string("x").as_integer(), None);
    /// ```
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a byte string, if it is one.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as a UTF-8 string, if it is a byte string holding
    /// valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use benco::bencode::Value;
    ///
    /// assert_eq!(Value::string("eggs").as_str(), Some("eggs"));
    /// assert_eq!(Value::bytes(&[0xff]).as_str(), None);
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Bytes(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// Returns the value as a slice of list elements, if it is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the value as a dictionary reference, if it is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use benco::bencode::decode;
    ///
    /// let value = decode(b"d3:foo3:bare").unwrap();
    /// assert!(value.as_dict().unwrap().contains_key(b"foo".as_slice()));
    /// ```
    pub fn as_dict(&self) -> Option<&BTreeMap<Bytes, Value>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consumes the value and returns the dictionary, if it is one.
    ///
    /// Avoids cloning when the caller needs ownership of the entries.
    pub fn into_dict(self) -> Option<BTreeMap<Bytes, Value>> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key in this value if it is a dictionary.
    ///
    /// Returns `None` if the value is not a dictionary or the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use benco::bencode::decode;
    ///
    /// let value = decode(b"d3:cow3:mooe").unwrap();
    /// assert_eq!(value.get(b"cow").and_then(|v| v.as_str()), Some("moo"));
    /// assert_eq!(value.get(b"pig"), None);
    /// ```
    pub fn get(&self, key: &[u8]) -> Option<&Value> {
        self.as_dict()?.get(key)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Bytes> for Value {
    fn from(b: Bytes) -> Self {
        Value::Bytes(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(l: Vec<Value>) -> Self {
        Value::List(l)
    }
}

impl From<BTreeMap<Bytes, Value>> for Value {
    fn from(d: BTreeMap<Bytes, Value>) -> Self {
        Value::Dict(d)
    }
}
