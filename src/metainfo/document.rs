use super::error::MetainfoError;
use super::info_hash::InfoHash;
use crate::bencode::{decode, encode, Value};
use bytes::Bytes;
use sha1::{Digest, Sha1};

/// A parsed metainfo document.
///
/// Wraps the decoded top-level dictionary of a `.torrent` file together
/// with the raw bytes it was parsed from. The document is immutable once
/// built; lookups borrow into the decoded tree.
///
/// # Examples
///
/// ```
/// use benco::metainfo::Metainfo;
///
/// let data = b"d8:announce15:http://test.com4:infod3:cow3:moo4:spam4:eggsee";
/// let metainfo = Metainfo::from_bytes(data).unwrap();
///
/// let announce = metainfo.value().get(b"announce");
/// assert_eq!(announce.and_then(|v| v.as_str()), Some("http://test.com"));
/// println!("info hash: {}", metainfo.info_hash().unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Metainfo {
    raw: Bytes,
    value: Value,
}

impl Metainfo {
    /// Parses a metainfo document from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not a single well-formed bencode
    /// document, or if the top-level value is not a dictionary.
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetainfoError> {
        let value = decode(data)?;
        if value.as_dict().is_none() {
            return Err(MetainfoError::RootNotDictionary);
        }

        Ok(Metainfo {
            raw: Bytes::copy_from_slice(data),
            value,
        })
    }

    /// Returns the decoded top-level dictionary as a [`Value`].
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the raw bytes the document was parsed from.
    pub fn raw(&self) -> &Bytes {
        &self.raw
    }

    /// Returns the `info` entry, which must be a dictionary.
    pub fn info(&self) -> Result<&Value, MetainfoError> {
        let info = self.value.get(b"info").ok_or(MetainfoError::MissingInfo)?;
        if info.as_dict().is_none() {
            return Err(MetainfoError::InfoNotDictionary);
        }
        Ok(info)
    }

    /// Returns the canonical bencode encoding of the `info` dictionary.
    ///
    /// This is the exact byte sequence the info-hash is computed over.
    /// Because encoding is canonical, the result does not depend on the
    /// key order of the source document.
    pub fn info_bytes(&self) -> Result<Vec<u8>, MetainfoError> {
        Ok(encode(self.info()?)?)
    }

    /// Computes the SHA-1 info-hash of the `info` dictionary.
    ///
    /// # Examples
    ///
    /// ```
    /// use benco::metainfo::Metainfo;
    ///
    /// let data = b"d4:infod3:cow3:moo4:spam4:eggsee";
    /// let metainfo = Metainfo::from_bytes(data).unwrap();
    /// assert_eq!(
    ///     metainfo.info_hash().unwrap().to_hex(),
    ///     "d2c751227762e1a96a62baa71868456a3260f3db",
    /// );
    /// ```
    pub fn info_hash(&self) -> Result<InfoHash, MetainfoError> {
        let mut hasher = Sha1::new();
        hasher.update(self.info_bytes()?);
        Ok(InfoHash::new(hasher.finalize().into()))
    }
}
