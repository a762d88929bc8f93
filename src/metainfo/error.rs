use thiserror::Error;

use crate::bencode::BencodeError;

/// Errors that can occur when handling a metainfo document.
#[derive(Debug, Error)]
pub enum MetainfoError {
    /// The document contains invalid bencode.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    /// The top-level value is not a dictionary.
    #[error("metainfo root is not a dictionary")]
    RootNotDictionary,

    /// The document has no `info` entry.
    #[error("missing info dictionary")]
    MissingInfo,

    /// The `info` entry is present but is not a dictionary.
    #[error("info entry is not a dictionary")]
    InfoNotDictionary,

    /// An info-hash had the wrong length or was not valid hex.
    #[error("invalid info hash")]
    InvalidInfoHash,
}
