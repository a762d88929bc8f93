use thiserror::Error;

/// Errors produced while decoding or encoding bencode data.
///
/// Decoding never returns a partial value: on error the whole attempt must
/// be discarded, and the decoder's cursor position is unspecified.
#[derive(Debug, Error)]
pub enum BencodeError {
    /// The first byte of a value was not `i`, `l`, `d`, or a digit.
    #[error("unknown type tag: {0:?}")]
    UnknownTag(char),

    /// An integer body broke the grammar: empty digits, a bare `-`,
    /// a leading zero, `-0`, or a non-digit byte.
    #[error("malformed integer: {0}")]
    MalformedInteger(String),

    /// An integer was syntactically valid but does not fit in an `i64`.
    #[error("integer overflow")]
    IntegerOverflow,

    /// A string length field was empty, contained a non-digit, overflowed,
    /// or was never followed by `:`.
    #[error("malformed string length")]
    MalformedStringLength,

    /// A string declared more bytes than remain in the input.
    #[error("string length exceeds remaining input")]
    InsufficientData,

    /// The input ended inside a list or dictionary, before the closing `e`.
    #[error("unterminated list or dictionary")]
    UnterminatedContainer,

    /// The input ended inside an integer, before the closing `e`.
    #[error("unterminated integer")]
    UnterminatedInteger,

    /// `decode_one` was called after the input was fully consumed.
    #[error("input exhausted")]
    ExhaustedStream,

    /// Nesting exceeded the configured depth limit.
    #[error("nesting too deep")]
    NestingTooDeep,

    /// A string declared a length over the configured ceiling.
    #[error("string length {0} exceeds configured limit")]
    StringTooLong(usize),

    /// Extra bytes followed the value in a single-document decode.
    #[error("trailing data after value")]
    TrailingData,

    /// Writing encoded output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
