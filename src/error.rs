//! Error types for compression and decompression.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HuffmanError>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// An input symbol has no code. The table is built from the same input,
    /// so this means the table and the text got out of sync.
    #[error("symbol {symbol:?} has no entry in the code table")]
    MissingCode { symbol: char },

    /// The payload is malformed or was truncated.
    #[error("corrupted container: {0}")]
    Decode(#[from] DecodeError),

    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The container bytes could not be (de)serialized.
    #[error("container format error: {0}")]
    Container(#[from] bincode::Error),

    /// The input file is not valid UTF-8 text.
    #[error("input is not valid UTF-8 text")]
    InvalidUtf8,
}

/// Ways a payload can fail to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The declared bit count does not fit in the packed bytes.
    #[error("declared {declared} bits but only {available} are available")]
    BitLengthOverflow { declared: u64, available: u64 },

    /// The stream ended in the middle of a code.
    #[error("bitstream ends with a partial code {bits:?}")]
    DanglingBits { bits: String },

    /// The accumulated bits are already longer than every code in the table.
    #[error("bit sequence {bits:?} does not match any code")]
    UnmatchedCode { bits: String },

    /// Bits were declared but there is no code table to read them with.
    #[error("{bit_len} bits declared with an empty code table")]
    BitsWithoutCodes { bit_len: u64 },

    #[error("symbol {symbol:?} has an empty code")]
    EmptyCode { symbol: char },

    #[error("code for symbol {symbol:?} contains characters other than '0' and '1'")]
    InvalidCodeDigit { symbol: char },

    #[error("code {code:?} is assigned to more than one symbol")]
    DuplicateCode { code: String },

    #[error("code {prefix:?} is a prefix of code {code:?}")]
    NotPrefixFree { prefix: String, code: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_convert_into_top_level() {
        let err: HuffmanError = DecodeError::DanglingBits { bits: "01".into() }.into();
        assert!(matches!(err, HuffmanError::Decode(DecodeError::DanglingBits { .. })));
        assert_eq!(
            err.to_string(),
            "corrupted container: bitstream ends with a partial code \"01\""
        );
    }

    #[test]
    fn io_errors_keep_their_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = HuffmanError::from(io);
        match err {
            HuffmanError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
