//! Error types for wireform encoding, decoding, and the utility modules.

use std::path::PathBuf;

use thiserror::Error;

/// Stable diagnostic codes grouped by failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Wrong payload kind handed to a decoder
    WrongPayload,
    /// E002: Malformed text input
    MalformedText,
    /// E003: Value not representable by the codec
    Unrepresentable,
    /// E004: Corrupt or truncated binary input
    CorruptBinary,
    /// E005: Path not found or not accessible
    NotFound,
    /// E006: Invalid argument
    InvalidArgument,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::WrongPayload => "E001",
            ErrorCode::MalformedText => "E002",
            ErrorCode::Unrepresentable => "E003",
            ErrorCode::CorruptBinary => "E004",
            ErrorCode::NotFound => "E005",
            ErrorCode::InvalidArgument => "E006",
        }
    }
}

/// Error during decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    // === E001: Wrong payload kind ===
    #[error("[E001] {codec} expects a {expected} payload, found {found}")]
    UnexpectedPayload {
        codec: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    // === E002: Malformed text ===
    #[error("[E002] {format} parse error: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    // === E004: Corrupt binary ===
    #[error("[E004] invalid magic bytes: expected WFB1 or WFB1Z, found {found:?}")]
    InvalidMagic { found: [u8; 4] },

    #[error("[E004] unsupported format version: {version}")]
    UnsupportedVersion { version: u8 },

    #[error("[E004] unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("[E004] varint exceeds maximum length (10 bytes)")]
    VarintTooLong,

    #[error("[E004] varint overflow (value exceeds u64)")]
    VarintOverflow,

    #[error("[E004] {field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("[E004] invalid value kind: {kind}")]
    InvalidValueKind { kind: u8 },

    #[error("[E004] invalid bool value: {value} (expected 0x00 or 0x01)")]
    InvalidBool { value: u8 },

    #[error("[E004] invalid UTF-8 in {field}")]
    InvalidUtf8 { field: &'static str },

    #[error("[E004] float value is NaN")]
    FloatIsNan,

    #[error("[E004] duplicate map key: {key:?}")]
    DuplicateKey { key: String },

    #[error("[E004] nesting depth exceeds maximum {max}")]
    DepthLimitExceeded { max: usize },

    #[error("[E004] {trailing} trailing bytes after value")]
    TrailingBytes { trailing: usize },

    // === Compression errors ===
    #[error("[E004] zstd decompression failed: {0}")]
    DecompressionFailed(String),

    #[error("[E004] decompressed size {actual} doesn't match declared {declared}")]
    UncompressedSizeMismatch { declared: usize, actual: usize },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::UnexpectedPayload { .. } => ErrorCode::WrongPayload,
            DecodeError::Parse { .. } => ErrorCode::MalformedText,
            _ => ErrorCode::CorruptBinary,
        }
    }
}

/// Error during encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("[E003] {codec} cannot represent {kind} values")]
    Unsupported {
        codec: &'static str,
        kind: &'static str,
    },

    #[error("[E003] {codec} cannot represent non-finite float {value}")]
    NonFiniteFloat { codec: &'static str, value: f64 },

    #[error("[E003] float value is NaN")]
    FloatIsNan,

    #[error("[E003] {field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("[E003] nesting depth exceeds maximum {max}")]
    DepthLimitExceeded { max: usize },

    #[error("[E003] {codec} encoder error: {message}")]
    EmitFailed {
        codec: &'static str,
        message: String,
    },

    #[error("[E003] zstd compression failed: {0}")]
    CompressionFailed(String),
}

impl EncodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::Unrepresentable
    }
}

/// Error while inspecting file permissions.
#[derive(Debug, Error)]
pub enum PermissionsError {
    // === E005: Path not found / not accessible ===
    #[error("[E005] path not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("[E005] cannot inspect {}: {source}", path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PermissionsError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::NotFound
    }
}

/// Error constructing a random string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RandomError {
    // === E006: Invalid argument ===
    #[error("[E006] length must be greater than zero")]
    ZeroLength,

    #[error("[E006] at least one character class must be enabled")]
    EmptyAlphabet,
}

impl RandomError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidArgument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::WrongPayload.code(), "E001");
        assert_eq!(ErrorCode::MalformedText.code(), "E002");
        assert_eq!(ErrorCode::Unrepresentable.code(), "E003");
        assert_eq!(ErrorCode::CorruptBinary.code(), "E004");
        assert_eq!(ErrorCode::NotFound.code(), "E005");
        assert_eq!(ErrorCode::InvalidArgument.code(), "E006");
    }

    #[test]
    fn test_decode_error_classification() {
        let err = DecodeError::UnexpectedPayload {
            codec: "JsonCodec",
            expected: "text",
            found: "bytes",
        };
        assert_eq!(err.code(), ErrorCode::WrongPayload);

        let err = DecodeError::Parse {
            format: "JSON",
            message: "eof".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::MalformedText);

        let err = DecodeError::InvalidMagic { found: *b"XXXX" };
        assert_eq!(err.code(), ErrorCode::CorruptBinary);

        let err = DecodeError::VarintTooLong;
        assert_eq!(err.code(), ErrorCode::CorruptBinary);
    }

    #[test]
    fn test_messages_carry_code_prefix() {
        let err = DecodeError::UnexpectedPayload {
            codec: "BinaryCodec",
            expected: "bytes",
            found: "text",
        };
        assert!(err.to_string().starts_with("[E001]"));

        let err = EncodeError::Unsupported {
            codec: "JsonCodec",
            kind: "bytes",
        };
        assert!(err.to_string().starts_with("[E003]"));

        let err = RandomError::ZeroLength;
        assert!(err.to_string().starts_with("[E006]"));
    }
}
