//! Wire-format constants and security limits.
//!
//! Every length read from untrusted input is checked against these caps
//! before any allocation sized by it.

/// Magic bytes for an uncompressed binary frame.
pub const MAGIC_UNCOMPRESSED: &[u8; 4] = b"WFB1";

/// Magic bytes for a zstd-compressed binary frame.
pub const MAGIC_COMPRESSED: &[u8; 5] = b"WFB1Z";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;

/// Oldest binary format version this crate can decode.
pub const MIN_FORMAT_VERSION: u8 = 1;

/// Maximum size of a binary payload accepted for decoding (64 MiB).
pub const MAX_PAYLOAD_SIZE: usize = 64 * 1024 * 1024;

/// Maximum UTF-8 byte length of a text value or map/record key (16 MiB).
pub const MAX_STRING_LEN: usize = 16 * 1024 * 1024;

/// Maximum length of a bytes value (32 MiB).
pub const MAX_BYTES_LEN: usize = 32 * 1024 * 1024;

/// Maximum byte length of a record name.
pub const MAX_RECORD_NAME_LEN: usize = 256;

/// Maximum number of elements in a sequence.
pub const MAX_SEQ_LEN: usize = 1_048_576;

/// Maximum number of entries in a map.
pub const MAX_MAP_LEN: usize = 1_048_576;

/// Maximum number of fields in a record.
pub const MAX_RECORD_FIELDS: usize = 65_536;

/// Maximum nesting depth for value trees, all codecs.
///
/// Kept below serde_json's 128-level recursion limit so every tree this
/// crate encodes can also be decoded.
pub const MAX_DEPTH: usize = 100;

/// Maximum encoded length of a varint (10 bytes covers u64).
pub const MAX_VARINT_BYTES: usize = 10;
