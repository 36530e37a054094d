//! Wireform: pluggable value serialization behind a single facade.
//!
//! This crate encodes and decodes dynamic value trees through interchangeable
//! codec strategies: human-readable JSON and YAML, and a compact binary wire
//! format with optional zstd compression.
//!
//! # Overview
//!
//! Wireform is built around three ideas:
//! - **One facade**: A [`Serializer`] holds a [`Codec`] strategy and exposes
//!   uniform `serialize`/`deserialize` operations
//! - **Typed payloads**: Text and binary output are distinct [`Payload`]
//!   variants, so feeding bytes to a text decoder is an error, not a guess
//! - **Binary-first interchange**: The binary codec is canonical, bounded, and
//!   safe on untrusted input
//!
//! # Quick Start
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use wireform::{Codec, Serializer, Value};
//!
//! // Build a document
//! let mut doc = BTreeMap::new();
//! doc.insert("name".to_string(), Value::from("test"));
//! doc.insert(
//!     "numbers".to_string(),
//!     Value::from(vec![Value::from(1i64), Value::from(2i64), Value::from(3i64)]),
//! );
//! let value = Value::Map(doc);
//!
//! // Encode with the JSON strategy
//! let serializer = Serializer::new(Codec::Json);
//! let payload = serializer.serialize(&value).unwrap();
//! assert_eq!(
//!     payload.as_text(),
//!     Some(r#"{"name": "test", "numbers": [1, 2, 3]}"#),
//! );
//!
//! // Decode back
//! let decoded = serializer.deserialize(&payload).unwrap();
//! assert_eq!(decoded, value);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types ([`Value`], [`Record`], [`Payload`])
//! - [`serializer`]: The [`Serializer`] facade and [`Codec`] strategies
//! - [`codec`]: Per-format encoders and decoders
//! - [`util`]: Random string generation and file permission inspection
//! - [`error`]: Error types with stable diagnostic codes
//! - [`limits`]: Security limits for decoding
//!
//! # Security
//!
//! The binary decoder is designed to safely handle untrusted input:
//! - All allocations are bounded by declared limits
//! - Varints are limited to prevent overflow
//! - Recursion depth is capped in both directions
//! - Invalid data is rejected with descriptive errors
//!
//! # Wire Format
//!
//! Binary payloads use a framed format with optional zstd compression:
//! - Uncompressed: `WFB1` magic + version + value tree
//! - Compressed: `WFB1Z` magic + uncompressed size + zstd data
//!
//! The decoder automatically detects and handles both formats.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod serializer;
pub mod util;

// Re-export commonly used types at crate root
pub use error::{DecodeError, EncodeError, ErrorCode, PermissionsError, RandomError};
pub use model::{Payload, Record, Value, ValueKind};
pub use serializer::{Codec, Serializer};
#[cfg(unix)]
pub use util::{check_permissions, Access, FilePermissions};
pub use util::{
    random_digits_string, random_letters_string, random_lowercase_string,
    random_punctuation_string, random_string, random_string_with, random_uppercase_string,
    Alphabet,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
