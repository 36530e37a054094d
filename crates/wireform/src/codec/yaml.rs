//! YAML codec.
//!
//! Encodes the same value domain as the JSON codec, plus ±infinity,
//! which YAML spells `.inf`. Decoding resolves only the plain scalar
//! kinds, sequences, and string-keyed mappings; tagged nodes fail with
//! a parse error instead of constructing anything.

use crate::codec::check_text_tree;
use crate::error::{DecodeError, EncodeError};
use crate::model::Value;

const NAME: &str = "YamlCodec";

/// Encodes a value as a single YAML document.
pub fn encode(value: &Value) -> Result<String, EncodeError> {
    check_text_tree(value, NAME, true)?;

    serde_yaml::to_string(value).map_err(|e| EncodeError::EmitFailed {
        codec: NAME,
        message: e.to_string(),
    })
}

/// Decodes a single YAML document into a value.
pub fn decode(text: &str) -> Result<Value, DecodeError> {
    serde_yaml::from_str(text).map_err(|e| DecodeError::Parse {
        format: "YAML",
        message: e.to_string(),
    })
}
