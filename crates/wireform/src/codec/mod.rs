//! Codec implementations.
//!
//! Each codec is a pair of free functions over the shared value model:
//! - [`json`]: strict structured text
//! - [`yaml`]: human-readable structured text
//! - [`binary`]: tag-length-value frames with an optional zstd envelope
//! - [`primitives`]: byte-level reader/writer shared by the binary codec

pub mod binary;
pub mod json;
pub mod primitives;
pub mod yaml;

#[cfg(test)]
mod proptest_tests;

use crate::error::EncodeError;
use crate::limits::MAX_DEPTH;
use crate::model::Value;

/// Walks a tree before text encoding and rejects anything the codec has
/// no faithful form for, so the serde backend never sees it.
pub(crate) fn check_text_tree(
    value: &Value,
    codec: &'static str,
    allow_infinite: bool,
) -> Result<(), EncodeError> {
    check_node(value, codec, allow_infinite, 0)
}

fn check_node(
    value: &Value,
    codec: &'static str,
    allow_infinite: bool,
    depth: usize,
) -> Result<(), EncodeError> {
    if depth > MAX_DEPTH {
        return Err(EncodeError::DepthLimitExceeded { max: MAX_DEPTH });
    }

    match value {
        Value::Float(v) => {
            if v.is_nan() {
                return Err(EncodeError::FloatIsNan);
            }
            if !allow_infinite && v.is_infinite() {
                return Err(EncodeError::NonFiniteFloat { codec, value: *v });
            }
        }
        Value::Bytes(_) | Value::Record(_) => {
            return Err(EncodeError::Unsupported {
                codec,
                kind: value.kind().name(),
            });
        }
        Value::Seq(items) => {
            for item in items {
                check_node(item, codec, allow_infinite, depth + 1)?;
            }
        }
        Value::Map(entries) => {
            for item in entries.values() {
                check_node(item, codec, allow_infinite, depth + 1)?;
            }
        }
        Value::Null | Value::Bool(_) | Value::Int(_) | Value::Text(_) => {}
    }

    Ok(())
}
