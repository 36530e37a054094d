//! JSON codec.
//!
//! Strict JSON with `", "` and `": "` separators, so output reads
//! `{"key": "value"}` rather than the packed `{"key":"value"}`.
//! Non-finite floats are rejected outright: the JSON grammar has no
//! token for them, and the silent `null` fallback would break decoding.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::codec::check_text_tree;
use crate::error::{DecodeError, EncodeError};
use crate::model::Value;

const NAME: &str = "JsonCodec";

/// Formatter emitting a space after element and key separators.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Encodes a value as a single JSON document.
pub fn encode(value: &Value) -> Result<String, EncodeError> {
    check_text_tree(value, NAME, false)?;

    let mut out = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, SpacedFormatter);
    value
        .serialize(&mut ser)
        .map_err(|e| EncodeError::EmitFailed {
            codec: NAME,
            message: e.to_string(),
        })?;

    // SAFETY: serde_json always emits valid UTF-8
    Ok(String::from_utf8(out).unwrap())
}

/// Decodes a single JSON document into a value.
pub fn decode(text: &str) -> Result<Value, DecodeError> {
    serde_json::from_str(text).map_err(|e| DecodeError::Parse {
        format: "JSON",
        message: e.to_string(),
    })
}
