//! Binary frame encoding/decoding.
//!
//! A frame is 4 magic bytes, one version byte, then a single
//! tag-dispatched value tree. A compressed frame carries its own 5-byte
//! magic and wraps the complete uncompressed frame in zstd.

use std::collections::BTreeMap;
use std::io::Read;

use crate::codec::primitives::{Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::limits::{
    FORMAT_VERSION, MAGIC_COMPRESSED, MAGIC_UNCOMPRESSED, MAX_BYTES_LEN, MAX_DEPTH, MAX_MAP_LEN,
    MAX_PAYLOAD_SIZE, MAX_RECORD_FIELDS, MAX_RECORD_NAME_LEN, MAX_SEQ_LEN, MAX_STRING_LEN,
    MIN_FORMAT_VERSION,
};
use crate::model::{Record, Value, ValueKind};

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a value from binary data.
///
/// Handles both compressed (WFB1Z) and uncompressed (WFB1) frames and
/// requires the input to be consumed exactly.
pub fn decode(input: &[u8]) -> Result<Value, DecodeError> {
    if input.len() < 4 {
        return Err(DecodeError::UnexpectedEof { context: "magic" });
    }

    // Detect compression
    if input.len() >= 5 && &input[0..5] == MAGIC_COMPRESSED {
        let decompressed = decompress_zstd(&input[5..])?;
        decode_frame(&decompressed)
    } else if &input[0..4] == MAGIC_UNCOMPRESSED {
        if input.len() > MAX_PAYLOAD_SIZE {
            return Err(DecodeError::LengthExceedsLimit {
                field: "payload",
                len: input.len(),
                max: MAX_PAYLOAD_SIZE,
            });
        }
        decode_frame(input)
    } else {
        let mut found = [0u8; 4];
        found.copy_from_slice(&input[0..4]);
        Err(DecodeError::InvalidMagic { found })
    }
}

/// Decodes one complete frame: magic, version, value tree, nothing after.
fn decode_frame(input: &[u8]) -> Result<Value, DecodeError> {
    let mut reader = Reader::new(input);

    // The inner frame of a compressed envelope has not been checked yet.
    let magic_bytes = reader.read_bytes(4, "magic")?;
    if magic_bytes != &MAGIC_UNCOMPRESSED[..] {
        // SAFETY: read_bytes guarantees exactly 4 bytes, try_into always succeeds
        let found: [u8; 4] = magic_bytes.try_into().unwrap();
        return Err(DecodeError::InvalidMagic { found });
    }

    let version = reader.read_byte("version")?;
    if version < MIN_FORMAT_VERSION || version > FORMAT_VERSION {
        return Err(DecodeError::UnsupportedVersion { version });
    }

    let value = decode_tree(&mut reader, 0)?;

    if !reader.is_empty() {
        return Err(DecodeError::TrailingBytes {
            trailing: reader.remaining_len(),
        });
    }

    Ok(value)
}

fn decode_tree(reader: &mut Reader<'_>, depth: usize) -> Result<Value, DecodeError> {
    if depth > MAX_DEPTH {
        return Err(DecodeError::DepthLimitExceeded { max: MAX_DEPTH });
    }

    let tag = reader.read_byte("value tag")?;
    let kind = ValueKind::from_u8(tag).ok_or(DecodeError::InvalidValueKind { kind: tag })?;

    match kind {
        ValueKind::Null => Ok(Value::Null),
        ValueKind::Bool => decode_bool(reader),
        ValueKind::Int => Ok(Value::Int(reader.read_signed_varint("int")?)),
        ValueKind::Float => Ok(Value::Float(reader.read_f64("float")?)),
        ValueKind::Text => Ok(Value::Text(reader.read_string(MAX_STRING_LEN, "text")?)),
        ValueKind::Bytes => Ok(Value::Bytes(
            reader.read_bytes_prefixed(MAX_BYTES_LEN, "bytes")?,
        )),
        ValueKind::Seq => decode_seq(reader, depth),
        ValueKind::Map => decode_map(reader, depth),
        ValueKind::Record => decode_record(reader, depth),
    }
}

fn decode_bool(reader: &mut Reader<'_>) -> Result<Value, DecodeError> {
    let byte = reader.read_byte("bool")?;
    match byte {
        0x00 => Ok(Value::Bool(false)),
        0x01 => Ok(Value::Bool(true)),
        _ => Err(DecodeError::InvalidBool { value: byte }),
    }
}

fn decode_seq(reader: &mut Reader<'_>, depth: usize) -> Result<Value, DecodeError> {
    let count = reader.read_varint("seq.len")? as usize;
    if count > MAX_SEQ_LEN {
        return Err(DecodeError::LengthExceedsLimit {
            field: "seq",
            len: count,
            max: MAX_SEQ_LEN,
        });
    }

    // Every element needs at least a tag byte, so a truthful count can't
    // exceed the remaining input. Clamping caps the allocation a forged
    // count can force.
    let mut items = Vec::with_capacity(count.min(reader.remaining_len()));
    for _ in 0..count {
        items.push(decode_tree(reader, depth + 1)?);
    }
    Ok(Value::Seq(items))
}

fn decode_map(reader: &mut Reader<'_>, depth: usize) -> Result<Value, DecodeError> {
    let count = reader.read_varint("map.len")? as usize;
    if count > MAX_MAP_LEN {
        return Err(DecodeError::LengthExceedsLimit {
            field: "map",
            len: count,
            max: MAX_MAP_LEN,
        });
    }

    let mut entries = BTreeMap::new();
    for _ in 0..count {
        let key = reader.read_string(MAX_STRING_LEN, "map.key")?;
        if entries.contains_key(&key) {
            return Err(DecodeError::DuplicateKey { key });
        }
        let value = decode_tree(reader, depth + 1)?;
        entries.insert(key, value);
    }
    Ok(Value::Map(entries))
}

fn decode_record(reader: &mut Reader<'_>, depth: usize) -> Result<Value, DecodeError> {
    let name = reader.read_string(MAX_RECORD_NAME_LEN, "record.name")?;

    let count = reader.read_varint("record.fields")? as usize;
    if count > MAX_RECORD_FIELDS {
        return Err(DecodeError::LengthExceedsLimit {
            field: "record.fields",
            len: count,
            max: MAX_RECORD_FIELDS,
        });
    }

    let mut fields = Vec::with_capacity(count.min(reader.remaining_len()));
    for _ in 0..count {
        let field = reader.read_string(MAX_STRING_LEN, "record.field")?;
        let value = decode_tree(reader, depth + 1)?;
        fields.push((field, value));
    }
    Ok(Value::Record(Record { name, fields }))
}

fn decompress_zstd(compressed: &[u8]) -> Result<Vec<u8>, DecodeError> {
    // Read uncompressed size
    let mut reader = Reader::new(compressed);
    let declared_size = reader.read_varint("uncompressed_size")? as usize;

    if declared_size > MAX_PAYLOAD_SIZE {
        return Err(DecodeError::LengthExceedsLimit {
            field: "uncompressed_size",
            len: declared_size,
            max: MAX_PAYLOAD_SIZE,
        });
    }

    let compressed_data = reader.remaining();

    let decoder = zstd::Decoder::new(compressed_data)
        .map_err(|e| DecodeError::DecompressionFailed(e.to_string()))?;

    // Cap the read so an oversized stream fails the size check below
    // instead of allocating past the declared size.
    let mut decompressed = Vec::with_capacity(declared_size);
    decoder
        .take(declared_size as u64 + 1)
        .read_to_end(&mut decompressed)
        .map_err(|e| DecodeError::DecompressionFailed(e.to_string()))?;

    if decompressed.len() != declared_size {
        return Err(DecodeError::UncompressedSizeMismatch {
            declared: declared_size,
            actual: decompressed.len(),
        });
    }

    Ok(decompressed)
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a value to an uncompressed binary frame.
pub fn encode(value: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut writer = Writer::with_capacity(64);
    writer.write_bytes(MAGIC_UNCOMPRESSED);
    writer.write_byte(FORMAT_VERSION);
    encode_tree(&mut writer, value, 0)?;
    Ok(writer.into_bytes())
}

/// Encodes a value and wraps the complete frame in a zstd envelope.
///
/// The output carries the WFB1Z magic and the uncompressed size, so
/// [`decode`] accepts it directly.
pub fn encode_compressed(value: &Value, level: i32) -> Result<Vec<u8>, EncodeError> {
    let uncompressed = encode(value)?;

    let compressed = zstd::encode_all(uncompressed.as_slice(), level)
        .map_err(|e| EncodeError::CompressionFailed(e.to_string()))?;

    let mut writer = Writer::with_capacity(5 + 10 + compressed.len());
    writer.write_bytes(MAGIC_COMPRESSED);
    writer.write_varint(uncompressed.len() as u64);
    writer.write_bytes(&compressed);

    Ok(writer.into_bytes())
}

fn encode_tree(writer: &mut Writer, value: &Value, depth: usize) -> Result<(), EncodeError> {
    if depth > MAX_DEPTH {
        return Err(EncodeError::DepthLimitExceeded { max: MAX_DEPTH });
    }

    match value {
        Value::Null => writer.write_byte(ValueKind::Null as u8),
        Value::Bool(v) => {
            writer.write_byte(ValueKind::Bool as u8);
            writer.write_byte(if *v { 0x01 } else { 0x00 });
        }
        Value::Int(v) => {
            writer.write_byte(ValueKind::Int as u8);
            writer.write_signed_varint(*v);
        }
        Value::Float(v) => {
            if v.is_nan() {
                return Err(EncodeError::FloatIsNan);
            }
            writer.write_byte(ValueKind::Float as u8);
            writer.write_f64(*v);
        }
        Value::Text(s) => {
            check_len(s.len(), MAX_STRING_LEN, "text")?;
            writer.write_byte(ValueKind::Text as u8);
            writer.write_string(s);
        }
        Value::Bytes(b) => {
            check_len(b.len(), MAX_BYTES_LEN, "bytes")?;
            writer.write_byte(ValueKind::Bytes as u8);
            writer.write_bytes_prefixed(b);
        }
        Value::Seq(items) => {
            check_len(items.len(), MAX_SEQ_LEN, "seq")?;
            writer.write_byte(ValueKind::Seq as u8);
            writer.write_varint(items.len() as u64);
            for item in items {
                encode_tree(writer, item, depth + 1)?;
            }
        }
        Value::Map(entries) => {
            check_len(entries.len(), MAX_MAP_LEN, "map")?;
            writer.write_byte(ValueKind::Map as u8);
            writer.write_varint(entries.len() as u64);
            // BTreeMap iterates in key order, so output is canonical.
            for (key, item) in entries {
                check_len(key.len(), MAX_STRING_LEN, "map.key")?;
                writer.write_string(key);
                encode_tree(writer, item, depth + 1)?;
            }
        }
        Value::Record(record) => {
            check_len(record.name.len(), MAX_RECORD_NAME_LEN, "record.name")?;
            check_len(record.fields.len(), MAX_RECORD_FIELDS, "record.fields")?;
            writer.write_byte(ValueKind::Record as u8);
            writer.write_string(&record.name);
            writer.write_varint(record.fields.len() as u64);
            for (field, item) in &record.fields {
                check_len(field.len(), MAX_STRING_LEN, "record.field")?;
                writer.write_string(field);
                encode_tree(writer, item, depth + 1)?;
            }
        }
    }

    Ok(())
}

fn check_len(len: usize, max: usize, field: &'static str) -> Result<(), EncodeError> {
    if len > max {
        return Err(EncodeError::LengthExceedsLimit { field, len, max });
    }
    Ok(())
}
