//! Codec selection and the serializer facade.
//!
//! A [`Codec`] names one encoding strategy; a [`Serializer`] binds one
//! codec at construction and exposes the uniform
//! serialize/deserialize surface.

use std::fmt;

use crate::codec::{binary, json, yaml};
use crate::error::{DecodeError, EncodeError};
use crate::model::{Payload, Value};

/// The available encoding strategies.
///
/// Stateless and `Copy`: one codec value may serve any number of calls
/// from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    /// Strict JSON text.
    Json,
    /// YAML text.
    Yaml,
    /// Tag-length-value binary frames.
    Binary,
}

impl Codec {
    /// Returns the codec's display name.
    pub fn name(&self) -> &'static str {
        match self {
            Codec::Json => "JsonCodec",
            Codec::Yaml => "YamlCodec",
            Codec::Binary => "BinaryCodec",
        }
    }

    /// Encodes a value into this codec's payload kind.
    pub fn encode(&self, value: &Value) -> Result<Payload, EncodeError> {
        match self {
            Codec::Json => json::encode(value).map(Payload::Text),
            Codec::Yaml => yaml::encode(value).map(Payload::Text),
            Codec::Binary => binary::encode(value).map(Payload::Bytes),
        }
    }

    /// Decodes a payload previously produced by this codec.
    ///
    /// A payload of the wrong kind fails before any parsing happens.
    pub fn decode(&self, payload: &Payload) -> Result<Value, DecodeError> {
        match (self, payload) {
            (Codec::Json, Payload::Text(text)) => json::decode(text),
            (Codec::Yaml, Payload::Text(text)) => yaml::decode(text),
            (Codec::Binary, Payload::Bytes(bytes)) => binary::decode(bytes),
            (Codec::Json | Codec::Yaml, Payload::Bytes(_)) => {
                Err(DecodeError::UnexpectedPayload {
                    codec: self.name(),
                    expected: "text",
                    found: "bytes",
                })
            }
            (Codec::Binary, Payload::Text(_)) => Err(DecodeError::UnexpectedPayload {
                codec: self.name(),
                expected: "bytes",
                found: "text",
            }),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}()", self.name())
    }
}

/// Facade binding one codec for both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Serializer {
    codec: Codec,
}

impl Serializer {
    /// Creates a serializer using the given codec.
    pub fn new(codec: Codec) -> Serializer {
        Serializer { codec }
    }

    /// Returns the codec this serializer uses.
    pub fn codec(&self) -> Codec {
        self.codec
    }

    /// Encodes a value with the bound codec.
    pub fn serialize(&self, value: &Value) -> Result<Payload, EncodeError> {
        self.codec.encode(value)
    }

    /// Decodes a payload with the bound codec.
    pub fn deserialize(&self, payload: &Payload) -> Result<Value, DecodeError> {
        self.codec.decode(payload)
    }
}

impl fmt::Display for Serializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Serializer(strategy={})", self.codec.name())
    }
}
