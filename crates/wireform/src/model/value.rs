//! Value types shared by all codecs.
//!
//! A [`Value`] is the in-memory tree a codec encodes and a decoder
//! reconstructs. Sequences preserve element order; maps are key-sorted,
//! so encoded output is deterministic.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

/// Value kinds; the discriminant doubles as the binary wire tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueKind {
    Null = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    Text = 4,
    Bytes = 5,
    Seq = 6,
    Map = 7,
    Record = 8,
}

impl ValueKind {
    /// Creates a ValueKind from its wire representation.
    pub fn from_u8(v: u8) -> Option<ValueKind> {
        match v {
            0 => Some(ValueKind::Null),
            1 => Some(ValueKind::Bool),
            2 => Some(ValueKind::Int),
            3 => Some(ValueKind::Float),
            4 => Some(ValueKind::Text),
            5 => Some(ValueKind::Bytes),
            6 => Some(ValueKind::Seq),
            7 => Some(ValueKind::Map),
            8 => Some(ValueKind::Record),
            _ => None,
        }
    }

    /// Returns the lowercase kind name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::Bytes => "bytes",
            ValueKind::Seq => "seq",
            ValueKind::Map => "map",
            ValueKind::Record => "record",
        }
    }
}

/// A named record with ordered fields and structural equality.
///
/// Records are the binary codec's stand-in for application-defined
/// objects. Field order is part of the value: two records with the same
/// fields in a different order are not equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Record name, typically the application type it mirrors.
    pub name: String,
    /// Ordered (field name, value) pairs.
    pub fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record with the given name.
    pub fn new(name: impl Into<String>) -> Record {
        Record {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field, returning the record for chaining.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Record {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Returns the first field with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }
}

/// A value that can be handed to any codec.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value.
    Null,

    /// Boolean value.
    Bool(bool),

    /// 64-bit signed integer.
    Int(i64),

    /// 64-bit IEEE 754 float (NaN not allowed by any codec).
    Float(f64),

    /// UTF-8 text.
    Text(String),

    /// Opaque byte array. Binary codec only.
    Bytes(Vec<u8>),

    /// Ordered sequence of values.
    Seq(Vec<Value>),

    /// String-keyed mapping, iterated in key order.
    Map(BTreeMap<String, Value>),

    /// Named record with ordered fields. Binary codec only.
    Record(Record),
}

impl Value {
    /// Returns the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Bytes(_) => ValueKind::Bytes,
            Value::Seq(_) => ValueKind::Seq,
            Value::Map(_) => ValueKind::Map,
            Value::Record(_) => ValueKind::Record,
        }
    }
}

impl Default for Value {
    fn default() -> Value {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Value {
        Value::Bytes(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Value {
        Value::Seq(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(v: BTreeMap<String, Value>) -> Value {
        Value::Map(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Value {
        Value::Record(v)
    }
}

// Serde bridge used by the text codecs. Hand-written so that values
// serialize transparently (a map as a map, not as a tagged enum) and so
// that kinds with no faithful text form fail instead of degrading.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Text(v) => serializer.serialize_str(v),
            Value::Seq(items) => serializer.collect_seq(items),
            Value::Map(entries) => serializer.collect_map(entries),
            Value::Bytes(_) => Err(serde::ser::Error::custom(
                "bytes values have no text representation",
            )),
            Value::Record(_) => Err(serde::ser::Error::custom(
                "record values have no text representation",
            )),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a null, bool, integer, float, string, sequence, or string-keyed mapping")
    }

    fn visit_unit<E>(self) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Int(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E>
    where
        E: de::Error,
    {
        if v <= i64::MAX as u64 {
            Ok(Value::Int(v as i64))
        } else {
            Err(E::custom(format!(
                "integer {v} does not fit in a signed 64-bit value"
            )))
        }
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E>
    where
        E: de::Error,
    {
        // YAML resolves `.nan` to a float; NaN never enters the value
        // domain.
        if v.is_nan() {
            return Err(E::custom("NaN is not representable"));
        }
        Ok(Value::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Text(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Text(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Seq(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = BTreeMap::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            // Duplicate keys follow last-wins parser semantics.
            entries.insert(key, value);
        }
        Ok(Value::Map(entries))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}
