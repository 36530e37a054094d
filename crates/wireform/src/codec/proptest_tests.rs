//! Property-based tests for codec round-trips.

#![allow(clippy::expect_used, clippy::float_cmp)]

use proptest::prelude::*;

use crate::codec::{binary, json, yaml};
use crate::limits::{FORMAT_VERSION, MAGIC_COMPRESSED, MAGIC_UNCOMPRESSED};
use crate::model::{Record, Value};
use crate::serializer::{Codec, Serializer};

/// Strategy for values representable in the text codecs.
///
/// Text codecs reject `Bytes` and `Record` nodes, and JSON additionally
/// refuses non-finite floats, so this strategy stays inside the common
/// subset both JSON and YAML accept.
fn arb_text_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_filter("finite", |f| f.is_finite()).prop_map(Value::Float),
        ".*".prop_map(Value::Text),
    ];

    leaf.prop_recursive(
        3,  // depth
        64, // size
        10, // items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..10).prop_map(Value::Seq),
                prop::collection::btree_map(".*", inner, 0..10).prop_map(Value::Map),
            ]
        },
    )
}

/// Strategy for the full binary value domain.
///
/// Includes `Bytes` and `Record` nodes and infinite floats. NaN is filtered
/// out since NaN != NaN.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_filter("not NaN", |f| !f.is_nan()).prop_map(Value::Float),
        ".*".prop_map(Value::Text),
        prop::collection::vec(any::<u8>(), 0..100).prop_map(Value::Bytes),
    ];

    leaf.prop_recursive(
        3,  // depth
        64, // size
        10, // items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..10).prop_map(Value::Seq),
                prop::collection::btree_map(".*", inner.clone(), 0..10).prop_map(Value::Map),
                (
                    "[a-zA-Z_][a-zA-Z0-9_]{0,30}",
                    prop::collection::vec(("[a-zA-Z_][a-zA-Z0-9_]{0,15}", inner), 0..8),
                )
                    .prop_map(|(name, fields)| {
                        let mut record = Record::new(name);
                        for (key, value) in fields {
                            record = record.field(key, value);
                        }
                        Value::Record(record)
                    }),
            ]
        },
    )
}

proptest! {
    #[test]
    fn json_roundtrip(value in arb_text_value()) {
        let encoded = json::encode(&value).expect("encoding should succeed");
        let decoded = json::decode(&encoded).expect("decoding should succeed");
        prop_assert_eq!(value, decoded);
    }

    #[test]
    fn yaml_roundtrip(value in arb_text_value()) {
        let encoded = yaml::encode(&value).expect("encoding should succeed");
        let decoded = yaml::decode(&encoded).expect("decoding should succeed");
        prop_assert_eq!(value, decoded);
    }

    #[test]
    fn binary_roundtrip(value in arb_value()) {
        let encoded = binary::encode(&value).expect("encoding should succeed");
        let decoded = binary::decode(&encoded).expect("decoding should succeed");
        prop_assert_eq!(value, decoded);
    }

    #[test]
    fn binary_compressed_roundtrip(value in arb_value()) {
        let encoded = binary::encode_compressed(&value, 3).expect("encoding should succeed");
        prop_assert!(encoded.starts_with(MAGIC_COMPRESSED));
        let decoded = binary::decode(&encoded).expect("decoding should succeed");
        prop_assert_eq!(value, decoded);
    }

    #[test]
    fn int_roundtrips_through_every_strategy(i in any::<i64>()) {
        let value = Value::Int(i);
        for codec in [Codec::Json, Codec::Yaml, Codec::Binary] {
            let serializer = Serializer::new(codec);
            let payload = serializer.serialize(&value).expect("serialize should succeed");
            let decoded = serializer.deserialize(&payload).expect("deserialize should succeed");
            prop_assert_eq!(&decoded, &value);
        }
    }

    #[test]
    fn float_preserves_bits_in_binary(f in any::<f64>().prop_filter("not NaN", |f| !f.is_nan())) {
        let encoded = binary::encode(&Value::Float(f)).expect("encoding should succeed");
        let decoded = binary::decode(&encoded).expect("decoding should succeed");
        match decoded {
            Value::Float(decoded_f) => prop_assert_eq!(f.to_bits(), decoded_f.to_bits()),
            _ => prop_assert!(false, "expected Float variant"),
        }
    }

    #[test]
    fn string_roundtrips_in_text_codecs(s in ".*") {
        let value = Value::Text(s);

        let json_text = json::encode(&value).expect("JSON encoding should succeed");
        let from_json = json::decode(&json_text).expect("JSON decoding should succeed");
        prop_assert_eq!(&from_json, &value);

        let yaml_text = yaml::encode(&value).expect("YAML encoding should succeed");
        let from_yaml = yaml::decode(&yaml_text).expect("YAML decoding should succeed");
        prop_assert_eq!(&from_yaml, &value);
    }

    /// Corrupted/arbitrary bytes should not crash, only return errors.
    #[test]
    fn arbitrary_bytes_dont_crash(bytes in prop::collection::vec(any::<u8>(), 0..1000)) {
        // This should either succeed or return an error, never panic
        let _ = binary::decode(&bytes);
    }

    /// Every strict prefix of a valid frame must fail to decode.
    #[test]
    fn truncated_encoding_returns_error(value in arb_value()) {
        let encoded = binary::encode(&value).expect("encoding should succeed");
        for cut in 0..encoded.len() {
            prop_assert!(binary::decode(&encoded[..cut]).is_err());
        }
    }

    /// Mutated encodings should return errors or valid values, never panic.
    #[test]
    fn mutated_encoding_returns_error_or_value(
        value in arb_value(),
        mutation_idx in any::<usize>(),
        mutation_val in any::<u8>()
    ) {
        let mut encoded = binary::encode(&value).expect("encoding should succeed");
        let idx = mutation_idx % encoded.len();
        encoded[idx] = mutation_val;
        // Should either succeed or return error, never panic
        let _ = binary::decode(&encoded);
    }

    /// Large length headers shouldn't cause allocation panics.
    #[test]
    fn large_length_header_doesnt_panic(tag in 4u8..=8u8, len_bytes in any::<[u8; 5]>()) {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(MAGIC_UNCOMPRESSED);
        bytes.push(FORMAT_VERSION);
        bytes.push(tag);
        bytes.extend_from_slice(&len_bytes);
        bytes.extend_from_slice(&[0u8; 16]);
        // Should return an error for truncated data, not panic from OOM
        let _ = binary::decode(&bytes);
    }

    /// A compressed envelope wrapping arbitrary bytes must not panic.
    #[test]
    fn compressed_garbage_doesnt_panic(tail in prop::collection::vec(any::<u8>(), 0..200)) {
        let mut bytes = MAGIC_COMPRESSED.to_vec();
        bytes.extend_from_slice(&tail);
        let _ = binary::decode(&bytes);
    }
}
