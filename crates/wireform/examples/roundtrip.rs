//! Round-trips one document through every codec strategy.

use std::collections::BTreeMap;

use wireform::{Codec, Payload, Serializer, Value};

fn sample_document() -> Value {
    let mut nested = BTreeMap::new();
    nested.insert("city".to_string(), Value::from("Reykjavik"));
    nested.insert(
        "coords".to_string(),
        Value::from(vec![Value::from(64.1466), Value::from(-21.9426)]),
    );

    let mut doc = BTreeMap::new();
    doc.insert("name".to_string(), Value::from("test"));
    doc.insert(
        "numbers".to_string(),
        Value::from(vec![Value::from(1i64), Value::from(2i64), Value::from(3i64)]),
    );
    doc.insert("nested".to_string(), Value::Map(nested));
    Value::Map(doc)
}

fn describe(payload: &Payload) -> String {
    match payload {
        Payload::Text(text) => text.clone(),
        Payload::Bytes(bytes) => format!("{} bytes, sha256 {}", bytes.len(), payload.digest()),
    }
}

fn main() {
    let document = sample_document();

    for codec in [Codec::Json, Codec::Yaml, Codec::Binary] {
        let serializer = Serializer::new(codec);
        println!("\n=== {} ===", serializer);

        let payload = serializer.serialize(&document).expect("Failed to serialize");
        println!("{}", describe(&payload));

        let decoded = serializer.deserialize(&payload).expect("Failed to deserialize");
        println!("Round-trip matches: {}", decoded == document);
    }
}
