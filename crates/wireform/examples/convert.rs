//! Converts a JSON document to another codec from the command line.

use std::fs;
use std::process;

use wireform::{Codec, Payload, Serializer};

fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: convert <input.json> [json|yaml|binary] [output]");
        process::exit(2);
    });
    let codec = match std::env::args().nth(2).as_deref() {
        None | Some("yaml") => Codec::Yaml,
        Some("json") => Codec::Json,
        Some("binary") => Codec::Binary,
        Some(other) => {
            eprintln!("Unknown codec: {} (expected json, yaml, or binary)", other);
            process::exit(2);
        }
    };

    let text = fs::read_to_string(&path).expect("Failed to read input");
    let value = Serializer::new(Codec::Json)
        .deserialize(&Payload::Text(text))
        .expect("Failed to parse JSON");

    let payload = Serializer::new(codec)
        .serialize(&value)
        .expect("Failed to serialize");

    match std::env::args().nth(3) {
        Some(out) => {
            match &payload {
                Payload::Text(text) => fs::write(&out, text),
                Payload::Bytes(bytes) => fs::write(&out, bytes),
            }
            .expect("Failed to write output");
            println!("Wrote {} ({} bytes)", out, payload.len());
        }
        None => match &payload {
            Payload::Text(text) => println!("{}", text),
            Payload::Bytes(_) => {
                println!("{} bytes (sha256 {})", payload.len(), payload.digest());
            }
        },
    }
}
