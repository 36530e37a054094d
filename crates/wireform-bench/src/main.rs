//! Benchmark for wireform codecs.
//!
//! Measures encode and decode throughput for every strategy plus the
//! compressed binary envelope, using either a synthetic dataset or a
//! user-supplied JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::time::Instant;

use rand::Rng;

use wireform::codec::binary;
use wireform::{random_lowercase_string, random_string, Codec, Payload, Serializer, Value};

const DECODE_ITERS: u32 = 10;

// =============================================================================
// SYNTHETIC DATASET
// =============================================================================

fn synthesize_dataset(count: usize) -> Value {
    let mut rng = rand::thread_rng();
    let mut entries = Vec::with_capacity(count);

    for id in 0..count {
        let mut entry = BTreeMap::new();
        entry.insert("id".to_string(), Value::Int(id as i64));
        entry.insert(
            "name".to_string(),
            Value::Text(random_string(12).expect("length is nonzero")),
        );
        entry.insert("score".to_string(), Value::Float(rng.gen_range(0.0..100.0)));
        entry.insert("active".to_string(), Value::Bool(rng.gen_bool(0.5)));

        let tags = (0..rng.gen_range(0..4))
            .map(|_| Value::Text(random_lowercase_string(6).expect("length is nonzero")))
            .collect::<Vec<_>>();
        entry.insert("tags".to_string(), Value::Seq(tags));

        entries.push(Value::Map(entry));
    }

    let mut doc = BTreeMap::new();
    doc.insert("count".to_string(), Value::Int(count as i64));
    doc.insert("entries".to_string(), Value::Seq(entries));
    Value::Map(doc)
}

fn entry_count(value: &Value) -> usize {
    match value {
        Value::Map(map) => match map.get("entries") {
            Some(Value::Seq(entries)) => entries.len(),
            _ => 0,
        },
        _ => 0,
    }
}

// =============================================================================
// BENCHMARK
// =============================================================================

fn bench_codec(codec: Codec, dataset: &Value) -> Payload {
    let serializer = Serializer::new(codec);

    let encode_start = Instant::now();
    let payload = serializer.serialize(dataset).expect("Failed to serialize");
    let encode_time = encode_start.elapsed();

    println!("\n=== {} ===", serializer);
    println!("Encoded: {} bytes in {:?}", payload.len(), encode_time);
    println!(
        "  Throughput: {:.2} MB/s",
        (payload.len() as f64 / 1_000_000.0) / encode_time.as_secs_f64()
    );

    // Warmup
    for _ in 0..3 {
        let _ = serializer.deserialize(&payload).expect("Failed to deserialize");
    }

    let decode_start = Instant::now();
    let mut decoded = None;
    for _ in 0..DECODE_ITERS {
        decoded = Some(serializer.deserialize(&payload).expect("Failed to deserialize"));
    }
    let decode_time = decode_start.elapsed() / DECODE_ITERS;
    let decoded = decoded.expect("at least one decode iteration");

    println!(
        "Decoded in {:?} (avg of {} iterations)",
        decode_time, DECODE_ITERS
    );
    println!(
        "  Throughput: {:.2} MB/s",
        (payload.len() as f64 / 1_000_000.0) / decode_time.as_secs_f64()
    );
    assert_eq!(entry_count(&decoded), entry_count(dataset));

    payload
}

fn main() {
    let arg = std::env::args().nth(1).unwrap_or_else(|| "10000".to_string());

    // A numeric argument sizes the synthetic dataset; anything else is
    // read as a JSON file.
    let (dataset, source) = match arg.parse::<usize>() {
        Ok(count) => {
            let synth_start = Instant::now();
            let dataset = synthesize_dataset(count);
            println!("Generated {} entries in {:?}", count, synth_start.elapsed());
            (dataset, format!("{} synthetic entries", count))
        }
        Err(_) => {
            let load_start = Instant::now();
            let text = fs::read_to_string(&arg).expect("Failed to read input file");
            let dataset = Serializer::new(Codec::Json)
                .deserialize(&Payload::Text(text))
                .expect("Failed to parse input JSON");
            println!("Loaded {} in {:?}", arg, load_start.elapsed());
            (dataset, arg)
        }
    };

    let json_payload = bench_codec(Codec::Json, &dataset);
    let yaml_payload = bench_codec(Codec::Yaml, &dataset);
    let binary_payload = bench_codec(Codec::Binary, &dataset);

    // Benchmark the compressed binary envelope
    let compress_start = Instant::now();
    let compressed = binary::encode_compressed(&dataset, 3).expect("Failed to compress");
    let compress_time = compress_start.elapsed();

    println!("\n=== BinaryCodec (zstd level 3) ===");
    println!("Encoded: {} bytes in {:?}", compressed.len(), compress_time);
    println!(
        "  Compression ratio: {:.1}x",
        binary_payload.len() as f64 / compressed.len() as f64
    );

    for _ in 0..3 {
        let _ = binary::decode(&compressed).expect("Failed to decode compressed");
    }

    let decode_start = Instant::now();
    for _ in 0..DECODE_ITERS {
        let decoded = binary::decode(&compressed).expect("Failed to decode compressed");
        assert_eq!(entry_count(&decoded), entry_count(&dataset));
    }
    let decode_time = decode_start.elapsed() / DECODE_ITERS;

    println!(
        "Decoded in {:?} (avg of {} iterations)",
        decode_time, DECODE_ITERS
    );
    println!(
        "  Throughput: {:.2} MB/s (uncompressed equivalent)",
        (binary_payload.len() as f64 / 1_000_000.0) / decode_time.as_secs_f64()
    );

    // Summary
    println!("\n=== Summary ===");
    println!("Dataset: {}", source);
    println!(
        "JSON:   {} bytes ({:.1} MB)",
        json_payload.len(),
        json_payload.len() as f64 / 1_000_000.0
    );
    println!(
        "YAML:   {} bytes ({:.1} MB)",
        yaml_payload.len(),
        yaml_payload.len() as f64 / 1_000_000.0
    );
    println!(
        "Binary: {} bytes ({:.1} MB)",
        binary_payload.len(),
        binary_payload.len() as f64 / 1_000_000.0
    );
    println!(
        "Binary compressed: {} bytes ({:.1} MB)",
        compressed.len(),
        compressed.len() as f64 / 1_000_000.0
    );
    println!(
        "Binary vs JSON: {:.1}% (uncompressed), {:.1}% (compressed)",
        100.0 * binary_payload.len() as f64 / json_payload.len() as f64,
        100.0 * compressed.len() as f64 / json_payload.len() as f64
    );
}
