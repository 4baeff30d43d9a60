use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::time::Duration;
use wwlib::{blast_decompress, format2_decode, format40_decode, format80_decode, format80_encode};

fn generate_test_data(size: usize, pattern: &str) -> Vec<u8> {
    match pattern {
        "sprite" => {
            // Sprite-like data: long transparent (zero) spans with
            // short pixel runs
            (0..size)
                .map(|i| {
                    if (i / 37) % 3 == 0 {
                        ((i * 13 + 7) % 256) as u8
                    } else {
                        0
                    }
                })
                .collect()
        }
        "binary" => (0..size).map(|i| ((i * 17 + 11) % 256) as u8).collect(),
        "repetitive" => {
            let pattern = b"ABCDEFGHIJ";
            let mut data = Vec::with_capacity(size);
            while data.len() < size {
                data.extend_from_slice(pattern);
            }
            data.truncate(size);
            data
        }
        _ => panic!("Unknown pattern: {}", pattern),
    }
}

/// Build a raw-literal Blast stream for `data` (inverted LSB-first bit
/// packing, ended with the length-519 sentinel).
fn generate_blast_stream(data: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0u8, 4u8];
    let mut bit_count = 0usize;
    let mut push_stored = |bytes: &mut Vec<u8>, stored: u32| {
        let index = 2 + bit_count / 8;
        if index == bytes.len() {
            bytes.push(0);
        }
        bytes[index] |= ((stored & 1) as u8) << (bit_count % 8);
        bit_count += 1;
    };
    for &byte in data {
        push_stored(&mut bytes, 1); // control bit 0: literal
        for i in 0..8 {
            push_stored(&mut bytes, ((byte as u32 >> i) & 1) ^ 1);
        }
    }
    // Length symbol 15 (code 1111111) plus 8 all-ones extra bits is 519
    push_stored(&mut bytes, 0);
    for _ in 0..15 {
        push_stored(&mut bytes, 0);
    }
    bytes
}

/// Build a Format2 stream for `data`.
fn generate_format2_stream(data: &[u8]) -> Vec<u8> {
    let mut output = Vec::new();
    let mut i = 0;
    while i < data.len() {
        if data[i] == 0 {
            let mut run = 0usize;
            while i + run < data.len() && data[i + run] == 0 && run < 255 {
                run += 1;
            }
            output.push(0);
            output.push(run as u8);
            i += run;
        } else {
            output.push(data[i]);
            i += 1;
        }
    }
    output
}

/// Build a Format40 diff of plain XOR runs between two frames.
fn generate_format40_stream(prev: &[u8], next: &[u8]) -> Vec<u8> {
    let delta: Vec<u8> = prev.iter().zip(next).map(|(p, n)| p ^ n).collect();
    let mut output = Vec::new();
    for chunk in delta.chunks(0x7F) {
        output.push(chunk.len() as u8);
        output.extend_from_slice(chunk);
    }
    output.extend_from_slice(&[0x80, 0x00, 0x00]);
    output
}

fn blast_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("blast_throughput");
    group.measurement_time(Duration::from_secs(5));

    for size in [1024, 10240, 102400].iter() {
        for pattern in ["binary", "repetitive"].iter() {
            let data = generate_test_data(*size, pattern);
            let stream = generate_blast_stream(&data);

            let benchmark_id = BenchmarkId::from_parameter(format!("{}/{}", size, pattern));
            group.throughput(Throughput::Bytes(*size as u64));
            group.bench_with_input(benchmark_id, &stream, |b, stream| {
                b.iter(|| blast_decompress(black_box(stream)).expect("decompression failed"));
            });
        }
    }

    group.finish();
}

fn rle_family_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("rle_family_throughput");
    group.measurement_time(Duration::from_secs(5));

    for size in [1024, 10240, 102400].iter() {
        let sprite = generate_test_data(*size, "sprite");

        let stream = generate_format2_stream(&sprite);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("format2", size), &stream, |b, stream| {
            let mut dest = vec![0u8; sprite.len()];
            b.iter(|| format2_decode(black_box(stream), &mut dest).expect("decode failed"));
        });

        let mut next = sprite.clone();
        for (i, byte) in next.iter_mut().enumerate() {
            if i % 11 == 0 {
                *byte ^= 0x5A;
            }
        }
        let stream = generate_format40_stream(&sprite, &next);
        group.bench_with_input(BenchmarkId::new("format40", size), &stream, |b, stream| {
            b.iter_batched(
                || sprite.clone(),
                |mut dest| {
                    format40_decode(black_box(stream), &mut dest).expect("decode failed");
                    dest
                },
                criterion::BatchSize::SmallInput,
            );
        });

        let stream = format80_encode(&sprite);
        group.bench_with_input(BenchmarkId::new("format80", size), &stream, |b, stream| {
            let mut dest = vec![0u8; sprite.len()];
            b.iter(|| format80_decode(black_box(stream), &mut dest).expect("decode failed"));
        });
    }

    group.finish();
}

fn format80_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("format80_encoding");
    group.measurement_time(Duration::from_secs(3));

    for size in [1024, 102400].iter() {
        let data = generate_test_data(*size, "binary");
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| format80_encode(black_box(data)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    blast_throughput,
    rle_family_throughput,
    format80_encoding
);
criterion_main!(benches);
