//! Performance benchmarks for Boyer-Moore search and the ByteString
//! operations built on it
//!
//! This benchmark suite evaluates:
//! - Single-match search throughput across haystack sizes
//! - Needle length sensitivity (longer needles skip further)
//! - Full-scan replace and split
//! - Comparison against a naive windowed scan

use binstr_core::{ByteMatcher, ByteString};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Random data - varied byte values
    pub fn random(size: usize) -> Vec<u8> {
        // Simple PRNG for reproducible random data
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            // Linear congruential generator
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data with line breaks
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog.\r\n";
        text.iter().copied().cycle().take(size).collect()
    }
}

const SIZES: [(&str, usize); 3] = [
    ("4KB", 4 * 1024),
    ("64KB", 64 * 1024),
    ("1MB", 1024 * 1024),
];

fn naive_find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for (size_name, size) in SIZES {
        // Long zero runs are rare in random data, so searches scan far.
        let haystack = test_data::random(size);
        for needle_len in [2usize, 8, 32] {
            let needle = vec![0u8; needle_len];
            let matcher = ByteMatcher::new(&needle);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("boyer_moore/{}", size_name), needle_len),
                &haystack,
                |b, haystack| {
                    b.iter(|| black_box(matcher.find(black_box(haystack))));
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("naive/{}", size_name), needle_len),
                &haystack,
                |b, haystack| {
                    b.iter(|| black_box(naive_find(black_box(haystack), &needle)));
                },
            );
        }
    }

    group.finish();
}

fn bench_replace_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_split");

    for (size_name, size) in SIZES {
        let text = ByteString::from(test_data::text_like(size));

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("replace", size_name), &text, |b, text| {
            b.iter(|| black_box(text.replace(b"\r\n", b"\n")));
        });
        group.bench_with_input(BenchmarkId::new("split", size_name), &text, |b, text| {
            b.iter(|| black_box(text.split(b"\r\n").unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find, bench_replace_split);
criterion_main!(benches);
