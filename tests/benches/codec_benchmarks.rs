//! # Account Identifier Codec Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | encode / decode one identifier | < 1µs |
//! | decode a transfer with two identifiers | < 1µs |
//! | parse a nickname | < 1µs |
//! | derive a key hash from a public key | < 100µs |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qc_18_account_identity::{NickId, UserId};
use qc_tests::fixtures::{sample_ids, transfer, TransferTx};
use shared_types::{Decodable, Encodable};

fn bench_user_id_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18-user-id-codec");

    for id in sample_ids() {
        let bytes = id.encode();
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(BenchmarkId::new("encode", id.id_name()), &id, |b, id| {
            b.iter(|| black_box(id.encode()))
        });
        group.bench_with_input(
            BenchmarkId::new("decode", id.id_name()),
            &bytes,
            |b, bytes| b.iter(|| black_box(UserId::decode(bytes))),
        );
    }

    group.finish();
}

fn bench_transfer_decode(c: &mut Criterion) {
    let ids = sample_ids();
    let bytes = transfer(ids[0].clone(), ids[3].clone()).encode();

    c.bench_function("qc-18-transfer-decode", |b| {
        b.iter(|| black_box(TransferTx::decode(black_box(&bytes))))
    });
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-18-parse");

    for input in ["1234567-89", "waykichain", "Null"] {
        group.bench_with_input(BenchmarkId::new("user_id", input), input, |b, input| {
            b.iter(|| black_box(UserId::parse(input)))
        });
    }
    group.bench_function("nickname_display", |b| {
        let nick = NickId::new(0x5A5A_5A5A_5A5A_5A5A);
        b.iter(|| black_box(nick.to_string()))
    });

    group.finish();
}

fn bench_pub_key_resolution(c: &mut Criterion) {
    let id = sample_ids()[2].clone();
    let Some(key) = id.as_pub_key().cloned() else {
        return;
    };

    c.bench_function("qc-18-pub-key-to-key-id", |b| {
        b.iter(|| black_box(key.key_id()))
    });
}

criterion_group!(
    benches,
    bench_user_id_codec,
    bench_transfer_decode,
    bench_parse,
    bench_pub_key_resolution
);
criterion_main!(benches);
