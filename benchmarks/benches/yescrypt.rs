// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use redoubt_yescrypt::{Cost, Params, Settings, derive_into, encode_setting, hash};

fn benchmark_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("yescrypt_derive");
    group.sample_size(10);

    // libxcrypt counts 1..=5: 1 MiB to 16 MiB, the last one with prehash
    for count in 1..=5u8 {
        let cost = Cost::new(count).expect("Failed to create Cost");
        let params =
            Params::from_log_n(cost.log_n(), cost.r() as usize).expect("Failed to create Params");

        group.throughput(Throughput::Bytes(params.memory_bytes() as u64));
        group.bench_with_input(
            format!("N=2^{} r={}", cost.log_n(), cost.r()),
            &params,
            |b, params| {
                let mut key = [0u8; 32];

                b.iter(|| {
                    derive_into(
                        black_box(b"benchmark-password"),
                        black_box(b"benchmark-salt"),
                        params,
                        black_box(&mut key),
                    )
                    .expect("derive_into failed");
                });
            },
        );
    }
    group.finish();
}

fn benchmark_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("yescrypt_hash");
    group.sample_size(10);

    let cost = Cost::DEFAULT;
    let field = encode_setting(cost.log_n(), cost.r()).expect("Failed to encode_setting(..)");
    let settings = Settings::new(cost.log_n(), cost.r(), b"0123456789abcdef")
        .expect("Failed to create Settings");
    let setting = settings.encode();

    group.bench_function(String::from_utf8_lossy(&field), |b| {
        b.iter(|| {
            hash(black_box(b"benchmark-password"), black_box(setting.as_bytes()))
                .expect("hash failed");
        });
    });
    group.finish();
}

criterion_group!(benches, benchmark_derive, benchmark_hash);
criterion_main!(benches);
