use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sdict::Trie;

fn gen_keys(count: usize) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(4..=24);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z')).collect()
        })
        .collect()
}

fn bench_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("trie");
    let keys = gen_keys(10_000);
    let trie = Trie::from_keys(&keys, true).unwrap();

    group.bench_function("build_shared", |b| {
        b.iter(|| Trie::from_keys(black_box(&keys), true).unwrap())
    });

    group.bench_function("exact_match", |b| {
        b.iter(|| {
            for key in &keys[..1000] {
                black_box(trie.exact_match_search(key));
            }
        })
    });

    group.bench_function("common_prefix", |b| {
        b.iter(|| {
            for key in &keys[..1000] {
                black_box(trie.common_prefix_search(key, 0));
            }
        })
    });

    group.bench_function("predictive", |b| {
        b.iter(|| {
            for key in &keys[..200] {
                black_box(trie.predictive_search(&key[..2], 0));
            }
        })
    });

    group.bench_function("decode_key", |b| {
        b.iter(|| {
            for id in 0..1000 {
                black_box(trie.decode_key(id));
            }
        })
    });
}

criterion_group!(benches, bench_trie);
criterion_main!(benches);
