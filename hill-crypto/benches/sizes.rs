use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use fake::Fake;
use fake::faker::lorem::en::Words;
use hill_crypto::hill::HillCipher;
use hill_crypto::preset::alphabets::LATIN;

fn setup_cipher() -> HillCipher {
    let key = HillCipher::generate_key(4, &LATIN, 12345).expect("Failed to generate key matrix");
    HillCipher::try_with_padding(key, LATIN.clone(), 'X').expect("Failed to create Hill cipher")
}

fn make_string(len: usize) -> String {
    // Generate approximately len characters by repeating word sequences
    // This avoids allocating a single gigantic random string all at once
    let mut s = String::with_capacity(len);
    while s.len() < len {
        let words: Vec<String> = Words(10..20).fake();
        if !s.is_empty() { s.push(' '); }
        s.push_str(&words.join(" "));
        if s.len() > len {
            s.truncate(len);
        }
    }
    s
}

fn bench_sizes(c: &mut Criterion) {
    let cipher = setup_cipher();

    let sizes: [(usize, &str); 3] = [
        (1_000, "1k"),
        (100_000, "100k"),
        (1_000_000, "1m"),
    ];

    let mut group = c.benchmark_group("Hill Sizes Encrypt/Decrypt");

    for (len, label) in sizes {
        let data = make_string(len);
        // precompute ciphertext for decrypt bench to avoid measuring encrypt twice
        let ciphertext = cipher.encrypt(&data).expect("encrypt");

        group.bench_with_input(BenchmarkId::new("encrypt", label), &data, |b, d| {
            b.iter(|| {
                let _c = cipher.encrypt(black_box(d)).expect("encrypt");
            });
        });

        group.bench_with_input(BenchmarkId::new("decrypt", label), &ciphertext, |b, ctext| {
            b.iter(|| {
                let _p = cipher.decrypt(black_box(ctext)).expect("decrypt");
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sizes);
criterion_main!(benches);
