use aes_gcm::{
    Aes256Gcm,
    aead::{Aead, AeadCore, KeyInit, OsRng as AesOsRng},
};
use chacha20poly1305::{
    ChaCha20Poly1305,
    aead::OsRng as ChaChaOsRng,
};
use criterion::{Bencher, Criterion, black_box, criterion_group, criterion_main};
use hill_crypto::hill::HillCipher;
use hill_crypto::preset::alphabets::LATIN;
use rand::{Rng, RngCore};

const DATA_SIZE_BYTES: usize = 1024;

fn generate_data(size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size];
    rand::rng().fill_bytes(&mut data);
    data
}

fn generate_text(size: usize) -> String {
    let mut rng = rand::rng();
    (0..size)
        .map(|_| (b'A' + rng.random_range(0..26u8)) as char)
        .collect()
}

fn setup_hill() -> (HillCipher, String) {
    let key = HillCipher::generate_key(4, &LATIN, 12345).expect("Failed to generate key matrix");
    let cipher = HillCipher::try_with_padding(key, LATIN.clone(), 'X')
        .expect("Failed to create Hill cipher");

    let data = generate_text(DATA_SIZE_BYTES);

    (cipher, data)
}

fn bench_hill_encrypt(b: &mut Bencher) {
    let (cipher, data) = setup_hill();

    b.iter(|| {
        let _ciphertext = cipher
            .encrypt(black_box(&data))
            .expect("Hill encryption failed");
    });
}

fn bench_hill_decrypt(b: &mut Bencher) {
    let (cipher, data) = setup_hill();

    let ciphertext = cipher
        .encrypt(&data)
        .expect("Hill encryption failed during setup");

    b.iter(|| {
        let _plaintext = cipher
            .decrypt(black_box(&ciphertext))
            .expect("Hill decryption failed");
    });
}

fn setup_aes() -> (Aes256Gcm, Vec<u8>) {
    let key_bytes = Aes256Gcm::generate_key(AesOsRng);
    let cipher = Aes256Gcm::new(&key_bytes);
    let data = generate_data(DATA_SIZE_BYTES);
    (cipher, data)
}

fn bench_aes_encrypt(b: &mut Bencher) {
    let (cipher, data) = setup_aes();

    b.iter(|| {
        let nonce = Aes256Gcm::generate_nonce(&mut AesOsRng);

        let _ciphertext = cipher
            .encrypt(black_box(&nonce), black_box(data.as_slice()))
            .expect("AES encryption failed");
    });
}

fn bench_aes_decrypt(b: &mut Bencher) {
    let (cipher, data) = setup_aes();

    let nonce = Aes256Gcm::generate_nonce(&mut AesOsRng);
    let ciphertext = cipher
        .encrypt(&nonce, data.as_slice())
        .expect("AES encryption failed during setup");

    b.iter(|| {
        let _plaintext = cipher
            .decrypt(black_box(&nonce), black_box(ciphertext.as_slice()))
            .expect("AES decryption failed");

        assert_eq!(_plaintext, data);
    });
}

// --- ChaCha20Poly1305 Benchmark Functions ---

fn setup_chacha() -> (ChaCha20Poly1305, Vec<u8>) {
    let key_bytes = ChaCha20Poly1305::generate_key(&mut ChaChaOsRng);
    let cipher = ChaCha20Poly1305::new(&key_bytes);
    let data = generate_data(DATA_SIZE_BYTES);
    (cipher, data)
}

fn bench_chacha_encrypt(b: &mut Bencher) {
    let (cipher, data) = setup_chacha();
    b.iter(|| {
        let nonce = ChaCha20Poly1305::generate_nonce(&mut ChaChaOsRng);
        let _ciphertext = cipher
            .encrypt(black_box(&nonce), black_box(data.as_slice()))
            .expect("ChaCha20Poly1305 encryption failed");
    });
}

fn bench_chacha_decrypt(b: &mut Bencher) {
    let (cipher, data) = setup_chacha();
    let nonce = ChaCha20Poly1305::generate_nonce(&mut ChaChaOsRng);
    let ciphertext = cipher
        .encrypt(&nonce, data.as_slice())
        .expect("ChaCha20Poly1305 encryption failed during setup");

    b.iter(|| {
        let _plaintext = cipher
            .decrypt(black_box(&nonce), black_box(ciphertext.as_slice()))
            .expect("ChaCha20Poly1305 decryption failed");
        assert_eq!(_plaintext, data);
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Crypto Comparison");

    group.bench_function("Hill Encrypt", bench_hill_encrypt);
    group.bench_function("Hill Decrypt", bench_hill_decrypt);

    group.bench_function("AES-256-GCM Encrypt", bench_aes_encrypt);
    group.bench_function("AES-256-GCM Decrypt", bench_aes_decrypt);

    group.bench_function("ChaCha20Poly1305 Encrypt", bench_chacha_encrypt);
    group.bench_function("ChaCha20Poly1305 Decrypt", bench_chacha_decrypt);

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
