//! Shared helpers for the gostec integration tests

use std::sync::Once;

use gostec::prelude::*;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once; filter with `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Engine with a deterministic random source
pub fn seeded_engine(key_size: KeySize, seed: u64) -> GostEcdsa<ChaCha20Rng> {
    GostEcdsa::with_rng(key_size, ChaCha20Rng::seed_from_u64(seed))
}

/// `len` random bytes
pub fn random_hash<R: RngCore>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut hash = vec![0u8; len];
    rng.fill_bytes(&mut hash);
    hash
}

/// Little-endian bytes of a big-endian hex fixture
pub fn le_bytes(hex_be: &str) -> Vec<u8> {
    let mut bytes = hex::decode(hex_be).expect("valid hex fixture");
    bytes.reverse();
    bytes
}

/// Random source that replays a fixed byte sequence, cycling when exhausted
pub struct ReplayRng {
    bytes: Vec<u8>,
    pos: usize,
}

impl ReplayRng {
    pub fn new(bytes: Vec<u8>) -> Self {
        assert!(!bytes.is_empty());
        Self { bytes, pos: 0 }
    }
}

impl RngCore for ReplayRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest {
            *byte = self.bytes[self.pos % self.bytes.len()];
            self.pos += 1;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ReplayRng {}
