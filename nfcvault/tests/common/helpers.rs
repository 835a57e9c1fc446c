// helpers.rs — session setup shared by integration tests

use nfcvault::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use nfcvault::test_support::{selected_emulator_session, selected_session_over};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Default-configured session over a fresh emulator, 32-byte chunks.
pub fn default_session() -> VaultSession<VaultEmulator, Selected> {
    selected_emulator_session(32).unwrap()
}

/// `len` random bytes from a generator seeded with `seed`, so a failing
/// round can be replayed.
pub fn random_payload(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; len];
    rng.fill(&mut data[..]);
    data
}
