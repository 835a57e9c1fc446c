// nfcvault/src/transport/mod.rs

pub mod emulator;
pub mod mock;
pub mod retry;
pub mod traits;

pub use emulator::VaultEmulator;
pub use mock::MockTransport;
pub use retry::{RetryPolicy, Retrying};
pub use traits::Transport;
