// nfcvault/src/session/mod.rs

mod builder;
mod cancel;
mod config;
mod handle;
pub mod operations;

pub use builder::SessionBuilder;
pub use cancel::CancelToken;
pub use config::SessionConfig;
pub use handle::{Selected, Unselected, VaultSession};
pub(crate) use handle::{check_capacity, check_status};
pub use operations::{Mismatch, TransferReport};
