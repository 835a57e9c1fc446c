// nfcvault/src/prelude.rs

pub use crate::chunk::{Chunk, ChunkPlan};
pub use crate::link::FrameDisambiguator;
pub use crate::protocol::{Apdu, ApduResponse, Command};
pub use crate::session::{
    CancelToken, Mismatch, Selected, SessionBuilder, SessionConfig, TransferReport, Unselected,
    VaultSession,
};
pub use crate::transport::{RetryPolicy, Retrying, Transport, VaultEmulator};
pub use crate::{Aid, Error, LinkKind, Operation, Result, StatusWord};

#[cfg(feature = "async")]
pub use crate::nonblocking::{AsyncTransport, AsyncVaultSession};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, format_apdu, frame_waiting_time, ms, parse_hex};
