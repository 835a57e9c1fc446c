// nfcvault/src/protocol/commands/mod.rs

pub mod length;
pub mod read;
pub mod select;
pub mod write;

pub use length::encode_get_length;
pub use read::encode_read;
pub use select::encode_select;
pub use write::encode_write;

use crate::protocol::Apdu;
use crate::types::{Aid, Operation};
use crate::Result;

/// High-level Vault command. Each variant maps to exactly one APDU shape;
/// the per-command encoder lives in `protocol::commands::<name>.rs`.
///
/// READ carries its chunk length and GET LENGTH always encodes Le, so a
/// length-returning command without an expected-length trailer cannot be
/// built from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select { aid: Aid },
    Write { offset: u16, data: Vec<u8> },
    Read { offset: u16, len: u8 },
    GetLength,
}

impl Command {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Select { .. } => Operation::Select,
            Self::Write { .. } => Operation::Write,
            Self::Read { .. } => Operation::Read,
            Self::GetLength => Operation::GetLength,
        }
    }

    /// Buffer offset the command addresses (0 for offset-less commands).
    pub fn offset(&self) -> u16 {
        match self {
            Self::Write { offset, .. } | Self::Read { offset, .. } => *offset,
            Self::Select { .. } | Self::GetLength => 0,
        }
    }

    pub fn to_apdu(&self) -> Apdu {
        match self {
            Self::Select { aid } => encode_select(aid),
            Self::Write { offset, data } => encode_write(*offset, data),
            Self::Read { offset, len } => encode_read(*offset, *len),
            Self::GetLength => encode_get_length(),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        self.to_apdu().encode()
    }
}
