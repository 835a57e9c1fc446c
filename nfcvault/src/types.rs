// nfcvault/src/types.rs

use crate::Error;
use derive_more::{Display, From};
use std::convert::TryFrom;

/// APDU status word (SW1 SW2) - Newtype Pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
#[display(fmt = "{:#06x}", _0)]
pub struct StatusWord(u16);

impl StatusWord {
    /// Normal processing.
    pub const SUCCESS: Self = Self(0x9000);
    /// Wrong length (Lc/Le inconsistent with the command).
    pub const WRONG_LENGTH: Self = Self(0x6700);
    /// Conditions of use not satisfied (e.g. no application selected).
    pub const CONDITIONS_NOT_SATISFIED: Self = Self(0x6985);
    /// File or application not found. The Vault applet also returns this
    /// for any offset/length beyond its capacity.
    pub const NOT_FOUND: Self = Self(0x6A82);
    /// Instruction not supported.
    pub const INS_NOT_SUPPORTED: Self = Self(0x6D00);
    /// Class not supported.
    pub const CLA_NOT_SUPPORTED: Self = Self(0x6E00);

    pub const fn new(sw: u16) -> Self {
        Self(sw)
    }

    pub const fn from_bytes(sw1: u8, sw2: u8) -> Self {
        Self(((sw1 as u16) << 8) | sw2 as u16)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    pub fn is_success(&self) -> bool {
        *self == Self::SUCCESS
    }
}

/// Application identifier (5..=16 bytes per ISO 7816-5)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aid(Vec<u8>);

impl Aid {
    pub const MIN_LEN: usize = 5;
    pub const MAX_LEN: usize = 16;

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl Default for Aid {
    fn default() -> Self {
        Self(crate::constants::VAULT_AID.to_vec())
    }
}

impl TryFrom<&[u8]> for Aid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let nearest = bytes.len().clamp(Self::MIN_LEN, Self::MAX_LEN);
        if nearest != bytes.len() {
            return Err(Error::InvalidLength {
                expected: nearest,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }
}

impl std::fmt::Display for Aid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// High-level operation a request belongs to. Carried by every error so
/// failures report what was being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Operation {
    #[display(fmt = "SELECT")]
    Select,
    #[display(fmt = "WRITE")]
    Write,
    #[display(fmt = "READ")]
    Read,
    #[display(fmt = "GET LENGTH")]
    GetLength,
}

/// Reader-to-card pairing behind a transport.
///
/// Whether a response can carry a leaked PCB/CID prefix is a property of
/// the pairing, declared here once, never guessed from response bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkKind {
    /// Reader talking to a secure element (e.g. PN532 -> PN7160 in card
    /// emulation). No CID framing reaches the host.
    #[default]
    #[display(fmt = "direct")]
    Direct,
    /// Reader talking to another reader in target mode (PN532 <-> PN532).
    /// The initiator may pass the raw ISO-DEP I-block header through.
    #[display(fmt = "reader-loopback")]
    ReaderLoopback,
}

impl LinkKind {
    /// True when this pairing is known to leak the PCB/CID prefix.
    pub fn leaks_artifact(&self) -> bool {
        matches!(self, LinkKind::ReaderLoopback)
    }
}
