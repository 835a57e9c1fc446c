// nfcvault/src/constants.rs
//! Protocol constants for the Vault applet and the ISO-DEP link below it.

/// Addressable size of the Vault buffer in bytes.
pub const VAULT_CAPACITY: usize = 2048;

/// Largest buffer a session or emulator accepts. GET LENGTH reports the
/// stored length in two bytes, so it tops out at 0xFFFF.
pub const MAX_CAPACITY: usize = u16::MAX as usize;

/// Default application identifier of the Vault applet.
pub const VAULT_AID: [u8; 6] = [0xF0, 0x01, 0x02, 0x03, 0x04, 0x05];

/// Default maximum payload per APDU exchange. Bounded by the link's
/// frame-waiting-time budget, not by the buffer.
pub const DEFAULT_MAX_CHUNK_LEN: usize = 32;

/// Largest payload a short APDU can carry with an exact Le.
pub const MAX_SHORT_CHUNK_LEN: usize = 255;

/// CLA for ISO interindustry commands (SELECT, READ, WRITE).
pub const CLA_ISO: u8 = 0x00;
/// CLA for the proprietary GET LENGTH command.
pub const CLA_PROPRIETARY: u8 = 0x80;

/// SELECT (by DF name) instruction.
pub const INS_SELECT: u8 = 0xA4;
/// Vault WRITE instruction.
pub const INS_WRITE: u8 = 0xD0;
/// READ BINARY instruction.
pub const INS_READ: u8 = 0xB0;
/// GET DATA LENGTH instruction.
pub const INS_GET_LENGTH: u8 = 0xCA;

/// SELECT P1: select by DF name (AID).
pub const SELECT_BY_NAME: u8 = 0x04;

/// Length of an APDU status word trailer.
pub const STATUS_WORD_LEN: usize = 2;

/// Length of a leaked ISO-DEP prefix: PCB byte plus CID byte.
pub const ARTIFACT_LEN: usize = 2;

/// ISO-DEP I-block PCB with the CID-following bit set, as leaked by
/// reader-to-reader loopback links.
pub const PCB_I_BLOCK_WITH_CID: u8 = 0x0A;
