// nfcvault/src/protocol/response.rs

use crate::constants::STATUS_WORD_LEN;
use crate::protocol::parser::ensure_len;
use crate::types::StatusWord;
use crate::Result;

/// Response APDU: `[payload] SW1 SW2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduResponse {
    pub payload: Vec<u8>,
    pub status: StatusWord,
}

impl ApduResponse {
    pub fn new(payload: Vec<u8>, status: StatusWord) -> Self {
        Self { payload, status }
    }

    pub fn status_only(status: StatusWord) -> Self {
        Self::new(Vec::new(), status)
    }

    /// Split raw response bytes into payload and trailing status word.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        ensure_len(raw, STATUS_WORD_LEN)?;
        let split = raw.len() - STATUS_WORD_LEN;
        Ok(Self {
            payload: raw[..split].to_vec(),
            status: StatusWord::from_bytes(raw[split], raw[split + 1]),
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.payload.len() + STATUS_WORD_LEN);
        out.extend_from_slice(&self.payload);
        out.extend_from_slice(&self.status.to_bytes());
        out
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
