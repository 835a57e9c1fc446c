// nfcvault/src/protocol/apdu.rs

use crate::protocol::parser::ensure_len;
use crate::{Error, Result};

/// Short-form command APDU: `CLA INS P1 P2 [Lc data] [Le]`.
///
/// `le` is `Some(0)` for "return whatever is available" (256 in the
/// short encoding) and `None` when the trailer is absent. The two are not
/// interchangeable: a card answers a length-returning command without Le
/// with an empty payload even on 0x9000.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apdu {
    pub cla: u8,
    pub ins: u8,
    pub p1: u8,
    pub p2: u8,
    pub data: Vec<u8>,
    pub le: Option<u8>,
}

impl Apdu {
    pub fn new(cla: u8, ins: u8, p1: u8, p2: u8) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data: Vec::new(),
            le: None,
        }
    }

    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    pub fn with_le(mut self, le: u8) -> Self {
        self.le = Some(le);
        self
    }

    /// P1/P2 read as one big-endian u16 (the Vault offset).
    pub fn p1p2(&self) -> u16 {
        u16::from_be_bytes([self.p1, self.p2])
    }

    /// Le as a byte count, with the short-APDU convention 0 => 256.
    pub fn expected_len(&self) -> Option<usize> {
        self.le.map(|le| if le == 0 { 256 } else { le as usize })
    }

    /// Encode into wire bytes. Data longer than 255 bytes cannot be
    /// carried by a short APDU.
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.data.len() > crate::constants::MAX_SHORT_CHUNK_LEN {
            return Err(Error::InvalidLength {
                expected: crate::constants::MAX_SHORT_CHUNK_LEN,
                actual: self.data.len(),
            });
        }
        let mut out = Vec::with_capacity(4 + 1 + self.data.len() + 1);
        out.extend_from_slice(&[self.cla, self.ins, self.p1, self.p2]);
        if !self.data.is_empty() {
            out.push(self.data.len() as u8);
            out.extend_from_slice(&self.data);
        }
        if let Some(le) = self.le {
            out.push(le);
        }
        Ok(out)
    }

    /// Parse a short-form command APDU (ISO 7816-4 cases 1 to 4).
    pub fn parse(raw: &[u8]) -> Result<Self> {
        ensure_len(raw, 4)?;
        let mut apdu = Apdu::new(raw[0], raw[1], raw[2], raw[3]);
        let body = &raw[4..];
        match body.len() {
            0 => {}
            1 => apdu.le = Some(body[0]),
            _ => {
                let lc = body[0] as usize;
                if lc == 0 {
                    return Err(Error::FrameFormat("extended APDU not supported".into()));
                }
                match body.len() - 1 {
                    n if n == lc => apdu.data = body[1..].to_vec(),
                    n if n == lc + 1 => {
                        apdu.data = body[1..1 + lc].to_vec();
                        apdu.le = Some(body[1 + lc]);
                    }
                    n => {
                        return Err(Error::InvalidLength {
                            expected: lc,
                            actual: n,
                        });
                    }
                }
            }
        }
        Ok(apdu)
    }
}
