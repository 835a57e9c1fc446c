// nfcvault/src/transport/emulator.rs

//! In-memory Vault applet.
//!
//! `VaultEmulator` answers APDUs the way the firmware-resident Vault
//! buffer does, so sessions can be driven end to end without a reader.
//! On a [`LinkKind::ReaderLoopback`] link it prefixes every response with
//! an I-block PCB and CID, reproducing what a PN532-to-PN532 pairing hands
//! back to the host.

use crate::constants::{
    CLA_ISO, CLA_PROPRIETARY, INS_GET_LENGTH, INS_READ, INS_SELECT, INS_WRITE, MAX_CAPACITY,
    PCB_I_BLOCK_WITH_CID, SELECT_BY_NAME, VAULT_CAPACITY,
};
use crate::protocol::{Apdu, ApduResponse};
use crate::transport::traits::Transport;
use crate::types::{Aid, LinkKind, StatusWord};
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct VaultEmulator {
    buffer: Vec<u8>,
    /// High-water mark of written data, reported by GET LENGTH.
    data_len: usize,
    selected: bool,
    aid: Aid,
    link: LinkKind,
    cid: u8,
    exchanges: usize,
    /// Exchanges still allowed before one injected failure.
    fail_after: Option<usize>,
}

impl Default for VaultEmulator {
    fn default() -> Self {
        Self::new()
    }
}

impl VaultEmulator {
    /// Zero-filled 2048-byte Vault on a direct link.
    pub fn new() -> Self {
        Self::with_capacity(VAULT_CAPACITY)
    }

    /// Zero-filled buffer of `capacity` bytes, clamped to `MAX_CAPACITY`
    /// so the stored length always fits GET LENGTH's two bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: vec![0; capacity.min(MAX_CAPACITY)],
            data_len: 0,
            selected: false,
            aid: Aid::default(),
            link: LinkKind::Direct,
            cid: 0x01,
            exchanges: 0,
            fail_after: None,
        }
    }

    /// Pre-load buffer contents; anything past capacity is dropped.
    pub fn with_contents(mut self, data: &[u8]) -> Self {
        let n = data.len().min(self.buffer.len());
        self.buffer[..n].copy_from_slice(&data[..n]);
        self.data_len = n;
        self
    }

    pub fn with_link(mut self, link: LinkKind) -> Self {
        self.link = link;
        self
    }

    pub fn with_aid(mut self, aid: Aid) -> Self {
        self.aid = aid;
        self
    }

    /// Let `n` more exchanges succeed, then fail the next one with
    /// `Error::NoResponse`.
    pub fn fail_after(&mut self, n: usize) {
        self.fail_after = Some(n);
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn data_len(&self) -> usize {
        self.data_len
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Exchanges answered so far (injected failures excluded).
    pub fn exchanges(&self) -> usize {
        self.exchanges
    }

    /// Process one C-APDU and return the R-APDU, without any link
    /// framing.
    pub fn handle_apdu(&mut self, raw: &[u8]) -> ApduResponse {
        let apdu = match Apdu::parse(raw) {
            Ok(apdu) => apdu,
            Err(_) => return ApduResponse::status_only(StatusWord::WRONG_LENGTH),
        };

        if apdu.ins == INS_SELECT {
            return self.select(&apdu);
        }
        if !self.selected {
            return ApduResponse::status_only(StatusWord::CONDITIONS_NOT_SATISFIED);
        }

        match (apdu.cla, apdu.ins) {
            (CLA_ISO, INS_WRITE) => self.write(&apdu),
            (CLA_ISO, INS_READ) => self.read(&apdu),
            (CLA_PROPRIETARY, INS_GET_LENGTH) => self.get_length(&apdu),
            (_, INS_WRITE | INS_READ | INS_GET_LENGTH) => {
                ApduResponse::status_only(StatusWord::CLA_NOT_SUPPORTED)
            }
            _ => ApduResponse::status_only(StatusWord::INS_NOT_SUPPORTED),
        }
    }

    fn select(&mut self, apdu: &Apdu) -> ApduResponse {
        if apdu.p1 == SELECT_BY_NAME && apdu.data == self.aid.as_bytes() {
            self.selected = true;
            ApduResponse::status_only(StatusWord::SUCCESS)
        } else {
            self.selected = false;
            ApduResponse::status_only(StatusWord::NOT_FOUND)
        }
    }

    fn write(&mut self, apdu: &Apdu) -> ApduResponse {
        if apdu.data.is_empty() {
            return ApduResponse::status_only(StatusWord::WRONG_LENGTH);
        }
        let offset = apdu.p1p2() as usize;
        let end = offset + apdu.data.len();
        if end > self.buffer.len() {
            return ApduResponse::status_only(StatusWord::NOT_FOUND);
        }
        self.buffer[offset..end].copy_from_slice(&apdu.data);
        self.data_len = self.data_len.max(end);
        ApduResponse::status_only(StatusWord::SUCCESS)
    }

    fn read(&self, apdu: &Apdu) -> ApduResponse {
        // Without Le the applet answers success with nothing in it.
        let Some(len) = apdu.expected_len() else {
            return ApduResponse::status_only(StatusWord::SUCCESS);
        };
        let offset = apdu.p1p2() as usize;
        let end = offset + len;
        if end > self.buffer.len() {
            return ApduResponse::status_only(StatusWord::NOT_FOUND);
        }
        ApduResponse::new(self.buffer[offset..end].to_vec(), StatusWord::SUCCESS)
    }

    fn get_length(&self, apdu: &Apdu) -> ApduResponse {
        if apdu.le.is_none() {
            return ApduResponse::status_only(StatusWord::SUCCESS);
        }
        // data_len <= buffer.len() <= MAX_CAPACITY
        let len = self.data_len as u16;
        ApduResponse::new(len.to_be_bytes().to_vec(), StatusWord::SUCCESS)
    }
}

impl Transport for VaultEmulator {
    fn exchange(&mut self, apdu: &[u8], _timeout_ms: u64) -> Result<Vec<u8>> {
        match self.fail_after {
            Some(0) => {
                self.fail_after = None;
                return Err(Error::NoResponse);
            }
            Some(ref mut n) => *n -= 1,
            None => {}
        }
        self.exchanges += 1;
        let response = self.handle_apdu(apdu).encode();
        if self.link.leaks_artifact() {
            let mut framed = Vec::with_capacity(response.len() + 2);
            framed.push(PCB_I_BLOCK_WITH_CID);
            framed.push(self.cid);
            framed.extend_from_slice(&response);
            return Ok(framed);
        }
        Ok(response)
    }

    fn link_kind(&self) -> LinkKind {
        self.link
    }

    fn reset(&mut self) -> Result<()> {
        // RF reset drops the selection; the buffer is non-volatile.
        self.selected = false;
        Ok(())
    }
}
