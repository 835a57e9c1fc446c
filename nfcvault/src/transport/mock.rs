// nfcvault/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::types::{LinkKind, StatusWord};
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent APDUs and returns
/// queued raw responses in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: VecDeque<Vec<u8>>,
    pub link: LinkKind,
    /// Timeout passed with each exchange, in call order.
    pub timeouts: Vec<u64>,
    /// Testing hook: number of upcoming exchanges that fail with Timeout.
    pub exchange_failures: usize,
    pub resets: usize,
}

impl MockTransport {
    pub fn new(link: LinkKind) -> Self {
        Self {
            link,
            ..Self::default()
        }
    }

    /// Make the next `n` exchanges fail with `Error::Timeout`.
    pub fn set_exchange_failures(&mut self, n: usize) {
        self.exchange_failures = n;
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push_back(resp);
    }

    /// Queue a response consisting of `payload` followed by `status`.
    pub fn push_reply(&mut self, payload: &[u8], status: StatusWord) {
        let mut resp = payload.to_vec();
        resp.extend_from_slice(&status.to_bytes());
        self.responses.push_back(resp);
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn exchange(&mut self, apdu: &[u8], timeout_ms: u64) -> Result<Vec<u8>> {
        self.sent.push(apdu.to_vec());
        self.timeouts.push(timeout_ms);
        if self.exchange_failures > 0 {
            self.exchange_failures -= 1;
            return Err(Error::Timeout);
        }
        self.responses.pop_front().ok_or(Error::NoResponse)
    }

    fn link_kind(&self) -> LinkKind {
        self.link
    }

    fn reset(&mut self) -> Result<()> {
        // Keep queued responses so tests can seed replies before handing
        // the transport to a session.
        self.resets += 1;
        self.sent.clear();
        Ok(())
    }
}
