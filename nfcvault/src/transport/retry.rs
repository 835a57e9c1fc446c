// nfcvault/src/transport/retry.rs

//! Caller-side retry policy.
//!
//! The session never retries a failed chunk on its own. A caller that
//! wants retries wraps its transport in [`Retrying`], which repeats an
//! exchange only on transport-level failures (timeout, no response, a
//! reply too short to hold a status word). Card status words, including
//! the 0x6A82 boundary rejection, are returned to the session untouched.

use crate::constants::STATUS_WORD_LEN;
use crate::transport::traits::Transport;
use crate::types::LinkKind;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RetryPolicy {
    /// Total attempts per exchange, first try included. Minimum 1.
    pub max_attempts: u32,
    /// Pause between attempts, multiplied by the attempt number.
    pub backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        // one retry after a short pause, enough for a target that is still
        // looping back from TgSetData to TgGetData
        Self {
            max_attempts: 2,
            backoff_ms: 50,
        }
    }
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff_ms: 0,
        }
    }

    pub fn new(max_attempts: u32, backoff_ms: u64) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_ms,
        }
    }
}

/// Transport adapter that applies a [`RetryPolicy`] to every exchange.
#[derive(Debug)]
pub struct Retrying<T> {
    inner: T,
    policy: RetryPolicy,
}

impl<T: Transport> Retrying<T> {
    pub fn new(inner: T, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Transport> Transport for Retrying<T> {
    fn exchange(&mut self, apdu: &[u8], timeout_ms: u64) -> Result<Vec<u8>> {
        let attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;
        loop {
            let last = attempt >= attempts;
            match self.inner.exchange(apdu, timeout_ms) {
                Ok(resp) if resp.len() < STATUS_WORD_LEN && !last => {
                    log::debug!(
                        "short response ({} bytes) on attempt {}/{}, retrying",
                        resp.len(),
                        attempt,
                        attempts
                    );
                }
                Ok(resp) => return Ok(resp),
                Err(e) if e.is_transient() && !last => {
                    log::debug!("exchange attempt {}/{} failed: {}, retrying", attempt, attempts, e);
                }
                Err(e) => return Err(e),
            }
            if self.policy.backoff_ms > 0 {
                std::thread::sleep(crate::utils::ms(self.policy.backoff_ms * attempt as u64));
            }
            attempt += 1;
        }
    }

    fn link_kind(&self) -> LinkKind {
        self.inner.link_kind()
    }

    fn reset(&mut self) -> Result<()> {
        self.inner.reset()
    }
}
