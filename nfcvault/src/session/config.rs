// nfcvault/src/session/config.rs

//! Per-connection session configuration.

use crate::constants::{DEFAULT_MAX_CHUNK_LEN, MAX_CAPACITY, VAULT_CAPACITY};
use crate::types::Aid;
use crate::utils::timing::{DEFAULT_EXCHANGE_TIMEOUT_MS, exchange_timeout_ms};
use crate::{Error, Result};

/// Settings fixed for the lifetime of a session.
///
/// `strip_artifact` lives here, and only here, so the decision to remove
/// leaked link prefixes is made once per connection rather than per call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Maximum payload per APDU exchange (1..=255). Sized from the link's
    /// frame-waiting-time budget.
    pub max_chunk_len: usize,
    /// Timeout for each individual exchange.
    pub exchange_timeout_ms: u64,
    /// Pause before each exchange. Emulated targets need ~20 ms to loop
    /// back from sending a response to waiting for the next command.
    pub inter_exchange_delay_ms: u64,
    /// Remove the leaked PCB/CID prefix on links that declare one.
    pub strip_artifact: bool,
    /// Known buffer capacity. When set, ranges past it are rejected before
    /// any exchange; `None` leaves enforcement entirely to the card.
    pub capacity: Option<usize>,
    pub aid: Aid,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_chunk_len: DEFAULT_MAX_CHUNK_LEN,
            exchange_timeout_ms: DEFAULT_EXCHANGE_TIMEOUT_MS,
            inter_exchange_delay_ms: 0,
            strip_artifact: false,
            capacity: Some(VAULT_CAPACITY),
            aid: Aid::default(),
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_chunk_len(mut self, n: usize) -> Self {
        self.max_chunk_len = n;
        self
    }

    pub fn with_exchange_timeout_ms(mut self, ms: u64) -> Self {
        self.exchange_timeout_ms = ms;
        self
    }

    /// Derive the exchange timeout from the card's FWI plus a reader-side
    /// margin.
    pub fn with_frame_waiting_integer(mut self, fwi: u8, margin_ms: u64) -> Self {
        self.exchange_timeout_ms = exchange_timeout_ms(fwi, margin_ms);
        self
    }

    pub fn with_inter_exchange_delay_ms(mut self, ms: u64) -> Self {
        self.inter_exchange_delay_ms = ms;
        self
    }

    pub fn with_strip_artifact(mut self, strip: bool) -> Self {
        self.strip_artifact = strip;
        self
    }

    pub fn with_capacity(mut self, capacity: Option<usize>) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_aid(mut self, aid: Aid) -> Self {
        self.aid = aid;
        self
    }

    pub fn validate(&self) -> Result<()> {
        crate::chunk::validate_chunk_len(self.max_chunk_len)?;
        if self.exchange_timeout_ms == 0 {
            return Err(Error::InvalidConfig("exchange timeout must be non-zero".into()));
        }
        if let Some(cap) = self.capacity {
            if cap == 0 || cap > MAX_CAPACITY {
                return Err(Error::InvalidConfig(format!(
                    "capacity must be within 1..={}, got {}",
                    MAX_CAPACITY, cap
                )));
            }
        }
        Ok(())
    }
}
