// nfcvault/src/session/builder.rs

use crate::session::cancel::CancelToken;
use crate::session::config::SessionConfig;
use crate::session::handle::{Selected, Unselected, VaultSession};
use crate::transport::Transport;
use crate::{Error, Result};

/// Builder for [`VaultSession`].
///
/// ```no_run
/// use nfcvault::prelude::*;
///
/// let session = SessionBuilder::new()
///     .transport(VaultEmulator::new())
///     .max_chunk_len(64)
///     .open()
///     .unwrap();
/// # drop(session);
/// ```
pub struct SessionBuilder<T> {
    transport: Option<T>,
    config: SessionConfig,
    cancel: Option<CancelToken>,
}

impl<T: Transport> Default for SessionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> SessionBuilder<T> {
    /// Empty builder with the default configuration.
    pub fn new() -> Self {
        Self {
            transport: None,
            config: SessionConfig::default(),
            cancel: None,
        }
    }

    /// Link the session will talk over.
    pub fn transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_chunk_len(mut self, len: usize) -> Self {
        self.config = self.config.with_max_chunk_len(len);
        self
    }

    pub fn exchange_timeout_ms(mut self, ms: u64) -> Self {
        self.config = self.config.with_exchange_timeout_ms(ms);
        self
    }

    /// Opt in to stripping leaked PCB/CID prefixes. Only has an effect on
    /// transports that declare a leaking link.
    pub fn strip_artifact(mut self, enabled: bool) -> Self {
        self.config = self.config.with_strip_artifact(enabled);
        self
    }

    /// Share an existing cancellation token with the session.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Build an unselected session.
    pub fn build(self) -> Result<VaultSession<T, Unselected>> {
        let transport = self
            .transport
            .ok_or_else(|| Error::InvalidConfig("no transport provided".into()))?;
        let session = VaultSession::new(transport, self.config)?;
        Ok(match self.cancel {
            Some(token) => session.with_cancel_token(token),
            None => session,
        })
    }

    /// Build and select in one step.
    pub fn open(self) -> Result<VaultSession<T, Selected>> {
        self.build()?.select()
    }
}
