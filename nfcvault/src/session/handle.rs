// nfcvault/src/session/handle.rs

use std::marker::PhantomData;

use crate::link::FrameDisambiguator;
use crate::protocol::{ApduResponse, Command};
use crate::session::cancel::CancelToken;
use crate::session::config::SessionConfig;
use crate::transport::Transport;
use crate::types::{Operation, StatusWord};
use crate::{Error, Result};

/// Session before the Vault application has been selected.
pub struct Unselected;
/// Session with the Vault application selected.
pub struct Selected;

/// One connection to a Vault applet.
///
/// Buffer operations exist only on `VaultSession<_, Selected>`, reached by
/// [`VaultSession::select`]. Every operation takes `&mut self`, so a
/// session never has more than one exchange in flight.
pub struct VaultSession<T, State = Unselected> {
    transport: T,
    config: SessionConfig,
    disambiguator: FrameDisambiguator,
    cancel: CancelToken,
    _state: PhantomData<State>,
}

impl<T: Transport> VaultSession<T, Unselected> {
    /// Wrap a transport. The frame disambiguator is fixed here from the
    /// transport's declared link and `config.strip_artifact`.
    pub fn new(transport: T, config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let disambiguator = FrameDisambiguator::new(transport.link_kind(), config.strip_artifact);
        log::debug!(
            "vault session on {} link: max chunk {}B, timeout {}ms, prefix stripping {}",
            disambiguator.link(),
            config.max_chunk_len,
            config.exchange_timeout_ms,
            if disambiguator.is_active() { "on" } else { "off" }
        );
        Ok(Self {
            transport,
            config,
            disambiguator,
            cancel: CancelToken::new(),
            _state: PhantomData,
        })
    }

    /// Select the Vault application. Returns a session on which buffer
    /// operations are available.
    pub fn select(mut self) -> Result<VaultSession<T, Selected>> {
        let cmd = Command::Select {
            aid: self.config.aid.clone(),
        };
        let resp = self.exchange_chunk(&cmd, 0)?;
        check_status(Operation::Select, 0, 0, &resp)?;
        log::debug!("selected vault application {}", self.config.aid);
        Ok(self.transition())
    }
}

impl<T: Transport> VaultSession<T, Selected> {
    /// Send one command and return its parsed response without any status
    /// interpretation.
    pub fn execute(&mut self, cmd: &Command) -> Result<ApduResponse> {
        self.exchange_chunk(cmd, 0)
    }

    /// Reset the link. The card forgets its selection, so the session goes
    /// back to `Unselected`.
    pub fn reset(mut self) -> Result<VaultSession<T, Unselected>> {
        self.transport.reset()?;
        Ok(self.transition())
    }
}

impl<T: Transport, S> VaultSession<T, S> {
    pub(crate) fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn disambiguator(&self) -> &FrameDisambiguator {
        &self.disambiguator
    }

    /// Token observed at every chunk boundary. Clone it to cancel from
    /// another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    fn transition<N>(self) -> VaultSession<T, N> {
        VaultSession {
            transport: self.transport,
            config: self.config,
            disambiguator: self.disambiguator,
            cancel: self.cancel,
            _state: PhantomData,
        }
    }

    /// Fail with `Cancelled` if cancellation was requested. Called before
    /// each chunk.
    pub(crate) fn checkpoint(&self, operation: Operation, offset: u16) -> Result<()> {
        if self.cancel.is_cancelled() {
            log::debug!("{} cancelled before offset {}", operation, offset);
            return Err(Error::Cancelled { operation, offset });
        }
        Ok(())
    }

    /// Reject ranges past the configured capacity before touching the
    /// card.
    pub(crate) fn preflight(&self, operation: Operation, offset: u16, length: usize) -> Result<()> {
        check_capacity(&self.config, operation, offset, length)
    }

    /// One APDU exchange: encode, send, disambiguate, split off the status
    /// word. Transport failures come back wrapped with the operation,
    /// offset and the number of bytes `completed` before this chunk.
    pub(crate) fn exchange_chunk(&mut self, cmd: &Command, completed: usize) -> Result<ApduResponse> {
        let operation = cmd.operation();
        let offset = cmd.offset();
        let wrap = |source: Error| Error::Exchange {
            operation,
            offset,
            completed,
            source: Box::new(source),
        };

        let apdu = cmd.encode()?;
        if self.config.inter_exchange_delay_ms > 0 {
            std::thread::sleep(crate::utils::ms(self.config.inter_exchange_delay_ms));
        }

        #[cfg(feature = "diagnostics")]
        log::trace!(">> {}", crate::utils::format_apdu(&apdu));

        let raw = self
            .transport
            .exchange(&apdu, self.config.exchange_timeout_ms)
            .map_err(wrap)?;

        #[cfg(feature = "diagnostics")]
        log::trace!("<< {}", crate::utils::format_apdu(&raw));

        let body = self.disambiguator.disambiguate(&raw);
        ApduResponse::parse(body).map_err(wrap)
    }
}

pub(crate) fn check_capacity(
    config: &SessionConfig,
    operation: Operation,
    offset: u16,
    length: usize,
) -> Result<()> {
    if let Some(cap) = config.capacity {
        // a length that overflows usize is past any capacity
        let past_end = (offset as usize).checked_add(length).is_none_or(|end| end > cap);
        if past_end {
            log::warn!(
                "{} of {} bytes at offset {} exceeds capacity {}",
                operation,
                length,
                offset,
                cap
            );
            return Err(Error::OutOfBounds {
                operation,
                offset,
                length,
            });
        }
    }
    Ok(())
}

/// Map a response's status word onto the error taxonomy. 0x6A82 is a
/// boundary violation: terminal, never retried.
pub(crate) fn check_status(
    operation: Operation,
    offset: u16,
    length: usize,
    resp: &ApduResponse,
) -> Result<()> {
    match resp.status {
        StatusWord::SUCCESS => Ok(()),
        StatusWord::NOT_FOUND if operation != Operation::Select => {
            log::warn!(
                "{} rejected as out of bounds at offset {} ({} bytes)",
                operation,
                offset,
                length
            );
            Err(Error::OutOfBounds {
                operation,
                offset,
                length,
            })
        }
        status => {
            log::warn!("{} at offset {} failed with status {}", operation, offset, status);
            Err(Error::Status {
                operation,
                offset,
                status,
            })
        }
    }
}
