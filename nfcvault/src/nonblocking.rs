// nfcvault/src/nonblocking.rs

//! Async session surface (feature `async`).
//!
//! Mirrors [`VaultSession`](crate::session::VaultSession) over an
//! [`AsyncTransport`]. Each chunk exchange is bounded by
//! `tokio::time::timeout` with the session's exchange timeout, so a link
//! that never answers surfaces as `Error::Exchange { source: Timeout, .. }`
//! at the offset it stalled on.

use std::marker::PhantomData;

use async_trait::async_trait;

use crate::chunk::ChunkPlan;
use crate::link::FrameDisambiguator;
use crate::protocol::{ApduResponse, Command};
use crate::session::operations::{
    Mismatch, TransferReport, check_read_payload, compare, decode_length,
};
use crate::session::{
    CancelToken, Selected, SessionConfig, Unselected, check_capacity, check_status,
};
use crate::transport::{MockTransport, Transport, VaultEmulator};
use crate::types::{LinkKind, Operation};
use crate::utils::ms;
use crate::{Error, Result};

/// Async counterpart of [`Transport`].
#[async_trait]
pub trait AsyncTransport: Send {
    /// Send a C-APDU and return the raw R-APDU bytes.
    async fn exchange(&mut self, apdu: &[u8], timeout_ms: u64) -> Result<Vec<u8>>;

    /// Reader-to-card pairing behind this transport.
    fn link_kind(&self) -> LinkKind {
        LinkKind::Direct
    }
}

#[async_trait]
impl AsyncTransport for VaultEmulator {
    async fn exchange(&mut self, apdu: &[u8], timeout_ms: u64) -> Result<Vec<u8>> {
        Transport::exchange(self, apdu, timeout_ms)
    }

    fn link_kind(&self) -> LinkKind {
        Transport::link_kind(self)
    }
}

#[async_trait]
impl AsyncTransport for MockTransport {
    async fn exchange(&mut self, apdu: &[u8], timeout_ms: u64) -> Result<Vec<u8>> {
        Transport::exchange(self, apdu, timeout_ms)
    }

    fn link_kind(&self) -> LinkKind {
        Transport::link_kind(self)
    }
}

/// Async Vault session. Same type-state as the blocking session.
pub struct AsyncVaultSession<T, State = Unselected> {
    transport: T,
    config: SessionConfig,
    disambiguator: FrameDisambiguator,
    cancel: CancelToken,
    _state: PhantomData<State>,
}

impl<T: AsyncTransport> AsyncVaultSession<T, Unselected> {
    /// Wrap an async transport.
    pub fn new(transport: T, config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let disambiguator = FrameDisambiguator::new(transport.link_kind(), config.strip_artifact);
        log::debug!(
            "async vault session on {} link: max chunk {}B, timeout {}ms",
            disambiguator.link(),
            config.max_chunk_len,
            config.exchange_timeout_ms
        );
        Ok(Self {
            transport,
            config,
            disambiguator,
            cancel: CancelToken::new(),
            _state: PhantomData,
        })
    }

    /// Use `token` for cancellation instead of the session's own.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Select the Vault application.
    pub async fn select(mut self) -> Result<AsyncVaultSession<T, Selected>> {
        let cmd = Command::Select {
            aid: self.config.aid.clone(),
        };
        let resp = self.exchange_chunk(&cmd, 0).await?;
        check_status(Operation::Select, 0, 0, &resp)?;
        log::debug!("selected vault application {}", self.config.aid);
        Ok(AsyncVaultSession {
            transport: self.transport,
            config: self.config,
            disambiguator: self.disambiguator,
            cancel: self.cancel,
            _state: PhantomData,
        })
    }
}

impl<T: AsyncTransport> AsyncVaultSession<T, Selected> {
    /// Chunked write; see [`VaultSession::write`](crate::session::VaultSession::write).
    pub async fn write(&mut self, offset: u16, data: &[u8]) -> Result<TransferReport> {
        let op = Operation::Write;
        check_capacity(&self.config, op, offset, data.len())?;
        let plan = ChunkPlan::new(offset, data.len(), self.config.max_chunk_len)?;
        log::debug!("write {} bytes at offset {} in {} chunks", data.len(), offset, plan.len());

        let mut report = TransferReport::default();
        for chunk in &plan {
            self.checkpoint(op, chunk.offset)?;
            let cmd = Command::Write {
                offset: chunk.offset,
                data: data[chunk.range()].to_vec(),
            };
            let resp = self.exchange_chunk(&cmd, report.bytes).await?;
            check_status(op, chunk.offset, chunk.len, &resp)?;
            report.bytes += chunk.len;
            report.chunks += 1;
            log::debug!("wrote {}B at offset {}", chunk.len, chunk.offset);
        }

        log::debug!("write complete: {} bytes, {} chunks", report.bytes, report.chunks);
        Ok(report)
    }

    /// Chunked read; see [`VaultSession::read`](crate::session::VaultSession::read).
    pub async fn read(&mut self, offset: u16, len: usize) -> Result<Vec<u8>> {
        let op = Operation::Read;
        check_capacity(&self.config, op, offset, len)?;
        let plan = ChunkPlan::new(offset, len, self.config.max_chunk_len)?;
        log::debug!("read {} bytes at offset {} in {} chunks", len, offset, plan.len());

        let mut out = Vec::with_capacity(len);
        for chunk in &plan {
            self.checkpoint(op, chunk.offset)?;
            let cmd = Command::Read {
                offset: chunk.offset,
                len: chunk.len as u8,
            };
            let resp = self.exchange_chunk(&cmd, out.len()).await?;
            check_status(op, chunk.offset, chunk.len, &resp)?;
            check_read_payload(&chunk, &resp)?;
            out.extend_from_slice(&resp.payload);
            log::debug!("read {}B at offset {}", chunk.len, chunk.offset);
        }
        Ok(out)
    }

    /// GET LENGTH.
    pub async fn get_length(&mut self) -> Result<u16> {
        self.checkpoint(Operation::GetLength, 0)?;
        let resp = self.exchange_chunk(&Command::GetLength, 0).await?;
        decode_length(&resp)
    }

    /// Read back and compare.
    pub async fn verify(&mut self, offset: u16, expected: &[u8]) -> Result<Option<Mismatch>> {
        let actual = self.read(offset, expected.len()).await?;
        Ok(compare(offset, expected, &actual))
    }
}

impl<T: AsyncTransport, S> AsyncVaultSession<T, S> {
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    fn checkpoint(&self, operation: Operation, offset: u16) -> Result<()> {
        if self.cancel.is_cancelled() {
            log::debug!("{} cancelled before offset {}", operation, offset);
            return Err(Error::Cancelled { operation, offset });
        }
        Ok(())
    }

    async fn exchange_chunk(&mut self, cmd: &Command, completed: usize) -> Result<ApduResponse> {
        let operation = cmd.operation();
        let offset = cmd.offset();
        let wrap = move |source: Error| Error::Exchange {
            operation,
            offset,
            completed,
            source: Box::new(source),
        };

        let apdu = cmd.encode()?;
        if self.config.inter_exchange_delay_ms > 0 {
            tokio::time::sleep(ms(self.config.inter_exchange_delay_ms)).await;
        }

        #[cfg(feature = "diagnostics")]
        log::trace!(">> {}", crate::utils::format_apdu(&apdu));

        let timeout_ms = self.config.exchange_timeout_ms;
        let raw = match tokio::time::timeout(
            ms(timeout_ms),
            self.transport.exchange(&apdu, timeout_ms),
        )
        .await
        {
            Ok(res) => res.map_err(wrap)?,
            Err(_) => {
                log::warn!("{} at offset {} timed out after {}ms", operation, offset, timeout_ms);
                return Err(wrap(Error::Timeout));
            }
        };

        #[cfg(feature = "diagnostics")]
        log::trace!("<< {}", crate::utils::format_apdu(&raw));

        ApduResponse::parse(self.disambiguator.disambiguate(&raw)).map_err(wrap)
    }
}
