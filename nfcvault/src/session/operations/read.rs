use crate::chunk::{Chunk, ChunkPlan};
use crate::protocol::{ApduResponse, Command};
use crate::session::handle::check_status;
use crate::session::{Selected, VaultSession};
use crate::transport::Transport;
use crate::types::Operation;
use crate::{Error, Result};

/// Chunked READ. See [`VaultSession::read`].
pub fn read<T: Transport>(
    session: &mut VaultSession<T, Selected>,
    offset: u16,
    len: usize,
) -> Result<Vec<u8>> {
    let op = Operation::Read;
    session.preflight(op, offset, len)?;
    let plan = ChunkPlan::new(offset, len, session.config().max_chunk_len)?;
    log::debug!("read {} bytes at offset {} in {} chunks", len, offset, plan.len());

    let mut out = Vec::with_capacity(len);
    for chunk in &plan {
        session.checkpoint(op, chunk.offset)?;
        // chunk.len <= 255, checked when the plan was built
        let cmd = Command::Read {
            offset: chunk.offset,
            len: chunk.len as u8,
        };
        let resp = session.exchange_chunk(&cmd, out.len())?;
        check_status(op, chunk.offset, chunk.len, &resp)?;
        check_read_payload(&chunk, &resp)?;
        out.extend_from_slice(&resp.payload);
        log::debug!("read {}B at offset {}", chunk.len, chunk.offset);
    }

    Ok(out)
}

/// A successful READ chunk must carry exactly `chunk.len` bytes; anything
/// else is rejected rather than truncated or padded.
pub(crate) fn check_read_payload(chunk: &Chunk, resp: &ApduResponse) -> Result<()> {
    if resp.payload.len() == chunk.len {
        return Ok(());
    }
    log::warn!(
        "read at offset {} returned {}B, expected {}B",
        chunk.offset,
        resp.payload.len(),
        chunk.len
    );
    Err(Error::UnexpectedPayload {
        operation: Operation::Read,
        offset: chunk.offset,
        expected: chunk.len,
        actual: resp.payload.len(),
    })
}
