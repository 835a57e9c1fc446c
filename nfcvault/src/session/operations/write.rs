use crate::chunk::ChunkPlan;
use crate::protocol::Command;
use crate::session::handle::check_status;
use crate::session::operations::TransferReport;
use crate::session::{Selected, VaultSession};
use crate::transport::Transport;
use crate::types::Operation;
use crate::Result;

/// Chunked WRITE. See [`VaultSession::write`].
pub fn write<T: Transport>(
    session: &mut VaultSession<T, Selected>,
    offset: u16,
    data: &[u8],
) -> Result<TransferReport> {
    let op = Operation::Write;
    session.preflight(op, offset, data.len())?;
    let plan = ChunkPlan::new(offset, data.len(), session.config().max_chunk_len)?;
    log::debug!(
        "write {} bytes at offset {} in {} chunks",
        data.len(),
        offset,
        plan.len()
    );

    let mut report = TransferReport::default();
    for chunk in &plan {
        session.checkpoint(op, chunk.offset)?;
        let cmd = Command::Write {
            offset: chunk.offset,
            data: data[chunk.range()].to_vec(),
        };
        let resp = session.exchange_chunk(&cmd, report.bytes)?;
        check_status(op, chunk.offset, chunk.len, &resp)?;
        report.bytes += chunk.len;
        report.chunks += 1;
        log::debug!("wrote {}B at offset {}", chunk.len, chunk.offset);
    }

    log::debug!("write complete: {} bytes, {} chunks", report.bytes, report.chunks);
    Ok(report)
}
