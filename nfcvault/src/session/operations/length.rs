use crate::protocol::{ApduResponse, Command};
use crate::protocol::parser::be_u16_at;
use crate::session::handle::check_status;
use crate::session::{Selected, VaultSession};
use crate::transport::Transport;
use crate::types::Operation;
use crate::{Error, Result};

/// GET LENGTH. The command always carries `Le = 0x00`, so a conforming
/// applet answers with exactly two big-endian bytes.
pub fn get_length<T: Transport>(session: &mut VaultSession<T, Selected>) -> Result<u16> {
    session.checkpoint(Operation::GetLength, 0)?;
    let resp = session.exchange_chunk(&Command::GetLength, 0)?;
    decode_length(&resp)
}

/// Status check and decoding of a GET LENGTH response.
pub(crate) fn decode_length(resp: &ApduResponse) -> Result<u16> {
    let op = Operation::GetLength;
    check_status(op, 0, 0, resp)?;
    if resp.payload.len() != 2 {
        log::warn!("get length returned {}B payload", resp.payload.len());
        return Err(Error::UnexpectedPayload {
            operation: op,
            offset: 0,
            expected: 2,
            actual: resp.payload.len(),
        });
    }
    let len = be_u16_at(&resp.payload, 0)?;
    log::debug!("vault reports {} bytes stored", len);
    Ok(len)
}
