use crate::constants::{CLA_ISO, INS_READ};
use crate::protocol::Apdu;

/// READ BINARY: `00 B0 offset_hi offset_lo Le`. Le is the exact chunk
/// length the driver expects back.
pub fn encode_read(offset: u16, len: u8) -> Apdu {
    let [hi, lo] = offset.to_be_bytes();
    Apdu::new(CLA_ISO, INS_READ, hi, lo).with_le(len)
}
