use crate::constants::{CLA_ISO, INS_WRITE};
use crate::protocol::Apdu;

/// Vault WRITE: `00 D0 offset_hi offset_lo Lc data`, no Le.
pub fn encode_write(offset: u16, data: &[u8]) -> Apdu {
    let [hi, lo] = offset.to_be_bytes();
    Apdu::new(CLA_ISO, INS_WRITE, hi, lo).with_data(data.to_vec())
}
