use crate::constants::{CLA_PROPRIETARY, INS_GET_LENGTH};
use crate::protocol::Apdu;

/// GET DATA LENGTH: `80 CA 00 00 00`. Le=0x00 ("any") must be present;
/// without it the applet returns 0x9000 with no payload.
pub fn encode_get_length() -> Apdu {
    Apdu::new(CLA_PROPRIETARY, INS_GET_LENGTH, 0x00, 0x00).with_le(0x00)
}
