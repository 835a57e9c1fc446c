use crate::constants::{CLA_ISO, INS_SELECT, SELECT_BY_NAME};
use crate::protocol::Apdu;
use crate::types::Aid;

/// SELECT by AID: `00 A4 04 00 Lc AID`, no Le.
pub fn encode_select(aid: &Aid) -> Apdu {
    Apdu::new(CLA_ISO, INS_SELECT, SELECT_BY_NAME, 0x00).with_data(aid.as_bytes().to_vec())
}
