// fixtures.rs — commonly used payloads and APDU frames

pub const SELECT_APDU_HEX: &str = "00a4040006f00102030405";
pub const GET_LENGTH_APDU_HEX: &str = "80ca000000";

pub fn select_apdu() -> Vec<u8> {
    hex::decode(SELECT_APDU_HEX).unwrap()
}

pub fn get_length_apdu() -> Vec<u8> {
    hex::decode(GET_LENGTH_APDU_HEX).unwrap()
}

/// Twelve ASCII bytes written at offset 0 by the quick smoke run.
pub fn hello_payload() -> Vec<u8> {
    b"Hello Vault!".to_vec()
}

/// Payloads whose first byte falls in the ranges a PCB sniffer would have
/// mistaken for an I-block header.
pub fn pcb_lookalike_payloads() -> Vec<Vec<u8>> {
    (0x08u8..=0x0F)
        .chain(0x18u8..=0x1F)
        .map(|first| vec![first, 0x01, 0x02, 0x03])
        .collect()
}

pub fn success_sw() -> [u8; 2] {
    [0x90, 0x00]
}
