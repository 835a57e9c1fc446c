#[path = "../common/mod.rs"]
mod common;

use nfcvault::protocol::ApduResponse;
use nfcvault::{Error, StatusWord};

#[test]
fn splits_payload_and_status() {
    let raw = hex::decode("01376a82").unwrap();
    let resp = ApduResponse::parse(&raw).unwrap();
    assert_eq!(resp.payload, vec![0x01, 0x37]);
    assert_eq!(resp.status, StatusWord::NOT_FOUND);
    assert!(!resp.is_success());
}

#[test]
fn status_only_response() {
    let resp = ApduResponse::parse(&common::fixtures::success_sw()).unwrap();
    assert!(resp.payload.is_empty());
    assert!(resp.is_success());
}

#[test]
fn too_short_for_status_word() {
    assert!(matches!(
        ApduResponse::parse(&[0x90]),
        Err(Error::InvalidLength { expected: 2, actual: 1 })
    ));
}

#[test]
fn status_word_display_is_hex() {
    assert_eq!(StatusWord::NOT_FOUND.to_string(), "0x6a82");
}
