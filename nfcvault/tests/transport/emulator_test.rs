#[path = "../common/mod.rs"]
mod common;

use nfcvault::prelude::*;
use nfcvault::protocol::commands::{encode_get_length, encode_read, encode_write};

fn exchange(emu: &mut VaultEmulator, apdu: &[u8]) -> ApduResponse {
    let raw = emu.exchange(apdu, 2000).unwrap();
    ApduResponse::parse(&raw).unwrap()
}

fn selected() -> VaultEmulator {
    let mut emu = VaultEmulator::new();
    assert!(exchange(&mut emu, &common::fixtures::select_apdu()).is_success());
    emu
}

#[test]
fn get_length_is_high_water_mark() {
    let mut emu = selected();
    let hello = common::fixtures::hello_payload();
    exchange(&mut emu, &encode_write(0, &hello).encode().unwrap());
    exchange(&mut emu, &encode_write(300, b"OFFSET_TEST").encode().unwrap());
    let resp = exchange(&mut emu, &encode_get_length().encode().unwrap());
    assert_eq!(resp.payload, vec![0x01, 0x37]); // 311
}

#[test]
fn out_of_range_read_is_not_found() {
    let mut emu = selected();
    let resp = exchange(&mut emu, &encode_read(2040, 16).encode().unwrap());
    assert_eq!(resp.status, StatusWord::NOT_FOUND);
    assert!(resp.payload.is_empty());
}

#[test]
fn out_of_range_write_leaves_buffer_untouched() {
    let mut emu = selected();
    let resp = exchange(&mut emu, &encode_write(2040, &[0xBB; 16]).encode().unwrap());
    assert_eq!(resp.status, StatusWord::NOT_FOUND);
    assert!(emu.buffer().iter().all(|&b| b == 0));
    assert_eq!(emu.data_len(), 0);
}

#[test]
fn unknown_instruction() {
    let mut emu = selected();
    let resp = exchange(&mut emu, &[0x00, 0x20, 0x00, 0x00]);
    assert_eq!(resp.status, StatusWord::INS_NOT_SUPPORTED);
}

#[test]
fn loopback_link_prefixes_pcb_and_cid() {
    let mut emu = VaultEmulator::new().with_link(LinkKind::ReaderLoopback);
    let raw = emu.exchange(&common::fixtures::select_apdu(), 2000).unwrap();
    assert_eq!(raw, vec![0x0A, 0x01, 0x90, 0x00]);
}

#[test]
fn reset_forgets_selection() {
    let mut emu = selected();
    emu.reset().unwrap();
    assert!(!emu.is_selected());
    let resp = exchange(&mut emu, &encode_get_length().encode().unwrap());
    assert_eq!(resp.status, StatusWord::CONDITIONS_NOT_SATISFIED);
}
