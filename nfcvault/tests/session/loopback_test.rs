#[path = "../common/mod.rs"]
mod common;

use nfcvault::prelude::*;
use nfcvault::test_support::mock_after_select;

fn loopback_session(strip: bool) -> VaultSession<VaultEmulator, Selected> {
    let emu = VaultEmulator::new().with_link(LinkKind::ReaderLoopback);
    let cfg = SessionConfig::default().with_strip_artifact(strip);
    common::helpers::selected_session_over(emu, cfg).unwrap()
}

#[test]
fn stripping_recovers_payload_on_loopback() {
    let mut s = loopback_session(true);
    let data = common::helpers::random_payload(5, 100);
    s.write(0, &data).unwrap();
    assert_eq!(s.read(0, 100).unwrap(), data);
    assert_eq!(s.get_length().unwrap(), 100);
}

#[test]
fn payloads_that_look_like_pcb_survive_stripping() {
    let mut s = loopback_session(true);
    for (i, payload) in common::fixtures::pcb_lookalike_payloads().iter().enumerate() {
        let offset = (i * 8) as u16;
        s.write(offset, payload).unwrap();
        assert_eq!(&s.read(offset, payload.len()).unwrap(), payload);
    }
}

#[test]
fn unstripped_loopback_reads_are_rejected_not_corrupted() {
    // Without the opt-in the prefix is handed to the parser as data, so a
    // READ comes back two bytes longer than requested.
    let emu = VaultEmulator::new().with_link(LinkKind::ReaderLoopback);
    let mut s = VaultSession::new(emu, SessionConfig::default())
        .unwrap()
        .select()
        .unwrap();
    assert!(matches!(
        s.read(0, 4),
        Err(Error::UnexpectedPayload {
            expected: 4,
            actual: 6,
            ..
        })
    ));
}

#[test]
fn direct_link_pass_through_of_lookalike_first_bytes() {
    for payload in common::fixtures::pcb_lookalike_payloads() {
        let mut raw = payload.clone();
        raw.extend_from_slice(&common::fixtures::success_sw());
        let mock = mock_after_select(LinkKind::Direct, vec![raw]);
        let mut s = VaultSession::new(mock, SessionConfig::default())
            .unwrap()
            .select()
            .unwrap();
        assert_eq!(s.read(0, payload.len()).unwrap(), payload);
    }
}
