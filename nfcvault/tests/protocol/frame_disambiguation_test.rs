#[path = "../common/mod.rs"]
mod common;

use nfcvault::link::FrameDisambiguator;
use nfcvault::LinkKind;
use proptest::prelude::*;

#[test]
fn disabled_passes_pcb_lookalikes_byte_for_byte() {
    for link in [LinkKind::Direct, LinkKind::ReaderLoopback] {
        let d = FrameDisambiguator::disabled(link);
        for payload in common::fixtures::pcb_lookalike_payloads() {
            let mut raw = payload.clone();
            raw.extend_from_slice(&common::fixtures::success_sw());
            assert_eq!(d.disambiguate(&raw), raw.as_slice());
        }
    }
}

#[test]
fn direct_link_never_strips_even_when_requested() {
    let d = FrameDisambiguator::new(LinkKind::Direct, true);
    assert!(!d.is_active());
    let raw = [0x0A, 0x01, 0x55, 0x90, 0x00];
    assert_eq!(d.disambiguate(&raw), &raw[..]);
}

#[test]
fn loopback_strip_keeps_status_word_intact() {
    let d = FrameDisambiguator::new(LinkKind::ReaderLoopback, true);
    assert_eq!(d.disambiguate(&[0x0A, 0x01, 0x90, 0x00]), &[0x90, 0x00]);
    // too short to hold prefix and status word
    assert_eq!(d.disambiguate(&[0x0A, 0x90, 0x00]), &[0x0A, 0x90, 0x00]);
}

proptest! {
    #[test]
    fn pass_through_for_any_bytes(raw in proptest::collection::vec(any::<u8>(), 0..300)) {
        let d = FrameDisambiguator::new(LinkKind::ReaderLoopback, false);
        prop_assert_eq!(d.disambiguate(&raw), raw.as_slice());
    }
}
