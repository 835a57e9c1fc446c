#[path = "../common/mod.rs"]
mod common;

use nfcvault::prelude::*;
use proptest::prelude::*;

/// Emulator whose last eight bytes hold a known non-zero value.
fn emulator_with_marked_tail() -> VaultEmulator {
    let mut contents = vec![0u8; 2048];
    contents[2040..].copy_from_slice(&[0xC3; 8]);
    VaultEmulator::new().with_contents(&contents)
}

#[test]
fn write_past_end_fails_and_leaves_buffer_unchanged() {
    let mut s = common::helpers::selected_session_over(
        emulator_with_marked_tail(),
        SessionConfig::default(),
    )
    .unwrap();
    let err = s.write(2040, &[0xBB; 16]).unwrap_err();
    match err {
        Error::OutOfBounds {
            operation: Operation::Write,
            offset: 2040,
            length: 16,
        } => {}
        other => panic!("expected OutOfBounds, got {:?}", other),
    }
    assert_eq!(&s.transport().buffer()[2040..], &[0xC3; 8]);
    assert_eq!(s.transport().data_len(), 2048);
}

#[test]
fn firmware_rejection_without_preflight() {
    // Chunk larger than the overhang: the first and only chunk is rejected
    // by the card itself.
    let cfg = SessionConfig::default().with_capacity(None);
    let mut s = common::helpers::selected_session_over(emulator_with_marked_tail(), cfg).unwrap();
    let err = s.write(2040, &[0xBB; 16]).unwrap_err();
    assert!(matches!(err, Error::OutOfBounds { offset: 2040, .. }));
    assert_eq!(&s.transport().buffer()[2040..], &[0xC3; 8]);
}

#[test]
fn overflowing_length_is_boundary_error() {
    let mut s = common::helpers::default_session();
    assert!(matches!(
        s.read(1, usize::MAX),
        Err(Error::OutOfBounds {
            operation: Operation::Read,
            offset: 1,
            length: usize::MAX,
        })
    ));
    assert_eq!(s.transport().exchanges(), 1);
}

#[test]
fn overflowing_length_without_capacity_is_offset_overflow() {
    let cfg = SessionConfig::default().with_capacity(None);
    let mut s = common::helpers::selected_session_over(VaultEmulator::new(), cfg).unwrap();
    assert!(matches!(
        s.read(1, usize::MAX),
        Err(Error::OffsetOverflow { offset: 1, length: usize::MAX })
    ));
}

#[test]
fn read_past_end_is_boundary_error() {
    let mut s = common::helpers::default_session();
    assert!(matches!(
        s.read(2047, 2),
        Err(Error::OutOfBounds {
            operation: Operation::Read,
            ..
        })
    ));
}

#[test]
fn last_byte_is_addressable() {
    let mut s = common::helpers::default_session();
    s.write(2047, &[0x7E]).unwrap();
    assert_eq!(s.read(2047, 1).unwrap(), vec![0x7E]);
}

#[test]
fn range_past_sixteen_bits_is_rejected() {
    let cfg = SessionConfig::default().with_capacity(None);
    let mut s = common::helpers::selected_session_over(VaultEmulator::new(), cfg).unwrap();
    assert!(matches!(
        s.read(0xFFFF, 2),
        Err(Error::OffsetOverflow { offset: 0xFFFF, length: 2 })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn out_of_range_write_never_touches_buffer(
        offset in 0u16..2048,
        extra in 1usize..64,
        chunk in 1usize..=255,
    ) {
        let len = 2048 - offset as usize + extra;
        let mut s = common::helpers::selected_emulator_session(chunk).unwrap();
        let res = s.write(offset, &vec![0xEE; len]);
        let is_oob = matches!(res, Err(Error::OutOfBounds { .. }));
        prop_assert!(is_oob);
        prop_assert!(s.transport().buffer().iter().all(|&b| b == 0));
    }
}
