#[path = "../common/mod.rs"]
mod common;

use nfcvault::prelude::*;
use proptest::prelude::*;

#[test]
fn quick_smoke_sequence() {
    common::helpers::init_logging();
    let mut s = common::helpers::default_session();
    let hello = common::fixtures::hello_payload();

    s.write(0, &hello).unwrap();
    assert_eq!(s.read(0, hello.len()).unwrap(), hello);
    assert_eq!(s.get_length().unwrap(), 12);

    s.write(300, b"OFFSET_TEST").unwrap();
    assert_eq!(s.read(300, 11).unwrap(), b"OFFSET_TEST");
    assert_eq!(s.get_length().unwrap(), 311);
}

#[test]
fn fill_whole_buffer_with_aa() {
    let mut s = common::helpers::default_session();
    let data = vec![0xAA; 2048];
    let report = s.write(0, &data).unwrap();
    assert_eq!(report, TransferReport { bytes: 2048, chunks: 64 });
    assert_eq!(s.read(0, 2048).unwrap(), data);
    assert_eq!(s.get_length().unwrap(), 2048);
    assert_eq!(s.verify(0, &data).unwrap(), None);
}

#[test]
fn get_length_never_empty_after_fill() {
    for n in [1usize, 31, 32, 33, 700, 2048] {
        let mut s = common::helpers::default_session();
        s.write(0, &vec![0x5A; n]).unwrap();
        assert_eq!(s.get_length().unwrap() as usize, n);
    }
}

#[test]
fn verify_reports_first_mismatch() {
    let mut s = common::helpers::default_session();
    s.write(10, &[1, 2, 3, 4]).unwrap();
    let m = s.verify(10, &[1, 2, 0xFF, 4]).unwrap().unwrap();
    assert_eq!(m.count, 1);
    assert_eq!(m.first_offset, 12);
    assert_eq!((m.expected, m.actual), (0xFF, 3));
}

#[test]
fn builder_opens_a_working_session() {
    let mut s = SessionBuilder::new()
        .transport(VaultEmulator::new())
        .max_chunk_len(255)
        .open()
        .unwrap();
    let data = common::helpers::random_payload(11, 600);
    assert_eq!(s.write(1000, &data).unwrap().chunks, 3);
    assert_eq!(s.read(1000, 600).unwrap(), data);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn round_trip_any_in_range_write(
        offset in 0u16..2048,
        data in proptest::collection::vec(any::<u8>(), 0..=2048),
        chunk in 1usize..=255,
    ) {
        let len = data.len().min(2048 - offset as usize);
        let data = &data[..len];
        let mut s = common::helpers::selected_emulator_session(chunk).unwrap();
        s.write(offset, data).unwrap();
        prop_assert_eq!(s.read(offset, len).unwrap(), data.to_vec());
    }

    #[test]
    fn read_is_independent_of_chunk_size(
        offset in 0u16..2048,
        len in 0usize..=2048,
        a in 1usize..=255,
        b in 1usize..=255,
    ) {
        let len = len.min(2048 - offset as usize);
        let contents = common::helpers::random_payload(0xC0FFEE, 2048);
        let emu = VaultEmulator::new().with_contents(&contents);
        let mut sa = common::helpers::selected_session_over(
            emu.clone(),
            SessionConfig::default().with_max_chunk_len(a),
        ).unwrap();
        let mut sb = common::helpers::selected_session_over(
            emu,
            SessionConfig::default().with_max_chunk_len(b),
        ).unwrap();
        let ra = sa.read(offset, len).unwrap();
        prop_assert_eq!(&ra, &sb.read(offset, len).unwrap());
        prop_assert_eq!(&ra[..], &contents[offset as usize..offset as usize + len]);
    }
}
