#[path = "../common/mod.rs"]
mod common;

use serial_test::serial;

#[test]
#[serial]
fn ten_random_full_buffer_cycles() {
    common::helpers::init_logging();
    let mut s = common::helpers::default_session();
    for round in 0..10u64 {
        let data = common::helpers::random_payload(round, 2048);
        let report = s.write(0, &data).unwrap();
        assert_eq!(report.chunks, 64);
        assert_eq!(s.read(0, 2048).unwrap(), data, "round {}", round);
        assert_eq!(s.verify(0, &data).unwrap(), None, "round {}", round);
    }
    assert_eq!(s.get_length().unwrap(), 2048);
}

#[test]
#[serial]
fn random_cycles_with_small_chunks() {
    let mut s = common::helpers::selected_emulator_session(7).unwrap();
    for round in 0..10u64 {
        let data = common::helpers::random_payload(0x5EED_0000 + round, 2048);
        s.write(0, &data).unwrap();
        assert_eq!(s.read(0, 2048).unwrap(), data);
    }
}
