#[path = "../common/mod.rs"]
mod common;

use std::thread;

use nfcvault::prelude::*;

#[test]
fn cancel_before_write_sends_no_chunks() {
    let mut s = common::helpers::default_session();
    let token = s.cancel_token();
    token.cancel();
    let err = s.write(64, &[1; 100]).unwrap_err();
    assert!(matches!(
        err,
        Error::Cancelled {
            operation: Operation::Write,
            offset: 64
        }
    ));
    // SELECT only
    assert_eq!(s.transport().exchanges(), 1);
}

#[test]
fn token_shared_across_threads() {
    let token = CancelToken::new();
    let mut s = SessionBuilder::new()
        .transport(VaultEmulator::new())
        .cancel_token(token.clone())
        .open()
        .unwrap();

    thread::spawn(move || token.cancel()).join().unwrap();
    assert!(matches!(s.read(0, 32), Err(Error::Cancelled { .. })));

    s.cancel_token().reset();
    assert_eq!(s.read(0, 32).unwrap(), vec![0; 32]);
}

#[test]
fn session_returns_to_unselected_after_reset() {
    let s = common::helpers::default_session();
    let s = s.reset().unwrap();
    assert!(!s.transport().is_selected());
    let mut s = s.select().unwrap();
    assert_eq!(s.get_length().unwrap(), 0);
}
