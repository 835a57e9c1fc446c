//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize emulator and mock session setup so tests
//! across the crate and the tests/ directory share the same wiring.
#![allow(dead_code)]

use crate::session::{Selected, SessionConfig, VaultSession};
use crate::transport::{MockTransport, VaultEmulator};
use crate::types::{LinkKind, StatusWord};
use crate::Result;

/// Selected session over a fresh 2048-byte emulator with the given chunk
/// size.
#[doc(hidden)]
pub fn selected_emulator_session(max_chunk_len: usize) -> Result<VaultSession<VaultEmulator, Selected>> {
    selected_session_over(VaultEmulator::new(), SessionConfig::default().with_max_chunk_len(max_chunk_len))
}

/// Select over any emulator and configuration.
#[doc(hidden)]
pub fn selected_session_over(
    emulator: VaultEmulator,
    config: SessionConfig,
) -> Result<VaultSession<VaultEmulator, Selected>> {
    VaultSession::new(emulator, config)?.select()
}

/// MockTransport with a SELECT acknowledgement queued first, then the
/// given raw responses.
#[doc(hidden)]
pub fn mock_after_select(link: LinkKind, responses: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::new(link);
    mock.push_reply(&[], StatusWord::SUCCESS);
    for resp in responses {
        mock.push_response(resp);
    }
    mock
}
