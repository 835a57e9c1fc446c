//! Link timing helpers.
//!
//! The practical chunk size and the per-exchange timeout both follow from
//! the ISO 14443-4 frame waiting time the card announces in its ATS
//! (FWI, 0..=14).

use std::time::Duration;

/// Default timeout for a single APDU exchange, in milliseconds.
pub const DEFAULT_EXCHANGE_TIMEOUT_MS: u64 = 2000;

/// Carrier frequency of a 13.56 MHz ISO 14443 field, in Hz.
const FC_HZ: u64 = 13_560_000;

/// Largest frame waiting integer allowed by ISO 14443-4.
pub const MAX_FWI: u8 = 14;

/// FWT = (256 * 16 / fc) * 2^FWI. Values above 14 are RFU and are
/// clamped.
pub fn frame_waiting_time(fwi: u8) -> Duration {
    let fwi = fwi.min(MAX_FWI) as u32;
    let nanos = (256u64 * 16 * 1_000_000_000 * (1u64 << fwi)) / FC_HZ;
    Duration::from_nanos(nanos)
}

/// Exchange timeout derived from an FWI, rounded up to whole milliseconds,
/// with `margin_ms` added for reader-side processing.
pub fn exchange_timeout_ms(fwi: u8, margin_ms: u64) -> u64 {
    let fwt = frame_waiting_time(fwi);
    let ms = fwt.as_micros().div_ceil(1000) as u64;
    ms + margin_ms
}

pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
