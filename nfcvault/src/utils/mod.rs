//! Small helpers shared across the crate: hex/ASCII rendering for logs and
//! link timing arithmetic.

pub mod hex;
pub mod timing;

pub use hex::*;
pub use timing::*;
