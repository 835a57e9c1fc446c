// nfcvault/src/lib.rs

//! nfcvault
//!
//! Host-side driver for the Vault APDU protocol: chunked WRITE / READ /
//! GET LENGTH access to a 2048-byte secure-element buffer over an ISO-DEP
//! link, with profile-scoped handling of leaked link-layer prefixes.
#![warn(missing_docs)]

pub mod chunk;
pub mod constants;
pub mod error;
pub mod link;
#[cfg(feature = "async")]
pub mod nonblocking;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available without module paths.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
