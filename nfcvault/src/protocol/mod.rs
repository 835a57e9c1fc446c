// nfcvault/src/protocol/mod.rs

pub mod apdu;
pub mod commands;
pub mod parser;
pub mod response;

pub use apdu::Apdu;
pub use commands::*;
pub use response::ApduResponse;
