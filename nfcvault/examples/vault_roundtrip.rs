//! Drive the in-memory Vault emulator through the quick smoke sequence and
//! a full-buffer fill, printing each step.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p nfcvault --example vault_roundtrip
//!   RUST_LOG=trace cargo run -p nfcvault --example vault_roundtrip --features diagnostics
//!
//! Pass `loopback` as the first argument to emulate a reader-to-reader
//! link that leaks the PCB/CID prefix, with stripping enabled.

use anyhow::{bail, Context};
use nfcvault::prelude::*;
use nfcvault::utils::ascii_preview;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let loopback = std::env::args().nth(1).as_deref() == Some("loopback");
    let link = if loopback {
        LinkKind::ReaderLoopback
    } else {
        LinkKind::Direct
    };

    let mut session = SessionBuilder::new()
        .transport(VaultEmulator::new().with_link(link))
        .strip_artifact(loopback)
        .open()
        .context("selecting the vault application")?;
    println!("Selected vault on {} link", link);

    let hello = b"Hello Vault!";
    session.write(0, hello)?;
    let back = session.read(0, hello.len())?;
    println!("READ  @0   -> {} ({})", bytes_to_hex(&back), ascii_preview(&back));

    session.write(300, b"OFFSET_TEST")?;
    println!("LENGTH     -> {}", session.get_length()?);

    match session.write(2040, &[0xBB; 16]) {
        Err(Error::OutOfBounds { offset, length, .. }) => {
            println!("WRITE @{} x{} rejected as out of bounds", offset, length)
        }
        other => bail!("boundary write was not rejected: {:?}", other),
    }

    let fill = vec![0xAA; 2048];
    let report = session.write(0, &fill)?;
    println!("FILL       -> {} bytes in {} chunks", report.bytes, report.chunks);
    if let Some(m) = session.verify(0, &fill)? {
        bail!(
            "{} mismatches, first at offset {} (expected {:#04x}, got {:#04x})",
            m.count,
            m.first_offset,
            m.expected,
            m.actual
        );
    }
    println!("VERIFY     -> ok, length {}", session.get_length()?);
    Ok(())
}
