// nfcvault/src/transport/traits.rs

use crate::types::LinkKind;
use crate::Result;

/// Transport trait abstracts the reader-to-card link away from the Vault
/// driver. One call is one complete APDU exchange; implementations must
/// not pipeline.
pub trait Transport {
    /// Send a C-APDU and return the raw R-APDU bytes (payload followed by
    /// SW1 SW2, possibly preceded by a leaked link prefix). `timeout_ms`
    /// bounds this single exchange.
    fn exchange(&mut self, apdu: &[u8], timeout_ms: u64) -> Result<Vec<u8>>;

    /// Reader-to-card pairing behind this transport. Only a pairing that
    /// declares itself leaky can ever have response prefixes stripped.
    fn link_kind(&self) -> LinkKind {
        LinkKind::Direct
    }

    /// Transport-level reset (RF cycle, re-activation). Default is a
    /// no-op for links without such a notion.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn exchange(&mut self, apdu: &[u8], timeout_ms: u64) -> Result<Vec<u8>> {
        (**self).exchange(apdu, timeout_ms)
    }

    fn link_kind(&self) -> LinkKind {
        (**self).link_kind()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn exchange(&mut self, apdu: &[u8], timeout_ms: u64) -> Result<Vec<u8>> {
        (**self).exchange(apdu, timeout_ms)
    }

    fn link_kind(&self) -> LinkKind {
        (**self).link_kind()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}
