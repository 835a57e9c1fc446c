// nfcvault/src/link.rs

//! Frame disambiguation for responses that may carry a leaked ISO-DEP
//! header.
//!
//! Some reader pairings (a PN532 initiator talking to another PN532 in
//! target mode) pass the card's I-block PCB and CID bytes through to the
//! host in front of the R-APDU. Whether that happens depends on the link,
//! so the decision is taken from the connection's declared [`LinkKind`]
//! and the session's `strip_artifact` setting. Response bytes are never
//! inspected to make it: a payload whose first byte happens to look like
//! an I-block PCB (`(b & 0xE8) == 0x08`, 16 of 256 values) is ordinary
//! data.

use crate::constants::{ARTIFACT_LEN, STATUS_WORD_LEN};
use crate::types::LinkKind;

/// Shortest response a prefix is removed from. Stripping always leaves a
/// complete status word behind.
pub const MIN_STRIPPABLE_LEN: usize = ARTIFACT_LEN + STATUS_WORD_LEN;

/// Per-connection decision on whether responses carry a leaked prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDisambiguator {
    link: LinkKind,
    strip_artifact: bool,
}

impl FrameDisambiguator {
    /// Build the disambiguator for a connection. Stripping only becomes
    /// active when it is requested and the link is one that leaks.
    pub fn new(link: LinkKind, strip_artifact: bool) -> Self {
        if strip_artifact && !link.leaks_artifact() {
            log::warn!(
                "artifact stripping requested on a {} link; responses will be passed through",
                link
            );
        }
        Self {
            link,
            strip_artifact,
        }
    }

    /// Pass-through disambiguator.
    pub fn disabled(link: LinkKind) -> Self {
        Self {
            link,
            strip_artifact: false,
        }
    }

    pub fn link(&self) -> LinkKind {
        self.link
    }

    /// True when responses on this connection get their first
    /// `ARTIFACT_LEN` bytes removed.
    pub fn is_active(&self) -> bool {
        self.strip_artifact && self.link.leaks_artifact()
    }

    /// Return the R-APDU bytes with a leaked prefix removed when this
    /// connection is configured for it. The flag is checked before any
    /// byte of `raw` is looked at.
    pub fn disambiguate<'a>(&self, raw: &'a [u8]) -> &'a [u8] {
        if !self.is_active() {
            return raw;
        }
        if raw.len() < MIN_STRIPPABLE_LEN {
            log::debug!(
                "response of {} bytes too short to carry a link prefix; left intact",
                raw.len()
            );
            return raw;
        }
        &raw[ARTIFACT_LEN..]
    }
}
