// nfcvault/src/chunk.rs

//! Chunk planning for offset-addressed transfers.
//!
//! A plan is the ordered list of `(offset, length)` pieces covering one
//! requested range, each no longer than the link's maximum payload. It is
//! built fresh for every operation and consumed front to back.

use std::ops::Range;

use crate::constants::MAX_SHORT_CHUNK_LEN;
use crate::{Error, Result};

/// One bounded exchange of a chunked transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Absolute buffer offset of the first byte.
    pub offset: u16,
    /// Position of the first byte within the caller's data.
    pub start: usize,
    pub len: usize,
}

impl Chunk {
    /// Slice range of this chunk within the caller's data.
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkPlan {
    base: u16,
    total: usize,
    max_chunk: usize,
}

impl ChunkPlan {
    /// Plan `len` bytes starting at `offset` in pieces of at most
    /// `max_chunk` bytes.
    pub fn new(offset: u16, len: usize, max_chunk: usize) -> Result<Self> {
        validate_chunk_len(max_chunk)?;
        let end = (offset as usize).checked_add(len);
        if end.is_none_or(|end| end > u16::MAX as usize + 1) {
            return Err(Error::OffsetOverflow {
                offset,
                length: len,
            });
        }
        Ok(Self {
            base: offset,
            total: len,
            max_chunk,
        })
    }

    pub fn base(&self) -> u16 {
        self.base
    }

    pub fn total_bytes(&self) -> usize {
        self.total
    }

    /// Number of exchanges the plan needs.
    pub fn len(&self) -> usize {
        self.total.div_ceil(self.max_chunk)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// One past the last addressed byte.
    pub fn end(&self) -> usize {
        self.base as usize + self.total
    }

    pub fn iter(&self) -> ChunkIter {
        ChunkIter {
            base: self.base,
            total: self.total,
            max_chunk: self.max_chunk,
            cursor: 0,
        }
    }
}

impl<'a> IntoIterator for &'a ChunkPlan {
    type Item = Chunk;
    type IntoIter = ChunkIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the chunks of a [`ChunkPlan`], in ascending offset order.
#[derive(Debug, Clone)]
pub struct ChunkIter {
    base: u16,
    total: usize,
    max_chunk: usize,
    cursor: usize,
}

impl Iterator for ChunkIter {
    type Item = Chunk;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.total {
            return None;
        }
        let len = (self.total - self.cursor).min(self.max_chunk);
        // base + total <= 0x10000 was checked when the plan was built
        let offset = (self.base as usize + self.cursor) as u16;
        let chunk = Chunk {
            offset,
            start: self.cursor,
            len,
        };
        self.cursor += len;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.total - self.cursor).div_ceil(self.max_chunk);
        (n, Some(n))
    }
}

impl ExactSizeIterator for ChunkIter {}

/// Reject chunk sizes a short APDU cannot carry with an exact Le.
pub fn validate_chunk_len(max_chunk: usize) -> Result<()> {
    if max_chunk == 0 || max_chunk > MAX_SHORT_CHUNK_LEN {
        return Err(Error::InvalidConfig(format!(
            "max chunk length must be within 1..={}, got {}",
            MAX_SHORT_CHUNK_LEN, max_chunk
        )));
    }
    Ok(())
}
