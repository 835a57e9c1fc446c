/// First point of divergence between expected and read-back data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Total number of differing bytes.
    pub count: usize,
    /// Absolute buffer offset of the first differing byte.
    pub first_offset: usize,
    pub expected: u8,
    pub actual: u8,
}

/// Compare `expected` against `actual`, both starting at buffer `offset`.
///
/// A length difference counts every missing or surplus byte as a mismatch;
/// the reported byte for the missing side is `0x00`.
pub fn compare(offset: u16, expected: &[u8], actual: &[u8]) -> Option<Mismatch> {
    let longest = expected.len().max(actual.len());
    let mut found: Option<Mismatch> = None;
    for i in 0..longest {
        let e = expected.get(i).copied();
        let a = actual.get(i).copied();
        if e == a {
            continue;
        }
        match found.as_mut() {
            Some(m) => m.count += 1,
            None => {
                found = Some(Mismatch {
                    count: 1,
                    first_offset: offset as usize + i,
                    expected: e.unwrap_or(0),
                    actual: a.unwrap_or(0),
                })
            }
        }
    }
    if let Some(m) = found {
        log::warn!(
            "verify: {} mismatched bytes, first at offset {} (expected {:#04x}, got {:#04x})",
            m.count,
            m.first_offset,
            m.expected,
            m.actual
        );
    }
    found
}
