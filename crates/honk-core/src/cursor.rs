//! Fixed-layout byte cursor
//!
//! The total length is checked once when the cursor is created; every read
//! after that advances through a buffer whose size already matches the
//! layout being decoded.

/// Cursor over a byte slice of known, pre-validated length.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor if `bytes` is exactly `expected_len` long.
    pub fn exact(bytes: &'a [u8], expected_len: usize) -> Option<Self> {
        (bytes.len() == expected_len).then_some(Self { bytes, offset: 0 })
    }

    /// Returns the current offset within the slice.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Returns the number of bytes remaining in the cursor.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    /// Reads a fixed-size byte array and advances.
    ///
    /// Callers only read what the validated layout covers.
    pub fn read_array<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.bytes[self.offset..self.offset + N]);
        self.offset += N;
        out
    }

    /// Reads `count` consecutive fixed-size arrays.
    pub fn read_arrays<const N: usize>(&mut self, count: usize) -> Vec<[u8; N]> {
        (0..count).map(|_| self.read_array::<N>()).collect()
    }
}
