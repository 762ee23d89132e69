use tracing::warn;

use super::error::{SerError, SerKind, SerResult};
use crate::config::ReadLimits;

/// Simple cursor over a byte slice providing structured reads with error context.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
    limits: ReadLimits,
}

impl<'a> ByteReader<'a> {
    /// Creates a new cursor over the provided byte slice with default limits.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_limits(bytes, ReadLimits::default())
    }

    /// Creates a new cursor enforcing the supplied limits.
    pub fn with_limits(bytes: &'a [u8], limits: ReadLimits) -> Self {
        Self {
            bytes,
            offset: 0,
            limits,
        }
    }

    /// Returns the limits enforced by this cursor.
    pub fn limits(&self) -> ReadLimits {
        self.limits
    }

    /// Returns the current offset within the slice.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Returns the number of bytes remaining in the cursor.
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.offset)
    }

    /// Reads exactly `len` bytes from the cursor.
    pub fn read_exact(
        &mut self,
        len: usize,
        kind: SerKind,
        field: &'static str,
    ) -> SerResult<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(SerError::not_enough_data(kind, field, len, remaining));
        }
        let start = self.offset;
        self.offset += len;
        Ok(&self.bytes[start..start + len])
    }

    /// Reads a fixed-size byte array from the cursor.
    pub fn read_array<const N: usize>(
        &mut self,
        kind: SerKind,
        field: &'static str,
    ) -> SerResult<[u8; N]> {
        let bytes = self.read_exact(N, kind, field)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Validates a decoded element count before anything is allocated for it.
    ///
    /// The count must respect [`ReadLimits::max_list_len`] and every element
    /// needs at least `min_element_len` of the remaining bytes.
    pub fn check_count(
        &self,
        count: u32,
        min_element_len: usize,
        kind: SerKind,
        field: &'static str,
    ) -> SerResult<usize> {
        if count > self.limits.max_list_len {
            warn!(
                %kind,
                field,
                count,
                max = self.limits.max_list_len,
                "element count exceeds configured limit"
            );
            return Err(SerError::invalid_msg_data(kind, field));
        }
        let count = count as usize;
        if min_element_len > 0 && count > self.remaining() / min_element_len {
            warn!(
                %kind,
                field,
                count,
                remaining = self.remaining(),
                "element count cannot fit in remaining input"
            );
            return Err(SerError::invalid_msg_data(kind, field));
        }
        Ok(count)
    }
}

impl<'a> From<&'a [u8]> for ByteReader<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ByteReader::new(bytes)
    }
}

/// Cursor over a caller-owned output buffer.
#[derive(Debug)]
pub struct ByteWriter<'a> {
    buffer: &'a mut [u8],
    offset: usize,
}

impl<'a> ByteWriter<'a> {
    /// Creates a writer starting at the beginning of `buffer`.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    /// Returns the number of bytes written so far.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Returns the space left in the buffer.
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    /// Claims the next `len` bytes of the buffer and returns them for filling.
    pub fn reserve(
        &mut self,
        len: usize,
        kind: SerKind,
        field: &'static str,
    ) -> SerResult<&mut [u8]> {
        let available = self.remaining();
        if len > available {
            return Err(SerError::buffer_overflow(kind, field, len, available));
        }
        let start = self.offset;
        self.offset += len;
        Ok(&mut self.buffer[start..start + len])
    }

    /// Copies `bytes` into the buffer.
    pub fn write_bytes(
        &mut self,
        bytes: &[u8],
        kind: SerKind,
        field: &'static str,
    ) -> SerResult<()> {
        self.reserve(bytes.len(), kind, field)?
            .copy_from_slice(bytes);
        Ok(())
    }
}
