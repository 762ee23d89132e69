use super::cursor::{ByteReader, ByteWriter};
use super::error::{SerKind, SerResult};
use super::node::Node;

/// Exactly `N` raw bytes, written verbatim in either byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedByteArray<const N: usize>([u8; N]);

impl<const N: usize> FixedByteArray<N> {
    /// Wraps a byte array.
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Returns the wrapped bytes.
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    /// Consumes the node and returns the bytes.
    pub const fn into_bytes(self) -> [u8; N] {
        self.0
    }
}

impl<const N: usize> From<[u8; N]> for FixedByteArray<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> Node for FixedByteArray<N> {
    const MIN_LENGTH: usize = N;

    fn length(&self) -> usize {
        N
    }

    fn write(&self, out: &mut ByteWriter<'_>) -> SerResult<()> {
        out.write_bytes(&self.0, SerKind::Bytes, "bytes")
    }

    fn read(cursor: &mut ByteReader<'_>) -> SerResult<Self> {
        cursor.read_array::<N>(SerKind::Bytes, "bytes").map(Self)
    }
}
