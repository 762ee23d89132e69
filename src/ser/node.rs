use tracing::{debug, trace};

use super::cursor::{ByteReader, ByteWriter};
use super::error::{SerError, SerKind, SerResult};
use crate::config::ReadLimits;

/// A marshalling tree node with a fixed binary layout.
///
/// Nodes are produced either by a `fill_*` helper from a native value or by
/// [`Node::read`]; there is no partially initialised node.
pub trait Node: Sized {
    /// Smallest number of bytes any value of this node occupies on the wire.
    const MIN_LENGTH: usize;

    /// Exact number of bytes [`Node::write`] emits for this value.
    fn length(&self) -> usize;

    /// Writes the node at the writer position.
    fn write(&self, out: &mut ByteWriter<'_>) -> SerResult<()>;

    /// Reads a node from the cursor, consuming exactly its encoding.
    fn read(cursor: &mut ByteReader<'_>) -> SerResult<Self>;
}

/// Encodes a node into a freshly allocated buffer sized by [`Node::length`].
pub fn encode<N: Node>(node: &N) -> SerResult<Vec<u8>> {
    let mut buffer = vec![0u8; node.length()];
    let written = encode_into(node, &mut buffer)?;
    buffer.truncate(written);
    Ok(buffer)
}

/// Encodes a node into `buffer`, returning the number of bytes written.
pub fn encode_into<N: Node>(node: &N, buffer: &mut [u8]) -> SerResult<usize> {
    let needed = node.length();
    if buffer.len() < needed {
        debug!(needed, available = buffer.len(), "output buffer too small");
        return Err(SerError::buffer_overflow(
            SerKind::Stream,
            "buffer",
            needed,
            buffer.len(),
        ));
    }
    let mut writer = ByteWriter::new(buffer);
    node.write(&mut writer)?;
    trace!(written = writer.position(), "encoded node");
    Ok(writer.position())
}

/// Decodes a node that must span the whole of `bytes`.
pub fn decode<N: Node>(bytes: &[u8]) -> SerResult<N> {
    decode_with_limits(bytes, ReadLimits::default())
}

/// Decodes a node that must span the whole of `bytes`, enforcing `limits`.
pub fn decode_with_limits<N: Node>(bytes: &[u8], limits: ReadLimits) -> SerResult<N> {
    let (node, consumed) = decode_prefix_with_limits(bytes, limits)?;
    ensure_consumed(bytes.len(), consumed)?;
    Ok(node)
}

/// Decodes a node from the start of `bytes`, returning it together with the
/// number of bytes it occupied.
pub fn decode_prefix<N: Node>(bytes: &[u8]) -> SerResult<(N, usize)> {
    decode_prefix_with_limits(bytes, ReadLimits::default())
}

/// Prefix decode enforcing `limits`.
pub fn decode_prefix_with_limits<N: Node>(
    bytes: &[u8],
    limits: ReadLimits,
) -> SerResult<(N, usize)> {
    if bytes.len() > limits.max_input_bytes {
        debug!(
            len = bytes.len(),
            max = limits.max_input_bytes,
            "input exceeds configured size"
        );
        return Err(SerError::invalid_msg_data(SerKind::Stream, "input length"));
    }
    let mut cursor = ByteReader::with_limits(bytes, limits);
    let node = N::read(&mut cursor).map_err(|err| {
        debug!(error = %err, offset = cursor.position(), "decode failed");
        err
    })?;
    trace!(consumed = cursor.position(), "decoded node");
    Ok((node, cursor.position()))
}

fn ensure_consumed(total: usize, consumed: usize) -> SerResult<()> {
    if consumed == total {
        Ok(())
    } else {
        debug!(consumed, remaining = total - consumed, "trailing bytes after node");
        Err(SerError::trailing_bytes(
            SerKind::Stream,
            consumed,
            total - consumed,
        ))
    }
}
