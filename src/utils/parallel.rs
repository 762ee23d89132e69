//! Batch encoding across threads.
//!
//! With the `parallel` feature the nodes are encoded on the rayon pool,
//! otherwise sequentially. Output order and bytes are identical either way.

use crate::ser::{encode, Node, SerResult};

/// Returns `true` when the crate was built with the `parallel` feature.
pub const fn parallelism_enabled() -> bool {
    cfg!(feature = "parallel")
}

/// Encodes every node independently, preserving input order.
#[cfg(feature = "parallel")]
pub fn encode_all<N: Node + Sync>(nodes: &[N]) -> SerResult<Vec<Vec<u8>>> {
    use rayon::prelude::*;

    nodes.par_iter().map(encode).collect()
}

/// Encodes every node independently, preserving input order.
#[cfg(not(feature = "parallel"))]
pub fn encode_all<N: Node + Sync>(nodes: &[N]) -> SerResult<Vec<Vec<u8>>> {
    nodes.iter().map(encode).collect()
}
