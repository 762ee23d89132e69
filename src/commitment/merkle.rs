use core::fmt;

/// Size of the digests used by the default Merkle trees.
pub const DIGEST_SIZE: usize = 32;

/// Sibling entry on an authentication path.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MerklePathElement<const N: usize = DIGEST_SIZE> {
    /// Position of the sibling within its node.
    pub position: u64,
    /// Sibling digest.
    pub hash: [u8; N],
}

impl<const N: usize> fmt::Debug for MerklePathElement<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MerklePathElement({}, 0x", self.position)?;
        for byte in &self.hash {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

/// Merkle authentication path from a leaf to the root.
///
/// Each layer holds the siblings of the node on the path, so arities above
/// two store several entries per layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MerkleProof<const N: usize = DIGEST_SIZE> {
    /// Index of the authenticated leaf.
    pub leaf_index: u64,
    /// Tree root.
    pub root: [u8; N],
    /// Siblings per layer, leaf layer first.
    pub path: Vec<Vec<MerklePathElement<N>>>,
}

impl<const N: usize> MerkleProof<N> {
    /// Creates a proof.
    pub fn new(leaf_index: u64, root: [u8; N], path: Vec<Vec<MerklePathElement<N>>>) -> Self {
        Self {
            leaf_index,
            root,
            path,
        }
    }

    /// Number of layers on the path.
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}
