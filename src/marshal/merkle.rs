use crate::commitment::{MerklePathElement, MerkleProof};
use crate::config::Endian;
use crate::ser::{Bundle, FixedByteArray, Integral, List};

/// (position `u64`, sibling digest).
pub type MerklePathElementNode<E, const N: usize> = Bundle<(Integral<u64, E>, FixedByteArray<N>)>;

/// One list of siblings per layer.
pub type MerklePathNode<E, const N: usize> = List<E, List<E, MerklePathElementNode<E, N>>>;

/// (leaf index `u64`, root digest, path).
pub type MerkleProofNode<E, const N: usize> =
    Bundle<(Integral<u64, E>, FixedByteArray<N>, MerklePathNode<E, N>)>;

/// Builds the node of a Merkle authentication path.
pub fn fill_merkle_proof<E: Endian, const N: usize>(
    proof: &MerkleProof<N>,
) -> MerkleProofNode<E, N> {
    let path = proof
        .path
        .iter()
        .map(|layer| {
            layer
                .iter()
                .map(|element| {
                    Bundle((
                        Integral::new(element.position),
                        FixedByteArray::new(element.hash),
                    ))
                })
                .collect()
        })
        .collect();
    Bundle((
        Integral::new(proof.leaf_index),
        FixedByteArray::new(proof.root),
        path,
    ))
}

/// Rebuilds a Merkle proof from its node.
pub fn make_merkle_proof<E: Endian, const N: usize>(node: MerkleProofNode<E, N>) -> MerkleProof<N> {
    let (leaf_index, root, path) = node.into_fields();
    let path = path
        .into_items()
        .into_iter()
        .map(|layer| {
            layer
                .into_items()
                .into_iter()
                .map(|element| {
                    let (position, hash) = element.into_fields();
                    MerklePathElement {
                        position: position.value(),
                        hash: hash.into_bytes(),
                    }
                })
                .collect()
        })
        .collect();
    MerkleProof::new(leaf_index.value(), root.into_bytes(), path)
}
