use super::eval_storage::{fill_eval_storage, make_eval_storage, EvalStorageNode};
use crate::commitment::{BatchedCommitments, BatchedKzgProof, KzgProof};
use crate::config::Endian;
use crate::field::{FieldCodec, PointCodec, PointNode};
use crate::ser::{Bundle, KeyedList};

/// A KZG commitment is a single curve point.
pub type KzgCommitmentNode<P, E> = PointNode<P, E>;

/// (batch index, commitment) pairs in ascending batch order.
pub type BatchedCommitmentsNode<P, E> = KeyedList<E, PointNode<P, E>>;

/// (evaluations, opening witness).
pub type KzgProofNode<F, P, E> = Bundle<(EvalStorageNode<F, E>, PointNode<P, E>)>;

/// (evaluations, first witness, second witness).
pub type BatchedKzgProofNode<F, P, E> =
    Bundle<(EvalStorageNode<F, E>, PointNode<P, E>, PointNode<P, E>)>;

/// Wraps a single KZG commitment point.
pub fn fill_kzg_commitment<P: PointCodec, E: Endian>(commitment: &P) -> KzgCommitmentNode<P, E> {
    PointNode::new(commitment.clone())
}

/// Unwraps a single KZG commitment point.
pub fn make_kzg_commitment<P: PointCodec, E: Endian>(node: KzgCommitmentNode<P, E>) -> P {
    node.into_value()
}

/// Wraps per-batch commitment points, ordered by batch.
pub fn fill_batched_commitments<P: PointCodec, E: Endian>(
    commitments: &BatchedCommitments<P>,
) -> BatchedCommitmentsNode<P, E> {
    KeyedList::from_sorted(
        commitments
            .iter()
            .map(|(batch, point)| (batch, PointNode::new(point.clone()))),
    )
}

/// Rebuilds per-batch commitment points.
pub fn make_batched_commitments<P: PointCodec, E: Endian>(
    node: BatchedCommitmentsNode<P, E>,
) -> BatchedCommitments<P> {
    node.into_entries()
        .into_iter()
        .map(|(batch, point)| (batch, point.into_value()))
        .collect()
}

/// Builds the node of a single-witness proof.
///
/// Batch info is recomputed from the evaluations rather than taken from any
/// cached copy.
pub fn fill_kzg_proof<F: FieldCodec, P: PointCodec, E: Endian>(
    proof: &KzgProof<F, P>,
) -> KzgProofNode<F, P, E> {
    Bundle((
        fill_eval_storage(&proof.z),
        PointNode::new(proof.kzg_proof.clone()),
    ))
}

/// Rebuilds a single-point KZG proof.
pub fn make_kzg_proof<F: FieldCodec, P: PointCodec, E: Endian>(
    node: KzgProofNode<F, P, E>,
) -> KzgProof<F, P> {
    let (z, kzg_proof) = node.into_fields();
    KzgProof::new(make_eval_storage(z), kzg_proof.into_value())
}

/// Builds the node of a KZG proof with two opening points.
pub fn fill_batched_kzg_proof<F: FieldCodec, P: PointCodec, E: Endian>(
    proof: &BatchedKzgProof<F, P>,
) -> BatchedKzgProofNode<F, P, E> {
    Bundle((
        fill_eval_storage(&proof.z),
        PointNode::new(proof.pi_1.clone()),
        PointNode::new(proof.pi_2.clone()),
    ))
}

/// Rebuilds a KZG proof with two opening points.
pub fn make_batched_kzg_proof<F: FieldCodec, P: PointCodec, E: Endian>(
    node: BatchedKzgProofNode<F, P, E>,
) -> BatchedKzgProof<F, P> {
    let (z, pi_1, pi_2) = node.into_fields();
    BatchedKzgProof::new(make_eval_storage(z), pi_1.into_value(), pi_2.into_value())
}
