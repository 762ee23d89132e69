use super::eval_storage::{fill_eval_storage, make_eval_storage, EvalStorageNode};
use super::field::{
    fill_field_matrix, fill_field_vec, make_field_matrix, make_field_vec, FieldMatrixNode,
    FieldVecNode,
};
use super::merkle::{fill_merkle_proof, make_merkle_proof, MerkleProofNode};
use crate::commitment::{
    BatchedCommitments, FriInitialProof, FriProof, FriQueryProof, FriRoundProof, LpcProof,
};
use crate::config::Endian;
use crate::field::FieldCodec;
use crate::ser::{Bundle, FixedByteArray, KeyedList, List};

/// (opened values per polynomial, Merkle proof).
pub type FriInitialProofNode<F, E, const N: usize> =
    Bundle<(FieldMatrixNode<F, E>, MerkleProofNode<E, N>)>;

/// (opened coset values, Merkle proof).
pub type FriRoundProofNode<F, E, const N: usize> =
    Bundle<(FieldVecNode<F, E>, MerkleProofNode<E, N>)>;

/// (initial openings keyed by batch, round openings).
pub type FriQueryProofNode<F, E, const N: usize> = Bundle<(
    KeyedList<E, FriInitialProofNode<F, E, N>>,
    List<E, FriRoundProofNode<F, E, N>>,
)>;

/// (layer roots, final polynomial, query proofs).
pub type FriProofNode<F, E, const N: usize> = Bundle<(
    List<E, FixedByteArray<N>>,
    FieldVecNode<F, E>,
    List<E, FriQueryProofNode<F, E, N>>,
)>;

/// (evaluations, FRI proof).
pub type LpcProofNode<F, E, const N: usize> =
    Bundle<(EvalStorageNode<F, E>, FriProofNode<F, E, N>)>;

/// Merkle roots keyed by batch index.
pub type LpcCommitmentsNode<E, const N: usize> = KeyedList<E, FixedByteArray<N>>;

fn fill_query_proof<F: FieldCodec, E: Endian, const N: usize>(
    query: &FriQueryProof<F, N>,
) -> FriQueryProofNode<F, E, N> {
    let initial: KeyedList<E, FriInitialProofNode<F, E, N>> =
        KeyedList::from_sorted(query.initial_proof.iter().map(|(batch, opening)| {
            (
                *batch,
                Bundle((
                    fill_field_matrix(&opening.values),
                    fill_merkle_proof(&opening.proof),
                )),
            )
        }));
    let rounds: List<E, FriRoundProofNode<F, E, N>> = query
        .round_proofs
        .iter()
        .map(|round| Bundle((fill_field_vec(&round.y), fill_merkle_proof(&round.proof))))
        .collect();
    Bundle((initial, rounds))
}

fn make_query_proof<F: FieldCodec, E: Endian, const N: usize>(
    node: FriQueryProofNode<F, E, N>,
) -> FriQueryProof<F, N> {
    let (initial, rounds) = node.into_fields();
    let initial_proof = initial
        .into_entries()
        .into_iter()
        .map(|(batch, opening)| {
            let (values, proof) = opening.into_fields();
            (
                batch,
                FriInitialProof {
                    values: make_field_matrix(values),
                    proof: make_merkle_proof(proof),
                },
            )
        })
        .collect();
    let round_proofs = rounds
        .into_items()
        .into_iter()
        .map(|round| {
            let (y, proof) = round.into_fields();
            FriRoundProof {
                y: make_field_vec(y),
                proof: make_merkle_proof(proof),
            }
        })
        .collect();
    FriQueryProof {
        initial_proof,
        round_proofs,
    }
}

/// Builds the node tree of a FRI proof.
pub fn fill_fri_proof<F: FieldCodec, E: Endian, const N: usize>(
    proof: &FriProof<F, N>,
) -> FriProofNode<F, E, N> {
    Bundle((
        proof
            .fri_roots
            .iter()
            .copied()
            .map(FixedByteArray::new)
            .collect(),
        fill_field_vec(&proof.final_polynomial),
        proof
            .query_proofs
            .iter()
            .map(fill_query_proof::<F, E, N>)
            .collect(),
    ))
}

/// Rebuilds a FRI proof from its node tree.
pub fn make_fri_proof<F: FieldCodec, E: Endian, const N: usize>(
    node: FriProofNode<F, E, N>,
) -> FriProof<F, N> {
    let (roots, final_polynomial, queries) = node.into_fields();
    FriProof {
        fri_roots: roots
            .into_items()
            .into_iter()
            .map(FixedByteArray::into_bytes)
            .collect(),
        final_polynomial: make_field_vec(final_polynomial),
        query_proofs: queries
            .into_items()
            .into_iter()
            .map(make_query_proof::<F, E, N>)
            .collect(),
    }
}

/// Builds the node of an LPC proof: evaluations followed by the FRI proof.
pub fn fill_lpc_proof<F: FieldCodec, E: Endian, const N: usize>(
    proof: &LpcProof<F, N>,
) -> LpcProofNode<F, E, N> {
    Bundle((fill_eval_storage(&proof.z), fill_fri_proof(&proof.fri_proof)))
}

/// Rebuilds an LPC proof from its node.
pub fn make_lpc_proof<F: FieldCodec, E: Endian, const N: usize>(
    node: LpcProofNode<F, E, N>,
) -> LpcProof<F, N> {
    let (z, fri_proof) = node.into_fields();
    LpcProof {
        z: make_eval_storage(z),
        fri_proof: make_fri_proof(fri_proof),
    }
}

/// Wraps the Merkle roots of an LPC commitment, ordered by batch.
pub fn fill_lpc_commitments<E: Endian, const N: usize>(
    roots: &BatchedCommitments<[u8; N]>,
) -> LpcCommitmentsNode<E, N> {
    KeyedList::from_sorted(
        roots
            .iter()
            .map(|(batch, root)| (batch, FixedByteArray::new(*root))),
    )
}

/// Unwraps the Merkle roots of an LPC commitment.
pub fn make_lpc_commitments<E: Endian, const N: usize>(
    node: LpcCommitmentsNode<E, N>,
) -> BatchedCommitments<[u8; N]> {
    node.into_entries()
        .into_iter()
        .map(|(batch, root)| (batch, root.into_bytes()))
        .collect()
}
