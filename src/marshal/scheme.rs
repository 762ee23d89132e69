use super::fri::{
    fill_lpc_commitments, fill_lpc_proof, make_lpc_commitments, make_lpc_proof,
    LpcCommitmentsNode, LpcProofNode,
};
use super::kzg::{
    fill_batched_commitments, fill_batched_kzg_proof, fill_kzg_commitment, fill_kzg_proof,
    make_batched_commitments, make_batched_kzg_proof, make_kzg_commitment, make_kzg_proof,
    BatchedCommitmentsNode, BatchedKzgProofNode, KzgCommitmentNode, KzgProofNode,
};
use crate::commitment::{
    BatchedCommitments, BatchedKzg, BatchedKzgProof, CommitmentScheme, Kzg, KzgProof, Lpc,
    LpcProof,
};
use crate::config::Endian;
use crate::curve::{G1Point, PairingCurve};
use crate::field::FieldCodec;

impl<C: PairingCurve> CommitmentScheme for Kzg<C> {
    type Field = C::Scalar;
    type Commitment = G1Point<C>;
    type Proof = KzgProof<C::Scalar, G1Point<C>>;
    type CommitmentNode<E: Endian> = KzgCommitmentNode<G1Point<C>, E>;
    type ProofNode<E: Endian> = KzgProofNode<C::Scalar, G1Point<C>, E>;

    fn fill_commitment<E: Endian>(commitment: &Self::Commitment) -> Self::CommitmentNode<E> {
        fill_kzg_commitment(commitment)
    }

    fn make_commitment<E: Endian>(node: Self::CommitmentNode<E>) -> Self::Commitment {
        make_kzg_commitment(node)
    }

    fn fill_proof<E: Endian>(proof: &Self::Proof) -> Self::ProofNode<E> {
        fill_kzg_proof(proof)
    }

    fn make_proof<E: Endian>(node: Self::ProofNode<E>) -> Self::Proof {
        make_kzg_proof(node)
    }
}

impl<C: PairingCurve> CommitmentScheme for BatchedKzg<C> {
    type Field = C::Scalar;
    type Commitment = BatchedCommitments<G1Point<C>>;
    type Proof = BatchedKzgProof<C::Scalar, G1Point<C>>;
    type CommitmentNode<E: Endian> = BatchedCommitmentsNode<G1Point<C>, E>;
    type ProofNode<E: Endian> = BatchedKzgProofNode<C::Scalar, G1Point<C>, E>;

    fn fill_commitment<E: Endian>(commitment: &Self::Commitment) -> Self::CommitmentNode<E> {
        fill_batched_commitments(commitment)
    }

    fn make_commitment<E: Endian>(node: Self::CommitmentNode<E>) -> Self::Commitment {
        make_batched_commitments(node)
    }

    fn fill_proof<E: Endian>(proof: &Self::Proof) -> Self::ProofNode<E> {
        fill_batched_kzg_proof(proof)
    }

    fn make_proof<E: Endian>(node: Self::ProofNode<E>) -> Self::Proof {
        make_batched_kzg_proof(node)
    }
}

impl<F: FieldCodec, const N: usize> CommitmentScheme for Lpc<F, N> {
    type Field = F;
    type Commitment = BatchedCommitments<[u8; N]>;
    type Proof = LpcProof<F, N>;
    type CommitmentNode<E: Endian> = LpcCommitmentsNode<E, N>;
    type ProofNode<E: Endian> = LpcProofNode<F, E, N>;

    fn fill_commitment<E: Endian>(commitment: &Self::Commitment) -> Self::CommitmentNode<E> {
        fill_lpc_commitments(commitment)
    }

    fn make_commitment<E: Endian>(node: Self::CommitmentNode<E>) -> Self::Commitment {
        make_lpc_commitments(node)
    }

    fn fill_proof<E: Endian>(proof: &Self::Proof) -> Self::ProofNode<E> {
        fill_lpc_proof(proof)
    }

    fn make_proof<E: Endian>(node: Self::ProofNode<E>) -> Self::Proof {
        make_lpc_proof(node)
    }
}

/// Builds the evaluation proof node of scheme `S`.
pub fn fill_eval_proof<S: CommitmentScheme, E: Endian>(proof: &S::Proof) -> S::ProofNode<E> {
    S::fill_proof::<E>(proof)
}

/// Rebuilds an evaluation proof of scheme `S`.
pub fn make_eval_proof<S: CommitmentScheme, E: Endian>(node: S::ProofNode<E>) -> S::Proof {
    S::make_proof::<E>(node)
}

/// Builds the commitment node of scheme `S`.
pub fn fill_commitment<S: CommitmentScheme, E: Endian>(
    commitment: &S::Commitment,
) -> S::CommitmentNode<E> {
    S::fill_commitment::<E>(commitment)
}

/// Rebuilds a commitment of scheme `S`.
pub fn make_commitment<S: CommitmentScheme, E: Endian>(
    node: S::CommitmentNode<E>,
) -> S::Commitment {
    S::make_commitment::<E>(node)
}
