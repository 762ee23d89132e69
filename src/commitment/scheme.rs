use core::fmt::Debug;
use core::marker::PhantomData;

use super::merkle::DIGEST_SIZE;
use crate::config::Endian;
use crate::field::FieldCodec;
use crate::ser::Node;

/// Commitment scheme whose artifacts have a fixed wire layout.
///
/// The scheme type alone selects the proof layout, so a single-witness KZG
/// proof can never be read with the batched layout or the other way round.
pub trait CommitmentScheme {
    /// Field of the claimed evaluations.
    type Field: FieldCodec;
    /// Native commitment.
    type Commitment: Debug + Clone + PartialEq;
    /// Native evaluation proof.
    type Proof: Debug + Clone + PartialEq;
    /// Marshalling node of a commitment.
    type CommitmentNode<E: Endian>: Node;
    /// Marshalling node of an evaluation proof.
    type ProofNode<E: Endian>: Node;

    /// Builds the commitment node.
    fn fill_commitment<E: Endian>(commitment: &Self::Commitment) -> Self::CommitmentNode<E>;

    /// Rebuilds a commitment from its node.
    fn make_commitment<E: Endian>(node: Self::CommitmentNode<E>) -> Self::Commitment;

    /// Builds the proof node.
    fn fill_proof<E: Endian>(proof: &Self::Proof) -> Self::ProofNode<E>;

    /// Rebuilds a proof from its node.
    fn make_proof<E: Endian>(node: Self::ProofNode<E>) -> Self::Proof;
}

/// KZG with one opening witness per proof.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Kzg<C>(PhantomData<C>);

/// Batched KZG with two opening witnesses and per-batch commitments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchedKzg<C>(PhantomData<C>);

/// FRI-based list polynomial commitment with `N`-byte Merkle digests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lpc<F, const N: usize = DIGEST_SIZE>(PhantomData<F>);
