use std::collections::BTreeMap;

use super::eval_storage::EvalStorage;
use super::merkle::{MerkleProof, DIGEST_SIZE};

/// Opening of the committed polynomials of one batch at a query position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriInitialProof<F, const N: usize = DIGEST_SIZE> {
    /// Opened values, one vector per polynomial.
    pub values: Vec<Vec<F>>,
    /// Authentication path of the opened leaf.
    pub proof: MerkleProof<N>,
}

/// Opening of one folding round at a query position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriRoundProof<F, const N: usize = DIGEST_SIZE> {
    /// Opened coset values.
    pub y: Vec<F>,
    /// Authentication path into the round commitment.
    pub proof: MerkleProof<N>,
}

/// Everything revealed for a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriQueryProof<F, const N: usize = DIGEST_SIZE> {
    /// Initial openings keyed by batch index.
    pub initial_proof: BTreeMap<u64, FriInitialProof<F, N>>,
    /// Round openings in folding order.
    pub round_proofs: Vec<FriRoundProof<F, N>>,
}

/// FRI low-degree proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriProof<F, const N: usize = DIGEST_SIZE> {
    /// Roots of the folded layer commitments.
    pub fri_roots: Vec<[u8; N]>,
    /// Coefficients of the final polynomial.
    pub final_polynomial: Vec<F>,
    /// Per-query openings.
    pub query_proofs: Vec<FriQueryProof<F, N>>,
}

impl<F, const N: usize> FriProof<F, N> {
    /// Number of folding rounds.
    pub fn num_rounds(&self) -> usize {
        self.fri_roots.len()
    }
}

/// List polynomial commitment opening: evaluations plus their FRI proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LpcProof<F, const N: usize = DIGEST_SIZE> {
    /// Claimed evaluations.
    pub z: EvalStorage<F>,
    /// Proximity proof.
    pub fri_proof: FriProof<F, N>,
}
