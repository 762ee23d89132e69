use std::collections::BTreeMap;

use super::eval_storage::EvalStorage;

/// Single-point KZG opening proof.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KzgProof<F, P> {
    /// Claimed evaluations.
    pub z: EvalStorage<F>,
    /// Opening witness.
    pub kzg_proof: P,
}

impl<F, P> KzgProof<F, P> {
    /// Creates a proof.
    pub fn new(z: EvalStorage<F>, kzg_proof: P) -> Self {
        Self { z, kzg_proof }
    }
}

/// Batched KZG opening proof carrying two opening witnesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchedKzgProof<F, P> {
    /// Claimed evaluations.
    pub z: EvalStorage<F>,
    /// First opening witness.
    pub pi_1: P,
    /// Second opening witness.
    pub pi_2: P,
}

impl<F, P> BatchedKzgProof<F, P> {
    /// Creates a proof.
    pub fn new(z: EvalStorage<F>, pi_1: P, pi_2: P) -> Self {
        Self { z, pi_1, pi_2 }
    }
}

/// Commitments keyed by batch index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchedCommitments<P> {
    commitments: BTreeMap<u64, P>,
}

impl<P> BatchedCommitments<P> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            commitments: BTreeMap::new(),
        }
    }

    /// Records the commitment of a batch, replacing any previous entry.
    pub fn insert(&mut self, batch: u64, commitment: P) -> Option<P> {
        self.commitments.insert(batch, commitment)
    }

    /// Commitment of one batch.
    pub fn get(&self, batch: u64) -> Option<&P> {
        self.commitments.get(&batch)
    }

    /// Iterates in ascending batch order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &P)> {
        self.commitments.iter().map(|(batch, point)| (*batch, point))
    }

    /// Number of committed batches.
    pub fn len(&self) -> usize {
        self.commitments.len()
    }

    /// Returns `true` when nothing is committed.
    pub fn is_empty(&self) -> bool {
        self.commitments.is_empty()
    }
}

impl<P> Default for BatchedCommitments<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> FromIterator<(u64, P)> for BatchedCommitments<P> {
    fn from_iter<I: IntoIterator<Item = (u64, P)>>(iter: I) -> Self {
        Self {
            commitments: iter.into_iter().collect(),
        }
    }
}

impl<P> IntoIterator for BatchedCommitments<P> {
    type Item = (u64, P);
    type IntoIter = std::collections::btree_map::IntoIter<u64, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.commitments.into_iter()
    }
}
