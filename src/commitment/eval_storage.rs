use std::collections::BTreeMap;

/// Number of polynomials in each batch, keyed by batch index.
pub type BatchInfo = BTreeMap<u64, usize>;

/// Claimed polynomial evaluations grouped by commitment batch.
///
/// For every batch the storage keeps one vector per polynomial holding that
/// polynomial's evaluations at its points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalStorage<F> {
    batches: BTreeMap<u64, Vec<Vec<F>>>,
}

impl<F> EvalStorage<F> {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self {
            batches: BTreeMap::new(),
        }
    }

    /// Stores the evaluations of a batch, replacing any previous entry.
    pub fn insert_batch(&mut self, batch: u64, evaluations: Vec<Vec<F>>) -> Option<Vec<Vec<F>>> {
        self.batches.insert(batch, evaluations)
    }

    /// Evaluations of one batch.
    pub fn batch(&self, batch: u64) -> Option<&[Vec<F>]> {
        self.batches.get(&batch).map(Vec::as_slice)
    }

    /// Evaluations of polynomial `poly` of `batch`.
    pub fn evaluations(&self, batch: u64, poly: usize) -> Option<&[F]> {
        self.batches
            .get(&batch)
            .and_then(|polys| polys.get(poly))
            .map(Vec::as_slice)
    }

    /// Iterates over batches in ascending index order.
    pub fn batches(&self) -> impl Iterator<Item = (u64, &[Vec<F>])> {
        self.batches
            .iter()
            .map(|(batch, polys)| (*batch, polys.as_slice()))
    }

    /// Derives the polynomial count per batch.
    pub fn batch_info(&self) -> BatchInfo {
        self.batches
            .iter()
            .map(|(batch, polys)| (*batch, polys.len()))
            .collect()
    }

    /// Total number of stored evaluations.
    pub fn total_evaluations(&self) -> usize {
        self.batches.values().flatten().map(Vec::len).sum()
    }

    /// Returns `true` when no batch is stored.
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

impl<F> Default for EvalStorage<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> FromIterator<(u64, Vec<Vec<F>>)> for EvalStorage<F> {
    fn from_iter<I: IntoIterator<Item = (u64, Vec<Vec<F>>)>>(iter: I) -> Self {
        Self {
            batches: iter.into_iter().collect(),
        }
    }
}
