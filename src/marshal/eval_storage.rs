use super::field::FieldVecNode;
use crate::commitment::EvalStorage;
use crate::config::Endian;
use crate::field::{FieldCodec, FieldNode};
use crate::ser::{
    ByteReader, ByteWriter, Integral, KeyedList, List, Node, SerError, SerKind, SerResult,
};

/// Evaluation storage on the wire: batch info, per-polynomial point counts
/// and the flattened values.
///
/// Batch info is a keyed list of (batch index, polynomial count). Reading
/// checks that the polynomial counts add up to the number of point counts and
/// that the point counts add up to the number of values, so every node can be
/// turned back into storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalStorageNode<F, E> {
    batch_info: KeyedList<E, Integral<u64, E>>,
    eval_points: List<E, Integral<u64, E>>,
    values: FieldVecNode<F, E>,
}

impl<F: FieldCodec, E: Endian> EvalStorageNode<F, E> {
    /// Polynomial count per batch, in batch order.
    pub fn batch_info(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.batch_info
            .entries()
            .iter()
            .map(|(batch, count)| (*batch, count.value()))
    }

    /// Number of stored evaluation values.
    pub fn value_count(&self) -> usize {
        self.values.len()
    }
}

fn checked_sum(mut counts: impl Iterator<Item = u64>, field: &'static str) -> SerResult<u64> {
    counts.try_fold(0u64, |acc, count| acc.checked_add(count))
        .ok_or_else(|| SerError::invalid_msg_data(SerKind::EvalStorage, field))
}

impl<F: FieldCodec, E: Endian> Node for EvalStorageNode<F, E> {
    const MIN_LENGTH: usize = 3 * 4;

    fn length(&self) -> usize {
        self.batch_info.length() + self.eval_points.length() + self.values.length()
    }

    fn write(&self, out: &mut ByteWriter<'_>) -> SerResult<()> {
        self.batch_info.write(out)?;
        self.eval_points.write(out)?;
        self.values.write(out)
    }

    fn read(cursor: &mut ByteReader<'_>) -> SerResult<Self> {
        let batch_info = KeyedList::<E, Integral<u64, E>>::read(cursor)?;
        let eval_points = List::<E, Integral<u64, E>>::read(cursor)?;
        let values = FieldVecNode::<F, E>::read(cursor)?;

        let polys = checked_sum(
            batch_info.entries().iter().map(|(_, count)| count.value()),
            "batch info",
        )?;
        if polys != eval_points.len() as u64 {
            return Err(SerError::invalid_msg_data(SerKind::EvalStorage, "eval points"));
        }
        let total = checked_sum(eval_points.items().iter().map(Integral::value), "eval points")?;
        if total != values.len() as u64 {
            return Err(SerError::invalid_msg_data(SerKind::EvalStorage, "values"));
        }
        Ok(Self {
            batch_info,
            eval_points,
            values,
        })
    }
}

/// Wraps a storage, deriving its batch info on the way.
pub fn fill_eval_storage<F: FieldCodec, E: Endian>(
    storage: &EvalStorage<F>,
) -> EvalStorageNode<F, E> {
    let batch_info = KeyedList::from_sorted(
        storage
            .batch_info()
            .into_iter()
            .map(|(batch, polys)| (batch, Integral::new(polys as u64))),
    );
    let eval_points = storage
        .batches()
        .flat_map(|(_, polys)| polys.iter())
        .map(|evaluations| Integral::new(evaluations.len() as u64))
        .collect();
    let values = storage
        .batches()
        .flat_map(|(_, polys)| polys.iter().flatten())
        .cloned()
        .map(FieldNode::new)
        .collect();
    EvalStorageNode {
        batch_info,
        eval_points,
        values,
    }
}

/// Rebuilds a storage from a node whose counts were checked on read.
pub fn make_eval_storage<F: FieldCodec, E: Endian>(node: EvalStorageNode<F, E>) -> EvalStorage<F> {
    let EvalStorageNode {
        batch_info,
        eval_points,
        values,
    } = node;
    let mut counts = eval_points
        .into_items()
        .into_iter()
        .map(|count| count.value() as usize);
    let mut values = values.into_items().into_iter().map(FieldNode::into_value);
    batch_info
        .into_entries()
        .into_iter()
        .map(|(batch, polys)| {
            let evaluations: Vec<Vec<F>> = (0..polys.value())
                .map(|_| {
                    let points = counts.next().unwrap_or(0);
                    values.by_ref().take(points).collect::<Vec<F>>()
                })
                .collect();
            (batch, evaluations)
        })
        .collect()
}
