use crate::config::Endian;
use crate::field::{FieldCodec, FieldNode};
use crate::ser::List;

/// Length-prefixed field element vector.
pub type FieldVecNode<F, E> = List<E, FieldNode<F, E>>;

/// Length-prefixed list of field element vectors.
pub type FieldMatrixNode<F, E> = List<E, FieldVecNode<F, E>>;

/// Wraps a vector of field elements.
pub fn fill_field_vec<F: FieldCodec, E: Endian>(values: &[F]) -> FieldVecNode<F, E> {
    values.iter().cloned().map(FieldNode::new).collect()
}

/// Unwraps a vector of field elements.
pub fn make_field_vec<F: FieldCodec, E: Endian>(node: FieldVecNode<F, E>) -> Vec<F> {
    node.into_items()
        .into_iter()
        .map(FieldNode::into_value)
        .collect()
}

/// Wraps a list of field vectors.
pub fn fill_field_matrix<F: FieldCodec, E: Endian>(rows: &[Vec<F>]) -> FieldMatrixNode<F, E> {
    rows.iter()
        .map(|row| fill_field_vec::<F, E>(row))
        .collect()
}

/// Unwraps a list of field vectors.
pub fn make_field_matrix<F: FieldCodec, E: Endian>(node: FieldMatrixNode<F, E>) -> Vec<Vec<F>> {
    node.into_items()
        .into_iter()
        .map(make_field_vec::<F, E>)
        .collect()
}
