use super::field::{fill_field_matrix, make_field_matrix, FieldMatrixNode};
use crate::config::Endian;
use crate::field::FieldCodec;
use crate::plonk::AssignmentTable;
use crate::ser::{Bundle, Integral};

/// (usable rows `u64`, witness, public input, constant and selector columns).
pub type AssignmentTableNode<F, E> = Bundle<(
    Integral<u64, E>,
    FieldMatrixNode<F, E>,
    FieldMatrixNode<F, E>,
    FieldMatrixNode<F, E>,
    FieldMatrixNode<F, E>,
)>;

/// Builds the node of a table together with its usable row count.
pub fn fill_assignment_table<F: FieldCodec, E: Endian>(
    usable_rows: u64,
    table: &AssignmentTable<F>,
) -> AssignmentTableNode<F, E> {
    Bundle((
        Integral::new(usable_rows),
        fill_field_matrix(table.witnesses()),
        fill_field_matrix(table.public_inputs()),
        fill_field_matrix(table.constants()),
        fill_field_matrix(table.selectors()),
    ))
}

/// Rebuilds the usable row count and the table.
pub fn make_assignment_table<F: FieldCodec, E: Endian>(
    node: AssignmentTableNode<F, E>,
) -> (u64, AssignmentTable<F>) {
    let (usable_rows, witnesses, public_inputs, constants, selectors) = node.into_fields();
    (
        usable_rows.value(),
        AssignmentTable::new(
            make_field_matrix(witnesses),
            make_field_matrix(public_inputs),
            make_field_matrix(constants),
            make_field_matrix(selectors),
        ),
    )
}
