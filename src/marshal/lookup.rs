use super::expression::{
    fill_non_linear_combinations, make_non_linear_combinations, NonLinearCombinationsNode,
};
use super::variable::{fill_variables, make_variables, VariablesNode};
use crate::config::Endian;
use crate::field::FieldCodec;
use crate::plonk::{LookupConstraint, LookupGate, LookupTable};
use crate::ser::{Bundle, Integral, List};

/// (table id `u64`, lookup inputs, lookup values).
pub type LookupConstraintNode<F, E> = Bundle<(
    Integral<u64, E>,
    NonLinearCombinationsNode<F, E>,
    NonLinearCombinationsNode<F, E>,
)>;

/// (tag index `u64`, lookup constraints).
pub type LookupGateNode<F, E> = Bundle<(Integral<u64, E>, List<E, LookupConstraintNode<F, E>>)>;

/// Length-prefixed lookup gate list.
pub type LookupGatesNode<F, E> = List<E, LookupGateNode<F, E>>;

/// (tag index `u64`, columns number `u64`, one variable list per option).
pub type LookupTableNode<E> =
    Bundle<(Integral<u64, E>, Integral<u64, E>, List<E, VariablesNode<E>>)>;

/// Length-prefixed lookup table list.
pub type LookupTablesNode<E> = List<E, LookupTableNode<E>>;

/// Builds the node of one lookup constraint.
pub fn fill_lookup_constraint<F: FieldCodec, E: Endian>(
    constraint: &LookupConstraint<F>,
) -> LookupConstraintNode<F, E> {
    Bundle((
        Integral::new(constraint.table_id),
        fill_non_linear_combinations(&constraint.lookup_input),
        fill_non_linear_combinations(&constraint.lookup_value),
    ))
}

/// Rebuilds a lookup constraint from its node.
pub fn make_lookup_constraint<F: FieldCodec, E: Endian>(
    node: LookupConstraintNode<F, E>,
) -> LookupConstraint<F> {
    let (table_id, lookup_input, lookup_value) = node.into_fields();
    LookupConstraint::new(
        table_id.value(),
        make_non_linear_combinations(lookup_input),
        make_non_linear_combinations(lookup_value),
    )
}

/// Builds the node of one lookup gate.
pub fn fill_lookup_gate<F: FieldCodec, E: Endian>(gate: &LookupGate<F>) -> LookupGateNode<F, E> {
    Bundle((
        Integral::new(gate.tag_index),
        gate.constraints
            .iter()
            .map(fill_lookup_constraint::<F, E>)
            .collect(),
    ))
}

/// Rebuilds a lookup gate from its node.
pub fn make_lookup_gate<F: FieldCodec, E: Endian>(node: LookupGateNode<F, E>) -> LookupGate<F> {
    let (tag_index, constraints) = node.into_fields();
    LookupGate::new(
        tag_index.value(),
        constraints
            .into_items()
            .into_iter()
            .map(make_lookup_constraint::<F, E>)
            .collect(),
    )
}

/// Builds the lookup gate list of a constraint system.
pub fn fill_lookup_gates<F: FieldCodec, E: Endian>(
    gates: &[LookupGate<F>],
) -> LookupGatesNode<F, E> {
    gates.iter().map(fill_lookup_gate::<F, E>).collect()
}

/// Rebuilds a lookup gate list.
pub fn make_lookup_gates<F: FieldCodec, E: Endian>(
    node: LookupGatesNode<F, E>,
) -> Vec<LookupGate<F>> {
    node.into_items()
        .into_iter()
        .map(make_lookup_gate::<F, E>)
        .collect()
}

/// Builds the node of one lookup table.
pub fn fill_lookup_table<E: Endian>(table: &LookupTable) -> LookupTableNode<E> {
    Bundle((
        Integral::new(table.tag_index),
        Integral::new(table.columns_number),
        table
            .lookup_options
            .iter()
            .map(|option| fill_variables::<E>(option))
            .collect(),
    ))
}

/// Rebuilds a lookup table from its node.
pub fn make_lookup_table<E: Endian>(node: LookupTableNode<E>) -> LookupTable {
    let (tag_index, columns_number, lookup_options) = node.into_fields();
    LookupTable::new(
        tag_index.value(),
        columns_number.value(),
        lookup_options
            .into_items()
            .into_iter()
            .map(make_variables::<E>)
            .collect(),
    )
}

/// Builds the lookup table list of a constraint system.
pub fn fill_lookup_tables<E: Endian>(tables: &[LookupTable]) -> LookupTablesNode<E> {
    tables.iter().map(fill_lookup_table::<E>).collect()
}

/// Rebuilds a lookup table list.
pub fn make_lookup_tables<E: Endian>(node: LookupTablesNode<E>) -> Vec<LookupTable> {
    node.into_items()
        .into_iter()
        .map(make_lookup_table::<E>)
        .collect()
}
