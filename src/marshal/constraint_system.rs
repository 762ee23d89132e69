use super::gate::{
    fill_copy_constraints, fill_gates, make_copy_constraints, make_gates, CopyConstraintsNode,
    GatesNode,
};
use super::lookup::{
    fill_lookup_gates, fill_lookup_tables, make_lookup_gates, make_lookup_tables,
    LookupGatesNode, LookupTablesNode,
};
use crate::config::Endian;
use crate::field::FieldCodec;
use crate::plonk::ConstraintSystem;
use crate::ser::Bundle;

/// (gates, copy constraints, lookup gates, lookup tables).
///
/// Lookup tables are always present on the wire, as an empty list for
/// circuits without lookups.
pub type ConstraintSystemNode<F, E> = Bundle<(
    GatesNode<F, E>,
    CopyConstraintsNode<E>,
    LookupGatesNode<F, E>,
    LookupTablesNode<E>,
)>;

/// Builds the node tree of a constraint system.
pub fn fill_constraint_system<F: FieldCodec, E: Endian>(
    system: &ConstraintSystem<F>,
) -> ConstraintSystemNode<F, E> {
    Bundle((
        fill_gates(system.gates()),
        fill_copy_constraints(system.copy_constraints()),
        fill_lookup_gates(system.lookup_gates()),
        fill_lookup_tables(system.lookup_tables()),
    ))
}

/// Rebuilds a constraint system from its node tree.
pub fn make_constraint_system<F: FieldCodec, E: Endian>(
    node: ConstraintSystemNode<F, E>,
) -> ConstraintSystem<F> {
    let (gates, copy_constraints, lookup_gates, lookup_tables) = node.into_fields();
    ConstraintSystem::new(
        make_gates(gates),
        make_copy_constraints(copy_constraints),
        make_lookup_gates(lookup_gates),
        make_lookup_tables(lookup_tables),
    )
}
