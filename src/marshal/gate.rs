use super::expression::{
    fill_non_linear_combinations, make_non_linear_combinations, ConstraintsNode,
};
use super::variable::{fill_variable, make_variable, VariableNode};
use crate::config::Endian;
use crate::field::FieldCodec;
use crate::plonk::{CopyConstraint, Gate};
use crate::ser::{Bundle, Integral, List};

/// (selector index `u64`, constraints).
pub type GateNode<F, E> = Bundle<(Integral<u64, E>, ConstraintsNode<F, E>)>;

/// Length-prefixed gate list.
pub type GatesNode<F, E> = List<E, GateNode<F, E>>;

/// (first variable, second variable).
pub type CopyConstraintNode<E> = Bundle<(VariableNode<E>, VariableNode<E>)>;

/// Length-prefixed copy constraint list.
pub type CopyConstraintsNode<E> = List<E, CopyConstraintNode<E>>;

/// Builds the node of one gate.
pub fn fill_gate<F: FieldCodec, E: Endian>(gate: &Gate<F>) -> GateNode<F, E> {
    Bundle((
        Integral::new(gate.selector_index),
        fill_non_linear_combinations(&gate.constraints),
    ))
}

/// Rebuilds a gate from its node.
pub fn make_gate<F: FieldCodec, E: Endian>(node: GateNode<F, E>) -> Gate<F> {
    let (selector_index, constraints) = node.into_fields();
    Gate::new(
        selector_index.value(),
        make_non_linear_combinations(constraints),
    )
}

/// Builds the gate list of a constraint system.
pub fn fill_gates<F: FieldCodec, E: Endian>(gates: &[Gate<F>]) -> GatesNode<F, E> {
    gates.iter().map(fill_gate::<F, E>).collect()
}

/// Rebuilds a gate list.
pub fn make_gates<F: FieldCodec, E: Endian>(node: GatesNode<F, E>) -> Vec<Gate<F>> {
    node.into_items()
        .into_iter()
        .map(make_gate::<F, E>)
        .collect()
}

/// Builds the node of one copy constraint.
pub fn fill_copy_constraint<E: Endian>(constraint: &CopyConstraint) -> CopyConstraintNode<E> {
    Bundle((
        fill_variable(&constraint.first),
        fill_variable(&constraint.second),
    ))
}

/// Rebuilds a copy constraint from its node.
pub fn make_copy_constraint<E: Endian>(node: CopyConstraintNode<E>) -> CopyConstraint {
    let (first, second) = node.into_fields();
    CopyConstraint::new(make_variable(first), make_variable(second))
}

/// Builds the copy constraint list of a constraint system.
pub fn fill_copy_constraints<E: Endian>(constraints: &[CopyConstraint]) -> CopyConstraintsNode<E> {
    constraints
        .iter()
        .map(fill_copy_constraint::<E>)
        .collect()
}

/// Rebuilds a copy constraint list.
pub fn make_copy_constraints<E: Endian>(node: CopyConstraintsNode<E>) -> Vec<CopyConstraint> {
    node.into_items()
        .into_iter()
        .map(make_copy_constraint::<E>)
        .collect()
}
