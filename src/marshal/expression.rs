use super::variable::{fill_variables, make_variables, VariablesNode};
use crate::config::Endian;
use crate::field::{FieldCodec, FieldNode};
use crate::plonk::{Constraint, NonLinearCombination, NonLinearTerm};
use crate::ser::{Bundle, List};

/// (coefficient, variables).
pub type NonLinearTermNode<F, E> = Bundle<(FieldNode<F, E>, VariablesNode<E>)>;

/// Length-prefixed term list.
pub type NonLinearCombinationNode<F, E> = List<E, NonLinearTermNode<F, E>>;

/// Length-prefixed combination list.
pub type NonLinearCombinationsNode<F, E> = List<E, NonLinearCombinationNode<F, E>>;

/// Gate constraints share the combination layout.
pub type ConstraintNode<F, E> = NonLinearCombinationNode<F, E>;

/// Length-prefixed constraint list.
pub type ConstraintsNode<F, E> = NonLinearCombinationsNode<F, E>;

/// Builds the node of a single term.
pub fn fill_non_linear_term<F: FieldCodec, E: Endian>(
    term: &NonLinearTerm<F>,
) -> NonLinearTermNode<F, E> {
    Bundle((
        FieldNode::new(term.coeff.clone()),
        fill_variables::<E>(&term.vars),
    ))
}

/// Rebuilds a term from its node.
pub fn make_non_linear_term<F: FieldCodec, E: Endian>(
    node: NonLinearTermNode<F, E>,
) -> NonLinearTerm<F> {
    let (coeff, vars) = node.into_fields();
    NonLinearTerm::new(coeff.into_value(), make_variables(vars))
}

/// Builds the node of a sum of terms.
pub fn fill_non_linear_combination<F: FieldCodec, E: Endian>(
    combination: &NonLinearCombination<F>,
) -> NonLinearCombinationNode<F, E> {
    combination
        .terms
        .iter()
        .map(fill_non_linear_term::<F, E>)
        .collect()
}

/// Rebuilds a sum of terms from its node.
pub fn make_non_linear_combination<F: FieldCodec, E: Endian>(
    node: NonLinearCombinationNode<F, E>,
) -> NonLinearCombination<F> {
    node.into_items()
        .into_iter()
        .map(make_non_linear_term::<F, E>)
        .collect::<Vec<_>>()
        .into()
}

/// Builds the constraint list of a gate.
pub fn fill_non_linear_combinations<F: FieldCodec, E: Endian>(
    combinations: &[NonLinearCombination<F>],
) -> NonLinearCombinationsNode<F, E> {
    combinations
        .iter()
        .map(fill_non_linear_combination::<F, E>)
        .collect()
}

/// Rebuilds the constraint list of a gate.
pub fn make_non_linear_combinations<F: FieldCodec, E: Endian>(
    node: NonLinearCombinationsNode<F, E>,
) -> Vec<NonLinearCombination<F>> {
    node.into_items()
        .into_iter()
        .map(make_non_linear_combination::<F, E>)
        .collect()
}

/// Builds the node of a single gate constraint.
pub fn fill_constraint<F: FieldCodec, E: Endian>(
    constraint: &Constraint<F>,
) -> ConstraintNode<F, E> {
    fill_non_linear_combination(constraint)
}

/// Rebuilds a gate constraint.
pub fn make_constraint<F: FieldCodec, E: Endian>(node: ConstraintNode<F, E>) -> Constraint<F> {
    make_non_linear_combination(node)
}
