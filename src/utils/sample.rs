//! Deterministic sample artifacts for tests and benchmarks.
//!
//! Values are structurally valid (canonical elements, in-range tags) but
//! carry no circuit meaning.

use std::collections::BTreeMap;

use super::randomness::DeterministicRng;
use crate::commitment::{
    EvalStorage, FriInitialProof, FriProof, FriQueryProof, FriRoundProof, MerklePathElement,
    MerkleProof,
};
use ark_ec::short_weierstrass::Affine;
use ark_ec::CurveGroup;
use ark_ff::PrimeField;

use crate::curve::CurveLayout;
use crate::field::FieldCodec;
use crate::plonk::{
    AssignmentTable, ColumnType, ConstraintSystem, CopyConstraint, Gate, LookupConstraint,
    LookupGate, LookupTable, NonLinearCombination, NonLinearTerm, Variable,
};

/// Sizes of a sampled constraint system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitShape {
    /// Number of arithmetic gates.
    pub gates: usize,
    /// Constraints in every gate and lookup gate.
    pub constraints_per_gate: usize,
    /// Terms in every constraint combination.
    pub terms_per_constraint: usize,
    /// Variables multiplied in every term.
    pub vars_per_term: usize,
    /// Number of copy constraints.
    pub copy_constraints: usize,
    /// Number of lookup gates.
    pub lookup_gates: usize,
    /// Number of lookup tables.
    pub lookup_tables: usize,
}

impl Default for CircuitShape {
    fn default() -> Self {
        Self {
            gates: 4,
            constraints_per_gate: 2,
            terms_per_constraint: 3,
            vars_per_term: 2,
            copy_constraints: 6,
            lookup_gates: 1,
            lookup_tables: 1,
        }
    }
}

/// Column counts and height of a sampled assignment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableShape {
    /// Witness columns.
    pub witnesses: usize,
    /// Public input columns.
    pub public_inputs: usize,
    /// Constant columns.
    pub constants: usize,
    /// Selector columns.
    pub selectors: usize,
    /// Height of every column.
    pub rows: usize,
}

impl Default for TableShape {
    fn default() -> Self {
        Self {
            witnesses: 3,
            public_inputs: 1,
            constants: 2,
            selectors: 2,
            rows: 16,
        }
    }
}

/// Variable with a small index, a rotation in `-2..=2` and any column type.
pub fn variable(rng: &mut DeterministicRng) -> Variable {
    Variable::new(
        rng.below(16),
        rng.below(5) as i32 - 2,
        rng.next_bool(),
        ColumnType::ALL[rng.below(4) as usize],
    )
}

/// `count` independent variables.
pub fn variables(rng: &mut DeterministicRng, count: usize) -> Vec<Variable> {
    (0..count).map(|_| variable(rng)).collect()
}

/// Term with a random coefficient over `vars` variables.
pub fn term<F: FieldCodec>(rng: &mut DeterministicRng, vars: usize) -> NonLinearTerm<F> {
    NonLinearTerm::new(rng.field_element(), variables(rng, vars))
}

/// Sum of `terms` terms.
pub fn combination<F: FieldCodec>(
    rng: &mut DeterministicRng,
    terms: usize,
    vars_per_term: usize,
) -> NonLinearCombination<F> {
    (0..terms)
        .map(|_| term(rng, vars_per_term))
        .collect::<Vec<_>>()
        .into()
}

/// Gate with the constraint counts of `shape`.
pub fn gate<F: FieldCodec>(
    rng: &mut DeterministicRng,
    selector_index: u64,
    shape: &CircuitShape,
) -> Gate<F> {
    let constraints = (0..shape.constraints_per_gate)
        .map(|_| combination(rng, shape.terms_per_constraint, shape.vars_per_term))
        .collect();
    Gate::new(selector_index, constraints)
}

/// Copy constraint between two random variables.
pub fn copy_constraint(rng: &mut DeterministicRng) -> CopyConstraint {
    CopyConstraint::new(variable(rng), variable(rng))
}

/// Lookup gate whose constraints read one to three columns.
pub fn lookup_gate<F: FieldCodec>(
    rng: &mut DeterministicRng,
    tag_index: u64,
    shape: &CircuitShape,
) -> LookupGate<F> {
    let constraints = (0..shape.constraints_per_gate)
        .map(|_| {
            let width = rng.len_between(1, 3);
            let input = (0..width)
                .map(|_| combination(rng, shape.terms_per_constraint, shape.vars_per_term))
                .collect();
            let value = (0..width)
                .map(|_| combination(rng, 1, 1))
                .collect();
            LookupConstraint::new(rng.below(4), input, value)
        })
        .collect();
    LookupGate::new(tag_index, constraints)
}

/// Lookup table of one to three columns with one to three options.
pub fn lookup_table(rng: &mut DeterministicRng, tag_index: u64) -> LookupTable {
    let columns = rng.len_between(1, 3);
    let options = rng.len_between(1, 3);
    LookupTable::new(
        tag_index,
        columns as u64,
        (0..options).map(|_| variables(rng, columns)).collect(),
    )
}

/// Constraint system with gates, copy constraints, lookup gates and tables
/// sized by `shape`. Selector and tag indices are distinct.
pub fn constraint_system<F: FieldCodec>(
    rng: &mut DeterministicRng,
    shape: &CircuitShape,
) -> ConstraintSystem<F> {
    let gates = (0..shape.gates)
        .map(|index| gate(rng, index as u64, shape))
        .collect();
    let copy_constraints = (0..shape.copy_constraints)
        .map(|_| copy_constraint(rng))
        .collect();
    let lookup_gates = (0..shape.lookup_gates)
        .map(|index| lookup_gate(rng, (shape.gates + index) as u64, shape))
        .collect();
    let lookup_tables = (0..shape.lookup_tables)
        .map(|index| lookup_table(rng, (shape.gates + shape.lookup_gates + index) as u64))
        .collect();
    ConstraintSystem::new(gates, copy_constraints, lookup_gates, lookup_tables)
}

/// `len` random field elements.
pub fn field_vec<F: FieldCodec>(rng: &mut DeterministicRng, len: usize) -> Vec<F> {
    (0..len).map(|_| rng.field_element()).collect()
}

fn columns<F: FieldCodec>(rng: &mut DeterministicRng, count: usize, rows: usize) -> Vec<Vec<F>> {
    (0..count).map(|_| field_vec(rng, rows)).collect()
}

/// Assignment table with the column groups and height of `shape`.
pub fn assignment_table<F: FieldCodec>(
    rng: &mut DeterministicRng,
    shape: &TableShape,
) -> AssignmentTable<F> {
    AssignmentTable::new(
        columns(rng, shape.witnesses, shape.rows),
        columns(rng, shape.public_inputs, shape.rows),
        columns(rng, shape.constants, shape.rows),
        columns(rng, shape.selectors, shape.rows),
    )
}

/// Storage with batches `0..batches`, each holding one to `max_polys`
/// polynomials with one to `max_points` evaluations.
pub fn eval_storage<F: FieldCodec>(
    rng: &mut DeterministicRng,
    batches: u64,
    max_polys: usize,
    max_points: usize,
) -> EvalStorage<F> {
    (0..batches)
        .map(|batch| {
            let polys = rng.len_between(1, max_polys);
            let evaluations = (0..polys)
                .map(|_| {
                    let points = rng.len_between(1, max_points);
                    field_vec(rng, points)
                })
                .collect();
            (batch, evaluations)
        })
        .collect()
}

/// Random multiple of the group generator, so always a valid subgroup point.
pub fn point<P>(rng: &mut DeterministicRng) -> Affine<P>
where
    P: CurveLayout,
    P::BaseField: PrimeField,
{
    let scalar = P::ScalarField::from(rng.next_u64());
    (P::GENERATOR * scalar).into_affine()
}

/// Merkle proof of `depth` layers with `arity - 1` siblings per layer.
pub fn merkle_proof<const N: usize>(
    rng: &mut DeterministicRng,
    depth: usize,
    arity: usize,
) -> MerkleProof<N> {
    let path = (0..depth)
        .map(|_| {
            (0..arity.saturating_sub(1))
                .map(|position| MerklePathElement {
                    position: position as u64,
                    hash: rng.bytes(),
                })
                .collect()
        })
        .collect();
    MerkleProof::new(rng.below(1 << depth.min(32)), rng.bytes(), path)
}

/// FRI proof with `rounds` folding rounds, `queries` queries and `batches`
/// committed batches.
pub fn fri_proof<F: FieldCodec, const N: usize>(
    rng: &mut DeterministicRng,
    rounds: usize,
    queries: usize,
    batches: u64,
) -> FriProof<F, N> {
    let depth = rounds + 2;
    let query_proofs = (0..queries)
        .map(|_| {
            let initial_proof: BTreeMap<u64, FriInitialProof<F, N>> = (0..batches)
                .map(|batch| {
                    let polys = rng.len_between(1, 3);
                    (
                        batch,
                        FriInitialProof {
                            values: columns(rng, polys, 2),
                            proof: merkle_proof(rng, depth, 2),
                        },
                    )
                })
                .collect();
            let round_proofs = (0..rounds)
                .map(|round| FriRoundProof {
                    y: field_vec(rng, 2),
                    proof: merkle_proof(rng, depth - round - 1, 2),
                })
                .collect();
            FriQueryProof {
                initial_proof,
                round_proofs,
            }
        })
        .collect();
    FriProof {
        fri_roots: (0..rounds).map(|_| rng.bytes()).collect(),
        final_polynomial: field_vec(rng, 4),
        query_proofs,
    }
}
