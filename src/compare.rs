//! Structural comparison of native artifacts.
//!
//! Equality is available through `PartialEq`; these helpers additionally
//! report the path of the first differing field, e.g.
//! `gates[1].constraints[0].terms[2].vars[0].rotation`.

use core::fmt::{self, Debug};

use crate::commitment::EvalStorage;
use crate::plonk::{
    AssignmentTable, ConstraintSystem, CopyConstraint, Gate, LookupConstraint, LookupGate,
    LookupTable, NonLinearCombination, NonLinearTerm, Variable,
};

/// First difference found between two artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Location of the differing field.
    pub path: String,
    /// Both values, rendered with `Debug`.
    pub detail: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mismatch at {}: {}", self.path, self.detail)
    }
}

impl std::error::Error for Mismatch {}

/// Result of a structural comparison.
pub type CompareResult = Result<(), Mismatch>;

fn join(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_owned()
    } else {
        format!("{path}.{field}")
    }
}

fn ensure<T: PartialEq + Debug>(path: &str, field: &str, lhs: &T, rhs: &T) -> CompareResult {
    if lhs == rhs {
        Ok(())
    } else {
        Err(Mismatch {
            path: join(path, field),
            detail: format!("{lhs:?} != {rhs:?}"),
        })
    }
}

fn each<T>(
    path: &str,
    field: &str,
    lhs: &[T],
    rhs: &[T],
    mut compare: impl FnMut(&str, &T, &T) -> CompareResult,
) -> CompareResult {
    if lhs.len() != rhs.len() {
        return Err(Mismatch {
            path: join(path, field),
            detail: format!("length {} != {}", lhs.len(), rhs.len()),
        });
    }
    let base = join(path, field);
    for (index, (left, right)) in lhs.iter().zip(rhs).enumerate() {
        compare(&format!("{base}[{index}]"), left, right)?;
    }
    Ok(())
}

fn variable(path: &str, lhs: &Variable, rhs: &Variable) -> CompareResult {
    ensure(path, "index", &lhs.index, &rhs.index)?;
    ensure(path, "rotation", &lhs.rotation, &rhs.rotation)?;
    ensure(path, "relative", &lhs.relative, &rhs.relative)?;
    ensure(path, "column", &lhs.column, &rhs.column)
}

fn term<F: PartialEq + Debug>(
    path: &str,
    lhs: &NonLinearTerm<F>,
    rhs: &NonLinearTerm<F>,
) -> CompareResult {
    ensure(path, "coeff", &lhs.coeff, &rhs.coeff)?;
    each(path, "vars", &lhs.vars, &rhs.vars, variable)
}

fn combination<F: PartialEq + Debug>(
    path: &str,
    lhs: &NonLinearCombination<F>,
    rhs: &NonLinearCombination<F>,
) -> CompareResult {
    each(path, "terms", &lhs.terms, &rhs.terms, term)
}

fn gate<F: PartialEq + Debug>(path: &str, lhs: &Gate<F>, rhs: &Gate<F>) -> CompareResult {
    ensure(path, "selector_index", &lhs.selector_index, &rhs.selector_index)?;
    each(path, "constraints", &lhs.constraints, &rhs.constraints, combination)
}

fn copy_constraint(path: &str, lhs: &CopyConstraint, rhs: &CopyConstraint) -> CompareResult {
    variable(&join(path, "first"), &lhs.first, &rhs.first)?;
    variable(&join(path, "second"), &lhs.second, &rhs.second)
}

fn lookup_constraint<F: PartialEq + Debug>(
    path: &str,
    lhs: &LookupConstraint<F>,
    rhs: &LookupConstraint<F>,
) -> CompareResult {
    ensure(path, "table_id", &lhs.table_id, &rhs.table_id)?;
    each(path, "lookup_input", &lhs.lookup_input, &rhs.lookup_input, combination)?;
    each(path, "lookup_value", &lhs.lookup_value, &rhs.lookup_value, combination)
}

fn lookup_gate<F: PartialEq + Debug>(
    path: &str,
    lhs: &LookupGate<F>,
    rhs: &LookupGate<F>,
) -> CompareResult {
    ensure(path, "tag_index", &lhs.tag_index, &rhs.tag_index)?;
    each(path, "constraints", &lhs.constraints, &rhs.constraints, lookup_constraint)
}

fn lookup_table(path: &str, lhs: &LookupTable, rhs: &LookupTable) -> CompareResult {
    ensure(path, "tag_index", &lhs.tag_index, &rhs.tag_index)?;
    ensure(path, "columns_number", &lhs.columns_number, &rhs.columns_number)?;
    each(
        path,
        "lookup_options",
        &lhs.lookup_options,
        &rhs.lookup_options,
        |path, left, right| each(path, "vars", left.as_slice(), right.as_slice(), variable),
    )
}

#[allow(clippy::ptr_arg)]
fn column<F: PartialEq + Debug>(path: &str, lhs: &Vec<F>, rhs: &Vec<F>) -> CompareResult {
    each(path, "rows", lhs.as_slice(), rhs.as_slice(), |path, left: &F, right: &F| {
        if left == right {
            Ok(())
        } else {
            Err(Mismatch {
                path: path.to_owned(),
                detail: format!("{left:?} != {right:?}"),
            })
        }
    })
}

/// Compares two gate lists.
pub fn compare_gates<F: PartialEq + Debug>(lhs: &[Gate<F>], rhs: &[Gate<F>]) -> CompareResult {
    each("", "gates", lhs, rhs, gate)
}

/// Compares two copy constraint lists.
pub fn compare_copy_constraints(lhs: &[CopyConstraint], rhs: &[CopyConstraint]) -> CompareResult {
    each("", "copy_constraints", lhs, rhs, copy_constraint)
}

/// Compares two lookup gate lists.
pub fn compare_lookup_gates<F: PartialEq + Debug>(
    lhs: &[LookupGate<F>],
    rhs: &[LookupGate<F>],
) -> CompareResult {
    each("", "lookup_gates", lhs, rhs, lookup_gate)
}

/// Compares two lookup table lists.
pub fn compare_lookup_tables(lhs: &[LookupTable], rhs: &[LookupTable]) -> CompareResult {
    each("", "lookup_tables", lhs, rhs, lookup_table)
}

/// Compares two constraint systems part by part.
pub fn compare_constraint_system<F: PartialEq + Debug>(
    lhs: &ConstraintSystem<F>,
    rhs: &ConstraintSystem<F>,
) -> CompareResult {
    compare_gates(lhs.gates(), rhs.gates())?;
    compare_copy_constraints(lhs.copy_constraints(), rhs.copy_constraints())?;
    compare_lookup_gates(lhs.lookup_gates(), rhs.lookup_gates())?;
    compare_lookup_tables(lhs.lookup_tables(), rhs.lookup_tables())
}

/// Compares two assignment tables column by column.
pub fn compare_assignment_table<F: PartialEq + Debug>(
    lhs: &AssignmentTable<F>,
    rhs: &AssignmentTable<F>,
) -> CompareResult {
    each("", "witnesses", lhs.witnesses(), rhs.witnesses(), column)?;
    each("", "public_inputs", lhs.public_inputs(), rhs.public_inputs(), column)?;
    each("", "constants", lhs.constants(), rhs.constants(), column)?;
    each("", "selectors", lhs.selectors(), rhs.selectors(), column)
}

/// Compares two evaluation storages batch by batch.
pub fn compare_eval_storage<F: PartialEq + Debug>(
    lhs: &EvalStorage<F>,
    rhs: &EvalStorage<F>,
) -> CompareResult {
    ensure("", "batch_info", &lhs.batch_info(), &rhs.batch_info())?;
    for ((batch, left), (_, right)) in lhs.batches().zip(rhs.batches()) {
        each("", &format!("batch[{batch}]"), left, right, column)?;
    }
    Ok(())
}
