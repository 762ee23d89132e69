use super::expression::{Constraint, NonLinearCombination};
use super::variable::Variable;

/// Constraints enabled by a selector column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate<F> {
    /// Selector column index.
    pub selector_index: u64,
    /// Constraints enforced where the selector is set.
    pub constraints: Vec<Constraint<F>>,
}

impl<F> Gate<F> {
    /// Creates a gate.
    pub fn new(selector_index: u64, constraints: Vec<Constraint<F>>) -> Self {
        Self {
            selector_index,
            constraints,
        }
    }

    /// Highest constraint degree.
    pub fn degree(&self) -> usize {
        self.constraints
            .iter()
            .map(NonLinearCombination::degree)
            .max()
            .unwrap_or(0)
    }
}

/// Equality between two cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CopyConstraint {
    /// Left-hand cell.
    pub first: Variable,
    /// Right-hand cell.
    pub second: Variable,
}

impl CopyConstraint {
    /// Creates a copy constraint.
    pub const fn new(first: Variable, second: Variable) -> Self {
        Self { first, second }
    }
}

impl From<(Variable, Variable)> for CopyConstraint {
    fn from((first, second): (Variable, Variable)) -> Self {
        Self::new(first, second)
    }
}
