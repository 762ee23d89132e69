use super::expression::NonLinearCombination;
use super::variable::Variable;

/// Membership of an input tuple in a lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConstraint<F> {
    /// Identifier of the looked-up table.
    pub table_id: u64,
    /// Expressions forming the looked-up tuple.
    pub lookup_input: Vec<NonLinearCombination<F>>,
    /// Expressions forming the table side of the lookup.
    pub lookup_value: Vec<NonLinearCombination<F>>,
}

impl<F> LookupConstraint<F> {
    /// Creates a lookup constraint.
    pub fn new(
        table_id: u64,
        lookup_input: Vec<NonLinearCombination<F>>,
        lookup_value: Vec<NonLinearCombination<F>>,
    ) -> Self {
        Self {
            table_id,
            lookup_input,
            lookup_value,
        }
    }
}

/// Lookup constraints enabled by a tag column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupGate<F> {
    /// Tag column index.
    pub tag_index: u64,
    /// Constraints enforced where the tag is set.
    pub constraints: Vec<LookupConstraint<F>>,
}

impl<F> LookupGate<F> {
    /// Creates a lookup gate.
    pub fn new(tag_index: u64, constraints: Vec<LookupConstraint<F>>) -> Self {
        Self {
            tag_index,
            constraints,
        }
    }
}

/// Table definition: each option lists the variables of one column set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupTable {
    /// Tag column index.
    pub tag_index: u64,
    /// Number of columns per option.
    pub columns_number: u64,
    /// Column definitions, one list per option.
    pub lookup_options: Vec<Vec<Variable>>,
}

impl LookupTable {
    /// Creates a lookup table definition.
    pub fn new(tag_index: u64, columns_number: u64, lookup_options: Vec<Vec<Variable>>) -> Self {
        Self {
            tag_index,
            columns_number,
            lookup_options,
        }
    }
}
