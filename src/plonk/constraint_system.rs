use super::gate::{CopyConstraint, Gate};
use super::lookup::{LookupGate, LookupTable};

/// Full PLONK circuit description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSystem<F> {
    gates: Vec<Gate<F>>,
    copy_constraints: Vec<CopyConstraint>,
    lookup_gates: Vec<LookupGate<F>>,
    lookup_tables: Vec<LookupTable>,
}

impl<F> ConstraintSystem<F> {
    /// Assembles a constraint system from its parts.
    pub fn new(
        gates: Vec<Gate<F>>,
        copy_constraints: Vec<CopyConstraint>,
        lookup_gates: Vec<LookupGate<F>>,
        lookup_tables: Vec<LookupTable>,
    ) -> Self {
        Self {
            gates,
            copy_constraints,
            lookup_gates,
            lookup_tables,
        }
    }

    /// Constraint system without lookup arguments.
    pub fn without_lookups(gates: Vec<Gate<F>>, copy_constraints: Vec<CopyConstraint>) -> Self {
        Self::new(gates, copy_constraints, Vec::new(), Vec::new())
    }

    /// Selector-enabled gates.
    pub fn gates(&self) -> &[Gate<F>] {
        &self.gates
    }

    /// Copy constraints.
    pub fn copy_constraints(&self) -> &[CopyConstraint] {
        &self.copy_constraints
    }

    /// Lookup gates.
    pub fn lookup_gates(&self) -> &[LookupGate<F>] {
        &self.lookup_gates
    }

    /// Lookup table definitions.
    pub fn lookup_tables(&self) -> &[LookupTable] {
        &self.lookup_tables
    }

    /// Returns `true` when the circuit uses lookup arguments.
    pub fn has_lookups(&self) -> bool {
        !self.lookup_gates.is_empty()
    }

    /// Splits the system into its parts.
    #[allow(clippy::type_complexity)]
    pub fn into_parts(
        self,
    ) -> (
        Vec<Gate<F>>,
        Vec<CopyConstraint>,
        Vec<LookupGate<F>>,
        Vec<LookupTable>,
    ) {
        (
            self.gates,
            self.copy_constraints,
            self.lookup_gates,
            self.lookup_tables,
        )
    }
}
