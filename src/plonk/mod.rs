//! Native PLONK circuit and assignment types.
//!
//! These are plain values; their wire layouts live in [`crate::marshal`].

mod assignment_table;
mod constraint_system;
mod expression;
mod gate;
mod lookup;
mod variable;

pub use assignment_table::{AssignmentTable, Column, TableDescription};
pub use constraint_system::ConstraintSystem;
pub use expression::{Constraint, NonLinearCombination, NonLinearTerm};
pub use gate::{CopyConstraint, Gate};
pub use lookup::{LookupConstraint, LookupGate, LookupTable};
pub use variable::{ColumnType, Variable};
