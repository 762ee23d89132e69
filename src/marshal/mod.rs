//! Conversions between native values and their marshalling trees.
//!
//! For every domain type `x` there is a node type alias `XNode<.., E>`, a
//! `fill_x` that builds the node from a borrowed native value and a `make_x`
//! that consumes a node and rebuilds the native value. Both directions are
//! infallible: all validation happens while reading bytes into a node.
//!
//! ```text
//! native --fill_x--> node --encode--> bytes
//! bytes --decode--> node --make_x--> native
//! ```

mod assignment_table;
mod constraint_system;
mod eval_storage;
mod expression;
mod field;
mod fri;
mod gate;
mod kzg;
mod lookup;
mod merkle;
mod scheme;
mod variable;

pub use assignment_table::{fill_assignment_table, make_assignment_table, AssignmentTableNode};
pub use constraint_system::{fill_constraint_system, make_constraint_system, ConstraintSystemNode};
pub use eval_storage::{fill_eval_storage, make_eval_storage, EvalStorageNode};
pub use expression::{
    fill_constraint, fill_non_linear_combination, fill_non_linear_combinations,
    fill_non_linear_term, make_constraint, make_non_linear_combination,
    make_non_linear_combinations, make_non_linear_term, ConstraintNode, ConstraintsNode,
    NonLinearCombinationNode, NonLinearCombinationsNode, NonLinearTermNode,
};
pub use field::{
    fill_field_matrix, fill_field_vec, make_field_matrix, make_field_vec, FieldMatrixNode,
    FieldVecNode,
};
pub use fri::{
    fill_fri_proof, fill_lpc_commitments, fill_lpc_proof, make_fri_proof, make_lpc_commitments,
    make_lpc_proof, FriInitialProofNode, FriProofNode, FriQueryProofNode, FriRoundProofNode,
    LpcCommitmentsNode, LpcProofNode,
};
pub use gate::{
    fill_copy_constraint, fill_copy_constraints, fill_gate, fill_gates, make_copy_constraint,
    make_copy_constraints, make_gate, make_gates, CopyConstraintNode, CopyConstraintsNode,
    GateNode, GatesNode,
};
pub use kzg::{
    fill_batched_commitments, fill_batched_kzg_proof, fill_kzg_commitment, fill_kzg_proof,
    make_batched_commitments, make_batched_kzg_proof, make_kzg_commitment, make_kzg_proof,
    BatchedCommitmentsNode, BatchedKzgProofNode, KzgCommitmentNode, KzgProofNode,
};
pub use lookup::{
    fill_lookup_constraint, fill_lookup_gate, fill_lookup_gates, fill_lookup_table,
    fill_lookup_tables, make_lookup_constraint, make_lookup_gate, make_lookup_gates,
    make_lookup_table, make_lookup_tables, LookupConstraintNode, LookupGateNode,
    LookupGatesNode, LookupTableNode, LookupTablesNode,
};
pub use merkle::{
    fill_merkle_proof, make_merkle_proof, MerklePathElementNode, MerklePathNode, MerkleProofNode,
};
pub use scheme::{fill_commitment, fill_eval_proof, make_commitment, make_eval_proof};
pub use variable::{
    fill_variable, fill_variables, make_variable, make_variables, VariableNode, VariablesNode,
};
