//! Native commitment artifacts: evaluation storage, KZG and FRI proofs.

mod eval_storage;
mod fri;
mod kzg;
mod merkle;
mod scheme;

pub use eval_storage::{BatchInfo, EvalStorage};
pub use fri::{FriInitialProof, FriProof, FriQueryProof, FriRoundProof, LpcProof};
pub use kzg::{BatchedCommitments, BatchedKzgProof, KzgProof};
pub use merkle::{MerklePathElement, MerkleProof, DIGEST_SIZE};
pub use scheme::{BatchedKzg, CommitmentScheme, Kzg, Lpc};
