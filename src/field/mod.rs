//! Codecs for the prime fields carried by proof artifacts.
//!
//! Each field knows its encoded width and how to validate a canonical
//! representative. Encoding is big or little endian as selected by the
//! enclosing node tree.

pub mod codec;
pub mod goldilocks;
pub mod prime_field;

pub use codec::{ElementCodec, ElementNode, FieldCodec, FieldNode, PointCodec, PointNode, MAX_LIMBS};
pub use goldilocks::Goldilocks;
pub use prime_field::{Bls12381Fq, Bls12381Fr, Bn254Fq, Bn254Fr, PallasFp};
