//! Canonical binary marshalling for zero-knowledge proof artifacts.
//!
//! The crate converts PLONK constraint systems, assignment tables and
//! KZG/FRI commitment proofs into a fixed byte layout and back. Every layout
//! is composed of fixed-width integers, raw byte arrays, algebraic elements,
//! `u32`-count prefixed lists and fixed-arity bundles, all written in one
//! byte order chosen by a type parameter.
//!
//! ```text
//! plonk / commitment  native values
//!        |  marshal::fill_*      ^  marshal::make_*
//!        v                       |
//!       ser::Node trees (field, curve leaves)
//!        |  ser::encode          ^  ser::decode
//!        v                       |
//!                 bytes
//! ```

pub mod commitment;
pub mod compare;
pub mod config;
pub mod curve;
pub mod field;
pub mod marshal;
pub mod plonk;
pub mod ser;
pub mod utils;

pub use config::{BigEndian, Endian, Endianness, LittleEndian, ReadLimits};
pub use ser::{
    decode, decode_prefix, encode, encode_into, Node, SerError, SerKind, SerResult, Status,
};
