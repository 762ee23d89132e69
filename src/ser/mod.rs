//! Canonical binary marshalling primitives.
//!
//! Every encodable value is a [`Node`]: a fixed-width integral, a raw byte
//! array, an algebraic element, or a container built from other nodes. Byte
//! order is a type parameter, so one tree is always written in a single
//! order. The [`encode`]/[`decode`] helpers drive a whole tree over a buffer.

mod bundle;
mod bytes;
mod collections;
mod cursor;
mod error;
mod ints;
mod node;

pub use bundle::Bundle;
pub use bytes::FixedByteArray;
pub use collections::{KeyedList, List, Optional};
pub use cursor::{ByteReader, ByteWriter};
pub use error::{SerError, SerKind, SerResult, Status};
pub use ints::{ensure_u32, Integral, IntegralValue};
pub use node::{
    decode, decode_prefix, decode_prefix_with_limits, decode_with_limits, encode, encode_into,
    Node,
};
