//! Element codec contracts shared by fields and curves.

use core::fmt::Debug;
use core::marker::PhantomData;

use crate::config::{Endian, Endianness};
use crate::ser::{ByteReader, ByteWriter, Node, SerError, SerKind, SerResult};

/// Fixed-width algebraic element with a canonical byte encoding.
pub trait ElementCodec: Debug + Clone + PartialEq + Eq + Send + Sync + 'static {
    /// Encoded width in bytes.
    const ENCODED_LEN: usize;
    /// Error context reported for malformed encodings.
    const KIND: SerKind;

    /// Writes the canonical encoding into `out` (exactly `ENCODED_LEN` bytes).
    fn write_bytes(&self, order: Endianness, out: &mut [u8]);

    /// Parses a canonical encoding, returning `None` for out-of-range values
    /// or malformed flags.
    fn read_bytes(order: Endianness, bytes: &[u8]) -> Option<Self>;
}

/// Prime field element codec.
pub trait FieldCodec: ElementCodec {
    /// Human-readable field name.
    const NAME: &'static str;
    /// Bit length of the modulus.
    const MODULUS_BITS: u32;

    /// Additive identity.
    fn zero() -> Self;

    /// Embeds a small integer, reducing when the modulus is below `2^64`.
    fn from_u64(value: u64) -> Self;

    /// Maps uniformly random limbs onto a canonical element.
    fn from_random_limbs(limbs: [u64; MAX_LIMBS]) -> Self;
}

/// Compressed curve point codec.
pub trait PointCodec: ElementCodec {
    /// Human-readable curve name.
    const CURVE: &'static str;

    /// Point at infinity.
    fn identity() -> Self;

    /// Returns `true` for the point at infinity.
    fn is_identity(&self) -> bool;
}

/// Largest number of 64-bit limbs used by any supported element.
pub const MAX_LIMBS: usize = 6;

/// Leaf node holding a field element or a curve point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode<T, E> {
    value: T,
    _order: PhantomData<E>,
}

/// Field element node.
pub type FieldNode<F, E> = ElementNode<F, E>;

/// Curve point node.
pub type PointNode<P, E> = ElementNode<P, E>;

impl<T: ElementCodec, E: Endian> ElementNode<T, E> {
    /// Wraps an element.
    pub fn new(value: T) -> Self {
        Self {
            value,
            _order: PhantomData,
        }
    }

    /// Returns the element.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the node and returns the element.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: ElementCodec, E: Endian> Node for ElementNode<T, E> {
    const MIN_LENGTH: usize = T::ENCODED_LEN;

    fn length(&self) -> usize {
        T::ENCODED_LEN
    }

    fn write(&self, out: &mut ByteWriter<'_>) -> SerResult<()> {
        let slot = out.reserve(T::ENCODED_LEN, T::KIND, "element")?;
        self.value.write_bytes(E::ORDER, slot);
        Ok(())
    }

    fn read(cursor: &mut ByteReader<'_>) -> SerResult<Self> {
        let bytes = cursor.read_exact(T::ENCODED_LEN, T::KIND, "element")?;
        T::read_bytes(E::ORDER, bytes)
            .map(ElementNode::new)
            .ok_or_else(|| SerError::invalid_msg_data(T::KIND, "element"))
    }
}
