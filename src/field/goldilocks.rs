//! The 64-bit Goldilocks field `p = 2^64 - 2^32 + 1`.

use core::fmt;

use super::codec::{ElementCodec, FieldCodec, MAX_LIMBS};
use crate::config::Endianness;
use crate::ser::SerKind;

/// Goldilocks element stored as its canonical representative.
///
/// The wrapped integer is within `[0, MODULUS)` for every value built
/// through [`Goldilocks::new`] or decoded from the wire. The encoding is the
/// 8-byte integer in the configured byte order.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Goldilocks(u64);

impl fmt::Debug for Goldilocks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Goldilocks").field(&self.0).finish()
    }
}

impl Goldilocks {
    /// Canonical prime modulus associated with this field.
    pub const MODULUS: u64 = 0xffff_ffff_0000_0001;
    /// Additive identity in canonical form.
    pub const ZERO: Goldilocks = Goldilocks(0);
    /// Multiplicative identity in canonical form.
    pub const ONE: Goldilocks = Goldilocks(1);

    /// Reduces `value` to its canonical representative.
    pub const fn new(value: u64) -> Self {
        Goldilocks(value % Self::MODULUS)
    }

    /// Returns the canonical representative.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl ElementCodec for Goldilocks {
    const ENCODED_LEN: usize = 8;
    const KIND: SerKind = SerKind::FieldElement;

    fn write_bytes(&self, order: Endianness, out: &mut [u8]) {
        out.copy_from_slice(&self.0.to_le_bytes());
        order.arrange(out);
    }

    fn read_bytes(order: Endianness, bytes: &[u8]) -> Option<Self> {
        let mut raw: [u8; 8] = bytes.try_into().ok()?;
        order.arrange(&mut raw);
        let value = u64::from_le_bytes(raw);
        (value < Self::MODULUS).then_some(Goldilocks(value))
    }
}

impl FieldCodec for Goldilocks {
    const NAME: &'static str = "goldilocks";
    const MODULUS_BITS: u32 = 64;

    fn zero() -> Self {
        Self::ZERO
    }

    fn from_u64(value: u64) -> Self {
        Self::new(value)
    }

    fn from_random_limbs(limbs: [u64; MAX_LIMBS]) -> Self {
        Self::new(limbs[0])
    }
}
