use core::marker::PhantomData;

use super::cursor::{ByteReader, ByteWriter};
use super::error::{SerError, SerKind, SerResult};
use super::node::Node;
use crate::config::{Endian, Endianness};

/// Value that travels as a fixed-width integer.
///
/// `from_wire` returns `None` when the bytes do not denote a valid value,
/// which is how booleans and enumerated tags reject out-of-range input.
pub trait IntegralValue: Copy + Sized {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Writes the value into `out`, which is exactly `WIDTH` bytes long.
    fn to_wire(self, order: Endianness, out: &mut [u8]);

    /// Parses the value from exactly `WIDTH` bytes.
    fn from_wire(order: Endianness, bytes: &[u8]) -> Option<Self>;
}

macro_rules! integral_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntegralValue for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();

                fn to_wire(self, order: Endianness, out: &mut [u8]) {
                    match order {
                        Endianness::Big => out.copy_from_slice(&self.to_be_bytes()),
                        Endianness::Little => out.copy_from_slice(&self.to_le_bytes()),
                    }
                }

                fn from_wire(order: Endianness, bytes: &[u8]) -> Option<Self> {
                    let raw: [u8; core::mem::size_of::<$ty>()] = bytes.try_into().ok()?;
                    Some(match order {
                        Endianness::Big => <$ty>::from_be_bytes(raw),
                        Endianness::Little => <$ty>::from_le_bytes(raw),
                    })
                }
            }
        )*
    };
}

integral_value!(u8, u16, u32, u64, u128, i8, i16, i32, i64);

impl IntegralValue for bool {
    const WIDTH: usize = 1;

    fn to_wire(self, _order: Endianness, out: &mut [u8]) {
        out[0] = self as u8;
    }

    fn from_wire(_order: Endianness, bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0] => Some(false),
            [1] => Some(true),
            _ => None,
        }
    }
}

/// Converts a `usize` into a `u32` element count.
pub fn ensure_u32(value: usize, kind: SerKind, field: &'static str) -> SerResult<u32> {
    u32::try_from(value).map_err(|_| SerError::invalid_msg_data(kind, field))
}

/// Fixed-width integer node in byte order `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Integral<T, E> {
    value: T,
    _order: PhantomData<E>,
}

impl<T: IntegralValue, E: Endian> Integral<T, E> {
    /// Wraps a value.
    pub fn new(value: T) -> Self {
        Self {
            value,
            _order: PhantomData,
        }
    }

    /// Returns the wrapped value.
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T: IntegralValue, E: Endian> From<T> for Integral<T, E> {
    fn from(value: T) -> Self {
        Integral::new(value)
    }
}

impl<T: IntegralValue, E: Endian> Node for Integral<T, E> {
    const MIN_LENGTH: usize = T::WIDTH;

    fn length(&self) -> usize {
        T::WIDTH
    }

    fn write(&self, out: &mut ByteWriter<'_>) -> SerResult<()> {
        let slot = out.reserve(T::WIDTH, SerKind::Integral, "value")?;
        self.value.to_wire(E::ORDER, slot);
        Ok(())
    }

    fn read(cursor: &mut ByteReader<'_>) -> SerResult<Self> {
        let bytes = cursor.read_exact(T::WIDTH, SerKind::Integral, "value")?;
        T::from_wire(E::ORDER, bytes)
            .map(Integral::new)
            .ok_or_else(|| SerError::invalid_msg_data(SerKind::Integral, "value"))
    }
}
