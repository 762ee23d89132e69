//! Codec configuration.
//!
//! Byte order is chosen statically through the [`Endian`] marker types so a
//! node tree never mixes orders. Decoding limits are runtime values carried by
//! the [`ByteReader`](crate::ser::ByteReader).

use core::fmt::Debug;

use serde::{Deserialize, Serialize};

/// Default upper bound on any decoded list element count.
pub const DEFAULT_MAX_LIST_LEN: u32 = 1 << 24;

/// Default upper bound on the size of a buffer handed to the decode helpers.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1 << 30;

/// Byte order applied to every multi-byte integer and algebraic element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endianness {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endianness {
    /// Converts a little-endian byte image in place into this byte order.
    pub(crate) fn arrange(self, little_endian: &mut [u8]) {
        if self == Endianness::Big {
            little_endian.reverse();
        }
    }
}

/// Compile-time byte order selector.
pub trait Endian:
    Debug + Clone + Copy + Default + PartialEq + Eq + Send + Sync + 'static
{
    /// Runtime value of the selected byte order.
    const ORDER: Endianness;
}

/// Big-endian marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BigEndian;

impl Endian for BigEndian {
    const ORDER: Endianness = Endianness::Big;
}

/// Little-endian marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian;

impl Endian for LittleEndian {
    const ORDER: Endianness = Endianness::Little;
}

/// Bounds applied while decoding untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadLimits {
    /// Largest element count accepted for any list.
    pub max_list_len: u32,
    /// Largest buffer accepted by the top-level decode helpers.
    pub max_input_bytes: usize,
}

impl ReadLimits {
    /// Limits that only keep the remaining-bytes guard active.
    pub const UNBOUNDED: ReadLimits = ReadLimits {
        max_list_len: u32::MAX,
        max_input_bytes: usize::MAX,
    };

    /// Returns the default limits.
    pub const fn new() -> Self {
        ReadLimits {
            max_list_len: DEFAULT_MAX_LIST_LEN,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    /// Overrides the list element count limit.
    pub const fn with_max_list_len(mut self, max_list_len: u32) -> Self {
        self.max_list_len = max_list_len;
        self
    }

    /// Overrides the input size limit.
    pub const fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }
}

impl Default for ReadLimits {
    fn default() -> Self {
        ReadLimits::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrange_reverses_only_for_big_endian() {
        let mut bytes = [1u8, 2, 3];
        Endianness::Little.arrange(&mut bytes);
        assert_eq!(bytes, [1, 2, 3]);
        Endianness::Big.arrange(&mut bytes);
        assert_eq!(bytes, [3, 2, 1]);
    }

    #[test]
    fn limits_builder_and_serde_defaults() {
        let limits = ReadLimits::new().with_max_list_len(16);
        assert_eq!(limits.max_list_len, 16);
        assert_eq!(limits.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);

        let parsed: ReadLimits = serde_json::from_str(r#"{"max_list_len": 8}"#).unwrap();
        assert_eq!(parsed, ReadLimits::new().with_max_list_len(8));
    }

    #[test]
    fn endianness_serde_names() {
        let json = serde_json::to_string(&Endianness::Little).unwrap();
        assert_eq!(json, "\"little\"");
    }
}
