//! Multi-limb prime fields used by pairing-friendly and cycle curves.
//!
//! The native values are arkworks field elements (`pasta_curves` for Pallas).
//! Decoding goes through the owning library's canonical deserializer, so a
//! value at or above the modulus never becomes an element.

use ark_ff::{BigInteger, PrimeField};
use ark_serialize::{CanonicalDeserialize, Compress, Validate};
use ff::{FromUniformBytes, PrimeField as _};

use super::codec::{ElementCodec, FieldCodec, MAX_LIMBS};
use crate::config::Endianness;
use crate::ser::SerKind;

/// Copies `bytes` into little-endian order and hands them to the arkworks
/// deserializer with validation on.
pub(crate) fn read_ark_canonical<T: CanonicalDeserialize>(
    order: Endianness,
    bytes: &[u8],
) -> Option<T> {
    let mut le = [0u8; MAX_LIMBS * 8];
    let le = le.get_mut(..bytes.len())?;
    le.copy_from_slice(bytes);
    order.arrange(le);
    T::deserialize_with_mode(&le[..], Compress::No, Validate::Yes).ok()
}

fn limb_bytes(limbs: &[u64; MAX_LIMBS]) -> [u8; MAX_LIMBS * 8] {
    let mut out = [0u8; MAX_LIMBS * 8];
    for (chunk, limb) in out.chunks_exact_mut(8).zip(limbs.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
    out
}

macro_rules! ark_field {
    ($(#[$doc:meta])* $alias:ident = $ty:ty, $label:literal, $bytes:literal) => {
        $(#[$doc])*
        pub type $alias = $ty;

        impl ElementCodec for $ty {
            const ENCODED_LEN: usize = $bytes;
            const KIND: SerKind = SerKind::FieldElement;

            fn write_bytes(&self, order: Endianness, out: &mut [u8]) {
                out.copy_from_slice(&self.into_bigint().to_bytes_le());
                order.arrange(out);
            }

            fn read_bytes(order: Endianness, bytes: &[u8]) -> Option<Self> {
                if bytes.len() != $bytes {
                    return None;
                }
                read_ark_canonical(order, bytes)
            }
        }

        impl FieldCodec for $ty {
            const NAME: &'static str = $label;
            const MODULUS_BITS: u32 = <$ty as PrimeField>::MODULUS_BIT_SIZE;

            fn zero() -> Self {
                <$ty>::from(0u64)
            }

            fn from_u64(value: u64) -> Self {
                <$ty>::from(value)
            }

            fn from_random_limbs(limbs: [u64; MAX_LIMBS]) -> Self {
                <$ty as PrimeField>::from_le_bytes_mod_order(&limb_bytes(&limbs))
            }
        }
    };
}

ark_field!(
    /// BN254 scalar field element.
    Bn254Fr = ark_bn254::Fr,
    "bn254_fr",
    32
);

ark_field!(
    /// BN254 base field element.
    Bn254Fq = ark_bn254::Fq,
    "bn254_fq",
    32
);

ark_field!(
    /// BLS12-381 scalar field element.
    Bls12381Fr = ark_bls12_381::Fr,
    "bls12_381_fr",
    32
);

ark_field!(
    /// BLS12-381 base field element.
    Bls12381Fq = ark_bls12_381::Fq,
    "bls12_381_fq",
    48
);

/// Pallas base field element (the Vesta scalar field).
pub type PallasFp = pasta_curves::Fp;

impl ElementCodec for PallasFp {
    const ENCODED_LEN: usize = 32;
    const KIND: SerKind = SerKind::FieldElement;

    fn write_bytes(&self, order: Endianness, out: &mut [u8]) {
        out.copy_from_slice(&self.to_repr());
        order.arrange(out);
    }

    fn read_bytes(order: Endianness, bytes: &[u8]) -> Option<Self> {
        let mut repr = [0u8; 32];
        if bytes.len() != repr.len() {
            return None;
        }
        repr.copy_from_slice(bytes);
        order.arrange(&mut repr);
        Option::from(PallasFp::from_repr(repr))
    }
}

impl FieldCodec for PallasFp {
    const NAME: &'static str = "pallas_fp";
    const MODULUS_BITS: u32 = <PallasFp as ff::PrimeField>::NUM_BITS;

    fn zero() -> Self {
        PallasFp::from(0u64)
    }

    fn from_u64(value: u64) -> Self {
        PallasFp::from(value)
    }

    fn from_random_limbs(limbs: [u64; MAX_LIMBS]) -> Self {
        let mut wide = [0u8; 64];
        wide[..MAX_LIMBS * 8].copy_from_slice(&limb_bytes(&limbs));
        PallasFp::from_uniform_bytes(&wide)
    }
}
