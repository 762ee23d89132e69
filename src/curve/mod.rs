//! Compressed curve point codecs.
//!
//! A point travels as its x-coordinate in the configured byte order with the
//! spare high bits of the most significant byte carrying flags. Native points
//! are arkworks affine points. Reading recovers y from x and the sign flag,
//! so an x with no point on the curve is rejected. A point outside the
//! prime-order subgroup is rejected too.

use core::fmt::Debug;

use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ec::AffineRepr;
use ark_ff::{BigInteger, PrimeField, Zero};

use crate::config::Endianness;
use crate::field::prime_field::read_ark_canonical;
use crate::field::{Bls12381Fr, Bn254Fr, ElementCodec, FieldCodec, PointCodec};
use crate::ser::SerKind;

/// Wire layout of a short Weierstrass group whose x-coordinate lives in a
/// prime field.
pub trait CurveLayout: SWCurveConfig {
    /// Human-readable group name.
    const NAME: &'static str;
    /// Whether the top bit is a compression marker that must always be set.
    const COMPRESSION_FLAG: bool;
    /// Encoded width in bytes.
    const BYTES: usize;
}

/// Flag bits stored in the most significant byte of an encoding.
struct Flags {
    compressed: u8,
    infinity: u8,
    sign: u8,
}

impl Flags {
    const fn of<P: CurveLayout>() -> Flags {
        if P::COMPRESSION_FLAG {
            Flags {
                compressed: 0x80,
                infinity: 0x40,
                sign: 0x20,
            }
        } else {
            Flags {
                compressed: 0,
                infinity: 0x80,
                sign: 0x40,
            }
        }
    }

    const fn mask(&self) -> u8 {
        self.compressed | self.infinity | self.sign
    }
}

/// Sign bit of a point: set when y is the larger of `y` and `-y`.
pub fn sign_of<P: CurveLayout>(point: &Affine<P>) -> bool {
    !point.infinity && point.y > -point.y
}

impl<P> ElementCodec for Affine<P>
where
    P: CurveLayout,
    P::BaseField: PrimeField,
{
    const ENCODED_LEN: usize = P::BYTES;
    const KIND: SerKind = SerKind::CurvePoint;

    fn write_bytes(&self, order: Endianness, out: &mut [u8]) {
        let flags = Flags::of::<P>();
        let top = P::BYTES - 1;
        if self.infinity {
            out.fill(0);
            out[top] = flags.compressed | flags.infinity;
        } else {
            out.copy_from_slice(&self.x.into_bigint().to_bytes_le());
            out[top] |= flags.compressed;
            if sign_of(self) {
                out[top] |= flags.sign;
            }
        }
        order.arrange(out);
    }

    fn read_bytes(order: Endianness, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != P::BYTES {
            return None;
        }
        let flags = Flags::of::<P>();
        let mut le = bytes.to_vec();
        order.arrange(&mut le);

        let top = le[P::BYTES - 1];
        if top & flags.compressed != flags.compressed {
            return None;
        }
        let infinity = top & flags.infinity != 0;
        let sign = top & flags.sign != 0;
        le[P::BYTES - 1] = top & !flags.mask();

        let x: P::BaseField = read_ark_canonical(Endianness::Little, &le)?;
        if infinity {
            return (x.is_zero() && !sign).then(<Affine<P> as AffineRepr>::zero);
        }
        let point = Affine::<P>::get_point_from_x_unchecked(x, sign)?;
        point
            .is_in_correct_subgroup_assuming_on_curve()
            .then_some(point)
    }
}

impl<P> PointCodec for Affine<P>
where
    P: CurveLayout,
    P::BaseField: PrimeField,
{
    const CURVE: &'static str = P::NAME;

    fn identity() -> Self {
        <Affine<P> as AffineRepr>::zero()
    }

    fn is_identity(&self) -> bool {
        self.infinity
    }
}

impl CurveLayout for ark_bls12_381::g1::Config {
    const NAME: &'static str = "bls12_381_g1";
    const COMPRESSION_FLAG: bool = true;
    const BYTES: usize = 48;
}

impl CurveLayout for ark_bn254::g1::Config {
    const NAME: &'static str = "bn254_g1";
    const COMPRESSION_FLAG: bool = false;
    const BYTES: usize = 32;
}

/// BLS12-381 G1 (48 bytes, compressed/infinity/sign flags).
pub type Bls12381G1 = ark_bls12_381::G1Affine;

/// BN254 G1 (32 bytes, infinity/sign flags).
pub type Bn254G1 = ark_bn254::G1Affine;

/// Pairing-friendly curve used by KZG commitments.
pub trait PairingCurve:
    Debug + Clone + Copy + PartialEq + Eq + Default + Send + Sync + 'static
{
    /// Scalar field that polynomial evaluations live in.
    type Scalar: FieldCodec;
    /// Group that commitments and opening witnesses live in.
    type G1: PointCodec;
}

/// Compressed G1 point of a pairing curve.
pub type G1Point<C> = <C as PairingCurve>::G1;

/// The BLS12-381 pairing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bls12381;

impl PairingCurve for Bls12381 {
    type Scalar = Bls12381Fr;
    type G1 = Bls12381G1;
}

/// The BN254 pairing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bn254;

impl PairingCurve for Bn254 {
    type Scalar = Bn254Fr;
    type G1 = Bn254G1;
}

#[cfg(test)]
mod tests {
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_serialize::CanonicalSerialize;

    use super::*;
    use crate::config::{BigEndian, LittleEndian};
    use crate::field::{Bn254Fq, PointNode};
    use crate::ser::{decode, encode, SerError, SerKind};

    const BLS_G1_GENERATOR: &str = "97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb";

    fn bls_x_only(x: u8) -> Vec<u8> {
        let mut bytes = vec![0u8; 48];
        bytes[0] = 0x80;
        bytes[47] = x;
        bytes
    }

    #[test]
    fn bls_generator_roundtrips_big_endian() {
        let bytes = hex::decode(BLS_G1_GENERATOR).unwrap();
        let node = decode::<PointNode<Bls12381G1, BigEndian>>(&bytes).unwrap();
        assert_eq!(*node.value(), Bls12381G1::generator());
        assert!(!sign_of(node.value()));
        assert_eq!(hex::encode(encode(&node).unwrap()), BLS_G1_GENERATOR);
    }

    #[test]
    fn bls_big_endian_matches_arkworks_compressed_form() {
        let point = (Bls12381G1::generator() * Bls12381Fr::from(0x5eed_u64)).into_affine();
        let mut reference = Vec::new();
        point.serialize_compressed(&mut reference).unwrap();
        let ours = encode(&PointNode::<_, BigEndian>::new(point)).unwrap();
        assert_eq!(ours, reference);
    }

    #[test]
    fn bls_identity_layout() {
        let node = PointNode::<_, BigEndian>::new(<Bls12381G1 as PointCodec>::identity());
        let bytes = encode(&node).unwrap();
        assert_eq!(bytes.len(), 48);
        assert_eq!(bytes[0], 0xc0);
        assert!(bytes[1..].iter().all(|byte| *byte == 0));
        let back = decode::<PointNode<Bls12381G1, BigEndian>>(&bytes).unwrap();
        assert!(back.value().is_identity());
    }

    #[test]
    fn bls_requires_compression_flag() {
        let mut bytes = hex::decode(BLS_G1_GENERATOR).unwrap();
        bytes[0] &= 0x7f;
        let err = decode::<PointNode<Bls12381G1, BigEndian>>(&bytes).unwrap_err();
        assert_eq!(err, SerError::invalid_msg_data(SerKind::CurvePoint, "element"));
    }

    #[test]
    fn bls_x_without_curve_point_is_rejected() {
        // 1 + 4 is a non-residue, so no y exists.
        let err = decode::<PointNode<Bls12381G1, BigEndian>>(&bls_x_only(1)).unwrap_err();
        assert_eq!(err, SerError::invalid_msg_data(SerKind::CurvePoint, "element"));
    }

    #[test]
    fn bls_point_outside_subgroup_is_rejected() {
        // 4^3 + 4 is a residue, but the point has a cofactor component.
        let point = Bls12381G1::get_point_from_x_unchecked(4u64.into(), false).unwrap();
        assert!(point.is_on_curve());
        assert!(!point.is_in_correct_subgroup_assuming_on_curve());
        let err = decode::<PointNode<Bls12381G1, BigEndian>>(&bls_x_only(4)).unwrap_err();
        assert_eq!(err, SerError::invalid_msg_data(SerKind::CurvePoint, "element"));
    }

    #[test]
    fn bls_x_at_modulus_is_rejected() {
        let mut bytes = ark_bls12_381::Fq::MODULUS.to_bytes_be();
        bytes[0] |= 0x80;
        let err = decode::<PointNode<Bls12381G1, BigEndian>>(&bytes).unwrap_err();
        assert_eq!(err.kind(), SerKind::CurvePoint);
    }

    #[test]
    fn infinity_with_nonzero_x_is_rejected() {
        let mut bytes = vec![0u8; 32];
        bytes[31] = 0x80;
        bytes[0] = 1;
        let err = decode::<PointNode<Bn254G1, LittleEndian>>(&bytes).unwrap_err();
        assert_eq!(err.kind(), SerKind::CurvePoint);

        bytes[0] = 0;
        let node = decode::<PointNode<Bn254G1, LittleEndian>>(&bytes).unwrap();
        assert!(node.value().is_identity());
    }

    #[test]
    fn bn254_x_without_curve_point_is_rejected() {
        // 4^3 + 3 is a non-residue.
        let mut bytes = vec![0u8; 32];
        bytes[0] = 4;
        let err = decode::<PointNode<Bn254G1, LittleEndian>>(&bytes).unwrap_err();
        assert_eq!(err, SerError::invalid_msg_data(SerKind::CurvePoint, "element"));

        bytes[0] = 1;
        assert!(decode::<PointNode<Bn254G1, LittleEndian>>(&bytes).is_ok());
    }

    #[test]
    fn bn254_sign_bit_position() {
        let one = Bn254Fq::from(1u64);
        let point = Bn254G1::new_unchecked(one, -Bn254Fq::from(2u64));
        assert!(sign_of(&point));
        let big = encode(&PointNode::<_, BigEndian>::new(point)).unwrap();
        assert_eq!(big[0], 0x40);
        assert_eq!(big[31], 0x01);
        let little = encode(&PointNode::<_, LittleEndian>::new(point)).unwrap();
        assert_eq!(little[0], 0x01);
        assert_eq!(little[31], 0x40);
        let back = decode::<PointNode<Bn254G1, LittleEndian>>(&little).unwrap();
        assert_eq!(back.into_value(), point);
    }

    #[test]
    fn generator_multiples_roundtrip_both_orders() {
        for k in 1..6u64 {
            let bls = (Bls12381G1::generator() * Bls12381Fr::from(k)).into_affine();
            let bytes = encode(&PointNode::<_, LittleEndian>::new(bls)).unwrap();
            let back = decode::<PointNode<Bls12381G1, LittleEndian>>(&bytes).unwrap();
            assert_eq!(back.into_value(), bls);

            let bn = (Bn254G1::generator() * Bn254Fr::from(k)).into_affine();
            let bytes = encode(&PointNode::<_, BigEndian>::new(bn)).unwrap();
            let back = decode::<PointNode<Bn254G1, BigEndian>>(&bytes).unwrap();
            assert_eq!(back.into_value(), bn);
        }
    }
}
