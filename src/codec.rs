//! Wire encoding.
//!
//! Scalars are 32-byte big-endian integers, points use the curve's
//! compressed `GroupEncoding`, and a proof is `challenge || response ||
//! pre_output` with no length prefixes.

use std::fmt;
use std::marker::PhantomData;

use halo2curves::ff::PrimeField;
use halo2curves::group::cofactor::CofactorGroup;
use halo2curves::group::prime::PrimeCurveAffine;
use halo2curves::group::GroupEncoding;
use halo2curves::CurveExt;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{VrfError, VrfOutput, VrfProof, VrfPublicKey};

pub const SCALAR_BYTES: usize = 32;

/// Encode a scalar as a fixed width big-endian integer.
pub fn encode_scalar<F: PrimeField<Repr = [u8; 32]>>(scalar: &F) -> [u8; SCALAR_BYTES] {
    // field representations are little-endian
    let mut bytes = scalar.to_repr();
    bytes.reverse();
    bytes
}

/// Decode a big-endian scalar, rejecting values outside `[0, r)`.
pub fn decode_scalar<F: PrimeField<Repr = [u8; 32]>>(bytes: &[u8]) -> Result<F, VrfError> {
    if bytes.len() != SCALAR_BYTES {
        return Err(VrfError::InvalidLength {
            what: "scalar",
            expected: SCALAR_BYTES,
            got: bytes.len(),
        });
    }
    let mut repr = [0u8; SCALAR_BYTES];
    repr.copy_from_slice(bytes);
    repr.reverse();
    Option::from(F::from_repr(repr)).ok_or(VrfError::NonCanonicalScalar)
}

/// Byte width of a compressed point on `C`.
pub(crate) fn point_len<C: CurveExt>() -> usize {
    <C::AffineExt as GroupEncoding>::Repr::default()
        .as_ref()
        .len()
}

pub fn encode_point<C: CurveExt>(point: &C::AffineExt) -> Vec<u8> {
    point.to_bytes().as_ref().to_vec()
}

/// Decode a compressed point and check that it lies in the prime order
/// subgroup. The identity is never a valid key or pre-output, so it is
/// rejected here as well.
pub fn decode_point<C>(bytes: &[u8], what: &'static str) -> Result<C::AffineExt, VrfError>
where
    C: CurveExt + CofactorGroup,
{
    let mut repr = <C::AffineExt as GroupEncoding>::Repr::default();
    if bytes.len() != repr.as_ref().len() {
        return Err(VrfError::InvalidLength {
            what,
            expected: repr.as_ref().len(),
            got: bytes.len(),
        });
    }
    repr.as_mut().copy_from_slice(bytes);

    let point: Option<C::AffineExt> = <C::AffineExt as GroupEncoding>::from_bytes(&repr).into();
    let point = point.ok_or(VrfError::InvalidPoint)?;
    if bool::from(point.is_identity()) {
        return Err(VrfError::IdentityPoint(what));
    }
    let projective: C = point.to_curve();
    if !bool::from(projective.is_torsion_free()) {
        return Err(VrfError::InvalidPoint);
    }
    Ok(point)
}

impl<C> VrfPublicKey<C>
where
    C: CurveExt + CofactorGroup,
{
    pub fn to_bytes(&self) -> Vec<u8> {
        encode_point::<C>(&self.point_y.to_affine())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VrfError> {
        let point = decode_point::<C>(bytes, "public key")?;
        Ok(Self {
            point_y: point.to_curve(),
        })
    }
}

impl<C> VrfProof<C>
where
    C: CurveExt + CofactorGroup,
    C::Scalar: PrimeField<Repr = [u8; 32]>,
{
    /// Length of an encoded proof on `C`.
    pub fn encoded_len() -> usize {
        2 * SCALAR_BYTES + point_len::<C>()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::encoded_len());
        bytes.extend_from_slice(&encode_scalar(&self.challenge));
        bytes.extend_from_slice(&encode_scalar(&self.response));
        bytes.extend_from_slice(&encode_point::<C>(&self.pre_output));
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VrfError> {
        if bytes.len() != Self::encoded_len() {
            return Err(VrfError::InvalidLength {
                what: "proof",
                expected: Self::encoded_len(),
                got: bytes.len(),
            });
        }
        let (challenge, rest) = bytes.split_at(SCALAR_BYTES);
        let (response, pre_output) = rest.split_at(SCALAR_BYTES);
        Ok(Self {
            challenge: decode_scalar(challenge)?,
            response: decode_scalar(response)?,
            pre_output: decode_point::<C>(pre_output, "pre-output")?,
        })
    }
}

impl<C> fmt::Display for VrfPublicKey<C>
where
    C: CurveExt + CofactorGroup,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}

impl<C> fmt::Display for VrfProof<C>
where
    C: CurveExt + CofactorGroup,
    C::Scalar: PrimeField<Repr = [u8; 32]>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}

impl fmt::Display for VrfOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

// All three types travel as lowercase hex strings.

impl<C> Serialize for VrfPublicKey<C>
where
    C: CurveExt + CofactorGroup,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.to_bytes()))
    }
}

impl<C> Serialize for VrfProof<C>
where
    C: CurveExt + CofactorGroup,
    C::Scalar: PrimeField<Repr = [u8; 32]>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.to_bytes()))
    }
}

impl Serialize for VrfOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}

struct HexVisitor<T> {
    decode: fn(&[u8]) -> Result<T, VrfError>,
    _target: PhantomData<fn() -> T>,
}

impl<T> HexVisitor<T> {
    fn new(decode: fn(&[u8]) -> Result<T, VrfError>) -> Self {
        Self {
            decode,
            _target: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for HexVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a hex string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        let bytes = hex::decode(v).map_err(|e| E::custom(VrfError::from(e)))?;
        (self.decode)(&bytes).map_err(E::custom)
    }
}

impl<'de, C> Deserialize<'de> for VrfPublicKey<C>
where
    C: CurveExt + CofactorGroup,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexVisitor::new(Self::from_bytes))
    }
}

impl<'de, C> Deserialize<'de> for VrfProof<C>
where
    C: CurveExt + CofactorGroup,
    C::Scalar: PrimeField<Repr = [u8; 32]>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexVisitor::new(Self::from_bytes))
    }
}

impl<'de> Deserialize<'de> for VrfOutput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(HexVisitor::new(|bytes| Ok(VrfOutput(bytes.to_vec()))))
    }
}
