//! A verifiable random function over prime order elliptic curve groups.
//!
//! The prover maps an input onto the curve, multiplies it by its secret
//! scalar to obtain the pre-output, and attaches a Fiat-Shamir DLEQ proof
//! that the pre-output and its public key share the same discrete log.
//! Verifiers re-derive the challenge and, on success, hash the pre-output
//! into the final random bytes.
//!
//! The default instantiation is the BN254 G1 group ([`Bn256Vrf`]).

use std::fmt;
use std::marker::PhantomData;

use halo2curves::{bn256, group::Curve, CurveExt};
use subtle::ConstantTimeEq;

mod codec;
mod error;
mod hash;
mod keys;
mod prove;
mod suite;
mod verify;

pub use codec::{decode_point, decode_scalar, encode_point, encode_scalar, SCALAR_BYTES};
pub use error::VrfError;
pub use hash::{hash_to_group, hash_to_scalar};
pub use suite::{SuiteHash, VrfSuite};

/// VRF engine bound to a suite of security parameters.
#[derive(Debug, Clone, Copy)]
pub struct Vrf<C> {
    suite: VrfSuite,
    _curve: PhantomData<fn() -> C>,
}

/// VRF over the pairing-friendly BN254 G1 group.
pub type Bn256Vrf = Vrf<bn256::G1>;

impl<C> Vrf<C> {
    pub fn new(suite: VrfSuite) -> Self {
        Self {
            suite,
            _curve: PhantomData,
        }
    }

    pub fn suite(&self) -> &VrfSuite {
        &self.suite
    }
}

impl<C> Default for Vrf<C> {
    fn default() -> Self {
        Self::new(VrfSuite::DEFAULT)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct VrfKeypair<C: Curve> {
    pub(crate) public_key: VrfPublicKey<C>,
    pub(crate) secret_key: VrfSecretKey<C>,
}

impl<C: Curve> VrfKeypair<C> {
    pub fn public_key(&self) -> &VrfPublicKey<C> {
        &self.public_key
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VrfPublicKey<C: Curve> {
    pub(crate) point_y: C,
}

/// The secret scalar. Never serialized.
#[derive(Clone, Copy)]
pub struct VrfSecretKey<C: Curve> {
    pub(crate) scalar_x: C::Scalar,
}

impl<C: Curve> fmt::Debug for VrfSecretKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VrfSecretKey(..)")
    }
}

/// Proof that `pre_output = x * hash_to_group(input)` for the `x` behind
/// the prover's public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VrfProof<C: CurveExt> {
    pub(crate) challenge: C::Scalar,
    pub(crate) response: C::Scalar,
    pub(crate) pre_output: C::AffineExt,
}

impl<C: CurveExt> VrfProof<C> {
    pub fn challenge(&self) -> &C::Scalar {
        &self.challenge
    }

    pub fn response(&self) -> &C::Scalar {
        &self.response
    }

    pub fn pre_output(&self) -> &C::AffineExt {
        &self.pre_output
    }
}

/// Pseudorandom bytes of a verified evaluation.
#[derive(Debug, Clone, Eq)]
pub struct VrfOutput(pub(crate) Vec<u8>);

impl VrfOutput {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for VrfOutput {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for VrfOutput {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

/// Outcome of checking a well-formed proof.
#[must_use = "a rejected proof must not be acted upon"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid(VrfOutput),
    Invalid,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid(_))
    }

    pub fn output(self) -> Option<VrfOutput> {
        match self {
            Verdict::Valid(output) => Some(output),
            Verdict::Invalid => None,
        }
    }
}
