use halo2curves::ff::{FromUniformBytes, PrimeField};
use halo2curves::group::cofactor::CofactorGroup;
use halo2curves::CurveExt;

use crate::codec::encode_point;
use crate::{SuiteHash, Vrf};

/// Hash the concatenation of `parts` to a scalar.
///
/// The digest is read as a big-endian integer and reduced modulo the group
/// order. Scalars should be passed through [`crate::encode_scalar`] first.
pub fn hash_to_scalar<F: FromUniformBytes<64>>(hash: SuiteHash, parts: &[&[u8]]) -> F {
    let digest = hash.digest(parts);
    // from_uniform_bytes reduces a little-endian integer
    let mut wide = [0u8; 64];
    for (dst, src) in wide.iter_mut().zip(digest.iter().rev()) {
        *dst = *src;
    }
    F::from_uniform_bytes(&wide)
}

/// Map `message` into the prime order subgroup of `C` under the tag `dst`.
pub fn hash_to_group<C>(dst: &str, message: &[u8]) -> C
where
    C: CurveExt + CofactorGroup,
{
    let hasher = C::hash_to_curve(dst);
    hasher(message).clear_cofactor().into()
}

impl<C> Vrf<C>
where
    C: CurveExt + CofactorGroup,
    C::Scalar: FromUniformBytes<64> + PrimeField<Repr = [u8; 32]>,
{
    pub fn hash_to_scalar(&self, parts: &[&[u8]]) -> C::Scalar {
        hash_to_scalar(self.suite.hash(), parts)
    }

    pub fn hash_to_group(&self, message: &[u8]) -> C {
        hash_to_group(self.suite.hash_to_curve_dst(), message)
    }

    /// Fiat-Shamir challenge over the whole public transcript.
    pub(crate) fn challenge(
        &self,
        input: &[u8],
        public_key: &C::AffineExt,
        pre_output: &C::AffineExt,
        commitment_g: &C::AffineExt,
        commitment_h: &C::AffineExt,
    ) -> C::Scalar {
        let public_key = encode_point::<C>(public_key);
        let pre_output = encode_point::<C>(pre_output);
        let commitment_g = encode_point::<C>(commitment_g);
        let commitment_h = encode_point::<C>(commitment_h);
        self.hash_to_scalar(&[
            self.suite.challenge_domain(),
            input,
            public_key.as_slice(),
            pre_output.as_slice(),
            commitment_g.as_slice(),
            commitment_h.as_slice(),
        ])
    }
}
