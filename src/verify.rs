use halo2curves::ff::{FromUniformBytes, PrimeField};
use halo2curves::group::cofactor::CofactorGroup;
use halo2curves::CurveExt;
use subtle::ConstantTimeEq;
use tracing::{debug, trace};

use crate::codec::encode_point;
use crate::{Verdict, Vrf, VrfError, VrfOutput, VrfProof, VrfPublicKey};

impl<C> Vrf<C>
where
    C: CurveExt + CofactorGroup,
    C::Scalar: FromUniformBytes<64> + PrimeField<Repr = [u8; 32]>,
{
    /// Verify a decoded proof for `input` under `public_key`.
    ///
    /// Decoded keys and proofs have already been checked for subgroup
    /// membership, so this can only accept or reject.
    pub fn verify(
        &self,
        public_key: &VrfPublicKey<C>,
        input: &[u8],
        proof: &VrfProof<C>,
    ) -> Verdict {
        // h = hash_to_group(alpha)
        let generator_h = self.hash_to_group(input);

        // u = s * g - c * y
        let u = C::generator() * proof.response - public_key.point_y * proof.challenge;

        // v = s * h - c * gamma
        let v = generator_h * proof.response - proof.pre_output * proof.challenge;
        trace!(input_len = input.len(), "vrf commitments recomputed");

        // c' = hash(alpha, y, gamma, u, v)
        let challenge = self.challenge(
            input,
            &public_key.to_affine(),
            &proof.pre_output,
            &u.to_affine(),
            &v.to_affine(),
        );

        if bool::from(challenge.ct_eq(&proof.challenge)) {
            Verdict::Valid(self.output(input, &proof.pre_output))
        } else {
            debug!(input_len = input.len(), "vrf proof rejected");
            Verdict::Invalid
        }
    }

    /// Decode and verify wire-format inputs.
    ///
    /// Undecodable keys or proofs are errors; a decodable proof that does
    /// not verify is `Ok(Verdict::Invalid)`.
    pub fn verify_bytes(
        &self,
        public_key: &[u8],
        input: &[u8],
        proof: &[u8],
    ) -> Result<Verdict, VrfError> {
        let public_key = VrfPublicKey::from_bytes(public_key).map_err(|e| {
            debug!(error = %e, "malformed vrf public key");
            e
        })?;
        let proof = VrfProof::from_bytes(proof).map_err(|e| {
            debug!(error = %e, "malformed vrf proof");
            e
        })?;
        Ok(self.verify(&public_key, input, &proof))
    }

    /// beta = hash(output_domain || gamma || alpha)
    pub(crate) fn output(&self, input: &[u8], pre_output: &C::AffineExt) -> VrfOutput {
        let pre_output = encode_point::<C>(pre_output);
        VrfOutput(self.suite.hash().digest(&[
            self.suite.output_domain(),
            pre_output.as_slice(),
            input,
        ]))
    }
}
