use halo2curves::ff::{FromUniformBytes, PrimeField};
use halo2curves::group::cofactor::CofactorGroup;
use halo2curves::CurveExt;
use rand_core::{CryptoRng, OsRng, RngCore};
use tracing::trace;

use crate::keys::random_nonzero_scalar;
use crate::{Vrf, VrfError, VrfKeypair, VrfOutput, VrfProof};

impl<C> Vrf<C>
where
    C: CurveExt + CofactorGroup,
    C::Scalar: FromUniformBytes<64> + PrimeField<Repr = [u8; 32]>,
{
    /// Prove the evaluation of `input` under `keypair`.
    ///
    /// The nonce is drawn fresh from the operating system's CSPRNG. A nonce
    /// reused across two proofs under the same key reveals the secret key.
    pub fn prove(&self, keypair: &VrfKeypair<C>, input: &[u8]) -> Result<VrfProof<C>, VrfError> {
        self.prove_with_rng(keypair, input, &mut OsRng)
    }

    /// Same as [`Vrf::prove`], drawing the nonce from `rng`.
    pub fn prove_with_rng<R: RngCore + CryptoRng>(
        &self,
        keypair: &VrfKeypair<C>,
        input: &[u8],
        rng: &mut R,
    ) -> Result<VrfProof<C>, VrfError> {
        let nonce = random_nonzero_scalar(rng)?;
        Ok(self.prove_with_nonce(keypair, input, nonce))
    }

    /// Prove with a caller chosen nonce. Only for reproducible test vectors:
    /// each nonce must be used for exactly one proof.
    #[cfg(any(test, feature = "test-vectors"))]
    pub fn prove_with_fixed_nonce(
        &self,
        keypair: &VrfKeypair<C>,
        input: &[u8],
        nonce: C::Scalar,
    ) -> Result<VrfProof<C>, VrfError> {
        use halo2curves::ff::Field;

        if bool::from(nonce.is_zero()) {
            return Err(VrfError::Config("nonce must be non-zero"));
        }
        Ok(self.prove_with_nonce(keypair, input, nonce))
    }

    /// Prove and return the output along with the proof.
    pub fn evaluate(
        &self,
        keypair: &VrfKeypair<C>,
        input: &[u8],
    ) -> Result<(VrfOutput, VrfProof<C>), VrfError> {
        let proof = self.prove(keypair, input)?;
        Ok((self.output(input, &proof.pre_output), proof))
    }

    fn prove_with_nonce(
        &self,
        keypair: &VrfKeypair<C>,
        input: &[u8],
        nonce: C::Scalar,
    ) -> VrfProof<C> {
        let secret = keypair.secret_key.scalar_x;

        // h = hash_to_group(alpha)
        let generator_h = self.hash_to_group(input);

        // gamma = x * h
        let pre_output = (generator_h * secret).to_affine();

        // commitments k * g and k * h
        let commitment_g = (C::generator() * nonce).to_affine();
        let commitment_h = (generator_h * nonce).to_affine();
        trace!(input_len = input.len(), "vrf commitments computed");

        // c = hash(alpha, y, gamma, k * g, k * h)
        let challenge = self.challenge(
            input,
            &keypair.public_key.to_affine(),
            &pre_output,
            &commitment_g,
            &commitment_h,
        );

        // s = k + c * x
        let response = nonce + challenge * secret;

        VrfProof {
            challenge,
            response,
            pre_output,
        }
    }
}
