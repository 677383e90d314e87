use halo2curves::ff::{Field, FromUniformBytes, PrimeField};
use halo2curves::group::cofactor::CofactorGroup;
use halo2curves::CurveExt;
use rand_core::{CryptoRng, OsRng, RngCore};
use sha2::{Digest, Sha512};
use tracing::debug;

use crate::{Vrf, VrfError, VrfKeypair, VrfPublicKey, VrfSecretKey};

/// Draw a scalar uniformly from `[1, r)`.
///
/// Entropy failures are returned as-is; there is no fallback source.
pub(crate) fn random_nonzero_scalar<F, R>(rng: &mut R) -> Result<F, VrfError>
where
    F: FromUniformBytes<64>,
    R: RngCore + CryptoRng,
{
    loop {
        // 64 bytes keep the reduction bias negligible on every supported curve
        let mut wide = [0u8; 64];
        rng.try_fill_bytes(&mut wide)?;
        let scalar = F::from_uniform_bytes(&wide);
        if !bool::from(scalar.is_zero()) {
            return Ok(scalar);
        }
    }
}

impl<C> VrfKeypair<C>
where
    C::Scalar: FromUniformBytes<64>,
    C: CurveExt,
{
    /// Derive a key pair from a 32-byte seed.
    pub fn from_seed(seed: [u8; 32]) -> Result<Self, VrfError> {
        let mut hasher = Sha512::new();
        hasher.update(seed);
        let output: [u8; 64] = hasher.finalize().into();
        let sk = C::Scalar::from_uniform_bytes(&output);
        if bool::from(sk.is_zero()) {
            return Err(VrfError::ZeroSecretKey);
        }
        Ok(Self::from_secret(VrfSecretKey { scalar_x: sk }))
    }

    /// Build a key pair from a caller supplied CSPRNG.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, VrfError> {
        let sk = random_nonzero_scalar(rng)?;
        Ok(Self::from_secret(VrfSecretKey { scalar_x: sk }))
    }

    fn from_secret(secret_key: VrfSecretKey<C>) -> Self {
        VrfKeypair {
            public_key: secret_key.into(),
            secret_key,
        }
    }
}

impl<C: CurveExt> From<VrfSecretKey<C>> for VrfPublicKey<C> {
    fn from(sk: VrfSecretKey<C>) -> Self {
        let mut pk = C::generator();
        pk *= sk.scalar_x;
        VrfPublicKey { point_y: pk }
    }
}

impl<C: CurveExt> VrfPublicKey<C> {
    pub fn to_affine(&self) -> C::AffineExt {
        self.point_y.to_affine()
    }
}

impl<C> Vrf<C>
where
    C: CurveExt + CofactorGroup,
    C::Scalar: FromUniformBytes<64> + PrimeField<Repr = [u8; 32]>,
{
    /// Generate a key pair from the operating system's CSPRNG.
    pub fn generate_keypair(&self) -> Result<VrfKeypair<C>, VrfError> {
        self.generate_keypair_with_rng(&mut OsRng)
    }

    pub fn generate_keypair_with_rng<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<VrfKeypair<C>, VrfError> {
        let keypair = VrfKeypair::random(rng)?;
        debug!(curve = C::CURVE_ID, "generated vrf key pair");
        Ok(keypair)
    }
}
