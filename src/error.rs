use thiserror::Error;

/// Errors raised by the VRF.
///
/// A proof that decodes correctly but does not verify is not an error; it is
/// reported as [`crate::Verdict::Invalid`].
#[derive(Debug, Error)]
pub enum VrfError {
    /// The operating system random source could not be read.
    #[error("secure random source unavailable: {0}")]
    Entropy(#[from] rand_core::Error),

    #[error("invalid {what} length: expected {expected} got {got}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("scalar is not in canonical form")]
    NonCanonicalScalar,

    #[error("bytes do not encode a point in the prime order subgroup")]
    InvalidPoint,

    #[error("point at infinity is not a valid {0}")]
    IdentityPoint(&'static str),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid suite: {0}")]
    Config(&'static str),

    #[error("secret key derived to zero")]
    ZeroSecretKey,
}

impl VrfError {
    /// True for the "garbage data" class: inputs that could not be decoded
    /// into well-formed scalars or group elements.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            VrfError::InvalidLength { .. }
                | VrfError::NonCanonicalScalar
                | VrfError::InvalidPoint
                | VrfError::IdentityPoint(_)
                | VrfError::InvalidHex(_)
        )
    }
}
