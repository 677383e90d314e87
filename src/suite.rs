use sha2::{Digest, Sha384, Sha512};

use crate::VrfError;

/// Hash functions a suite may be built on.
///
/// Both produce at least 48 bytes, so reducing a digest modulo a ~256 bit
/// group order leaves a negligible bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteHash {
    Sha512,
    Sha384,
}

impl SuiteHash {
    /// Digest the concatenation of `parts`.
    pub fn digest(&self, parts: &[&[u8]]) -> Vec<u8> {
        match self {
            SuiteHash::Sha512 => digest_parts::<Sha512>(parts),
            SuiteHash::Sha384 => digest_parts::<Sha384>(parts),
        }
    }

    pub fn output_size(&self) -> usize {
        match self {
            SuiteHash::Sha512 => 64,
            SuiteHash::Sha384 => 48,
        }
    }
}

fn digest_parts<D: Digest>(parts: &[&[u8]]) -> Vec<u8> {
    let mut hasher = D::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().to_vec()
}

/// The security parameters of a VRF instantiation.
///
/// The challenge and output hashes share the suite hash function and are
/// kept apart by their own domain prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VrfSuite {
    hash: SuiteHash,
    hash_to_curve_dst: &'static str,
    challenge_domain: &'static [u8],
    output_domain: &'static [u8],
}

impl VrfSuite {
    pub const DEFAULT: VrfSuite = VrfSuite {
        hash: SuiteHash::Sha512,
        hash_to_curve_dst: "dleq-vrf-v1-h2c",
        challenge_domain: b"dleq-vrf-v1-challenge",
        output_domain: b"dleq-vrf-v1-output",
    };

    /// Build a custom suite.
    ///
    /// Fails if any tag is empty, or if the challenge and output prefixes
    /// could collide (one being a prefix of the other).
    pub fn new(
        hash: SuiteHash,
        hash_to_curve_dst: &'static str,
        challenge_domain: &'static [u8],
        output_domain: &'static [u8],
    ) -> Result<Self, VrfError> {
        if hash_to_curve_dst.is_empty() {
            return Err(VrfError::Config("empty hash-to-curve tag"));
        }
        if challenge_domain.is_empty() || output_domain.is_empty() {
            return Err(VrfError::Config("empty hash domain"));
        }
        if challenge_domain.starts_with(output_domain) || output_domain.starts_with(challenge_domain)
        {
            return Err(VrfError::Config(
                "challenge and output domains are not distinct",
            ));
        }
        Ok(Self {
            hash,
            hash_to_curve_dst,
            challenge_domain,
            output_domain,
        })
    }

    pub fn hash(&self) -> SuiteHash {
        self.hash
    }

    pub fn hash_to_curve_dst(&self) -> &'static str {
        self.hash_to_curve_dst
    }

    pub fn challenge_domain(&self) -> &'static [u8] {
        self.challenge_domain
    }

    pub fn output_domain(&self) -> &'static [u8] {
        self.output_domain
    }
}

impl Default for VrfSuite {
    fn default() -> Self {
        Self::DEFAULT
    }
}
