//! Outcome selection and digest packing.
//!
//! A single measurement shot is random, but a digest must not be. The
//! default [`SamplingStrategy::Seeded`] keeps the weighted draw and makes it
//! reproducible by seeding the generator from SHA-256 of the whole input, so
//! inputs that share their first 20 bits (and therefore their circuit) still
//! draw independently. [`SamplingStrategy::MostProbable`] drops randomness
//! altogether and takes the argmax of the distribution.

use std::fmt;
use std::str::FromStr;

use qhash_sim::Statevector;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::MAX_OUTPUT_BITS;

/// How one outcome is chosen from the final distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SamplingStrategy {
    /// Weighted draw from a generator seeded with SHA-256 of the input.
    #[default]
    Seeded,
    /// Most probable basis state, lowest index on ties.
    MostProbable,
}

impl SamplingStrategy {
    /// Canonical name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            SamplingStrategy::Seeded => "seeded",
            SamplingStrategy::MostProbable => "most-probable",
        }
    }
}

impl fmt::Display for SamplingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SamplingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seeded" | "sample" => Ok(SamplingStrategy::Seeded),
            "most-probable" | "most_probable" | "argmax" => Ok(SamplingStrategy::MostProbable),
            other => Err(format!(
                "unknown sampling strategy '{other}' (expected seeded or most-probable)"
            )),
        }
    }
}

/// The 32-byte generator seed for `input`.
pub fn seed_for(input: &[u8]) -> [u8; 32] {
    Sha256::digest(input).into()
}

/// A generator that reproduces the same draws for the same input.
///
/// Always ChaCha12; digests must not change with the `rand` release.
pub fn rng_for(input: &[u8]) -> ChaCha12Rng {
    ChaCha12Rng::from_seed(seed_for(input))
}

/// Choose one basis-state index from `state`.
pub fn select_outcome(state: &Statevector, strategy: SamplingStrategy, input: &[u8]) -> usize {
    match strategy {
        SamplingStrategy::Seeded => state.sample(&mut rng_for(input)),
        SamplingStrategy::MostProbable => state.most_probable(),
    }
}

/// Render `outcome` as `output_bits / 8` big-endian bytes.
///
/// Outcomes narrower than the digest are zero-padded on the left. When the
/// outcome is wider, only its low-order `output_bits` bits are kept.
/// `output_bits` must be a multiple of 8.
pub fn pack(outcome: u64, output_bits: u32) -> Vec<u8> {
    debug_assert!(
        output_bits % 8 == 0 && output_bits <= MAX_OUTPUT_BITS,
        "output_bits must be a multiple of 8 no larger than {MAX_OUTPUT_BITS}, got {output_bits}"
    );
    let len = (output_bits / 8) as usize;
    let kept = if output_bits >= u64::BITS {
        outcome
    } else {
        outcome & ((1u64 << output_bits) - 1)
    };

    let mut digest = vec![0u8; len];
    let be = kept.to_be_bytes();
    let n = len.min(be.len());
    digest[len - n..].copy_from_slice(&be[be.len() - n..]);
    digest
}
