//! Digest configuration.

use serde::{Deserialize, Serialize};

use crate::error::{HashError, HashResult};
use crate::sampler::SamplingStrategy;

/// Default digest width in bits.
pub const DEFAULT_OUTPUT_BITS: u32 = 256;

/// Widest digest the construction produces.
pub const MAX_OUTPUT_BITS: u32 = 256;

/// Options for a [`QuantumHasher`](crate::QuantumHasher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    /// Digest width in bits; a positive multiple of 8, at most 256.
    #[serde(default = "default_output_bits")]
    pub output_bits: u32,

    /// How the measured outcome is chosen.
    #[serde(default)]
    pub sampling: SamplingStrategy,
}

fn default_output_bits() -> u32 {
    DEFAULT_OUTPUT_BITS
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            output_bits: default_output_bits(),
            sampling: SamplingStrategy::default(),
        }
    }
}

impl HashConfig {
    /// Default configuration with a different digest width.
    pub fn with_output_bits(output_bits: u32) -> Self {
        Self {
            output_bits,
            ..Self::default()
        }
    }

    /// Replace the sampling strategy.
    pub fn sampling(mut self, sampling: SamplingStrategy) -> Self {
        self.sampling = sampling;
        self
    }

    /// Digest length in bytes.
    pub fn output_bytes(&self) -> usize {
        (self.output_bits / 8) as usize
    }

    /// Check the digest width.
    pub fn validate(&self) -> HashResult<()> {
        if self.output_bits > MAX_OUTPUT_BITS {
            return Err(HashError::OutputTooLarge {
                requested: self.output_bits,
                max: MAX_OUTPUT_BITS,
            });
        }
        if self.output_bits == 0 || self.output_bits % 8 != 0 {
            return Err(HashError::InvalidOutputSize(self.output_bits));
        }
        Ok(())
    }
}
