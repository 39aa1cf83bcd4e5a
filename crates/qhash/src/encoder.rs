//! Input bytes → register bits.

use std::fmt;

use crate::error::{HashError, HashResult};

/// Widest register the encoder will ask for.
pub const MAX_REGISTER_WIDTH: usize = 20;

/// The bits of an input that reach the circuit.
///
/// Bytes expand most-significant bit first. Only the first
/// [`MAX_REGISTER_WIDTH`] bits are materialised; the logical length of the
/// full bitstring is kept alongside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedInput {
    prefix: Vec<bool>,
    total_bits: usize,
}

impl EncodedInput {
    /// Number of simulated qubits, `min(total_bits, 20)`.
    pub fn register_width(&self) -> usize {
        self.prefix.len()
    }

    /// Length of the full bitstring, `8 × input length`.
    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    /// Bit `i` of the register prefix.
    ///
    /// # Panics
    ///
    /// Panics if `i >= register_width()`.
    pub fn bit(&self, i: usize) -> bool {
        self.prefix[i]
    }

    /// The register prefix.
    pub fn bits(&self) -> &[bool] {
        &self.prefix
    }
}

impl fmt::Display for EncodedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.prefix {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Expand `input` into its register prefix.
pub fn encode(input: &[u8]) -> HashResult<EncodedInput> {
    if input.is_empty() {
        return Err(HashError::EmptyInput);
    }

    let total_bits = input.len() * 8;
    let width = total_bits.min(MAX_REGISTER_WIDTH);
    let prefix = input
        .iter()
        .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1))
        .take(width)
        .collect();

    Ok(EncodedInput { prefix, total_bits })
}
