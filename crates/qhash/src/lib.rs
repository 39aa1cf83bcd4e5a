//! `qhash`: a quantum-inspired digest.
//!
//! A digest is computed by simulating a small parameterized circuit:
//!
//! 1. [`encoder`] expands the input into bits and fixes the register width
//!    `n = min(8·len, 20)`;
//! 2. [`builder`] lays out an encoding layer and three mixing rounds;
//! 3. [`qhash_sim::simulate`] evolves the ideal statevector;
//! 4. [`sampler`] picks one outcome deterministically and packs it into
//!    `output_bits / 8` big-endian bytes.
//!
//! This is an experiment, not a cryptographic hash: the outcome carries at
//! most 20 bits of entropy and offers no collision or preimage resistance.
//!
//! # Quick start
//!
//! ```rust
//! use qhash::quantum_hash;
//!
//! let digest = quantum_hash(b"hi", 64).unwrap();
//! assert_eq!(digest.len(), 8);
//! assert_eq!(digest, quantum_hash(b"hi", 64).unwrap());
//!
//! assert!(quantum_hash(b"hi", 264).unwrap_err().is_invalid_argument());
//! assert!(quantum_hash(b"", 64).unwrap_err().is_invalid_argument());
//! ```

pub mod builder;
pub mod config;
pub mod diffusion;
pub mod encoder;
pub mod error;
pub mod sampler;

use qhash_ir::Circuit;
use qhash_sim::{NORM_TOLERANCE, Statevector, simulate};
use tracing::{debug, instrument};

pub use builder::{MIXING_ROUNDS, build_circuit};
pub use config::{DEFAULT_OUTPUT_BITS, HashConfig, MAX_OUTPUT_BITS};
pub use diffusion::{avalanche_ratio, bit_difference};
pub use encoder::{EncodedInput, MAX_REGISTER_WIDTH, encode};
pub use error::{HashError, HashResult};
pub use sampler::{SamplingStrategy, pack, select_outcome};

/// Digest `input` into `output_bits / 8` bytes with default sampling.
///
/// Fails with an invalid-argument error when `output_bits` exceeds 256, is
/// not a positive multiple of 8, or `input` is empty.
pub fn quantum_hash(input: &[u8], output_bits: u32) -> HashResult<Vec<u8>> {
    QuantumHasher::new(HashConfig::with_output_bits(output_bits)).digest(input)
}

/// Digest `input` into 256 bits.
pub fn quantum_hash_default(input: &[u8]) -> HashResult<Vec<u8>> {
    QuantumHasher::default().digest(input)
}

/// Intermediate results of one digest computation.
#[derive(Debug, Clone)]
pub struct HashTrace {
    /// Simulated register width.
    pub register_width: usize,
    /// The circuit that was simulated.
    pub circuit: Circuit,
    /// Selected basis-state index.
    pub outcome: usize,
    /// `outcome` as an `n`-bit string, most significant bit first.
    pub outcome_bits: String,
    /// The packed digest.
    pub digest: Vec<u8>,
}

/// Computes digests for a fixed [`HashConfig`].
///
/// Holds no state besides its configuration; share it freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantumHasher {
    config: HashConfig,
}

impl QuantumHasher {
    /// Create a hasher with the given configuration.
    pub fn new(config: HashConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    /// Compute the digest of `input`.
    pub fn digest(&self, input: &[u8]) -> HashResult<Vec<u8>> {
        self.trace(input).map(|trace| trace.digest)
    }

    /// Encode `input` and build its circuit without simulating it.
    pub fn circuit_for(&self, input: &[u8]) -> HashResult<(EncodedInput, Circuit)> {
        self.config.validate()?;
        let encoded = encode(input)?;
        let circuit = build_circuit(&encoded)?;
        Ok((encoded, circuit))
    }

    /// The final state the digest of `input` is sampled from.
    pub fn final_state(&self, input: &[u8]) -> HashResult<Statevector> {
        let (_, circuit) = self.circuit_for(input)?;
        run(&circuit)
    }

    /// Compute the digest of `input`, keeping every intermediate result.
    #[instrument(skip(self, input), fields(input_len = input.len(), output_bits = self.config.output_bits))]
    pub fn trace(&self, input: &[u8]) -> HashResult<HashTrace> {
        let (encoded, circuit) = self.circuit_for(input)?;
        debug!(
            register_width = encoded.register_width(),
            prefix = %encoded,
            "encoded input"
        );

        let state = run(&circuit)?;
        let outcome = select_outcome(&state, self.config.sampling, input);
        let outcome_bits = state.outcome_to_bitstring(outcome);
        let digest = pack(outcome as u64, self.config.output_bits);

        debug!(
            sampling = %self.config.sampling,
            outcome = %outcome_bits,
            "selected outcome"
        );

        Ok(HashTrace {
            register_width: encoded.register_width(),
            circuit,
            outcome,
            outcome_bits,
            digest,
        })
    }
}

/// Simulate `circuit`; a state that fails to normalise is a simulator bug.
fn run(circuit: &Circuit) -> HashResult<Statevector> {
    let state = simulate(circuit)?;
    let total = state.total_probability();
    assert!(
        (total - 1.0).abs() <= NORM_TOLERANCE,
        "internal invariant violated: total probability {total} after simulation"
    );
    Ok(state)
}
