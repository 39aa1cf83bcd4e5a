//! qhash Statevector Simulator
//!
//! Exact statevector simulation of [`qhash_ir::Circuit`]s. There is no
//! backend object or job queue: [`simulate`] is a pure function from a
//! circuit to its final [`Statevector`], so every call owns its own state
//! and independent calls can run on separate threads.
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//!
//! Circuits wider than [`MAX_QUBITS`] are rejected.
//!
//! # Example
//!
//! ```rust
//! use qhash_ir::Circuit;
//! use qhash_sim::{NORM_TOLERANCE, simulate};
//!
//! let circuit = Circuit::bell().unwrap();
//! let state = simulate(&circuit).unwrap();
//!
//! let probs = state.probabilities();
//! assert!((probs[0b00] - 0.5).abs() < 1e-12);
//! assert!((probs[0b11] - 0.5).abs() < 1e-12);
//! assert!(state.is_normalized(NORM_TOLERANCE));
//! ```

mod counts;
mod error;
mod statevector;

use std::time::Instant;

use qhash_ir::Circuit;
use tracing::{debug, instrument};

pub use counts::{Counts, sample_counts};
pub use error::{SimError, SimResult};
pub use statevector::Statevector;

/// Widest register the simulator accepts (2^20 amplitudes, ~16 MiB).
pub const MAX_QUBITS: usize = 20;

/// Allowed deviation of the total probability from 1.
pub const NORM_TOLERANCE: f64 = 1e-6;

/// Evolve |0...0⟩ through every instruction of `circuit`.
#[instrument(skip(circuit), fields(circuit = circuit.name(), qubits = circuit.num_qubits()))]
pub fn simulate(circuit: &Circuit) -> SimResult<Statevector> {
    let num_qubits = circuit.num_qubits();
    if num_qubits > MAX_QUBITS {
        return Err(SimError::CircuitTooLarge {
            num_qubits,
            max_qubits: MAX_QUBITS,
        });
    }

    let start = Instant::now();
    let mut state = Statevector::new(num_qubits);
    for inst in circuit.instructions() {
        state.apply(inst)?;
    }

    debug!(
        gates = circuit.gate_count(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "simulation completed"
    );
    Ok(state)
}
