//! The hashing circuit template.
//!
//! ```text
//! encoding:  X^bit_i · Ry(π/4 · bit_i)        on every qubit i
//! mixing ×3: H on every qubit
//!            CX(i, i+1) for i = 0 .. n-2
//!            Rx(π/3) then Rz(π/7) on every qubit
//! measure:   all qubits
//! ```

use std::f64::consts::PI;

use qhash_ir::{Circuit, IrResult, QubitId};
use tracing::debug;

use crate::encoder::EncodedInput;

/// Number of mixing rounds after the encoding layer.
pub const MIXING_ROUNDS: usize = 3;

/// Ry angle for a 1 bit; a 0 bit rotates by 0.
pub const ENCODING_ANGLE: f64 = PI / 4.0;

/// Rx angle of every mixing round.
pub const MIXING_RX_ANGLE: f64 = PI / 3.0;

/// Rz angle of every mixing round.
pub const MIXING_RZ_ANGLE: f64 = PI / 7.0;

/// Build the circuit for an encoded input.
pub fn build_circuit(encoded: &EncodedInput) -> IrResult<Circuit> {
    let n = encoded.register_width() as u32;
    let mut circuit = Circuit::with_size("qhash", n);

    for (i, &bit) in encoded.bits().iter().enumerate() {
        let q = QubitId(i as u32);
        if bit {
            circuit.x(q)?;
        }
        circuit.ry(ENCODING_ANGLE * f64::from(u8::from(bit)), q)?;
    }

    for _ in 0..MIXING_ROUNDS {
        for i in 0..n {
            circuit.h(QubitId(i))?;
        }
        for i in 0..n.saturating_sub(1) {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        for i in 0..n {
            circuit.rx(MIXING_RX_ANGLE, QubitId(i))?.rz(MIXING_RZ_ANGLE, QubitId(i))?;
        }
    }

    circuit.measure_all()?;

    debug!(
        qubits = n,
        gates = circuit.gate_count(),
        depth = circuit.depth(),
        "built hashing circuit"
    );
    Ok(circuit)
}
