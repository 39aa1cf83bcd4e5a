//! Gate set of the hashing circuit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of gates the hashing circuit is built from.
///
/// Rotation angles are stored in radians and are always concrete; the digest
/// construction never needs symbolic parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Pauli-X (bit flip).
    X,
    /// Hadamard gate.
    H,
    /// Rotation around the X axis.
    Rx(f64),
    /// Rotation around the Y axis.
    Ry(f64),
    /// Rotation around the Z axis.
    Rz(f64),
    /// Controlled-X (CNOT). Operands are `[control, target]`.
    CX,
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::X => "x",
            Gate::H => "h",
            Gate::Rx(_) => "rx",
            Gate::Ry(_) => "ry",
            Gate::Rz(_) => "rz",
            Gate::CX => "cx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            Gate::X | Gate::H | Gate::Rx(_) | Gate::Ry(_) | Gate::Rz(_) => 1,
            Gate::CX => 2,
        }
    }

    /// Rotation angle, if this is a rotation gate.
    pub fn angle(&self) -> Option<f64> {
        match self {
            Gate::Rx(theta) | Gate::Ry(theta) | Gate::Rz(theta) => Some(*theta),
            Gate::X | Gate::H | Gate::CX => None,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angle() {
            Some(theta) => write!(f, "{}({theta:.4})", self.name()),
            None => write!(f, "{}", self.name()),
        }
    }
}
