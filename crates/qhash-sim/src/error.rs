//! Error types for the simulator crate.

use thiserror::Error;

/// Errors produced by statevector simulation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Circuit is wider than the simulator supports.
    #[error("Circuit has {num_qubits} qubits but simulator only supports {max_qubits}")]
    CircuitTooLarge {
        /// Register width of the rejected circuit.
        num_qubits: usize,
        /// Maximum supported register width.
        max_qubits: usize,
    },

    /// Gate was given the wrong number of operands.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: &'static str,
        /// Expected number of qubits.
        expected: usize,
        /// Actual number of qubits provided.
        got: usize,
    },

    /// Operand lies outside the state's register.
    #[error("Qubit {qubit} not found in {num_qubits}-qubit state (gate: {gate_name})")]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: usize,
        /// Register width of the state.
        num_qubits: usize,
        /// Name of the gate.
        gate_name: &'static str,
    },

    /// Same qubit used twice by one gate.
    #[error("Duplicate qubit q{qubit} in operation (gate: {gate_name})")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: usize,
        /// Name of the gate.
        gate_name: &'static str,
    },
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
