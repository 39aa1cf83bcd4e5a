//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};

use crate::gate::Gate;
use crate::qubit::QubitId;

/// The kind of instruction in a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// A unitary gate.
    Gate(Gate),
    /// Computational-basis measurement of the listed qubits.
    Measure,
}

/// A complete instruction with operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The kind of instruction.
    pub kind: InstructionKind,
    /// Qubits this instruction operates on. For `CX` this is `[control, target]`.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create a gate instruction.
    pub fn gate(gate: Gate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Gate(gate),
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: Gate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: Gate, q1: QubitId, q2: QubitId) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Create a measurement over several qubits.
    pub fn measure(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Measure,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// The gate, if this is a gate instruction.
    pub fn as_gate(&self) -> Option<Gate> {
        match self.kind {
            InstructionKind::Gate(gate) => Some(gate),
            InstructionKind::Measure => None,
        }
    }

    /// Check if this is a gate instruction.
    pub fn is_gate(&self) -> bool {
        matches!(self.kind, InstructionKind::Gate(_))
    }

    /// Check if this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self.kind, InstructionKind::Measure)
    }

    /// The qubit a gate acts on: the last operand.
    pub fn target(&self) -> Option<QubitId> {
        self.qubits.last().copied()
    }

    /// The control qubit of a two-qubit gate.
    pub fn control(&self) -> Option<QubitId> {
        match self.kind {
            InstructionKind::Gate(Gate::CX) => self.qubits.first().copied(),
            _ => None,
        }
    }

    /// Get the name of this instruction.
    pub fn name(&self) -> &'static str {
        match self.kind {
            InstructionKind::Gate(gate) => gate.name(),
            InstructionKind::Measure => "measure",
        }
    }
}
