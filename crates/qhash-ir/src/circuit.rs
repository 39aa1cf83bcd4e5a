//! High-level circuit builder API.

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::instruction::Instruction;
use crate::qubit::QubitId;

/// A quantum circuit over a fixed-width register.
///
/// Instructions are kept in application order. Every operand is validated
/// against the register width when the instruction is appended, so a built
/// circuit can be simulated without further checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Register width.
    num_qubits: u32,
    /// Instructions in application order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create an empty circuit with `num_qubits` qubits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: vec![],
        }
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::H, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::X, qubit))?;
        Ok(self)
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::Rx(theta), qubit))?;
        Ok(self)
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::Ry(theta), qubit))?;
        Ok(self)
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(Gate::Rz(theta), qubit))?;
        Ok(self)
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(Gate::CX, control, target))?;
        Ok(self)
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Measure every qubit in the computational basis.
    ///
    /// Adds no gate; the simulator treats it as the end of the circuit.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        let qubits = (0..self.num_qubits).map(QubitId);
        self.apply(Instruction::measure(qubits))?;
        Ok(self)
    }

    /// Append a validated instruction.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<()> {
        self.validate(&instruction)?;
        self.instructions.push(instruction);
        Ok(())
    }

    fn validate(&self, instruction: &Instruction) -> IrResult<()> {
        let gate_name = instruction.name();

        if let Some(gate) = instruction.as_gate() {
            let got = instruction.qubits.len() as u32;
            if got != gate.num_qubits() {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate_name.to_string(),
                    expected: gate.num_qubits(),
                    got,
                });
            }
        }

        for (i, &qubit) in instruction.qubits.iter().enumerate() {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit,
                    num_qubits: self.num_qubits,
                    gate_name: Some(gate_name.to_string()),
                });
            }
            if instruction.qubits[..i].contains(&qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: Some(gate_name.to_string()),
                });
            }
        }

        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// All instructions in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Gate instructions only, in application order.
    pub fn gates(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter().filter(|inst| inst.is_gate())
    }

    /// Number of gate instructions.
    pub fn gate_count(&self) -> usize {
        self.gates().count()
    }

    /// Whether the circuit ends in a measurement.
    pub fn is_measured(&self) -> bool {
        self.instructions.last().is_some_and(Instruction::is_measure)
    }

    /// Circuit depth: the number of gate layers when every gate is placed
    /// as early as its operands allow.
    pub fn depth(&self) -> usize {
        let mut layer = vec![0usize; self.num_qubits()];
        for inst in self.gates() {
            let next = inst
                .qubits
                .iter()
                .map(|q| layer[q.index()])
                .max()
                .unwrap_or(0)
                + 1;
            for q in &inst.qubits {
                layer[q.index()] = next;
            }
        }
        layer.into_iter().max().unwrap_or(0)
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a Bell state circuit.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_size("bell", 2);
        circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?.measure_all()?;
        Ok(circuit)
    }
}
