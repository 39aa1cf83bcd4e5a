//! qhash Circuit Intermediate Representation
//!
//! The data structures the digest pipeline uses to describe its circuit: a
//! fixed-width register, a closed gate set, and an ordered instruction list.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses a qubit and its bit in a basis index
//! - **Gates**: [`Gate`], the closed set `X`, `H`, `Rx`, `Ry`, `Rz`, `CX`
//! - **Instructions**: [`Instruction`] combining a gate (or measurement) with operands
//! - **Circuit**: [`Circuit`] builder with operand validation
//! - **Diagrams**: [`render_text`] draws a circuit one wire per line
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qhash_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell_state", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.gate_count(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `X` | 1 | Bit flip |
//! | `H` | 1 | Hadamard gate |
//! | `Rx`, `Ry`, `Rz` | 1 | Rotation gates |
//! | `CX` | 2 | Controlled-NOT (CNOT) |

pub mod circuit;
pub mod diagram;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use diagram::render_text;
pub use error::{IrError, IrResult};
pub use gate::Gate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::QubitId;
