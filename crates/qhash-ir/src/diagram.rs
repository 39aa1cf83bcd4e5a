//! Plain-text circuit diagrams.
//!
//! Instructions are packed into columns: each one goes into the first column
//! after the last one touching any qubit in its span, so a `cx` never shares
//! a column with a gate on a wire it crosses.

use crate::circuit::Circuit;
use crate::gate::Gate;
use crate::instruction::{Instruction, InstructionKind};

const WIRE: char = '─';
const CONTROL: &str = "●";
const TARGET: &str = "⊕";
const CROSSING: &str = "┼";
const MEASURE: &str = "M";

/// Render `circuit` as one line of text per qubit, qubit 0 first.
///
/// ```rust
/// use qhash_ir::{Circuit, render_text};
///
/// let text = render_text(&Circuit::bell().unwrap());
/// assert_eq!(text, "q0: ─H──●──M─\nq1: ────⊕──M─\n");
/// ```
pub fn render_text(circuit: &Circuit) -> String {
    let num_qubits = circuit.num_qubits();
    if num_qubits == 0 {
        return String::new();
    }

    let columns = build_columns(circuit);
    let label_width = format!("q{}: ", num_qubits - 1).len();

    let mut rows: Vec<String> = (0..num_qubits)
        .map(|q| format!("{:>label_width$}", format!("q{q}: ")))
        .collect();

    for column in &columns {
        let mut cells: Vec<Option<String>> = vec![None; num_qubits];
        for inst in column {
            place(inst, &mut cells);
        }
        let width = cells
            .iter()
            .flatten()
            .map(|cell| cell.chars().count())
            .max()
            .unwrap_or(1);

        for (row, cell) in rows.iter_mut().zip(&cells) {
            row.push(WIRE);
            push_centered(row, cell.as_deref(), width);
            row.push(WIRE);
        }
    }

    rows.into_iter().fold(String::new(), |mut out, row| {
        out.push_str(&row);
        out.push('\n');
        out
    })
}

/// Group instructions into columns by qubit span.
fn build_columns(circuit: &Circuit) -> Vec<Vec<&Instruction>> {
    let mut columns: Vec<Vec<&Instruction>> = Vec::new();
    let mut next_free = vec![0usize; circuit.num_qubits()];

    for inst in circuit.instructions() {
        let Some((lo, hi)) = span(inst) else {
            continue;
        };
        let col = next_free[lo..=hi].iter().copied().max().unwrap_or(0);
        if columns.len() <= col {
            columns.resize_with(col + 1, Vec::new);
        }
        columns[col].push(inst);
        for slot in &mut next_free[lo..=hi] {
            *slot = col + 1;
        }
    }

    columns
}

/// Lowest and highest qubit an instruction touches.
fn span(inst: &Instruction) -> Option<(usize, usize)> {
    let lo = inst.qubits.iter().map(|q| q.index()).min()?;
    let hi = inst.qubits.iter().map(|q| q.index()).max()?;
    Some((lo, hi))
}

fn place(inst: &Instruction, cells: &mut [Option<String>]) {
    match inst.kind {
        InstructionKind::Measure => {
            for q in &inst.qubits {
                cells[q.index()] = Some(MEASURE.to_string());
            }
        }
        InstructionKind::Gate(Gate::CX) => {
            let (control, target) = (inst.qubits[0].index(), inst.qubits[1].index());
            for cell in &mut cells[control.min(target) + 1..control.max(target)] {
                *cell = Some(CROSSING.to_string());
            }
            cells[control] = Some(CONTROL.to_string());
            cells[target] = Some(TARGET.to_string());
        }
        InstructionKind::Gate(gate) => {
            cells[inst.qubits[0].index()] = Some(label(gate));
        }
    }
}

fn label(gate: Gate) -> String {
    match gate {
        Gate::X => "X".to_string(),
        Gate::H => "H".to_string(),
        Gate::Rx(theta) => format!("Rx({theta:.3})"),
        Gate::Ry(theta) => format!("Ry({theta:.3})"),
        Gate::Rz(theta) => format!("Rz({theta:.3})"),
        Gate::CX => "CX".to_string(),
    }
}

fn push_centered(row: &mut String, content: Option<&str>, width: usize) {
    let content = content.unwrap_or("");
    let len = content.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    row.extend(std::iter::repeat_n(WIRE, left));
    row.push_str(content);
    row.extend(std::iter::repeat_n(WIRE, right));
}
