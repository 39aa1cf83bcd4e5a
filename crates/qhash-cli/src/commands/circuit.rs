//! Circuit command implementation.

use anyhow::Result;
use console::style;

use qhash::QuantumHasher;
use qhash_ir::render_text;

use super::common::demo_circuit;

/// Execute the circuit command; `None` draws the demonstration circuit.
pub fn execute(input: Option<&[u8]>) -> Result<()> {
    let circuit = match input {
        Some(bytes) => {
            let (encoded, circuit) = QuantumHasher::default().circuit_for(bytes)?;
            println!("  Encoded prefix: {}", style(&encoded).cyan());
            circuit
        }
        None => demo_circuit()?,
    };

    println!(
        "{} Circuit '{}': {} qubits, {} gates, depth {}\n",
        style("→").cyan().bold(),
        style(circuit.name()).green(),
        circuit.num_qubits(),
        circuit.gate_count(),
        circuit.depth()
    );
    print!("{}", render_text(&circuit));

    Ok(())
}
