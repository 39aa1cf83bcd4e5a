//! Hash command implementation.

use anyhow::Result;
use console::style;

use qhash::{HashConfig, QuantumHasher};

/// Execute the hash command.
///
/// The hex digest goes alone on the first line of stdout.
pub fn execute(input: &[u8], config: HashConfig, show_trace: bool) -> Result<()> {
    let hasher = QuantumHasher::new(config);
    let trace = hasher.trace(input)?;

    println!("{}", hex::encode(&trace.digest));

    if show_trace {
        println!();
        println!("  Input:     {} bytes", input.len());
        println!(
            "  Register:  {} qubits, {} gates, depth {}",
            trace.register_width,
            trace.circuit.gate_count(),
            trace.circuit.depth()
        );
        println!(
            "  Sampling:  {}",
            style(hasher.config().sampling).yellow()
        );
        println!(
            "  Outcome:   {} ({})",
            style(&trace.outcome_bits).cyan(),
            trace.outcome
        );
        println!("  Digest:    {} bits", hasher.config().output_bits);
    }

    Ok(())
}
