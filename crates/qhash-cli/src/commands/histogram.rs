//! Histogram command implementation.

use anyhow::Result;
use console::style;
use rand::SeedableRng;
use rand::rngs::StdRng;

use qhash::QuantumHasher;
use qhash_sim::{sample_counts, simulate};

use super::common::{demo_circuit, print_histogram};

/// Execute the histogram command; `None` samples the demonstration circuit.
pub fn execute(input: Option<&[u8]>, shots: u32, seed: Option<u64>) -> Result<()> {
    if shots == 0 {
        anyhow::bail!("--shots must be at least 1");
    }

    let state = match input {
        Some(bytes) => QuantumHasher::default().final_state(bytes)?,
        None => simulate(&demo_circuit()?)?,
    };

    println!(
        "{} Sampling {} qubits ({} shots)",
        style("→").cyan().bold(),
        state.num_qubits(),
        shots
    );

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let counts = sample_counts(&state, shots, &mut rng);
    print_histogram(&counts);

    Ok(())
}
