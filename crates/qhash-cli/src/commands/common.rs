//! Shared helpers for CLI commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use qhash_ir::{Circuit, IrResult, QubitId};
use qhash_sim::Counts;

/// Outcomes shown in a histogram before the rest are summarised.
const HISTOGRAM_ROWS: usize = 16;

/// Where the bytes to digest come from.
#[derive(Args, Debug, Default)]
#[group(id = "input", multiple = false)]
pub struct InputArgs {
    /// Input given as UTF-8 text
    #[arg(short, long)]
    pub text: Option<String>,

    /// Input given as hex-encoded bytes
    #[arg(long = "hex", value_name = "HEX")]
    pub hex: Option<String>,

    /// Read the input from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    /// Resolve the input bytes.
    pub fn load(&self) -> Result<Vec<u8>> {
        if let Some(text) = &self.text {
            return Ok(text.as_bytes().to_vec());
        }
        if let Some(encoded) = &self.hex {
            return decode_hex(encoded);
        }
        if let Some(path) = &self.file {
            if !path.exists() {
                anyhow::bail!("File not found: {}", path.display());
            }
            return fs::read(path)
                .with_context(|| format!("Failed to read file: {}", path.display()));
        }
        anyhow::bail!("No input given; use --text, --hex or --file")
    }
}

/// Decode a hex string, ignoring surrounding whitespace and a `0x` prefix.
pub fn decode_hex(encoded: &str) -> Result<Vec<u8>> {
    let trimmed = encoded.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    hex::decode(digits).with_context(|| format!("Invalid hex input: {encoded}"))
}

/// The fixed 4-qubit circuit used to illustrate the gate set.
pub fn demo_circuit() -> IrResult<Circuit> {
    let mut circuit = Circuit::with_size("demo", 4);

    circuit.ry(1.57, QubitId(0))?.x(QubitId(1))?;
    for q in 0..4 {
        circuit.h(QubitId(q))?;
    }
    circuit
        .cx(QubitId(0), QubitId(1))?
        .cx(QubitId(2), QubitId(3))?
        .rz(0.78, QubitId(2))?
        .measure_all()?;

    Ok(circuit)
}

/// Print sampled outcomes as a bar chart, most frequent first.
pub fn print_histogram(counts: &Counts) {
    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        counts.total_shots()
    );

    let sorted = counts.sorted();
    let total = counts.total_shots() as f64;

    for (bitstring, count) in sorted.iter().take(HISTOGRAM_ROWS) {
        let prob = **count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);

        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }

    if sorted.len() > HISTOGRAM_ROWS {
        println!("  ... and {} more outcomes", sorted.len() - HISTOGRAM_ROWS);
    }
}
