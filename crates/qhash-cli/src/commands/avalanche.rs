//! Avalanche command implementation.

use anyhow::Result;
use console::style;

use qhash::{HashConfig, QuantumHasher, avalanche_ratio, bit_difference};

use super::common::decode_hex;

/// Execute the avalanche command.
pub fn execute(a: &str, b: &str, hex_input: bool, config: HashConfig) -> Result<()> {
    let (a_bytes, b_bytes) = if hex_input {
        (decode_hex(a)?, decode_hex(b)?)
    } else {
        (a.as_bytes().to_vec(), b.as_bytes().to_vec())
    };

    let hasher = QuantumHasher::new(config);
    let h1 = hasher.digest(&a_bytes)?;
    let h2 = hasher.digest(&b_bytes)?;

    let differing = bit_difference(&h1, &h2);
    let ratio = avalanche_ratio(&h1, &h2);

    println!("  {}: {}", style("a").cyan(), hex::encode(&h1));
    println!("  {}: {}", style("b").cyan(), hex::encode(&h2));
    println!(
        "\n  {} of {} bits differ ({:.2}%)",
        style(differing).yellow(),
        h1.len() * 8,
        ratio * 100.0
    );

    Ok(())
}
