//! Version command implementation.

use console::style;

use qhash::{MAX_OUTPUT_BITS, MAX_REGISTER_WIDTH};

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum-inspired digests from a simulated circuit",
        style("qhash").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qhash-ir   Circuit intermediate representation");
    println!("  qhash-sim  Statevector simulator");
    println!("  qhash      Digest pipeline");
    println!("  qhash-cli  Command-line interface");
    println!();
    println!("Register:   up to {MAX_REGISTER_WIDTH} qubits");
    println!("Digest:     up to {MAX_OUTPUT_BITS} bits");
    println!("License:    {}", style("Apache-2.0").dim());
}
