//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - layered state-vector quantum circuit simulator",
        style("qlayer").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qlayer-core  Qubits, gates, layered circuits and the dense engine");
    println!("  qlayer-algo  QFT, phase estimation and Grover search");
    println!("  qlayer-cli   Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
