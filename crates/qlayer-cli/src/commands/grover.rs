//! Grover search command implementation.

use anyhow::Result;
use console::style;

use qlayer_algo::{grover, optimal_iterations};
use qlayer_core::basis_string;

use super::common::{OutputFormat, Session, print_header, print_result, print_success};

/// Execute the grover command.
pub fn execute(
    session: &mut Session,
    qubits: usize,
    marked: usize,
    iterations: Option<usize>,
    trials: usize,
    draw: bool,
) -> Result<()> {
    let iterations = iterations.unwrap_or_else(|| optimal_iterations(qubits));
    let circuit = grover(qubits, marked, iterations)?;
    let target = basis_string(marked, qubits);
    let table = session.format() == OutputFormat::Table;

    if table {
        print_header("Grover search");
        print_result("Marked", style(&target).cyan());
        print_result("Iterations", iterations);
        print_result(
            "Success probability",
            format!("{:.4}", circuit.probabilities()[marked]),
        );
    }

    let counts = session.report("grover", &circuit, trials, draw)?;

    if table {
        match counts.most_frequent() {
            Some((best, _)) if best == target => {
                println!();
                print_success(&format!("Found |{best}⟩"));
            }
            Some((best, _)) => {
                println!(
                    "\n{} most frequent outcome |{best}⟩ is not the marked state",
                    style("!").yellow().bold()
                );
            }
            None => {}
        }
    }
    Ok(())
}
