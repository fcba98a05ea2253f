//! QFT command implementation.

use anyhow::Result;
use console::style;

use qlayer_algo::{inverse_qft, qft};
use qlayer_core::InitialState;

use super::common::{OutputFormat, Session, print_header, print_matrix, print_section};

/// Execute the qft command.
pub fn execute(
    session: &mut Session,
    qubits: usize,
    inverse: bool,
    trials: usize,
    draw: bool,
    show_matrix: bool,
) -> Result<()> {
    let name = if inverse { "inverse-qft" } else { "qft" };
    let circuit = if inverse {
        inverse_qft(qubits, InitialState::Prepared)?
    } else {
        qft(qubits, InitialState::Prepared)?
    };

    if session.format() == OutputFormat::Table {
        print_header(&format!(
            "{} on {} qubits",
            if inverse { "Inverse QFT" } else { "QFT" },
            style(qubits).yellow()
        ));
        if show_matrix {
            print_section("Unitary");
            print_matrix(&circuit.unitary(), 3);
        }
    }

    session.report(name, &circuit, trials, draw)?;
    Ok(())
}
