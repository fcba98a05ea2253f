//! Phase estimation command implementation.

use anyhow::{Result, bail};
use console::style;

use qlayer_algo::{is_eigenvector, phase_estimation, phase_from_outcome};
use qlayer_core::{Gate, QubitSpec};

use super::common::{OutputFormat, Session, print_header, print_result};

/// Execute the phase command.
pub fn execute(
    session: &mut Session,
    precision: usize,
    gate: &str,
    eigenvector: &str,
    trials: usize,
    draw: bool,
) -> Result<()> {
    let unitary = gate.parse::<Gate>()?.matrix();
    if unitary.nrows() != 2 {
        bail!("Phase estimation needs a single-qubit gate, '{gate}' spans {} rows", unitary.nrows());
    }
    let eigen = eigenvector.parse::<QubitSpec>()?.qubit();
    if !is_eigenvector(&unitary, &eigen) {
        bail!("|{eigenvector}⟩ is not an eigenvector of {gate}");
    }

    let circuit = phase_estimation(precision, &unitary, eigen)?;
    let table = session.format() == OutputFormat::Table;

    if table {
        print_header(&format!(
            "Phase estimation of {} on |{eigenvector}⟩",
            style(gate.to_uppercase()).yellow()
        ));
        print_result("Counting qubits", precision);
    }

    let counts = session.report("phase-estimation", &circuit, trials, draw)?;

    if table {
        if let Some(theta) = counts
            .most_frequent()
            .and_then(|(best, _)| phase_from_outcome(best, precision))
        {
            println!();
            print_result("θ estimate", theta);
        }
    }
    Ok(())
}
