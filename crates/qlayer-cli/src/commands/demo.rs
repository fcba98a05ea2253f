//! Guided tour: QFT matrices, QFT sampling and phase estimation of T.

use anyhow::Result;

use qlayer_algo::{inverse_qft, phase_estimation, phase_from_outcome, qft};
use qlayer_core::{InitialState, Qubit, gate};

use super::common::{
    Session, print_header, print_matrix, print_result, print_section, print_success,
};

const TRIALS: usize = 10;

/// Execute the demo command.
pub fn execute(session: &mut Session) -> Result<()> {
    print_header("qlayer demonstration");

    let forward = qft(2, InitialState::Prepared)?;
    let inverse = inverse_qft(2, InitialState::Prepared)?;

    print_section("QFT matrix (2 qubits)");
    print_matrix(&forward.unitary(), 3);

    print_section("Inverse QFT matrix (2 qubits)");
    print_matrix(&inverse.unitary(), 3);

    // Uniform over |00⟩..|11⟩
    print_section("QFT on |00⟩");
    let samples = forward.execute_with_rng(TRIALS, session.rng());
    print_result("Outcomes", samples.join(" "));

    // T|1⟩ = e^{2πi/8}|1⟩, so θ = 0.001 in binary
    for precision in [3, 5] {
        print_section(&format!(
            "Phase estimation of T on |1⟩, {precision} counting qubits"
        ));
        let circuit = phase_estimation(precision, &gate::t_gate(), Qubit::one())?;
        let samples = circuit.execute_with_rng(TRIALS, session.rng());
        print_result("Outcomes", samples.join(" "));
        if let Some(theta) = samples
            .first()
            .and_then(|s| phase_from_outcome(s, precision))
        {
            print_result("θ estimate", theta);
        }
    }

    println!();
    print_success("Demo complete");
    Ok(())
}
