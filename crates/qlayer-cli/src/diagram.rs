//! Plain-text circuit diagrams.
//!
//! One line per qubit, one column per layer. Every label is centred in a
//! five-character field of dashes:
//!
//! ```text
//! --H----CNT-
//! --I----CNT-
//! ```

use qlayer_core::Circuit;

const FIELD: usize = 5;

/// Centre `label` between dashes, e.g. `H` → `--H--`, `CNT` → `-CNT-`.
pub fn pad_label(label: &str) -> String {
    let dashes = "-".repeat(FIELD.saturating_sub(label.chars().count()) / 2);
    format!("{dashes}{label}{dashes}")
}

/// Render the circuit, one line per qubit.
pub fn render(circuit: &Circuit) -> String {
    let labels = circuit.labels();
    let mut out = String::new();
    for qubit in 0..circuit.num_qubits() {
        for layer in &labels {
            out.push_str(&pad_label(layer.get(qubit).copied().unwrap_or("?")));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use qlayer_core::{Gate, gate};

    #[test]
    fn test_pad_label() {
        assert_eq!(pad_label("H"), "--H--");
        assert_eq!(pad_label("CNT"), "-CNT-");
        assert_eq!(pad_label("LONGER"), "LONGER");
    }

    #[test]
    fn test_render_bell() {
        let mut circuit = Circuit::prepared(2).unwrap();
        circuit
            .append_layer([Gate::Hadamard, Gate::Identity])
            .unwrap()
            .append_layer([Gate::Cnot])
            .unwrap();
        assert_eq!(render(&circuit), "--H----CNT-\n--I----CNT-\n");
    }

    #[test]
    fn test_render_custom_gate() {
        let mut circuit = Circuit::prepared(3).unwrap();
        circuit
            .append_layer([gate::controlled(0, 2, &gate::pauli_x(), 3).unwrap()])
            .unwrap();
        assert_eq!(render(&circuit), "--U--\n--U--\n--U--\n");
    }

    #[test]
    fn test_render_empty_circuit() {
        let circuit = Circuit::prepared(2).unwrap();
        assert_eq!(render(&circuit), "\n\n");
    }
}
