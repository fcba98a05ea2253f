//! Quantum Fourier transform circuits.
//!
//! With qubit 0 as the most significant bit, the transform maps
//!
//! ```text
//! |j⟩  →  1/√N · Σ_k e^{2πi·jk/N} |k⟩,      N = 2^n
//! ```
//!
//! The textbook construction leaves the output qubits in reverse order, so
//! both circuits include a full register reversal.

use std::f64::consts::PI;

use tracing::debug;

use qlayer_core::matrix::{self, Matrix};
use qlayer_core::{Circuit, Gate, InitialState, gate};

use crate::error::AlgoResult;

/// Permutation reversing qubit order, e.g. |011⟩ ↔ |110⟩.
///
/// Built as a bubble of adjacent SWAPs. On hardware this would just be a
/// relabelling of the wires.
pub fn reverse_qubits(num_qubits: usize) -> Matrix {
    let swap_adjacent = |k: usize| {
        matrix::kron_all([
            &matrix::identity(1 << k),
            &*gate::swap(),
            &matrix::identity(1 << (num_qubits - k - 2)),
        ])
    };

    let mut transform = matrix::identity(1 << num_qubits);
    for i in 0..num_qubits.saturating_sub(1) {
        for j in 0..num_qubits - i - 1 {
            transform = transform.dot(&swap_adjacent(j));
        }
    }
    transform
}

/// Layer with a Hadamard on `qubit` and identities elsewhere.
fn hadamard_on(qubit: usize, num_qubits: usize) -> Vec<Gate> {
    (0..num_qubits)
        .map(|q| if q == qubit { Gate::Hadamard } else { Gate::Identity })
        .collect()
}

/// Angle of the k-th controlled rotation, 2π / 2^(k+1).
fn rotation_angle(k: usize) -> f64 {
    2.0 * PI / (1u64 << (k + 1)) as f64
}

/// Build the QFT on `num_qubits` qubits.
pub fn qft(num_qubits: usize, init: InitialState) -> AlgoResult<Circuit> {
    let mut circuit = Circuit::new(num_qubits, init)?;

    if num_qubits == 1 {
        circuit.append_layer([Gate::Hadamard])?;
        return Ok(circuit);
    }

    for i in 0..num_qubits {
        circuit.append_layer(hadamard_on(i, num_qubits))?;
        for k in 1..num_qubits - i {
            let r = gate::rotation(rotation_angle(k));
            circuit.append_layer([gate::controlled(i + k, i, &r, num_qubits)?])?;
        }
    }
    circuit.append_layer([reverse_qubits(num_qubits)])?;

    debug!(
        num_qubits,
        layers = circuit.num_layers(),
        "built QFT circuit"
    );
    Ok(circuit)
}

/// Build the inverse QFT on `num_qubits` qubits.
///
/// The layers of [`qft`] in reverse order with every rotation angle
/// negated. The controlled phase layers of one qubit commute, so their
/// internal order is kept.
pub fn inverse_qft(num_qubits: usize, init: InitialState) -> AlgoResult<Circuit> {
    let mut circuit = Circuit::new(num_qubits, init)?;
    circuit.append_layer([reverse_qubits(num_qubits)])?;

    if num_qubits == 1 {
        circuit.append_layer([Gate::Hadamard])?;
        return Ok(circuit);
    }

    for i in (0..num_qubits).rev() {
        for k in 1..num_qubits - i {
            let r = gate::rotation(-rotation_angle(k));
            circuit.append_layer([gate::controlled(i + k, i, &r, num_qubits)?])?;
        }
        circuit.append_layer(hadamard_on(i, num_qubits))?;
    }

    debug!(
        num_qubits,
        layers = circuit.num_layers(),
        "built inverse QFT circuit"
    );
    Ok(circuit)
}
