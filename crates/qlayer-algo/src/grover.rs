//! Grover search over an n-qubit register with a single marked item.
//!
//! The oracle and the zero-state reflection are written directly as
//! diagonal matrices; each occupies a whole layer.

use std::f64::consts::PI;

use ndarray::Array1;
use tracing::debug;

use qlayer_core::matrix::{Matrix, c};
use qlayer_core::{Circuit, Gate};

use crate::error::{AlgoError, AlgoResult};

/// Optimal iteration count for one marked item, `round(π/4 · √2^n)`, at least 1.
pub fn optimal_iterations(num_qubits: usize) -> usize {
    let n = (1u64 << num_qubits) as f64;
    ((PI / 4.0 * n.sqrt()).round() as usize).max(1)
}

/// Diagonal ±1 matrix with `-1` wherever `flip` holds.
fn phase_flip(dimension: usize, flip: impl Fn(usize) -> bool) -> Matrix {
    let diag = Array1::from_shape_fn(dimension, |i| {
        if flip(i) { c(-1.0, 0.0) } else { c(1.0, 0.0) }
    });
    Matrix::from_diag(&diag)
}

/// Oracle flipping the sign of `|marked⟩`.
pub fn oracle(num_qubits: usize, marked: usize) -> AlgoResult<Matrix> {
    let dimension = 1usize << num_qubits;
    if marked >= dimension {
        return Err(AlgoError::MarkedOutOfRange { marked, num_qubits });
    }
    Ok(phase_flip(dimension, |i| i == marked))
}

/// Reflection `2|0⟩⟨0| - I`.
pub fn zero_reflection(num_qubits: usize) -> Matrix {
    phase_flip(1 << num_qubits, |i| i != 0)
}

/// Build a Grover circuit searching for `marked` with `iterations` rounds.
///
/// The register starts in `|0…0⟩`; the first layer spreads it uniformly.
pub fn grover(num_qubits: usize, marked: usize, iterations: usize) -> AlgoResult<Circuit> {
    let oracle = Gate::custom(oracle(num_qubits, marked)?);
    let reflection = Gate::custom(zero_reflection(num_qubits));
    let hadamards = vec![Gate::Hadamard; num_qubits];

    let mut circuit = Circuit::prepared(num_qubits)?;
    circuit.append_layer(hadamards.clone())?;

    for _ in 0..iterations {
        circuit
            .append_layer([oracle.clone()])?
            .append_layer(hadamards.clone())?
            .append_layer([reflection.clone()])?
            .append_layer(hadamards.clone())?;
    }

    debug!(
        num_qubits,
        marked,
        iterations,
        layers = circuit.num_layers(),
        "built Grover circuit"
    );
    Ok(circuit)
}
