//! Quantum phase estimation.
//!
//! Given a single-qubit unitary `U` and one of its eigenvectors `|u⟩` with
//! `U|u⟩ = e^{2πiθ}|u⟩`, the circuit writes a `t`-bit approximation of θ
//! into `t` counting qubits. Larger `t` buys precision; the counting
//! register reads `round(θ · 2^t)` exactly when θ has a `t`-bit expansion.
//!
//! Register layout: counting qubits `0..t` (most significant first), then
//! the eigenvector qubit at index `t`.

use tracing::debug;

use qlayer_core::matrix::{self, Matrix};
use qlayer_core::{Circuit, Gate, InitialState, Qubit, QubitSpec, gate};

use crate::error::{AlgoError, AlgoResult};
use crate::qft::inverse_qft;

/// `U^(2^k)` by repeated squaring.
fn power_of_two(unitary: &Matrix, k: usize) -> Matrix {
    (0..k).fold(unitary.clone(), |acc, _| acc.dot(&acc))
}

/// Build a phase estimation circuit with `precision` counting qubits.
///
/// ```rust
/// use qlayer_algo::phase_estimation;
/// use qlayer_core::{Qubit, gate};
///
/// // T|1⟩ = e^{iπ/4}|1⟩, i.e. θ = 1/8 = 0.001 in binary.
/// let circuit = phase_estimation(3, &gate::t_gate(), Qubit::one()).unwrap();
/// assert_eq!(circuit.execute(5), vec!["0011"; 5]);
/// ```
pub fn phase_estimation(
    precision: usize,
    unitary: &Matrix,
    eigenvector: Qubit,
) -> AlgoResult<Circuit> {
    if precision == 0 {
        return Err(AlgoError::InvalidPrecision(precision));
    }
    let num_qubits = precision + 1;

    let init = InitialState::custom(
        std::iter::repeat_n(QubitSpec::Zero, precision).chain([QubitSpec::from(eigenvector)]),
    );
    let mut circuit = Circuit::new(num_qubits, init)?;

    // Uniform superposition on the counting register
    let mut layer = vec![Gate::Hadamard; precision];
    layer.push(Gate::Identity);
    circuit.append_layer(layer)?;

    // Counting qubit i controls U^(2^(t-1-i)) on the eigenvector qubit
    for i in 0..precision {
        let power = power_of_two(unitary, precision - i - 1);
        circuit.append_layer([gate::controlled(i, precision, &power, num_qubits)?])?;
    }

    let iqft = inverse_qft(precision, InitialState::Prepared)?.unitary();
    circuit.append_layer([Gate::custom(iqft), Gate::Identity])?;

    debug!(
        precision,
        layers = circuit.num_layers(),
        "built phase estimation circuit"
    );
    Ok(circuit)
}

/// Read the phase estimate θ from a measured basis string.
///
/// Only the first `precision` characters (the counting register) are used.
pub fn phase_from_outcome(outcome: &str, precision: usize) -> Option<f64> {
    let bits = outcome.get(..precision)?;
    let value = usize::from_str_radix(bits, 2).ok()?;
    Some(value as f64 / (1u64 << precision) as f64)
}

/// Whether `vector` is an eigenvector of `unitary` within tolerance.
pub fn is_eigenvector(unitary: &Matrix, vector: &Qubit) -> bool {
    let v = vector.to_vector();
    let image = unitary.dot(&v);
    // Eigenvalue from the larger component to avoid dividing by ~0
    let (num, den) = if v[0].norm() >= v[1].norm() {
        (image[0], v[0])
    } else {
        (image[1], v[1])
    };
    let lambda = num / den;
    matrix::approx_eq_vec(&image, &v.mapv(|z| z * lambda), 1e-9)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qlayer_core::TOLERANCE;
    use qlayer_core::matrix::c;

    #[test]
    fn test_t_gate_three_bits() {
        let circuit = phase_estimation(3, &gate::t_gate(), Qubit::one()).unwrap();
        assert_eq!(circuit.num_qubits(), 4);
        let probs = circuit.probabilities();
        // |001⟩ ⊗ |1⟩ = index 3
        assert!((probs[3] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_t_gate_five_bits() {
        let circuit = phase_estimation(5, &gate::t_gate(), Qubit::one()).unwrap();
        let outcomes = circuit.execute(10);
        assert!(outcomes.iter().all(|o| o == "001001"));
        assert_eq!(phase_from_outcome(&outcomes[0], 5), Some(0.125));
    }

    #[test]
    fn test_zero_eigenvalue_phase() {
        // T|0⟩ = |0⟩, so θ = 0
        let circuit = phase_estimation(3, &gate::t_gate(), Qubit::zero()).unwrap();
        assert!((circuit.probabilities()[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pauli_z_phase_one_half() {
        // Z|1⟩ = -|1⟩ = e^{2πi·½}|1⟩
        let circuit = phase_estimation(2, &gate::pauli_z(), Qubit::one()).unwrap();
        let probs = circuit.probabilities();
        // counting register |10⟩, eigen qubit |1⟩ → |101⟩ = 5
        assert!((probs[5] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_precision() {
        assert!(matches!(
            phase_estimation(0, &gate::t_gate(), Qubit::one()),
            Err(AlgoError::InvalidPrecision(0))
        ));
    }

    #[test]
    fn test_power_of_two() {
        let s = gate::phase_s();
        // S^4 = I
        let p = power_of_two(&s, 2);
        assert!(matrix::approx_eq(&p, &matrix::identity(2), TOLERANCE));
        assert!((power_of_two(&s, 0)[[1, 1]] - c(0.0, 1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn test_eigenvector_check() {
        assert!(is_eigenvector(&gate::t_gate(), &Qubit::one()));
        assert!(is_eigenvector(&gate::pauli_x(), &Qubit::minus()));
        assert!(!is_eigenvector(&gate::pauli_x(), &Qubit::one()));
    }

    #[test]
    fn test_phase_from_outcome() {
        assert_eq!(phase_from_outcome("0111", 3), Some(3.0 / 8.0));
        assert_eq!(phase_from_outcome("01", 3), None);
    }
}
