//! Circuit layers.

use std::iter;
use std::sync::Arc;

use crate::error::{CircuitError, CircuitResult};
use crate::gate::Gate;
use crate::matrix::{self, Matrix};

/// One synchronous step of a circuit.
///
/// The gates are applied side by side; their tensor product spans the whole
/// register. `labels` holds one symbolic entry per qubit slot, so a
/// two-qubit gate contributes its label twice.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    gates: Vec<Arc<Matrix>>,
    labels: Vec<&'static str>,
    dimension: usize,
}

impl Layer {
    /// Resolve and validate a batch of gates for an n-qubit register.
    ///
    /// Nothing is recorded anywhere: the caller commits the returned layer.
    pub fn validate<I, G>(gates: I, num_qubits: usize) -> CircuitResult<Self>
    where
        I: IntoIterator<Item = G>,
        G: Into<Gate>,
    {
        let expected = 1usize << num_qubits;
        let mut matrices = Vec::new();
        let mut labels = Vec::new();
        let mut dimension = 1usize;

        for (slot, gate) in gates.into_iter().enumerate() {
            let gate = gate.into();
            let m = gate.matrix();
            if !matrix::is_square(&m) {
                return Err(CircuitError::NotSquare {
                    slot,
                    rows: m.nrows(),
                    cols: m.ncols(),
                });
            }
            dimension = dimension.saturating_mul(m.nrows());
            labels.extend(iter::repeat_n(gate.label(), qubit_span(m.nrows())));
            matrices.push(m);
        }

        if dimension != expected {
            return Err(CircuitError::dimension_in(
                expected,
                dimension,
                format!("layer of {} gates", matrices.len()),
            ));
        }

        Ok(Self {
            gates: matrices,
            labels,
            dimension,
        })
    }

    /// The resolved gate matrices, most significant slot first.
    pub fn gates(&self) -> &[Arc<Matrix>] {
        &self.gates
    }

    /// Symbolic labels, one per qubit.
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    /// Dimension of the combined operator, 2^n.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of gates in the layer.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the layer holds no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

/// Number of qubits a square matrix of the given size acts on.
fn qubit_span(rows: usize) -> usize {
    if rows.is_power_of_two() {
        rows.trailing_zeros() as usize
    } else {
        1
    }
}
