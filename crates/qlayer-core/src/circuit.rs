//! High-level circuit builder API.

use rand::Rng;
use tracing::debug;

use crate::error::{CircuitError, CircuitResult};
use crate::gate::Gate;
use crate::layer::Layer;
use crate::state::{InitialState, State};

/// A layered quantum circuit over a fixed register.
///
/// The circuit owns its initial state and an ordered list of layers. Layers
/// are only ever appended; each one spans the full register dimension 2^n.
/// Reading the circuit through the execution methods does not freeze it.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// Register size.
    num_qubits: usize,
    /// State the layers are applied to.
    initial_state: State,
    /// Layers in application order.
    layers: Vec<Layer>,
}

impl Circuit {
    /// Create an empty circuit.
    ///
    /// Random initial states draw from the thread-local generator; use
    /// [`Circuit::with_rng`] for reproducible preparation.
    pub fn new(num_qubits: usize, init: InitialState) -> CircuitResult<Self> {
        Self::with_rng(num_qubits, init, &mut rand::thread_rng())
    }

    /// Create an empty circuit, preparing random qubits from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        num_qubits: usize,
        init: InitialState,
        rng: &mut R,
    ) -> CircuitResult<Self> {
        let initial_state = State::with_rng(num_qubits, &init, rng)?;
        Ok(Self::from_state(initial_state))
    }

    /// Create an empty circuit over an existing state.
    pub fn from_state(initial_state: State) -> Self {
        Self {
            num_qubits: initial_state.num_qubits(),
            initial_state,
            layers: vec![],
        }
    }

    /// Convenience constructor for a circuit starting in |0...0⟩.
    pub fn prepared(num_qubits: usize) -> CircuitResult<Self> {
        Self::new(num_qubits, InitialState::Prepared)
    }

    /// Append one layer of gates.
    ///
    /// Every gate is resolved and checked first; the circuit is only touched
    /// once the whole layer is known to be square in every slot and to span
    /// exactly 2^n dimensions.
    ///
    /// ```rust
    /// use qlayer_core::{Circuit, Gate};
    ///
    /// let mut circuit = Circuit::prepared(2).unwrap();
    /// circuit
    ///     .append_layer([Gate::Hadamard, Gate::Identity])
    ///     .unwrap()
    ///     .append_layer([Gate::Cnot])
    ///     .unwrap();
    /// assert_eq!(circuit.num_layers(), 2);
    /// ```
    pub fn append_layer<I, G>(&mut self, gates: I) -> CircuitResult<&mut Self>
    where
        I: IntoIterator<Item = G>,
        G: Into<Gate>,
    {
        let layer = Layer::validate(gates, self.num_qubits)?;
        self.commit(layer);
        Ok(self)
    }

    /// Append an already validated layer.
    ///
    /// Fails if the layer was built for a different register size.
    pub fn push_layer(&mut self, layer: Layer) -> CircuitResult<&mut Self> {
        if layer.dimension() != self.dimension() {
            return Err(CircuitError::dimension_in(
                self.dimension(),
                layer.dimension(),
                "layer",
            ));
        }
        self.commit(layer);
        Ok(self)
    }

    fn commit(&mut self, layer: Layer) {
        debug!(
            index = self.layers.len(),
            gates = layer.len(),
            labels = ?layer.labels(),
            "appended layer"
        );
        self.layers.push(layer);
    }

    /// Append every layer of `other`, leaving `other` untouched.
    ///
    /// Gate matrices are shared, not copied.
    pub fn append_circuit(&mut self, other: &Circuit) -> CircuitResult<&mut Self> {
        if other.num_qubits != self.num_qubits {
            return Err(CircuitError::SizeMismatch {
                expected: self.num_qubits,
                got: other.num_qubits,
            });
        }
        debug!(
            existing = self.layers.len(),
            appended = other.layers.len(),
            "appending circuit"
        );
        self.layers.extend(other.layers.iter().cloned());
        Ok(self)
    }

    /// Replace the initial state.
    pub fn set_initial_state(&mut self, state: State) -> CircuitResult<()> {
        if state.num_qubits() != self.num_qubits {
            return Err(CircuitError::SizeMismatch {
                expected: self.num_qubits,
                got: state.num_qubits(),
            });
        }
        self.initial_state = state;
        Ok(())
    }

    /// Register size.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Hilbert space dimension, 2^n.
    pub fn dimension(&self) -> usize {
        1 << self.num_qubits
    }

    /// Number of layers.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Layers in application order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The state the circuit is applied to.
    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    /// Per-layer symbolic labels.
    pub fn labels(&self) -> Vec<&[&'static str]> {
        self.layers.iter().map(Layer::labels).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Matrix, c, identity};
    use crate::state::QubitSpec;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::prepared(3).unwrap();
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.dimension(), 8);
        assert_eq!(circuit.num_layers(), 0);
        assert_eq!(circuit.initial_state().amplitudes()[0], c(1.0, 0.0));
    }

    #[test]
    fn test_empty_register_rejected() {
        assert!(matches!(
            Circuit::prepared(0),
            Err(CircuitError::EmptyRegister)
        ));
    }

    #[test]
    fn test_custom_initial_state_length_checked() {
        let err = Circuit::new(3, InitialState::custom([QubitSpec::Plus, QubitSpec::Minus]))
            .unwrap_err();
        assert!(matches!(err, CircuitError::LengthMismatch { expected: 3, got: 2 }));
    }

    #[test]
    fn test_append_layer_fluent() {
        let mut circuit = Circuit::prepared(2).unwrap();
        circuit
            .append_layer([Gate::Hadamard, Gate::Hadamard])
            .unwrap()
            .append_layer([Gate::Cnot])
            .unwrap();
        assert_eq!(circuit.num_layers(), 2);
        assert_eq!(circuit.labels(), vec![&["H", "H"][..], &["CNT", "CNT"][..]]);
    }

    #[test]
    fn test_failed_append_leaves_circuit_unchanged() {
        let mut circuit = Circuit::prepared(2).unwrap();
        circuit.append_layer([Gate::Hadamard, Gate::Identity]).unwrap();

        let err = circuit.append_layer([Gate::Hadamard]).unwrap_err();
        assert!(matches!(err, CircuitError::DimensionMismatch { .. }));

        let tall = Matrix::from_elem((2, 1), c(1.0, 0.0));
        let err = circuit
            .append_layer([Gate::Hadamard, Gate::custom(tall)])
            .unwrap_err();
        assert!(matches!(err, CircuitError::NotSquare { slot: 1, .. }));

        assert_eq!(circuit.num_layers(), 1);
    }

    #[test]
    fn test_append_full_register_matrix() {
        let mut circuit = Circuit::prepared(3).unwrap();
        circuit.append_layer([identity(8)]).unwrap();
        assert_eq!(circuit.layers()[0].len(), 1);
    }

    #[test]
    fn test_append_circuit() {
        let mut a = Circuit::prepared(2).unwrap();
        a.append_layer([Gate::Hadamard, Gate::PauliX]).unwrap();
        a.append_layer([Gate::Swap]).unwrap();
        let snapshot = a.clone();

        a.append_circuit(&snapshot).unwrap();
        assert_eq!(a.num_layers(), 4);
        assert_eq!(snapshot.num_layers(), 2);
        assert_eq!(a.layers()[2], snapshot.layers()[0]);
    }

    #[test]
    fn test_append_circuit_size_mismatch() {
        let mut three = Circuit::prepared(3).unwrap();
        let two = Circuit::prepared(2).unwrap();
        let err = three.append_circuit(&two).unwrap_err();
        assert_eq!(err, CircuitError::SizeMismatch { expected: 3, got: 2 });
        assert_eq!(three.num_layers(), 0);
    }

    #[test]
    fn test_push_layer_checks_register() {
        let layer = Layer::validate([Gate::Hadamard], 1).unwrap();
        let mut two = Circuit::prepared(2).unwrap();
        assert!(two.push_layer(layer.clone()).is_err());

        let mut one = Circuit::prepared(1).unwrap();
        one.push_layer(layer).unwrap();
        assert_eq!(one.num_layers(), 1);
    }

    #[test]
    fn test_set_initial_state() {
        let mut circuit = Circuit::prepared(1).unwrap();
        let one = State::new(1, &InitialState::custom([QubitSpec::One])).unwrap();
        circuit.set_initial_state(one).unwrap();
        assert_eq!(circuit.initial_state().amplitudes()[1], c(1.0, 0.0));

        let wide = State::new(2, &InitialState::Prepared).unwrap();
        assert!(circuit.set_initial_state(wide).is_err());
    }
}
