//! Register state vectors.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CircuitError, CircuitResult};
use crate::matrix::{self, Amplitudes};
use crate::qubit::Qubit;

/// Symbolic description of one qubit in an initial state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum QubitSpec {
    /// |0⟩
    Zero,
    /// |1⟩
    One,
    /// (|0⟩ + |1⟩)/√2
    Plus,
    /// (|0⟩ - |1⟩)/√2
    Minus,
    /// Any normalized single-qubit state.
    Amplitudes(Qubit),
}

impl QubitSpec {
    /// Resolve to a concrete qubit.
    pub fn qubit(&self) -> Qubit {
        match self {
            QubitSpec::Zero => Qubit::zero(),
            QubitSpec::One => Qubit::one(),
            QubitSpec::Plus => Qubit::plus(),
            QubitSpec::Minus => Qubit::minus(),
            QubitSpec::Amplitudes(q) => *q,
        }
    }
}

impl From<Qubit> for QubitSpec {
    fn from(q: Qubit) -> Self {
        QubitSpec::Amplitudes(q)
    }
}

impl FromStr for QubitSpec {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(QubitSpec::Zero),
            "1" => Ok(QubitSpec::One),
            "+" => Ok(QubitSpec::Plus),
            "-" => Ok(QubitSpec::Minus),
            other => Err(CircuitError::UnknownQubitSpec(other.to_string())),
        }
    }
}

impl fmt::Display for QubitSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QubitSpec::Zero => write!(f, "0"),
            QubitSpec::One => write!(f, "1"),
            QubitSpec::Plus => write!(f, "+"),
            QubitSpec::Minus => write!(f, "-"),
            QubitSpec::Amplitudes(q) => write!(f, "({}, {})", q.alpha(), q.beta()),
        }
    }
}

/// How a circuit's initial register state is produced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum InitialState {
    /// Every qubit in |0⟩, i.e. the vector `[1, 0, ..., 0]`.
    #[default]
    Prepared,
    /// Every qubit drawn independently with [`Qubit::random_with_rng`].
    Random,
    /// One symbolic entry per qubit, combined in qubit order.
    Custom(Vec<QubitSpec>),
}

impl InitialState {
    /// Custom state from a symbolic list.
    pub fn custom(specs: impl IntoIterator<Item = QubitSpec>) -> Self {
        InitialState::Custom(specs.into_iter().collect())
    }
}

/// The full state vector of an n-qubit register.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    amplitudes: Amplitudes,
    num_qubits: usize,
}

impl State {
    /// Build a state, drawing random qubits from the thread-local generator
    /// when `init` is [`InitialState::Random`].
    pub fn new(num_qubits: usize, init: &InitialState) -> CircuitResult<Self> {
        Self::with_rng(num_qubits, init, &mut rand::thread_rng())
    }

    /// Build a state using the given generator for random preparation.
    pub fn with_rng<R: Rng + ?Sized>(
        num_qubits: usize,
        init: &InitialState,
        rng: &mut R,
    ) -> CircuitResult<Self> {
        if num_qubits == 0 {
            return Err(CircuitError::EmptyRegister);
        }

        let qubits: Vec<Qubit> = match init {
            InitialState::Custom(specs) => {
                if specs.len() != num_qubits {
                    return Err(CircuitError::LengthMismatch {
                        expected: num_qubits,
                        got: specs.len(),
                    });
                }
                specs.iter().map(QubitSpec::qubit).collect()
            }
            InitialState::Prepared => vec![Qubit::zero(); num_qubits],
            InitialState::Random => (0..num_qubits)
                .map(|_| Qubit::random_with_rng(&mut *rng))
                .collect(),
        };

        Self::from_qubits(&qubits)
    }

    /// Tensor product of the given qubits, first qubit most significant.
    pub fn from_qubits(qubits: &[Qubit]) -> CircuitResult<Self> {
        let (first, rest) = qubits.split_first().ok_or(CircuitError::EmptyRegister)?;
        let amplitudes = rest.iter().fold(first.to_vector(), |acc, q| {
            matrix::kron_vec(&acc, &q.to_vector())
        });
        Ok(Self {
            amplitudes,
            num_qubits: qubits.len(),
        })
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Hilbert space dimension, 2^n.
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// The raw amplitude vector.
    pub fn amplitudes(&self) -> &Amplitudes {
        &self.amplitudes
    }

    /// Replace the amplitude vector wholesale.
    ///
    /// Only the length is checked; normalisation is the caller's business.
    pub fn set_amplitudes(&mut self, amplitudes: Amplitudes) -> CircuitResult<()> {
        if amplitudes.len() != self.amplitudes.len() {
            return Err(CircuitError::dimension_in(
                self.amplitudes.len(),
                amplitudes.len(),
                "state vector",
            ));
        }
        self.amplitudes = amplitudes;
        Ok(())
    }

    /// Sum of squared amplitude magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        matrix::norm_sqr(&self.amplitudes)
    }
}
