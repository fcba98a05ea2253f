//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur while building states, gates and circuits.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CircuitError {
    /// A gate matrix supplied to a layer is not square.
    #[error("Gate in slot {slot} is not square ({rows}x{cols})")]
    NotSquare {
        /// Position of the offending gate within the layer.
        slot: usize,
        /// Row count of the gate matrix.
        rows: usize,
        /// Column count of the gate matrix.
        cols: usize,
    },

    /// Dimension of an operator or vector does not match the register.
    #[error("Dimension {got} does not match register dimension {expected}{}", format_context(.context))]
    DimensionMismatch {
        /// Expected dimension (2^n).
        expected: usize,
        /// Dimension that was provided.
        got: usize,
        /// Optional context for the message.
        context: Option<String>,
    },

    /// Two circuits over different register sizes cannot be concatenated.
    #[error("Cannot append a {got}-qubit circuit to a {expected}-qubit circuit")]
    SizeMismatch {
        /// Register size of the destination circuit.
        expected: usize,
        /// Register size of the appended circuit.
        got: usize,
    },

    /// A symbolic initial state lists the wrong number of qubits.
    #[error("Initial state lists {got} qubits, register has {expected}")]
    LengthMismatch {
        /// Register size.
        expected: usize,
        /// Number of entries in the state specification.
        got: usize,
    },

    /// Control and target positions are invalid for the register.
    #[error("Invalid control/target pair ({control}, {target}) for a {num_qubits}-qubit register")]
    InvalidControl {
        /// Control qubit index.
        control: usize,
        /// Target qubit index.
        target: usize,
        /// Register size.
        num_qubits: usize,
    },

    /// A register must hold at least one qubit.
    #[error("Register must contain at least one qubit")]
    EmptyRegister,

    /// Amplitude pair is not a unit vector.
    #[error("Amplitudes are not normalized (norm² = {norm_sqr})")]
    NotNormalized {
        /// Observed squared norm.
        norm_sqr: f64,
    },

    /// Gate label not present in the gate library.
    #[error("Unknown gate label '{0}'")]
    UnknownGate(String),

    /// Qubit specification is not one of `0`, `1`, `+`, `-`.
    #[error("Unknown qubit specification '{0}' (expected 0, 1, + or -)")]
    UnknownQubitSpec(String),
}

impl CircuitError {
    /// Dimension mismatch without extra context.
    pub fn dimension(expected: usize, got: usize) -> Self {
        Self::DimensionMismatch {
            expected,
            got,
            context: None,
        }
    }

    /// Dimension mismatch naming what was being checked.
    pub fn dimension_in(expected: usize, got: usize, context: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            expected,
            got,
            context: Some(context.into()),
        }
    }
}

#[allow(clippy::ref_option)]
fn format_context(context: &Option<String>) -> String {
    match context {
        Some(ctx) => format!(" ({ctx})"),
        None => String::new(),
    }
}

/// Result type for core operations.
pub type CircuitResult<T> = Result<T, CircuitError>;
