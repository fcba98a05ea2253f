//! Error types for the algo crate.

use thiserror::Error;

/// Errors produced while constructing algorithm circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AlgoError {
    /// Circuit builder returned an error.
    #[error("Circuit error: {0}")]
    Circuit(#[from] qlayer_core::CircuitError),

    /// Phase estimation needs at least one counting qubit.
    #[error("Precision must be at least 1 counting qubit, got {0}")]
    InvalidPrecision(usize),

    /// Marked item does not fit in the search register.
    #[error("Marked state {marked} is out of range for {num_qubits} qubits")]
    MarkedOutOfRange {
        /// The requested marked state.
        marked: usize,
        /// Register size.
        num_qubits: usize,
    },
}

/// Result type for algorithm construction.
pub type AlgoResult<T> = Result<T, AlgoError>;
