//! `qlayer-algo` — textbook quantum algorithms as layered circuits.
//!
//! Everything here is client code of [`qlayer_core`]: circuits are built
//! only through [`Circuit::append_layer`](qlayer_core::Circuit::append_layer)
//! and [`gate::controlled`](qlayer_core::gate::controlled).
//!
//! - [`qft`] / [`inverse_qft`]: quantum Fourier transform
//! - [`phase_estimation`]: eigenphase readout for a single-qubit unitary
//! - [`grover`]: unstructured search for one marked basis state
//!
//! # Quick start
//!
//! ```rust
//! use qlayer_algo::{grover, optimal_iterations};
//!
//! let circuit = grover(3, 5, optimal_iterations(3)).unwrap();
//! assert!(circuit.probabilities()[5] > 0.9);
//! ```

pub mod error;
pub mod grover;
pub mod phase;
pub mod qft;

pub use error::{AlgoError, AlgoResult};
pub use grover::{grover, optimal_iterations};
pub use phase::{is_eigenvector, phase_estimation, phase_from_outcome};
pub use qft::{inverse_qft, qft, reverse_qubits};
