//! qlayer Core Simulation Engine
//!
//! This crate simulates small quantum circuits by exact dense-matrix
//! evolution of a complex state vector. It forms the foundation that the
//! algorithm and command-line crates build on.
//!
//! # Overview
//!
//! A [`Circuit`] is a fixed-size register, an owned initial [`State`], and
//! an ordered list of [`Layer`]s. Each layer places gates side by side; the
//! tensor product of a layer must span the full 2^n-dimensional space.
//! Once built, a circuit can be turned into a composite unitary, an evolved
//! state vector, or sampled measurement outcomes.
//!
//! # Core Components
//!
//! - **Qubits and States**: [`Qubit`] amplitude pairs, [`State`] register
//!   vectors built from an [`InitialState`]
//! - **Gates**: the [`gate`] library of fixed matrices, [`gate::rotation`],
//!   the controlled-unitary constructor [`gate::controlled`], and the
//!   [`Gate`] enum naming what goes in a layer slot
//! - **Circuit**: [`Circuit`] builder with validated [`Circuit::append_layer`]
//! - **Execution**: [`Circuit::unitary`], [`Circuit::measure`],
//!   [`Circuit::execute`]
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qlayer_core::{Circuit, Gate};
//!
//! // Two qubits starting in |00⟩
//! let mut circuit = Circuit::prepared(2).unwrap();
//!
//! // |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.append_layer([Gate::Hadamard, Gate::Identity]).unwrap();
//! circuit.append_layer([Gate::Cnot]).unwrap();
//!
//! let probabilities = circuit.probabilities();
//! assert!((probabilities[0] - 0.5).abs() < 1e-9);
//! assert!((probabilities[3] - 0.5).abs() < 1e-9);
//!
//! for outcome in circuit.execute(10) {
//!     assert!(outcome == "00" || outcome == "11");
//! }
//! ```
//!
//! # Example: Controlled Gates Anywhere in the Register
//!
//! ```rust
//! use qlayer_core::{Circuit, InitialState, QubitSpec, gate};
//!
//! // |100⟩ with a controlled-X from qubit 0 onto qubit 2
//! let init = InitialState::custom([QubitSpec::One, QubitSpec::Zero, QubitSpec::Zero]);
//! let mut circuit = Circuit::new(3, init).unwrap();
//! circuit
//!     .append_layer([gate::controlled(0, 2, &gate::pauli_x(), 3).unwrap()])
//!     .unwrap();
//!
//! assert_eq!(circuit.execute(3), vec!["101"; 3]);
//! ```
//!
//! # Randomness
//!
//! Random qubit preparation and sampling take an explicit [`rand::Rng`]
//! through the `*_with_rng` variants. The plain variants use the thread-local
//! generator.

pub mod circuit;
pub mod engine;
pub mod error;
pub mod gate;
pub mod layer;
pub mod matrix;
pub mod qubit;
pub mod state;

pub use circuit::Circuit;
pub use engine::{Counts, basis_labels, basis_string};
pub use error::{CircuitError, CircuitResult};
pub use gate::Gate;
pub use layer::Layer;
pub use matrix::{Amplitudes, Matrix, TOLERANCE};
pub use qubit::Qubit;
pub use state::{InitialState, QubitSpec, State};
