//! The gate library.
//!
//! Fixed gates are shared, immutable matrices: every call to [`hadamard`]
//! hands out another reference to the same allocation. The only
//! parametrised families are [`rotation`] and the controlled-unitary
//! constructor [`controlled`], which build fresh matrices.
//!
//! | Gate | Qubits | Matrix |
//! |------|--------|--------|
//! | `I` | 1 | identity |
//! | `X`, `Y`, `Z` | 1 | Pauli operators |
//! | `H` | 1 | Hadamard, normalised by 1/√2 |
//! | `S` | 1 | diag(1, i) |
//! | `T` | 1 | diag(1, e^{iπ/4}) |
//! | `R(φ)` | 1 | diag(1, e^{iφ}) |
//! | `CNOT` | 2 | control on the first slot |
//! | `SWAP` | 2 | exchanges the two slots |

use std::f64::consts::{FRAC_1_SQRT_2, PI};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use ndarray::array;
use num_complex::Complex64;

use crate::error::{CircuitError, CircuitResult};
use crate::matrix::{self, Matrix, c};

static IDENTITY: LazyLock<Arc<Matrix>> = LazyLock::new(|| Arc::new(matrix::identity(2)));

static PAULI_X: LazyLock<Arc<Matrix>> = LazyLock::new(|| {
    Arc::new(array![[c(0.0, 0.0), c(1.0, 0.0)], [c(1.0, 0.0), c(0.0, 0.0)]])
});

static PAULI_Y: LazyLock<Arc<Matrix>> = LazyLock::new(|| {
    Arc::new(array![[c(0.0, 0.0), c(0.0, -1.0)], [c(0.0, 1.0), c(0.0, 0.0)]])
});

static PAULI_Z: LazyLock<Arc<Matrix>> = LazyLock::new(|| {
    Arc::new(array![[c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(-1.0, 0.0)]])
});

static HADAMARD: LazyLock<Arc<Matrix>> = LazyLock::new(|| {
    let s = FRAC_1_SQRT_2;
    Arc::new(array![[c(s, 0.0), c(s, 0.0)], [c(s, 0.0), c(-s, 0.0)]])
});

static PHASE_S: LazyLock<Arc<Matrix>> = LazyLock::new(|| {
    Arc::new(array![[c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(0.0, 1.0)]])
});

static T_GATE: LazyLock<Arc<Matrix>> = LazyLock::new(|| Arc::new(rotation(PI / 4.0)));

static CNOT: LazyLock<Arc<Matrix>> = LazyLock::new(|| {
    let (o, l) = (c(0.0, 0.0), c(1.0, 0.0));
    Arc::new(array![
        [l, o, o, o],
        [o, l, o, o],
        [o, o, o, l],
        [o, o, l, o],
    ])
});

static SWAP: LazyLock<Arc<Matrix>> = LazyLock::new(|| {
    let (o, l) = (c(0.0, 0.0), c(1.0, 0.0));
    Arc::new(array![
        [l, o, o, o],
        [o, o, l, o],
        [o, l, o, o],
        [o, o, o, l],
    ])
});

/// Single-qubit identity.
pub fn identity() -> Arc<Matrix> {
    Arc::clone(&IDENTITY)
}

/// Pauli-X.
pub fn pauli_x() -> Arc<Matrix> {
    Arc::clone(&PAULI_X)
}

/// Pauli-Y.
pub fn pauli_y() -> Arc<Matrix> {
    Arc::clone(&PAULI_Y)
}

/// Pauli-Z.
pub fn pauli_z() -> Arc<Matrix> {
    Arc::clone(&PAULI_Z)
}

/// Hadamard.
pub fn hadamard() -> Arc<Matrix> {
    Arc::clone(&HADAMARD)
}

/// S phase gate, sqrt(Z).
pub fn phase_s() -> Arc<Matrix> {
    Arc::clone(&PHASE_S)
}

/// T gate (π/8 gate), fourth root of Z.
pub fn t_gate() -> Arc<Matrix> {
    Arc::clone(&T_GATE)
}

/// CNOT with the control on the first (more significant) slot.
pub fn cnot() -> Arc<Matrix> {
    Arc::clone(&CNOT)
}

/// Two-qubit SWAP.
pub fn swap() -> Arc<Matrix> {
    Arc::clone(&SWAP)
}

/// Rotation about the z-axis up to global phase: diag(1, e^{iφ}).
pub fn rotation(phi: f64) -> Matrix {
    array![
        [c(1.0, 0.0), c(0.0, 0.0)],
        [c(0.0, 0.0), Complex64::from_polar(1.0, phi)]
    ]
}

/// Embed a controlled single-qubit unitary in an n-qubit register.
///
/// Qubits are 0-indexed with qubit 0 the most significant tensor slot.
/// The result is
///
/// ```text
/// I + ½ · (I - Z)_control ⊗ (U - I)_target
/// ```
///
/// padded with identities on every other qubit. On a control in |0⟩ the
/// second term vanishes; on |1⟩ it contributes `U - I`, leaving `U` on the
/// target.
pub fn controlled(
    control: usize,
    target: usize,
    unitary: &Matrix,
    num_qubits: usize,
) -> CircuitResult<Matrix> {
    if !matrix::is_square(unitary) {
        return Err(CircuitError::NotSquare {
            slot: 0,
            rows: unitary.nrows(),
            cols: unitary.ncols(),
        });
    }
    if unitary.nrows() != 2 {
        return Err(CircuitError::dimension_in(
            2,
            unitary.nrows(),
            "controlled-unitary target",
        ));
    }
    if num_qubits == 0 {
        return Err(CircuitError::EmptyRegister);
    }
    if control == target || control >= num_qubits || target >= num_qubits {
        return Err(CircuitError::InvalidControl {
            control,
            target,
            num_qubits,
        });
    }

    let id = matrix::identity(2);
    let pz = pauli_z();
    let projector = &id - &*pz;
    let shifted = unitary - &id;
    let pad = |qubits: usize| matrix::identity(1 << qubits);

    let blocks = if control < target {
        [
            pad(control),
            projector,
            pad(target - control - 1),
            shifted,
            pad(num_qubits - target - 1),
        ]
    } else {
        [
            pad(target),
            shifted,
            pad(control - target - 1),
            projector,
            pad(num_qubits - control - 1),
        ]
    };

    let half = c(0.5, 0.0);
    Ok(matrix::kron_all(&blocks).mapv(|z| z * half) + matrix::identity(1 << num_qubits))
}

/// A gate that can occupy a slot in a circuit layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    /// Identity.
    Identity,
    /// Pauli-X.
    PauliX,
    /// Pauli-Y.
    PauliY,
    /// Pauli-Z.
    PauliZ,
    /// Hadamard.
    Hadamard,
    /// S phase gate.
    Phase,
    /// T gate.
    T,
    /// Two-qubit CNOT, control on the upper slot.
    Cnot,
    /// Two-qubit SWAP.
    Swap,
    /// diag(1, e^{iφ}).
    Rotation(f64),
    /// Any square matrix, typically spanning several qubits.
    Custom(Arc<Matrix>),
}

impl Gate {
    /// Wrap an arbitrary matrix.
    pub fn custom(matrix: Matrix) -> Self {
        Gate::Custom(Arc::new(matrix))
    }

    /// Resolve to the concrete matrix.
    pub fn matrix(&self) -> Arc<Matrix> {
        match self {
            Gate::Identity => identity(),
            Gate::PauliX => pauli_x(),
            Gate::PauliY => pauli_y(),
            Gate::PauliZ => pauli_z(),
            Gate::Hadamard => hadamard(),
            Gate::Phase => phase_s(),
            Gate::T => t_gate(),
            Gate::Cnot => cnot(),
            Gate::Swap => swap(),
            Gate::Rotation(phi) => Arc::new(rotation(*phi)),
            Gate::Custom(m) => Arc::clone(m),
        }
    }

    /// Symbolic label used in circuit diagrams.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Gate::Identity => "I",
            Gate::PauliX => "X",
            Gate::PauliY => "Y",
            Gate::PauliZ => "Z",
            Gate::Hadamard => "H",
            Gate::Phase => "S",
            Gate::T => "T",
            Gate::Cnot => "CNT",
            Gate::Swap => "SWP",
            Gate::Rotation(_) => "R",
            Gate::Custom(_) => "U",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Rotation(phi) => write!(f, "R({phi})"),
            other => f.write_str(other.label()),
        }
    }
}

impl From<Matrix> for Gate {
    fn from(matrix: Matrix) -> Self {
        Gate::custom(matrix)
    }
}

impl From<Arc<Matrix>> for Gate {
    fn from(matrix: Arc<Matrix>) -> Self {
        Gate::Custom(matrix)
    }
}

impl FromStr for Gate {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "I" => Ok(Gate::Identity),
            "X" => Ok(Gate::PauliX),
            "Y" => Ok(Gate::PauliY),
            "Z" => Ok(Gate::PauliZ),
            "H" => Ok(Gate::Hadamard),
            "S" => Ok(Gate::Phase),
            "T" => Ok(Gate::T),
            "CNOT" | "CX" => Ok(Gate::Cnot),
            "SWAP" => Ok(Gate::Swap),
            _ => Err(CircuitError::UnknownGate(s.trim().to_string())),
        }
    }
}
