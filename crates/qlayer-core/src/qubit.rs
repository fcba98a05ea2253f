//! Single-qubit preparation.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

use ndarray::array;
use num_complex::Complex64;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CircuitError, CircuitResult};
use crate::matrix::{Amplitudes, TOLERANCE, c};

/// A pure single-qubit state `alpha|0⟩ + beta|1⟩`.
///
/// Every constructor guarantees `|alpha|² + |beta|² = 1` within
/// [`TOLERANCE`]. Values are immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Qubit {
    alpha: Complex64,
    beta: Complex64,
}

impl Qubit {
    /// The canonical basis state |0⟩.
    pub fn zero() -> Self {
        Self {
            alpha: c(1.0, 0.0),
            beta: c(0.0, 0.0),
        }
    }

    /// The basis state |1⟩.
    pub fn one() -> Self {
        Self {
            alpha: c(0.0, 0.0),
            beta: c(1.0, 0.0),
        }
    }

    /// (|0⟩ + |1⟩)/√2.
    pub fn plus() -> Self {
        Self {
            alpha: c(FRAC_1_SQRT_2, 0.0),
            beta: c(FRAC_1_SQRT_2, 0.0),
        }
    }

    /// (|0⟩ - |1⟩)/√2.
    pub fn minus() -> Self {
        Self {
            alpha: c(FRAC_1_SQRT_2, 0.0),
            beta: c(-FRAC_1_SQRT_2, 0.0),
        }
    }

    /// Build a qubit from an explicit amplitude pair.
    pub fn from_amplitudes(alpha: Complex64, beta: Complex64) -> CircuitResult<Self> {
        let norm_sqr = alpha.norm_sqr() + beta.norm_sqr();
        if (norm_sqr - 1.0).abs() > TOLERANCE {
            return Err(CircuitError::NotNormalized { norm_sqr });
        }
        Ok(Self { alpha, beta })
    }

    /// Draw a random pure state using the given generator.
    ///
    /// The azimuth φ is uniform on [0, 2π) and the polar angle θ is uniform
    /// on [0, π/2), giving `(cos θ, sin θ·e^{iφ})`. Because θ stops at π/2
    /// the |0⟩ amplitude is never negative and the distribution covers only
    /// the northern hemisphere of the Bloch sphere.
    pub fn random_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let phi = rng.r#gen::<f64>() * 2.0 * PI;
        let theta = rng.r#gen::<f64>() / 2.0 * PI;
        Self {
            alpha: c(theta.cos(), 0.0),
            beta: Complex64::from_polar(theta.sin(), phi),
        }
    }

    /// Draw a random pure state using the thread-local generator.
    pub fn random() -> Self {
        Self::random_with_rng(&mut rand::thread_rng())
    }

    /// Amplitude of |0⟩.
    pub fn alpha(&self) -> Complex64 {
        self.alpha
    }

    /// Amplitude of |1⟩.
    pub fn beta(&self) -> Complex64 {
        self.beta
    }

    /// The state as a 2-element column vector.
    pub fn to_vector(&self) -> Amplitudes {
        array![self.alpha, self.beta]
    }
}

impl Default for Qubit {
    fn default() -> Self {
        Self::zero()
    }
}
