//! Dense complex matrix utilities.
//!
//! All operators in the simulator are plain `ndarray` matrices of
//! [`Complex64`]. This module collects the handful of linear-algebra
//! helpers the rest of the crate needs: identities, Kronecker products,
//! conjugate transposes and tolerance-based comparisons.

use ndarray::{Array1, Array2, linalg};
use num_complex::Complex64;

/// Tolerance for floating point comparisons.
pub const TOLERANCE: f64 = 1e-9;

/// A dense complex matrix.
pub type Matrix = Array2<Complex64>;

/// A dense complex column vector.
pub type Amplitudes = Array1<Complex64>;

/// Shorthand for a complex number.
#[inline]
pub fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// The `dim` x `dim` identity matrix.
pub fn identity(dim: usize) -> Matrix {
    Array2::from_diag_elem(dim, c(1.0, 0.0))
}

/// Kronecker (tensor) product `a ⊗ b`.
pub fn kron(a: &Matrix, b: &Matrix) -> Matrix {
    linalg::kron(a, b)
}

/// Left-to-right Kronecker product of a sequence of matrices.
///
/// The empty product is the 1x1 identity.
pub fn kron_all<'a, I>(matrices: I) -> Matrix
where
    I: IntoIterator<Item = &'a Matrix>,
{
    matrices
        .into_iter()
        .fold(identity(1), |acc, m| linalg::kron(&acc, m))
}

/// Tensor product of two column vectors.
pub fn kron_vec(a: &Amplitudes, b: &Amplitudes) -> Amplitudes {
    let mut out = Vec::with_capacity(a.len() * b.len());
    for x in a {
        for y in b {
            out.push(x * y);
        }
    }
    Array1::from_vec(out)
}

/// Conjugate transpose.
pub fn dagger(m: &Matrix) -> Matrix {
    m.t().mapv(|z| z.conj())
}

/// Whether the matrix is square.
pub fn is_square(m: &Matrix) -> bool {
    m.nrows() == m.ncols()
}

/// Element-wise comparison within `tol`.
pub fn approx_eq(a: &Matrix, b: &Matrix, tol: f64) -> bool {
    a.shape() == b.shape() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() < tol)
}

/// Element-wise vector comparison within `tol`.
pub fn approx_eq_vec(a: &Amplitudes, b: &Amplitudes, tol: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() < tol)
}

/// Check `U U† = I` within `tol`.
pub fn is_unitary(m: &Matrix, tol: f64) -> bool {
    is_square(m) && approx_eq(&m.dot(&dagger(m)), &identity(m.nrows()), tol)
}

/// Squared Euclidean norm of a vector.
pub fn norm_sqr(v: &Amplitudes) -> f64 {
    v.iter().map(Complex64::norm_sqr).sum()
}

/// Round every real and imaginary part to `decimals` places.
///
/// Used when printing matrices; negative zeros are folded to zero.
pub fn round(m: &Matrix, decimals: i32) -> Matrix {
    let scale = 10f64.powi(decimals);
    let r = |x: f64| {
        let v = (x * scale).round() / scale;
        if v == 0.0 { 0.0 } else { v }
    };
    m.mapv(|z| c(r(z.re), r(z.im)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_identity() {
        let id = identity(4);
        assert_eq!(id.shape(), &[4, 4]);
        assert_eq!(id[[2, 2]], c(1.0, 0.0));
        assert_eq!(id[[2, 3]], c(0.0, 0.0));
    }

    #[test]
    fn test_kron_shape_and_values() {
        let x = array![[c(0.0, 0.0), c(1.0, 0.0)], [c(1.0, 0.0), c(0.0, 0.0)]];
        let id = identity(2);
        let k = kron(&x, &id);
        assert_eq!(k.shape(), &[4, 4]);
        // X ⊗ I maps |00⟩ to |10⟩
        assert_eq!(k[[2, 0]], c(1.0, 0.0));
        assert_eq!(k[[0, 0]], c(0.0, 0.0));
    }

    #[test]
    fn test_kron_all_empty_is_scalar_one() {
        let k = kron_all(std::iter::empty());
        assert_eq!(k.shape(), &[1, 1]);
        assert_eq!(k[[0, 0]], c(1.0, 0.0));
    }

    #[test]
    fn test_kron_vec_ordering() {
        let zero = array![c(1.0, 0.0), c(0.0, 0.0)];
        let one = array![c(0.0, 0.0), c(1.0, 0.0)];
        // |0⟩ ⊗ |1⟩ = |01⟩ = index 1
        let v = kron_vec(&zero, &one);
        assert_eq!(v.len(), 4);
        assert_eq!(v[1], c(1.0, 0.0));
        assert!((norm_sqr(&v) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_dagger_and_unitary() {
        let y = array![[c(0.0, 0.0), c(0.0, -1.0)], [c(0.0, 1.0), c(0.0, 0.0)]];
        assert!(approx_eq(&dagger(&y), &y, TOLERANCE));
        assert!(is_unitary(&y, TOLERANCE));

        let not_unitary = array![[c(1.0, 0.0), c(1.0, 0.0)], [c(0.0, 0.0), c(1.0, 0.0)]];
        assert!(!is_unitary(&not_unitary, TOLERANCE));
    }

    #[test]
    fn test_round_folds_negative_zero() {
        let m = array![[c(-0.0001, 0.70711), c(0.5, -0.0)]];
        let r = round(&m, 3);
        assert_eq!(r[[0, 0]], c(0.0, 0.707));
        assert!(r[[0, 1]].im.is_sign_positive());
    }
}
