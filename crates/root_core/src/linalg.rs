//! Fixed-size vector and matrix helpers.
//!
//! Vectors are `[T; D]` arrays and matrices are row-major arrays of
//! vectors, so every dimension check happens at compile time. The helpers
//! are generic over `num_traits::Float`; the driver itself works on `f64`.
//!
//! No factorization or inversion lives here. Strategies that need a linear
//! solve bring their own.

use num_traits::Float;

/// Candidate or residual vector of dimension `D`.
pub type Vector<const D: usize> = [f64; D];

/// Row-major `D × D` matrix; `matrix[row]` is itself a [`Vector`].
pub type Matrix<const D: usize> = [Vector<D>; D];

/// Build the `D × D` identity matrix.
///
/// # Examples
/// ```
/// use root_core::linalg::{identity, Matrix};
///
/// let eye: Matrix<2> = identity();
/// assert_eq!(eye, [[1.0, 0.0], [0.0, 1.0]]);
/// ```
pub fn identity<T: Float, const D: usize>() -> [[T; D]; D] {
    let mut out = [[T::zero(); D]; D];
    for (i, row) in out.iter_mut().enumerate() {
        row[i] = T::one();
    }
    out
}

/// Inner product of two vectors, accumulated left to right from zero.
#[inline]
pub fn dot<T: Float, const D: usize>(u: &[T; D], v: &[T; D]) -> T {
    u.iter()
        .zip(v.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
}

/// Matrix-vector product: each output entry is the dot product of one row
/// of `a` with `v`. The output has as many entries as `a` has rows.
///
/// # Examples
/// ```
/// use root_core::linalg::dot_mat;
///
/// let a = [[1.0, 2.0], [3.0, 4.0], [0.0, -1.0]];
/// assert_eq!(dot_mat(&a, &[1.0, 1.0]), [3.0, 7.0, -1.0]);
/// ```
pub fn dot_mat<T: Float, const R: usize, const C: usize>(a: &[[T; C]; R], v: &[T; C]) -> [T; R] {
    let mut out = [T::zero(); R];
    for (entry, row) in out.iter_mut().zip(a.iter()) {
        *entry = dot(row, v);
    }
    out
}

/// Euclidean norm.
#[inline]
pub fn norm<T: Float>(v: &[T]) -> T {
    v.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt()
}
