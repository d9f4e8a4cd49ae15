//! Shape-checked linear algebra over `ndarray`.
//!
//! Every binary operation verifies its operands agree on the shared dimension and reports
//! `SgdErr::DimensionMismatch` instead of broadcasting or truncating.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis, concatenate};
use rand::{Rng, seq::SliceRandom};

use crate::{Result, SgdErr};

/// Computes `a · v`.
///
/// # Errors
/// `DimensionMismatch` if `v.len() != a.ncols()`.
pub fn mat_vec(a: ArrayView2<f64>, v: ArrayView1<f64>) -> Result<Array1<f64>> {
    if v.len() != a.ncols() {
        return Err(SgdErr::mismatch("vector length", v.len(), a.ncols()));
    }

    Ok(a.dot(&v))
}

/// Computes `aᵗ · v` without materializing the transpose.
///
/// # Errors
/// `DimensionMismatch` if `v.len() != a.nrows()`.
pub fn t_mat_vec(a: ArrayView2<f64>, v: ArrayView1<f64>) -> Result<Array1<f64>> {
    if v.len() != a.nrows() {
        return Err(SgdErr::mismatch("vector length", v.len(), a.nrows()));
    }

    Ok(a.t().dot(&v))
}

/// Elementwise `a - b`.
///
/// # Errors
/// `DimensionMismatch` if the lengths differ.
pub fn sub(a: ArrayView1<f64>, b: ArrayView1<f64>) -> Result<Array1<f64>> {
    if a.len() != b.len() {
        return Err(SgdErr::mismatch("subtrahend length", b.len(), a.len()));
    }

    Ok(&a - &b)
}

/// Elementwise `k · v`.
pub fn scale(v: ArrayView1<f64>, k: f64) -> Array1<f64> {
    v.mapv(|x| x * k)
}

fn check_indices(indices: &[usize], len: usize) -> Result<()> {
    match indices.iter().find(|&&i| i >= len) {
        Some(&i) => Err(SgdErr::mismatch("row index", i, len)),
        None => Ok(()),
    }
}

/// Gathers the rows of `a` named by `indices`, in that order.
///
/// # Errors
/// `DimensionMismatch` if any index is out of bounds (reported as `got = index`,
/// `expected = a.nrows()`).
pub fn gather_rows(a: ArrayView2<f64>, indices: &[usize]) -> Result<Array2<f64>> {
    check_indices(indices, a.nrows())?;
    Ok(a.select(Axis(0), indices))
}

/// Gathers the entries of `v` named by `indices`, in that order.
///
/// # Errors
/// `DimensionMismatch` if any index is out of bounds.
pub fn gather(v: ArrayView1<f64>, indices: &[usize]) -> Result<Array1<f64>> {
    check_indices(indices, v.len())?;
    Ok(v.select(Axis(0), indices))
}

/// Places the columns of `b` to the right of the columns of `a`.
///
/// # Errors
/// `DimensionMismatch` if the row counts differ.
pub fn concat_columns(a: ArrayView2<f64>, b: ArrayView2<f64>) -> Result<Array2<f64>> {
    if a.nrows() != b.nrows() {
        return Err(SgdErr::mismatch("row count", b.nrows(), a.nrows()));
    }

    concatenate(Axis(1), &[a, b]).map_err(|_| SgdErr::mismatch("row count", b.nrows(), a.nrows()))
}

/// Fisher–Yates shuffle in place, drawing from the given RNG handle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}
