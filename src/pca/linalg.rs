//! Dense vector and matrix helpers on `Vec<f64>` rows.
use rayon::prelude::*;


/// Inner product.
#[inline(always)]
pub(super) fn dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y)
        .map(|(a, b)| a * b)
        .sum::<f64>()
}


/// Euclidean norm.
#[inline(always)]
pub(super) fn norm(x: &[f64]) -> f64 {
    dot(x, x).sqrt()
}


/// `Σ |x_i - y_i|`.
#[inline(always)]
pub(super) fn l1_distance(x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y)
        .map(|(a, b)| (a - b).abs())
        .sum::<f64>()
}


/// Matrix-vector product `m · x` for a row-major `m`.
pub(super) fn mat_vec(m: &[Vec<f64>], x: &[f64]) -> Vec<f64> {
    m.iter()
        .map(|row| dot(row, x))
        .collect()
}


/// Per-column means of a row-major matrix with `n_cols` columns.
pub(super) fn column_means(matrix: &[Vec<f64>], n_cols: usize) -> Vec<f64> {
    let n_rows = matrix.len() as f64;
    let mut means = vec![0f64; n_cols];
    for row in matrix {
        means.iter_mut()
            .zip(row)
            .for_each(|(m, x)| { *m += x; });
    }
    means.iter_mut().for_each(|m| { *m /= n_rows; });
    means
}


/// Gram matrix `AᵀA` of a row-major `a` with `n_cols` columns.
/// Each row of the result is computed in parallel.
pub(super) fn gram(a: &[Vec<f64>], n_cols: usize) -> Vec<Vec<f64>> {
    let columns = (0..n_cols)
        .map(|j| a.iter().map(|row| row[j]).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    columns.par_iter()
        .map(|ci| {
            columns.iter()
                .map(|cj| dot(ci, cj))
                .collect()
        })
        .collect()
}


/// Removes from `x` its projection onto each (unit) vector of `basis`.
pub(super) fn orthogonalize(x: &mut [f64], basis: &[Vec<f64>]) {
    for b in basis {
        let p = dot(x, b);
        x.iter_mut()
            .zip(b)
            .for_each(|(xi, bi)| { *xi -= p * bi; });
    }
}
