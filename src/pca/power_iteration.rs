use crate::common::constants::{
    POWER_ITERATIONS,
    POWER_TOLERANCE,
    DEGENERATE_NORM,
};
use super::linalg::*;


/// Output of [`decompose`].
pub(super) struct Decomposition {
    /// `components[k]` is the `k`-th direction (unit length).
    pub(super) components: Vec<Vec<f64>>,
    pub(super) singular_values: Vec<f64>,
}


/// Extracts `gram.len()` directions from a symmetric Gram matrix.
///
/// Direction `k` starts at the basis vector `e_k`
/// and every iterate is kept orthogonal to the directions found so far.
/// After convergence, `σ_k = sqrt(vᵀGv)` and `G ← G - σ_k vvᵀ`.
pub(super) fn decompose(gram: &[Vec<f64>]) -> Decomposition {
    let n = gram.len();
    let mut work = gram.to_vec();

    let mut components: Vec<Vec<f64>> = Vec::with_capacity(n);
    let mut singular_values = Vec::with_capacity(n);

    for k in 0..n {
        let mut current = start_vector(k, n, &components);

        for iter in 0..POWER_ITERATIONS {
            let mut next = mat_vec(&work, &current);
            orthogonalize(&mut next, &components);

            let length = norm(&next);
            // The remaining spectrum is zero on this subspace.
            if length < DEGENERATE_NORM {
                tracing::trace!(component = k, iter, "degenerate iterate");
                break;
            }
            next.iter_mut().for_each(|x| { *x /= length; });

            let distance = l1_distance(&next, &current);
            current = next;
            if distance < POWER_TOLERANCE { break; }
        }

        let gv = mat_vec(&work, &current);
        let sigma = dot(&current, &gv).max(0f64).sqrt();

        for (i, row) in work.iter_mut().enumerate() {
            for (j, g) in row.iter_mut().enumerate() {
                *g -= sigma * current[i] * current[j];
            }
        }

        tracing::debug!(component = k, sigma, "extracted principal direction");
        singular_values.push(sigma);
        components.push(current);
    }

    Decomposition { components, singular_values }
}


/// Returns `e_k` made orthogonal to `found`.
/// If `e_k` lies in their span, the next basis vectors are tried in turn.
fn start_vector(k: usize, n: usize, found: &[Vec<f64>]) -> Vec<f64> {
    for offset in 0..n {
        let mut v = vec![0f64; n];
        v[(k + offset) % n] = 1f64;
        orthogonalize(&mut v, found);

        let length = norm(&v);
        if length >= DEGENERATE_NORM {
            v.iter_mut().for_each(|x| { *x /= length; });
            return v;
        }
    }

    let mut v = vec![0f64; n];
    v[k] = 1f64;
    v
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_gram_gives_basis_vectors() {
        let gram = vec![vec![4.0, 0.0], vec![0.0, 9.0]];
        let d = decompose(&gram);
        assert!((d.singular_values[0] - 2.0).abs() < 1e-9);
        assert!((d.singular_values[1] - 3.0).abs() < 1e-9);
        assert!((d.components[0][0].abs() - 1.0).abs() < 1e-9);
        assert!((d.components[1][1].abs() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn components_are_orthonormal() {
        let gram = vec![
            vec![2.0, 1.0, 0.0],
            vec![1.0, 2.0, 1.0],
            vec![0.0, 1.0, 2.0],
        ];
        let d = decompose(&gram);
        for a in 0..3 {
            for b in 0..3 {
                let expected = if a == b { 1.0 } else { 0.0 };
                let ip = dot(&d.components[a], &d.components[b]);
                assert!((ip - expected).abs() < 1e-6, "<v{a}, v{b}> = {ip}");
            }
        }
        assert!(d.singular_values.iter().all(|&s| s >= 0.0));
    }
}
