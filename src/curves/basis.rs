//! Cox–de Boor basis functions over integer knot vectors.
//!
//! `N(j, 1, u)` is `1` on the half-open span `[t[j], t[j+1])` and `0`
//! elsewhere. Higher orders blend two lower-order functions:
//!
//! ```text
//! N(j,k,u) = (u - t[j]) / (t[j+k-1] - t[j]) * N(j,k-1,u)
//!          + (t[j+k] - u) / (t[j+k] - t[j+1]) * N(j+1,k-1,u)
//! ```
//!
//! Repeated knots make either denominator zero. Such a term contributes `0`,
//! which keeps clamped vectors free of NaN and infinity.

use num_traits::Float;

/// Converts an integer knot to the curve's float type.
#[inline]
pub(crate) fn knot_value<F: Float>(knot: i64) -> F {
    F::from(knot).expect("integer knots are representable as floats")
}

/// Divides `num` by `den`, returning zero when `den` is exactly zero.
#[inline]
fn divide_or_zero<F: Float>(num: F, den: F) -> F {
    if den == F::zero() {
        F::zero()
    } else {
        num / den
    }
}

/// Evaluates the basis function `N(j, k, u)` over `knots`.
///
/// # Panics
///
/// Panics if `k == 0` or if `j + k >= knots.len()`.
pub fn basis<F: Float>(knots: &[i64], j: usize, k: usize, u: F) -> F {
    assert!(k >= 1, "Basis order must be at least 1");

    if k == 1 {
        let lo = knot_value::<F>(knots[j]);
        let hi = knot_value::<F>(knots[j + 1]);
        return if lo <= u && u < hi { F::one() } else { F::zero() };
    }

    let t_j = knot_value::<F>(knots[j]);
    let t_j1 = knot_value::<F>(knots[j + 1]);
    let t_jk1 = knot_value::<F>(knots[j + k - 1]);
    let t_jk = knot_value::<F>(knots[j + k]);

    let left = divide_or_zero(u - t_j, t_jk1 - t_j);
    let right = divide_or_zero(t_jk - u, t_jk - t_j1);

    left * basis(knots, j, k - 1, u) + right * basis(knots, j + 1, k - 1, u)
}

/// Evaluates `N(j, k, u)` for every `j` in `0..count`.
///
/// # Panics
///
/// Panics under the same conditions as [`basis`] for any `j < count`.
pub fn basis_weights<F: Float>(knots: &[i64], count: usize, k: usize, u: F) -> Vec<F> {
    (0..count).map(|j| basis(knots, j, k, u)).collect()
}
