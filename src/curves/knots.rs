//! Knot-vector construction for uniform and clamped B-splines.
//!
//! Knots are integer valued. The curve parameter `u` is floating point and is
//! only compared against (or subtracted from) knots after converting them,
//! see [`basis`](super::basis).
//!
//! # Example
//!
//! ```
//! use knotwork::curves::{KnotMode, KnotVector};
//!
//! let uniform = KnotVector::build(3, 3, KnotMode::Uniform);
//! assert_eq!(uniform.as_slice(), &[0, 1, 2, 3, 4, 5]);
//!
//! let clamped = KnotVector::build(3, 3, KnotMode::Clamped);
//! assert_eq!(clamped.as_slice(), &[0, 0, 0, 1, 1, 1]);
//! ```

use std::fmt;
use std::ops::Deref;

/// Knot-spacing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KnotMode {
    /// Consecutive integers `0, 1, ..., m-1`.
    #[default]
    Uniform,
    /// Repeated boundary knots so the curve reaches the end control points.
    Clamped,
}

impl KnotMode {
    /// Maps the editor's uniform flag onto a mode.
    #[inline]
    pub fn from_uniform(uniform: bool) -> Self {
        if uniform {
            KnotMode::Uniform
        } else {
            KnotMode::Clamped
        }
    }

    /// Returns true for [`KnotMode::Uniform`].
    #[inline]
    pub fn is_uniform(self) -> bool {
        self == KnotMode::Uniform
    }

    /// Returns the other mode.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            KnotMode::Uniform => KnotMode::Clamped,
            KnotMode::Clamped => KnotMode::Uniform,
        }
    }
}

impl fmt::Display for KnotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnotMode::Uniform => f.write_str("Uniform B-Spline"),
            KnotMode::Clamped => f.write_str("Non-Uniform B-Spline"),
        }
    }
}

/// An integer knot vector together with the policy that produced it.
///
/// For `point_count` control points and degree `d` the vector holds
/// `point_count + d` knots.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KnotVector {
    mode: KnotMode,
    knots: Vec<i64>,
}

impl KnotVector {
    /// Builds the knot vector for `point_count` control points and `degree`.
    ///
    /// - Uniform: `t[i] = i`.
    /// - Clamped: the first `degree` knots are `0`, knots at indices
    ///   `degree..=n` equal `i - degree + 1`, and knots past `n` hold
    ///   `n - degree + 2`, with `n = point_count - 1`.
    ///
    /// A vector is produced for any point count, including counts below the
    /// degree. Such a vector has the right length but cannot be sampled, and
    /// in clamped mode with `point_count < degree - 1` its tail is negative.
    ///
    /// # Panics
    ///
    /// Panics if `degree == 0`.
    pub fn build(point_count: usize, degree: usize, mode: KnotMode) -> Self {
        assert!(degree >= 1, "Degree must be at least 1");

        let len = point_count + degree;
        let d = degree as i64;
        let n = point_count as i64 - 1;

        let knots = match mode {
            KnotMode::Uniform => (0..len as i64).collect(),
            KnotMode::Clamped => (0..len as i64)
                .map(|i| {
                    if i < d {
                        0
                    } else if i <= n {
                        i - d + 1
                    } else {
                        n - d + 2
                    }
                })
                .collect(),
        };

        Self { mode, knots }
    }

    /// Returns the spacing policy used to build this vector.
    #[inline]
    pub fn mode(&self) -> KnotMode {
        self.mode
    }

    /// Returns the knots as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.knots
    }

    /// Returns true if every knot is at least as large as its predecessor.
    pub fn is_non_decreasing(&self) -> bool {
        self.knots.windows(2).all(|w| w[0] <= w[1])
    }
}

impl Deref for KnotVector {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.knots
    }
}

impl fmt::Display for KnotVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, k) in self.knots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", k)?;
        }
        f.write_str("]")
    }
}
