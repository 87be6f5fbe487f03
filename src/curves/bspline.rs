//! Fixed-step sampling of B-spline curves.
//!
//! A curve point is the basis-weighted sum of all control points:
//! `C(u) = Σ_j P[j] * N(j, d, u)`. Sampling walks `u` across the valid domain
//! `[t[d-1], t[n+1]]` in constant increments and returns the resulting
//! polyline in increasing `u`.
//!
//! # Example
//!
//! ```
//! use knotwork::curves::{evaluate, KnotMode, KnotVector, SampleOptions};
//! use knotwork::Point2;
//!
//! let points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(50.0, 0.0),
//!     Point2::new(100.0, 50.0),
//! ];
//! let knots = KnotVector::build(points.len(), 3, KnotMode::Clamped);
//!
//! let curve = evaluate(&points, &knots, 3, &SampleOptions::default());
//!
//! assert_eq!(curve.first(), Some(&Point2::new(0.0, 0.0)));
//! assert_eq!(curve.last(), Some(&Point2::new(100.0, 50.0)));
//! ```

use super::basis::{basis, knot_value};
use super::knots::{KnotMode, KnotVector};
use crate::error::EditorError;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Parametric increment used when no other step is configured.
///
/// Knots are spaced one unit apart, so this yields about twenty samples per
/// knot span.
pub const DEFAULT_SAMPLING_STEP: f64 = 0.05;

/// Sampling resolution for [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleOptions<F> {
    step: F,
}

impl<F: Float> SampleOptions<F> {
    /// Creates options with the given parametric step.
    ///
    /// Returns [`EditorError::InvalidSamplingStep`] unless `step` is positive
    /// and finite.
    pub fn new(step: F) -> Result<Self, EditorError> {
        if step.is_finite() && step > F::zero() {
            Ok(Self { step })
        } else {
            Err(EditorError::InvalidSamplingStep)
        }
    }

    /// Returns the parametric step between consecutive samples.
    #[inline]
    pub fn step(&self) -> F {
        self.step
    }
}

impl<F: Float> Default for SampleOptions<F> {
    fn default() -> Self {
        Self {
            step: F::from(DEFAULT_SAMPLING_STEP).expect("default step fits every float type"),
        }
    }
}

/// Returns the parameter range `(t[d-1], t[n+1])` for `point_count` points.
///
/// Returns `None` if `point_count < degree`, or if `knots` is too short for
/// `point_count` points.
pub fn domain<F: Float>(knots: &[i64], point_count: usize, degree: usize) -> Option<(F, F)> {
    if degree == 0 || point_count < degree {
        return None;
    }
    let lo = *knots.get(degree - 1)?;
    let hi = *knots.get(point_count)?;
    Some((knot_value(lo), knot_value(hi)))
}

/// Upper bound on parameter steps in one sweep.
///
/// A step so small that the domain would need more steps than this is
/// stretched to `width / MAX_SAMPLE_STEPS` by [`evaluate`] and rejected by
/// [`try_evaluate`].
pub const MAX_SAMPLE_STEPS: usize = 100_000;

/// Returns the number of whole `step`s that fit in `[u_min, u_max]`, or
/// `None` if that exceeds [`MAX_SAMPLE_STEPS`].
fn step_count<F: Float>(u_min: F, u_max: F, step: F) -> Option<usize> {
    // The slack absorbs rounding in width / step so an exact multiple still
    // reaches u_max.
    let ratio = (u_max - u_min) / step;
    let slack = ratio * F::epsilon() * knot_value(100);
    let steps = (ratio + slack).floor();
    if !steps.is_finite() || steps > knot_value(MAX_SAMPLE_STEPS as i64) {
        return None;
    }
    steps.to_usize()
}

/// Evaluates a single curve point at parameter `u`.
///
/// # Panics
///
/// Panics if `knots.len() < points.len() + degree` or `degree == 0`.
pub fn curve_point<F: Float>(
    points: &[Point2<F>],
    knots: &[i64],
    degree: usize,
    u: F,
) -> Point2<F> {
    let sum = points
        .iter()
        .enumerate()
        .fold(Vec2::zero(), |acc, (j, p)| acc + p.to_vec() * basis(knots, j, degree, u));
    Point2::from(sum)
}

/// Samples the curve defined by `points`, `knots` and `degree`.
///
/// Returns an empty vector when `points.len() < degree`. In clamped mode the
/// last control point is appended verbatim after the sweep, and the sweep
/// itself stops short of `u_max` where every basis function vanishes.
///
/// A step that would need more than [`MAX_SAMPLE_STEPS`] steps is widened so
/// the sweep still covers the whole domain in exactly that many steps.
///
/// # Panics
///
/// Panics if `knots.len() != points.len() + degree` while enough points are
/// present.
pub fn evaluate<F: Float>(
    points: &[Point2<F>],
    knots: &KnotVector,
    degree: usize,
    options: &SampleOptions<F>,
) -> Vec<Point2<F>> {
    let Some((u_min, u_max)) = domain::<F>(knots, points.len(), degree) else {
        return Vec::new();
    };
    assert!(
        knots.len() == points.len() + degree,
        "Knot vector length must be control_points.len() + degree"
    );

    let clamped = knots.mode() == KnotMode::Clamped;
    let (steps, step) = match step_count(u_min, u_max, options.step()) {
        Some(steps) => (steps, options.step()),
        None => {
            log::warn!(
                "sampling step too small for the domain, capping at {} steps",
                MAX_SAMPLE_STEPS
            );
            let widened = (u_max - u_min) / knot_value(MAX_SAMPLE_STEPS as i64);
            (MAX_SAMPLE_STEPS, widened)
        }
    };

    let mut curve = Vec::with_capacity(steps + 2);
    for i in 0..=steps {
        let u = F::from(i).map_or(u_max, |i| u_min + step * i).min(u_max);
        if clamped && u >= u_max {
            break;
        }
        curve.push(curve_point(points, knots, degree, u));
    }

    if clamped {
        if let Some(&last) = points.last() {
            curve.push(last);
        }
    }

    log::trace!("sampled {} curve points", curve.len());
    curve
}

/// Like [`evaluate`], but reports problems as errors.
///
/// Too few control points give [`EditorError::InsufficientControlPoints`];
/// a step needing more than [`MAX_SAMPLE_STEPS`] steps over the domain gives
/// [`EditorError::InvalidSamplingStep`].
pub fn try_evaluate<F: Float>(
    points: &[Point2<F>],
    knots: &KnotVector,
    degree: usize,
    options: &SampleOptions<F>,
) -> Result<Vec<Point2<F>>, EditorError> {
    if points.len() < degree {
        return Err(EditorError::InsufficientControlPoints {
            count: points.len(),
            required: degree,
        });
    }
    if let Some((u_min, u_max)) = domain::<F>(knots, points.len(), degree) {
        if step_count(u_min, u_max, options.step()).is_none() {
            return Err(EditorError::InvalidSamplingStep);
        }
    }
    Ok(evaluate(points, knots, degree, options))
}
