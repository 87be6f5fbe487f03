//! Knot vectors, basis functions and curve sampling.

mod basis;
mod bspline;
mod degree;
mod knots;

pub use basis::{basis, basis_weights};
pub use bspline::{
    curve_point, domain, evaluate, try_evaluate, SampleOptions, DEFAULT_SAMPLING_STEP,
    MAX_SAMPLE_STEPS,
};
pub use degree::{degree_name, Degree};
pub use knots::{KnotMode, KnotVector};
