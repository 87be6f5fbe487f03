//! knotwork - B-spline editing core
//!
//! Builds uniform and clamped knot vectors, evaluates Cox–de Boor basis
//! functions and samples the resulting curve at a fixed parametric step.
//! [`SplineEditor`] wraps all of it in an editing session that rebuilds the
//! knot vector only when points, degree or knot mode change.

pub mod config;
pub mod curves;
pub mod editor;
pub mod error;
pub mod primitives;

pub use config::EditorConfig;
pub use curves::{Degree, KnotMode, KnotVector, SampleOptions};
pub use editor::{KnotState, SplineEditor};
pub use error::EditorError;
pub use primitives::{Point2, Vec2};
