//! Error types for knot construction, curve sampling and editing.

use thiserror::Error;

/// Errors that can occur while editing or sampling a B-spline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// Fewer control points than the degree requires.
    #[error("not enough control points for this degree: have {count}, need {required}")]
    InsufficientControlPoints {
        /// Number of control points present.
        count: usize,
        /// Minimum number of control points for the degree.
        required: usize,
    },

    /// A control point index outside `0..len`.
    #[error("control point index {index} out of range for {len} points")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Number of control points present.
        len: usize,
    },

    /// Degree outside the supported set.
    #[error("unsupported degree {0}: expected a value from 2 to 6")]
    UnsupportedDegree(usize),

    /// Sampling step that is zero, negative or not finite.
    #[error("sampling step must be positive and finite")]
    InvalidSamplingStep,

    /// Configuration could not be read or parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
