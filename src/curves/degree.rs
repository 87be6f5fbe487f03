//! Supported spline degrees and their display names.
//!
//! The numeric value is the `k` handed to the basis recursion, so
//! [`Degree::Linear`] is `2` and [`Degree::Quintic`] is `6`.

use crate::error::EditorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A spline degree from the closed set `2..=6`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum Degree {
    /// `k = 2`, straight segments between control points.
    Linear,
    /// `k = 3`, the default.
    #[default]
    Quadratic,
    /// `k = 4`.
    Cubic,
    /// `k = 5`.
    Quartic,
    /// `k = 6`.
    Quintic,
}

impl Degree {
    /// Every supported degree in ascending order.
    pub const ALL: [Degree; 5] = [
        Degree::Linear,
        Degree::Quadratic,
        Degree::Cubic,
        Degree::Quartic,
        Degree::Quintic,
    ];

    /// Returns the numeric degree (`2..=6`).
    #[inline]
    pub fn value(self) -> usize {
        match self {
            Degree::Linear => 2,
            Degree::Quadratic => 3,
            Degree::Cubic => 4,
            Degree::Quartic => 5,
            Degree::Quintic => 6,
        }
    }

    /// Returns the human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Degree::Linear => "Linear",
            Degree::Quadratic => "Quadratic",
            Degree::Cubic => "Cubic",
            Degree::Quartic => "Quartic",
            Degree::Quintic => "Quintic",
        }
    }

    /// Returns the next degree, wrapping from Quintic back to Linear.
    pub fn next(self) -> Self {
        match self {
            Degree::Linear => Degree::Quadratic,
            Degree::Quadratic => Degree::Cubic,
            Degree::Cubic => Degree::Quartic,
            Degree::Quartic => Degree::Quintic,
            Degree::Quintic => Degree::Linear,
        }
    }
}

/// Looks up the display name for a raw degree value.
///
/// Values outside `2..=6` map to `"Unknown"`.
pub fn degree_name(value: usize) -> &'static str {
    Degree::try_from(value).map_or("Unknown", Degree::name)
}

impl TryFrom<usize> for Degree {
    type Error = EditorError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Degree::ALL
            .into_iter()
            .find(|d| d.value() == value)
            .ok_or(EditorError::UnsupportedDegree(value))
    }
}

impl From<Degree> for usize {
    fn from(degree: Degree) -> usize {
        degree.value()
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
