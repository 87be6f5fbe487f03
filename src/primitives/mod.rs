//! Floating-point 2D primitives for control points and curve samples.

mod point2;
mod vec2;

pub use point2::Point2;
pub use vec2::Vec2;
