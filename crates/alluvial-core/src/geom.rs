//! Data-space geometry shared by layout and curve code.
//!
//! Column axes sit at `x` in `[0, 1]`; bands stack downwards from `y = 0`, so every layout `y`
//! is `<= 0`.

/// Unit tag for data-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSpace;

pub type Point = euclid::Point2D<f64, DataSpace>;
pub type Vector = euclid::Vector2D<f64, DataSpace>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}
