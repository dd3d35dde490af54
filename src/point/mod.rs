// ============================================================================
// Point Module
// Fixed-dimension numeric coordinates with compile-time checked access
// ============================================================================
//
// This module provides:
// - FixedPoint<T, N>: N coordinates of numeric type T, stored inline
// - Coordinate: sealed trait for the accepted element types
// - axis::{X, Y, Z}: compile-time names for the first three coordinates
// - PointError: the run-time failure kinds
// - make_point!: builds a point, inferring T and N from its arguments
//
// Misuse that can be detected statically (wrong arity, constant index out of
// range, non-numeric element type) fails to compile. Only run-time indices
// can fail at run time.

pub mod axis;
mod coordinate;
mod errors;
mod fixed_point;

pub use axis::Axis;
pub use coordinate::Coordinate;
pub use errors::{PointError, PointResult};
pub use fixed_point::FixedPoint;

/// Build a [`FixedPoint`] from a list of coordinates.
///
/// The coordinate type is taken from the first argument and the dimension
/// from the argument count. Every argument must have that same type; there is
/// no implicit widening or narrowing.
///
/// ```
/// use fixed_dim::make_point;
/// use fixed_dim::point::FixedPoint;
///
/// let p: FixedPoint<f64, 3> = make_point!(7.8, 9.8, 3.5);
/// assert_eq!(*p.z(), 3.5);
/// ```
///
/// Mixing `f32` and `f64` is rejected:
/// ```compile_fail
/// use fixed_dim::make_point;
///
/// let _p = make_point!(7.8_f32, 9.8_f32, 3.141596_f64);
/// ```
#[macro_export]
macro_rules! make_point {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::point::FixedPoint::new([$first $(, $rest)*])
    };
}
