// ============================================================================
// Fixed-Dim Library
// Fixed-dimension numeric points with compile-time checked access
// ============================================================================

//! # Fixed-Dim
//!
//! Small, allocation-free value types whose shape is checked by the compiler.
//!
//! ## Features
//!
//! - **`FixedPoint<T, N>`**: N numeric coordinates stored inline
//! - **Compile-time access** by axis tag (`x`, `y`, `z`) or const index
//! - **Run-time checked access** returning [`PointError::IndexOutOfRange`]
//! - **Unchecked access** for callers that already know the index is valid
//! - **`List3`**: a three-string tuple built by `make_list_3!`
//! - **`print_all!`**: prints any mix of `Display` values as `{ a, b, c }`
//!
//! ## Example
//!
//! ```rust
//! use fixed_dim::prelude::*;
//!
//! let mut p = make_point!(7.8, 9.8, 3.5);
//! assert_eq!(*p.axis::<X>(), 7.8);
//! assert_eq!(*p.at::<2>(), 3.5);
//!
//! *p.get_mut(1).unwrap() = 1.0;
//! assert_eq!(p.get(1), Ok(&1.0));
//! assert_eq!(p.get(5), Err(PointError::IndexOutOfRange));
//!
//! let list = make_list_3!("yes", "", "");
//! assert_eq!(format_all!(list.one(), list.two(), list.three()), "{ yes, ,  }");
//! ```

pub mod list;
pub mod point;
pub mod print;

// Re-exports for convenience
pub mod prelude {
    pub use crate::list::List3;
    pub use crate::point::axis::{X, Y, Z};
    pub use crate::point::{Axis, Coordinate, FixedPoint, PointError, PointResult};
    pub use crate::print::{format_all, write_all, BraceStyle};
    pub use crate::{format_all, make_list_3, make_point, print_all};
}
