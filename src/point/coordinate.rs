// ============================================================================
// Coordinate Trait
// Numeric element types accepted by FixedPoint
// ============================================================================

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Numeric type usable as a point coordinate.
///
/// Implemented for every primitive integer and floating-point type and
/// nothing else. The trait is sealed, so `FixedPoint<&i32, 2>` or
/// `FixedPoint<String, 2>` are rejected when the type is named:
///
/// ```compile_fail
/// use fixed_dim::point::FixedPoint;
///
/// let _p: FixedPoint<&'static i32, 2> = FixedPoint::zero();
/// ```
///
/// ```compile_fail
/// use fixed_dim::point::FixedPoint;
///
/// let _p: FixedPoint<bool, 2> = FixedPoint::zero();
/// ```
pub trait Coordinate:
    Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static + sealed::Sealed
{
    /// Additive identity, used for zero-filled construction
    const ZERO: Self;
}

macro_rules! impl_coordinate {
    ($zero:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Coordinate for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_coordinate!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_coordinate!(0.0 => f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_of<T: Coordinate>() -> T {
        T::ZERO
    }

    #[test]
    fn test_integer_zero() {
        assert_eq!(zero_of::<i8>(), 0);
        assert_eq!(zero_of::<u64>(), 0);
        assert_eq!(zero_of::<usize>(), 0);
        assert_eq!(zero_of::<i128>(), 0);
    }

    #[test]
    fn test_float_zero() {
        assert_eq!(zero_of::<f32>(), 0.0);
        assert_eq!(zero_of::<f64>(), 0.0);
        assert!(zero_of::<f64>().is_sign_positive());
    }
}
