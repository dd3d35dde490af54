// ============================================================================
// Fixed-Dimension Point
// Numeric coordinate container with compile-time dimension
// ============================================================================

use super::axis::{Axis, X, Y, Z};
use super::coordinate::Coordinate;
use super::errors::{PointError, PointResult};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Ordered, fixed-length sequence of `N` numeric coordinates.
///
/// The dimension is part of the type and the coordinates live inline, so a
/// point is as large as `[T; N]` and never allocates.
///
/// # Access Modes
/// - [`axis`](Self::axis) / [`x`](Self::x), [`y`](Self::y), [`z`](Self::z):
///   named, checked at compile time
/// - [`at`](Self::at): const index, checked at compile time
/// - [`get`](Self::get): run-time index, returns [`PointError::IndexOutOfRange`]
/// - [`get_unchecked`](Self::get_unchecked): run-time index, no check at all
///
/// # Type Parameters
/// - `T`: coordinate type, any primitive integer or float
/// - `N`: number of coordinates (at least 1)
///
/// # Example
/// ```
/// use fixed_dim::point::{FixedPoint, PointError};
///
/// let mut p = FixedPoint::<i32, 3>::new([1, 2, 3]);
/// assert_eq!(*p.at::<0>(), 1);
/// *p.z_mut() = 30;
/// assert_eq!(p.get(2), Ok(&30));
/// assert_eq!(p.get(5), Err(PointError::IndexOutOfRange));
/// ```
///
/// A zero-dimensional point is rejected at compile time:
/// ```compile_fail
/// use fixed_dim::point::FixedPoint;
///
/// let _p = FixedPoint::<i32, 0>::zero();
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FixedPoint<T: Coordinate, const N: usize> {
    coords: [T; N],
}

impl<T: Coordinate, const N: usize> FixedPoint<T, N> {
    /// Number of coordinates
    pub const DIMENSION: usize = N;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a point with every coordinate set to zero.
    #[inline]
    pub const fn zero() -> Self {
        const { assert!(N >= 1, "FixedPoint must have at least 1 dimension") };
        Self {
            coords: [T::ZERO; N],
        }
    }

    /// Create a point from exactly `N` coordinates, in order.
    ///
    /// The array length is part of the signature, so the wrong number of
    /// coordinates does not compile:
    /// ```compile_fail
    /// use fixed_dim::point::FixedPoint;
    ///
    /// let _p = FixedPoint::<i32, 3>::new([1, 2]);
    /// ```
    #[inline]
    pub const fn new(coords: [T; N]) -> Self {
        const { assert!(N >= 1, "FixedPoint must have at least 1 dimension") };
        Self { coords }
    }

    /// Number of coordinates.
    #[inline]
    pub const fn dimension(&self) -> usize {
        N
    }

    // ========================================================================
    // Compile-time Checked Access
    // ========================================================================

    /// Coordinate selected by an axis tag.
    ///
    /// ```compile_fail
    /// use fixed_dim::point::{axis::Z, FixedPoint};
    ///
    /// let p = FixedPoint::<i32, 2>::new([1, 2]);
    /// let _ = p.axis::<Z>();
    /// ```
    #[inline]
    pub const fn axis<A: Axis>(&self) -> &T {
        const { assert!(A::INDEX < N, "axis is out of range for this point dimension") };
        &self.coords[A::INDEX]
    }

    /// Mutable coordinate selected by an axis tag.
    #[inline]
    pub const fn axis_mut<A: Axis>(&mut self) -> &mut T {
        const { assert!(A::INDEX < N, "axis is out of range for this point dimension") };
        &mut self.coords[A::INDEX]
    }

    /// Coordinate at a constant index.
    ///
    /// ```compile_fail
    /// use fixed_dim::point::FixedPoint;
    ///
    /// let p = FixedPoint::<f64, 3>::zero();
    /// let _ = p.at::<3>();
    /// ```
    #[inline]
    pub const fn at<const I: usize>(&self) -> &T {
        const { assert!(I < N, "\"at\" index out of range") };
        &self.coords[I]
    }

    /// Mutable coordinate at a constant index.
    #[inline]
    pub const fn at_mut<const I: usize>(&mut self) -> &mut T {
        const { assert!(I < N, "\"at\" index out of range") };
        &mut self.coords[I]
    }

    #[inline]
    pub const fn x(&self) -> &T {
        self.axis::<X>()
    }

    #[inline]
    pub const fn y(&self) -> &T {
        self.axis::<Y>()
    }

    #[inline]
    pub const fn z(&self) -> &T {
        self.axis::<Z>()
    }

    #[inline]
    pub const fn x_mut(&mut self) -> &mut T {
        self.axis_mut::<X>()
    }

    #[inline]
    pub const fn y_mut(&mut self) -> &mut T {
        self.axis_mut::<Y>()
    }

    #[inline]
    pub const fn z_mut(&mut self) -> &mut T {
        self.axis_mut::<Z>()
    }

    // ========================================================================
    // Run-time Checked Access
    // ========================================================================

    /// Coordinate at a run-time index.
    ///
    /// Accepts any integer type; negative values never convert to `usize`
    /// and are reported the same way as indices past the end.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` unless `0 <= index < N`.
    #[inline]
    pub fn get<I: TryInto<usize>>(&self, index: I) -> PointResult<&T> {
        let index = Self::checked_index(index)?;
        Ok(&self.coords[index])
    }

    /// Mutable coordinate at a run-time index.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` unless `0 <= index < N`. The point is left
    /// untouched on failure.
    #[inline]
    pub fn get_mut<I: TryInto<usize>>(&mut self, index: I) -> PointResult<&mut T> {
        let index = Self::checked_index(index)?;
        Ok(&mut self.coords[index])
    }

    #[inline]
    fn checked_index<I: TryInto<usize>>(index: I) -> PointResult<usize> {
        match index.try_into() {
            Ok(index) if index < N => Ok(index),
            _ => Err(PointError::IndexOutOfRange),
        }
    }

    // ========================================================================
    // Unchecked Access
    // ========================================================================

    /// Coordinate at a run-time index, without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `N`. Anything else is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N, "unchecked coordinate index out of range");
        // SAFETY: the caller guarantees `index < N`.
        unsafe { self.coords.get_unchecked(index) }
    }

    /// Mutable coordinate at a run-time index, without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `N`. Anything else is undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N, "unchecked coordinate index out of range");
        // SAFETY: the caller guarantees `index < N`.
        unsafe { self.coords.get_unchecked_mut(index) }
    }

    // ========================================================================
    // Views
    // ========================================================================

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.coords
    }

    #[inline]
    pub const fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.coords
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.coords
    }

    /// Iterate over the coordinates in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.coords.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.coords.iter_mut()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: Coordinate, const N: usize> Default for FixedPoint<T, N> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

/// Panicking subscript, the usual slice semantics.
impl<T: Coordinate, const N: usize> Index<usize> for FixedPoint<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coords[index]
    }
}

impl<T: Coordinate, const N: usize> IndexMut<usize> for FixedPoint<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.coords[index]
    }
}

impl<T: Coordinate, const N: usize> From<[T; N]> for FixedPoint<T, N> {
    #[inline]
    fn from(coords: [T; N]) -> Self {
        Self::new(coords)
    }
}

impl<T: Coordinate, const N: usize> From<FixedPoint<T, N>> for [T; N] {
    #[inline]
    fn from(point: FixedPoint<T, N>) -> Self {
        point.coords
    }
}

impl<T: Coordinate, const N: usize> TryFrom<&[T]> for FixedPoint<T, N> {
    type Error = PointError;

    /// Build a point from a slice whose length is only known at run time.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `slice.len() != N`.
    fn try_from(slice: &[T]) -> PointResult<Self> {
        let coords: [T; N] = slice.try_into().map_err(|_| {
            tracing::debug!(
                expected = N,
                actual = slice.len(),
                "slice length does not match point dimension"
            );
            PointError::DimensionMismatch {
                expected: N,
                actual: slice.len(),
            }
        })?;
        Ok(Self::new(coords))
    }
}

impl<'a, T: Coordinate, const N: usize> IntoIterator for &'a FixedPoint<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl<T: Coordinate, const N: usize> IntoIterator for FixedPoint<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.into_iter()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<T: Coordinate, const N: usize> fmt::Debug for FixedPoint<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedPoint<{}>({:?})", N, self.coords)
    }
}

impl<T: Coordinate, const N: usize> fmt::Display for FixedPoint<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, coord) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coord)?;
        }
        write!(f, ")")
    }
}

// ============================================================================
// Serialization (fixed-length tuple of N coordinates)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Coordinate, FixedPoint};
    use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
    use serde::ser::SerializeTuple;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;
    use std::marker::PhantomData;

    impl<T, const N: usize> Serialize for FixedPoint<T, N>
    where
        T: Coordinate + Serialize,
    {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut tuple = serializer.serialize_tuple(N)?;
            for coord in &self.coords {
                tuple.serialize_element(coord)?;
            }
            tuple.end()
        }
    }

    struct PointVisitor<T, const N: usize>(PhantomData<T>);

    impl<'de, T, const N: usize> Visitor<'de> for PointVisitor<T, N>
    where
        T: Coordinate + Deserialize<'de>,
    {
        type Value = FixedPoint<T, N>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a sequence of {} coordinates", N)
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut point = FixedPoint::<T, N>::zero();
            for (i, slot) in point.coords.iter_mut().enumerate() {
                *slot = seq
                    .next_element()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
            }
            if seq.next_element::<IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_length(N + 1, &self));
            }
            Ok(point)
        }
    }

    impl<'de, T, const N: usize> Deserialize<'de> for FixedPoint<T, N>
    where
        T: Coordinate + Deserialize<'de>,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_tuple(N, PointVisitor(PhantomData))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type P3 = FixedPoint<i32, 3>;

    #[test]
    fn test_indexed_const_access() {
        let p = P3::new([1, 2, 3]);
        assert_eq!(*p.at::<0>(), 1);
        assert_eq!(*p.at::<1>(), 2);
        assert_eq!(*p.at::<2>(), 3);
    }

    #[test]
    fn test_default_is_zero() {
        let p = P3::default();
        assert_eq!(p.as_array(), &[0, 0, 0]);
        assert_eq!(p, P3::zero());

        let q = FixedPoint::<f64, 5>::default();
        assert!(q.iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_named_access() {
        let mut p = P3::new([4, 5, 6]);
        assert_eq!(*p.x(), 4);
        assert_eq!(*p.y(), 5);
        assert_eq!(*p.z(), 6);
        assert_eq!(p.axis::<Y>(), p.at::<1>());

        *p.x_mut() = 40;
        *p.axis_mut::<Z>() = 60;
        assert_eq!(p.into_array(), [40, 5, 60]);
    }

    #[test]
    fn test_named_access_on_smaller_points() {
        let mut p = FixedPoint::<u8, 1>::new([9]);
        assert_eq!(*p.x(), 9);
        *p.x_mut() += 1;
        assert_eq!(*p.at::<0>(), 10);

        let q = FixedPoint::<f32, 2>::new([1.5, 2.5]);
        assert_eq!(*q.y(), 2.5);
    }

    #[test]
    fn test_const_access_mutation_visible() {
        let mut p = P3::new([1, 2, 3]);
        *p.at_mut::<1>() = 20;
        assert_eq!(*p.at::<1>(), 20);
        assert_eq!(p.get(1), Ok(&20));
    }

    #[test]
    fn test_runtime_access_out_of_range() {
        let p = P3::new([1, 2, 3]);
        assert_eq!(p.get(5), Err(PointError::IndexOutOfRange));
        assert_eq!(p.get(3usize), Err(PointError::IndexOutOfRange));
        assert_eq!(p.get(-1), Err(PointError::IndexOutOfRange));
        assert_eq!(p.get(i64::MIN), Err(PointError::IndexOutOfRange));
    }

    #[test]
    fn test_runtime_mut_access() {
        let mut p = P3::new([1, 2, 3]);
        *p.get_mut(2u8).unwrap() = 33;
        assert_eq!(p.get(2), Ok(&33));

        assert_eq!(p.get_mut(7), Err(PointError::IndexOutOfRange));
        assert_eq!(p, P3::new([1, 2, 33]));
    }

    #[test]
    fn test_unchecked_access() {
        let mut p = FixedPoint::<i64, 4>::new([10, 20, 30, 40]);
        // SAFETY: every index is below 4.
        unsafe {
            assert_eq!(*p.get_unchecked(0), 10);
            assert_eq!(*p.get_unchecked(3), 40);
            *p.get_unchecked_mut(2) = 300;
        }
        assert_eq!(*p.at::<2>(), 300);
    }

    #[test]
    fn test_subscript_operator() {
        let mut p = P3::new([1, 2, 3]);
        p[0] = 100;
        assert_eq!(p[0], 100);
        assert_eq!(p[2], 3);
    }

    #[test]
    #[should_panic]
    fn test_subscript_operator_panics_out_of_range() {
        let p = P3::new([1, 2, 3]);
        let _ = p[3];
    }

    #[test]
    fn test_dimension() {
        assert_eq!(P3::DIMENSION, 3);
        assert_eq!(FixedPoint::<f32, 7>::zero().dimension(), 7);
    }

    #[test]
    fn test_array_conversions() {
        let p: FixedPoint<u16, 2> = [7, 8].into();
        assert_eq!(*p.y(), 8);

        let back: [u16; 2] = p.into();
        assert_eq!(back, [7, 8]);
    }

    #[test]
    fn test_try_from_slice() {
        let coords = [1.0f64, 2.0, 3.0];
        let p = FixedPoint::<f64, 3>::try_from(&coords[..]).unwrap();
        assert_eq!(p.as_array(), &coords);

        let err = FixedPoint::<f64, 3>::try_from(&coords[..2]).unwrap_err();
        assert_eq!(
            err,
            PointError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_iteration() {
        let mut p = P3::new([1, 2, 3]);
        for c in p.iter_mut() {
            *c *= 10;
        }
        let collected: Vec<i32> = (&p).into_iter().copied().collect();
        assert_eq!(collected, vec![10, 20, 30]);
        assert_eq!(p.into_iter().sum::<i32>(), 60);
    }

    #[test]
    fn test_display() {
        assert_eq!(P3::new([1, 2, 3]).to_string(), "(1, 2, 3)");
        assert_eq!(FixedPoint::<f64, 1>::new([7.8]).to_string(), "(7.8)");
    }

    #[test]
    fn test_debug() {
        let p = FixedPoint::<u8, 2>::new([1, 2]);
        assert_eq!(format!("{:?}", p), "FixedPoint<2>([1, 2])");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_roundtrip() {
        let p = FixedPoint::<f64, 3>::new([7.8, 9.8, 3.5]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[7.8,9.8,3.5]");

        let decoded: FixedPoint<f64, 3> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, p);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_wrong_length_rejected() {
        assert!(serde_json::from_str::<FixedPoint<i32, 3>>("[1,2]").is_err());
        assert!(serde_json::from_str::<FixedPoint<i32, 3>>("[1,2,3,4]").is_err());
    }

    proptest! {
        #[test]
        fn prop_construction_preserves_order(coords in prop::array::uniform4(any::<i64>())) {
            let p = FixedPoint::<i64, 4>::new(coords);
            for (i, expected) in coords.iter().enumerate() {
                prop_assert_eq!(p.get(i), Ok(expected));
                prop_assert_eq!(&p[i], expected);
            }
        }

        #[test]
        fn prop_in_range_access_never_fails(
            coords in prop::array::uniform3(any::<u32>()),
            index in 0usize..3,
        ) {
            let p = FixedPoint::<u32, 3>::new(coords);
            prop_assert_eq!(p.get(index), Ok(&coords[index]));
        }

        #[test]
        fn prop_out_of_range_access_fails_without_mutation(
            coords in prop::array::uniform3(any::<i32>()),
            index in prop_oneof![3i64..i64::MAX, i64::MIN..0],
        ) {
            let mut p = FixedPoint::<i32, 3>::new(coords);
            prop_assert_eq!(p.get(index), Err(PointError::IndexOutOfRange));
            prop_assert_eq!(p.get_mut(index), Err(PointError::IndexOutOfRange));
            prop_assert_eq!(p.into_array(), coords);
        }

        #[test]
        fn prop_slice_conversion_requires_exact_length(coords in prop::collection::vec(any::<i16>(), 0..8)) {
            let result = FixedPoint::<i16, 4>::try_from(coords.as_slice());
            prop_assert_eq!(result.is_ok(), coords.len() == 4);
        }
    }
}
