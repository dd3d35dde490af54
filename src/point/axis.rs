// ============================================================================
// Axis Tags
// Compile-time selectors for the first three coordinates
// ============================================================================

/// Compile-time coordinate selector.
///
/// Tags are zero-sized types, so selecting an axis costs nothing at run time
/// and an axis beyond the point's dimension fails to compile.
pub trait Axis {
    /// Position of this axis within a point
    const INDEX: usize;

    /// Short lowercase name, e.g. `"x"`
    const NAME: &'static str;
}

/// First coordinate (position 0)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct X;

/// Second coordinate (position 1)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Y;

/// Third coordinate (position 2)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Z;

impl Axis for X {
    const INDEX: usize = 0;
    const NAME: &'static str = "x";
}

impl Axis for Y {
    const INDEX: usize = 1;
    const NAME: &'static str = "y";
}

impl Axis for Z {
    const INDEX: usize = 2;
    const NAME: &'static str = "z";
}
