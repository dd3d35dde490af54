// ============================================================================
// List3
// Fixed-size tuple of three owned strings
// ============================================================================

/// Three owned strings with positional accessors.
///
/// There is no `Default`: a `List3` always holds the three values it was
/// built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct List3 {
    one: String,
    two: String,
    three: String,
}

impl List3 {
    /// Create a list from three string-like values.
    pub fn new(one: impl Into<String>, two: impl Into<String>, three: impl Into<String>) -> Self {
        let list = Self {
            one: one.into(),
            two: two.into(),
            three: three.into(),
        };
        tracing::trace!(?list, "built List3");
        list
    }

    #[inline]
    pub fn one(&self) -> &str {
        &self.one
    }

    #[inline]
    pub fn two(&self) -> &str {
        &self.two
    }

    #[inline]
    pub fn three(&self) -> &str {
        &self.three
    }

    /// Consume the list, returning its values in order.
    pub fn into_parts(self) -> (String, String, String) {
        (self.one, self.two, self.three)
    }
}

impl<A, B, C> From<(A, B, C)> for List3
where
    A: Into<String>,
    B: Into<String>,
    C: Into<String>,
{
    fn from((one, two, three): (A, B, C)) -> Self {
        Self::new(one, two, three)
    }
}

/// Build a [`List3`] from exactly three arguments.
///
/// ```
/// use fixed_dim::make_list_3;
///
/// let list = make_list_3!("yes", "", "");
/// assert_eq!(list.one(), "yes");
/// ```
///
/// Any other argument count fails to compile:
/// ```compile_fail
/// use fixed_dim::make_list_3;
///
/// let _list = make_list_3!("a", "b");
/// ```
#[macro_export]
macro_rules! make_list_3 {
    ($one:expr, $two:expr, $three:expr $(,)?) => {
        $crate::list::List3::new($one, $two, $three)
    };
    ($($other:expr),* $(,)?) => {
        compile_error!("make_list_3! requires exactly 3 arguments")
    };
}
