//! Pattern matching over a pair of `Maybe` values.
//!
//! [`Match2`] holds one handler per presence combination. Dispatch follows a
//! fixed priority: both present, then only the first, then only the second,
//! then neither.

use super::Maybe;

/// A four-case pattern over the presence of two `Maybe` values.
///
/// # Examples
///
/// ```rust
/// use perhaps::maybe::{Match2, Maybe};
///
/// let changed = Match2 {
///     first: |_: &str| true,
///     second: |_: &str| true,
///     both: |current: &str, selected: &str| current != selected,
///     neither: || false,
/// };
///
/// assert!(changed.apply(Maybe::unit("CHF"), Maybe::unit("USD")));
/// assert!(!changed.apply(Maybe::unit("CHF"), Maybe::unit("CHF")));
/// assert!(!changed.apply(Maybe::absent(), Maybe::absent()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Match2<First, Second, Both, Neither> {
    /// Called when only the first value is present.
    pub first: First,
    /// Called when only the second value is present.
    pub second: Second,
    /// Called when both values are present.
    pub both: Both,
    /// Called when neither value is present.
    pub neither: Neither,
}

impl<First, Second, Both, Neither> Match2<First, Second, Both, Neither> {
    /// Builds a pattern from its four handlers.
    #[inline]
    pub const fn new(first: First, second: Second, both: Both, neither: Neither) -> Self {
        Self {
            first,
            second,
            both,
            neither,
        }
    }

    /// Classifies a pair without consuming the pattern, so it can be reused.
    ///
    /// Exactly one handler is invoked per call.
    #[inline]
    pub fn apply<A, B, T>(&self, first: Maybe<A>, second: Maybe<B>) -> T
    where
        First: Fn(A) -> T,
        Second: Fn(B) -> T,
        Both: Fn(A, B) -> T,
        Neither: Fn() -> T,
    {
        match2(first, second, Match2::new(&self.first, &self.second, &self.both, &self.neither))
    }
}

/// Runs exactly one handler of `pattern` depending on which values are present.
///
/// # Examples
///
/// ```rust
/// use perhaps::maybe::{Match2, Maybe, match2};
///
/// let pattern = || Match2::new(|a: i32| a, |b: i32| b, |a: i32, b: i32| a + b, || 0);
///
/// assert_eq!(match2(Maybe::unit(1), Maybe::absent(), pattern()), 1);
/// assert_eq!(match2(Maybe::absent(), Maybe::unit(2), pattern()), 2);
/// assert_eq!(match2(Maybe::unit(1), Maybe::unit(2), pattern()), 3);
/// assert_eq!(match2(Maybe::absent(), Maybe::absent(), pattern()), 0);
/// ```
pub fn match2<A, B, T, First, Second, Both, Neither>(
    first: Maybe<A>,
    second: Maybe<B>,
    pattern: Match2<First, Second, Both, Neither>,
) -> T
where
    First: FnOnce(A) -> T,
    Second: FnOnce(B) -> T,
    Both: FnOnce(A, B) -> T,
    Neither: FnOnce() -> T,
{
    match (first, second) {
        (Maybe::Present(a), Maybe::Present(b)) => (pattern.both)(a, b),
        (Maybe::Present(a), Maybe::Absent) => (pattern.first)(a),
        (Maybe::Absent, Maybe::Present(b)) => (pattern.second)(b),
        (Maybe::Absent, Maybe::Absent) => (pattern.neither)(),
    }
}
