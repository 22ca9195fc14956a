//! Free functions over one or more `Maybe` values.

use super::Maybe;

/// Combines a sequence of `Maybe` values when every one of them is present.
///
/// Values are collected left to right. At the first `Absent` element the
/// result is `Absent`, the remaining elements are not consumed, and
/// `function` is never called. Otherwise `function` receives the unwrapped
/// values in input order. An empty sequence yields `Present(function(vec![]))`.
///
/// Use [`lift_a2`] when the two inputs have different payload types.
///
/// # Examples
///
/// ```rust
/// use perhaps::maybe::{Maybe, all};
///
/// let joined = all([Maybe::unit("a"), Maybe::unit("b"), Maybe::unit("c")], |values| {
///     values.concat()
/// });
/// assert_eq!(joined, Maybe::Present("abc".to_string()));
///
/// let missing = all([Maybe::unit("a"), Maybe::absent(), Maybe::unit("c")], |values| {
///     values.concat()
/// });
/// assert_eq!(missing, Maybe::Absent);
/// ```
pub fn all<T, R, I, F>(maybes: I, function: F) -> Maybe<R>
where
    I: IntoIterator<Item = Maybe<T>>,
    F: FnOnce(Vec<T>) -> R,
{
    let mut values = Vec::new();
    for maybe in maybes {
        match maybe {
            Maybe::Present(value) => values.push(value),
            Maybe::Absent => return Maybe::Absent,
        }
    }
    Maybe::Present(function(values))
}

/// Lifts a binary function over two `Maybe` values.
///
/// `function` runs at most once, and only when both inputs are present.
///
/// # Examples
///
/// ```rust
/// use perhaps::maybe::{Maybe, lift_a2};
///
/// assert_eq!(lift_a2(Maybe::unit("a"), Maybe::unit(15), |a, b| format!("{a}{b}")),
///            Maybe::Present("a15".to_string()));
/// assert_eq!(lift_a2(Maybe::unit(1), Maybe::<i32>::absent(), |a, b| a + b), Maybe::Absent);
/// ```
#[inline]
pub fn lift_a2<A, B, R, F>(first: Maybe<A>, second: Maybe<B>, function: F) -> Maybe<R>
where
    F: FnOnce(A, B) -> R,
{
    first.bind(|a| second.map(|b| function(a, b)))
}

/// Keeps the present values of a sequence, in their original order.
///
/// # Examples
///
/// ```rust
/// use perhaps::maybe::{Maybe, cat_maybes};
///
/// let values = cat_maybes([Maybe::unit("a"), Maybe::absent(), Maybe::unit("b"), Maybe::absent()]);
/// assert_eq!(values, vec!["a", "b"]);
/// ```
pub fn cat_maybes<T, I>(maybes: I) -> Vec<T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    maybes.into_iter().flatten().collect()
}

/// Turns a condition into a `Maybe`, for guard-style chaining.
///
/// Unlike [`Maybe::of`], the boolean itself is the presence signal:
/// `true` becomes `Present(true)` and `false` becomes `Absent`.
///
/// # Examples
///
/// ```rust
/// use perhaps::maybe::{Maybe, bool_to_maybe};
///
/// let message = bool_to_maybe(true).bind(|_| Maybe::unit("this is great"));
/// assert_eq!(message, Maybe::Present("this is great"));
///
/// let skipped = bool_to_maybe(false).map(|_| "this won't be produced");
/// assert_eq!(skipped, Maybe::Absent);
/// ```
#[inline]
pub const fn bool_to_maybe(condition: bool) -> Maybe<bool> {
    if condition {
        Maybe::Present(true)
    } else {
        Maybe::Absent
    }
}

/// Returns `true` if `maybe` holds a value.
#[inline]
pub const fn is_present<T>(maybe: &Maybe<T>) -> bool {
    maybe.is_present()
}

/// Returns `true` if `maybe` holds no value.
#[inline]
pub const fn is_absent<T>(maybe: &Maybe<T>) -> bool {
    maybe.is_absent()
}
