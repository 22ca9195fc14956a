//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! For `Maybe<T>`, the identity element is `Absent`: combining with it
//! leaves the other side untouched.
//!
//! # Examples
//!
//! ```rust
//! use perhaps::maybe::Maybe;
//! use perhaps::typeclass::Monoid;
//!
//! let words = vec![
//!     Maybe::unit(String::from("a")),
//!     Maybe::absent(),
//!     Maybe::unit(String::from("b")),
//! ];
//! assert_eq!(Maybe::combine_all(words), Maybe::Present(String::from("ab")));
//!
//! let none: Vec<Maybe<String>> = vec![];
//! assert_eq!(Maybe::combine_all(none), Maybe::Absent);
//! ```

use super::Identity;
use super::semigroup::Semigroup;
use crate::maybe::Maybe;

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this always returns a value.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// `Maybe` forms a monoid when its payload is a semigroup.
/// The identity element is `Absent`.
impl<T: Semigroup> Monoid for Maybe<T> {
    fn empty() -> Self {
        Self::Absent
    }
}

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}
