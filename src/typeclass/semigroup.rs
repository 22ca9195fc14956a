//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use perhaps::maybe::Maybe;
//! use perhaps::typeclass::Semigroup;
//!
//! let hello = Maybe::unit(String::from("Hello, "));
//! let world = Maybe::unit(String::from("World!"));
//! assert_eq!(hello.combine(world), Maybe::Present(String::from("Hello, World!")));
//!
//! // Absent values are skipped
//! let only = Maybe::unit(vec![1, 2]).combine(Maybe::absent());
//! assert_eq!(only, Maybe::Present(vec![1, 2]));
//! ```

use super::Identity;
use crate::maybe::Maybe;

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::typeclass::Semigroup;
    ///
    /// let strings = vec![String::from("a"), String::from("b"), String::from("c")];
    /// assert_eq!(String::reduce_all(strings), Some(String::from("abc")));
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

// =============================================================================
// Maybe Implementation
// =============================================================================

/// `Maybe` forms a semigroup when its payload is a semigroup.
///
/// - `Present(a).combine(Present(b))` = `Present(a.combine(b))`
/// - `Present(a).combine(Absent)` = `Present(a)`
/// - `Absent.combine(Present(b))` = `Present(b)`
/// - `Absent.combine(Absent)` = `Absent`
impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Present(left), Self::Present(right)) => Self::Present(left.combine(right)),
            (Self::Present(value), Self::Absent) | (Self::Absent, Self::Present(value)) => {
                Self::Present(value)
            }
            (Self::Absent, Self::Absent) => Self::Absent,
        }
    }
}

// =============================================================================
// Identity Implementation
// =============================================================================

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}
