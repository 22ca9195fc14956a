//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends `Applicative` with `flat_map`, so each step can depend on
//! the result of the previous one. For `Maybe`, `flat_map` is
//! [`Maybe::bind`](crate::maybe::Maybe::bind).
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use perhaps::maybe::Maybe;
//! use perhaps::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::of(text.parse::<i32>().ok().filter(|&n| n > 0))
//! }
//!
//! let result = Maybe::unit("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::unit(n * 2));
//! assert_eq!(result, Maybe::Present(84));
//!
//! assert_eq!(Maybe::unit("-1").flat_map(parse_positive), Maybe::Absent);
//! ```

use super::applicative::Applicative;
use super::identity::Identity;
use crate::maybe::Maybe;

/// A type class for types that support sequencing of computations.
///
/// # Laws
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// m.flat_map(Self::pure) == m
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// In Haskell, this is `>>=` (bind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    /// use perhaps::typeclass::Monad;
    ///
    /// let w = Maybe::unit(5).flat_map(|n| if n > 10 { Maybe::unit(n) } else { Maybe::absent() });
    /// assert_eq!(w, Maybe::Absent);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// In Haskell, this is the `>>` operator. An absent `self` propagates and
    /// `next` is not returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::{Maybe, bool_to_maybe};
    /// use perhaps::typeclass::Monad;
    ///
    /// assert_eq!(bool_to_maybe(true).then(Maybe::unit("hello")), Maybe::Present("hello"));
    /// assert_eq!(bool_to_maybe(false).then(Maybe::unit("hello")), Maybe::Absent);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_flat_map_present() {
        let text = "Hello World";
        let bound = Maybe::unit(text).flat_map(|s| Maybe::of(s.find(' ')));
        assert_eq!(bound, Maybe::Present(5));
    }

    #[rstest]
    fn maybe_flat_map_absent_skips_function() {
        let bound = Maybe::<&str>::Absent.flat_map(|_| -> Maybe<usize> {
            panic!("function must not run on Absent")
        });
        assert_eq!(bound, Maybe::Absent);
    }

    #[rstest]
    fn maybe_and_then_is_flat_map() {
        let halve = |n: i32| if n % 2 == 0 { Maybe::unit(n / 2) } else { Maybe::absent() };
        assert_eq!(Maybe::unit(8).and_then(halve), Maybe::unit(8).flat_map(halve));
        assert_eq!(Maybe::unit(7).and_then(halve), Maybe::Absent);
    }

    #[rstest]
    fn identity_flat_map() {
        let result = Identity::new(5).flat_map(|n| Identity::new(n * 2));
        assert_eq!(result, Identity::new(10));
    }

    // =========================================================================
    // Law Tests (Unit Tests)
    // =========================================================================

    const X: &str = "hello";
    const Y: &str = "world";
    const Z: &str = "!";

    #[rstest]
    fn identity_left_identity_law() {
        let function = |_: &str| Identity::new(Y);
        assert_eq!(<Identity<()>>::pure(X).flat_map(function), function(X));
    }

    #[rstest]
    fn identity_right_identity_law() {
        let monad = Identity::new(X);
        assert_eq!(monad.flat_map(Identity::new), monad);
    }

    #[rstest]
    fn identity_associativity_law() {
        let function1 = |_: &str| Identity::new(Y);
        let function2 = |_: &str| Identity::new(Z);
        let monad = Identity::new(X);
        assert_eq!(
            monad.flat_map(function1).flat_map(function2),
            monad.flat_map(|value| function1(value).flat_map(function2))
        );
    }

    #[rstest]
    fn maybe_left_identity_law() {
        let function = |s: &str| Maybe::of(s.find('l'));
        assert_eq!(<Maybe<()>>::pure(X).flat_map(function), function(X));
    }

    #[rstest]
    #[case(Maybe::Present(X))]
    #[case(Maybe::Absent)]
    fn maybe_right_identity_law(#[case] monad: Maybe<&str>) {
        assert_eq!(monad.flat_map(Maybe::unit), monad);
    }

    #[rstest]
    #[case(Maybe::Present(X))]
    #[case(Maybe::Absent)]
    fn maybe_associativity_law(#[case] monad: Maybe<&str>) {
        let function1 = |_: &str| Maybe::unit(Y);
        let function2 = |_: &str| Maybe::unit(Z);
        assert_eq!(
            monad.flat_map(function1).flat_map(function2),
            monad.flat_map(|value| function1(value).flat_map(function2))
        );
    }
}
