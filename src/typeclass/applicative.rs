//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with the ability to:
//!
//! - Lift pure values into the context (`pure`)
//! - Combine multiple values in the context using a function (`map2`, `map3`)
//! - Create tuples of values in the context (`product`)
//!
//! For `Maybe`, `map2` is exactly [`lift_a2`](crate::maybe::lift_a2): the
//! function runs only when both sides are present.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use perhaps::maybe::Maybe;
//! use perhaps::typeclass::Applicative;
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::Present(42));
//!
//! let sum = Maybe::unit(1).map2(Maybe::unit(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::Present(3));
//!
//! assert_eq!(Maybe::unit(1).product(Maybe::unit("hello")), Maybe::Present((1, "hello")));
//! ```

use super::functor::Functor;
use super::identity::Identity;
use crate::maybe::{Maybe, lift_a2};

/// A type class for types that support lifting values and combining contexts.
///
/// # Examples
///
/// ```rust
/// use perhaps::maybe::Maybe;
/// use perhaps::typeclass::Applicative;
///
/// let a = Maybe::unit(3);
/// let b = Maybe::unit(4);
/// assert_eq!(a.map2(b, |x, y| x + y), Maybe::Present(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    /// use perhaps::typeclass::Applicative;
    ///
    /// let a = Maybe::unit(1);
    /// let b: Maybe<i32> = Maybe::absent();
    /// assert_eq!(a.map2(b, |x, y| x + y), Maybe::Absent);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    /// use perhaps::typeclass::Applicative;
    ///
    /// let sum = Maybe::unit(1).map3(Maybe::unit(2), Maybe::unit(3), |x, y, z| x + y + z);
    /// assert_eq!(sum, Maybe::Present(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// This is equivalent to `map2(other, |a, b| (a, b))`.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two applicative values, keeping the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    /// use perhaps::typeclass::Applicative;
    ///
    /// assert_eq!(Maybe::unit(1).product_left(Maybe::unit(2)), Maybe::Present(1));
    /// assert_eq!(Maybe::unit(1).product_left(Maybe::<i32>::absent()), Maybe::Absent);
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two applicative values, keeping the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    /// use perhaps::typeclass::Applicative;
    ///
    /// let increment: fn(i32) -> i32 = |x| x + 1;
    /// let function = Maybe::unit(increment);
    /// assert_eq!(function.apply(Maybe::unit(5)), Maybe::Present(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        lift_a2(self, other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Maybe::Present(a), Maybe::Present(b), Maybe::Present(c)) => {
                Maybe::Present(function(a, b, c))
            }
            _ => Maybe::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        lift_a2(self, other, |function, b| function(b))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity((self.0)(other.0))
    }
}
