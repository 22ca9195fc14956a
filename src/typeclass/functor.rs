//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use perhaps::maybe::Maybe;
//! use perhaps::typeclass::Functor;
//!
//! let present: Maybe<i32> = Maybe::unit(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Maybe::Present("5".to_string()));
//!
//! // Absent is preserved
//! let absent: Maybe<i32> = Maybe::absent();
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::Absent);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;
use crate::maybe::Maybe;

/// A type class for types that can have a function mapped over their contents.
///
/// `Functor` applies a function to the value(s) inside a container while
/// preserving the container's structure.
///
/// # Laws
///
/// ```text
/// fa.fmap(|x| x) == fa
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    /// use perhaps::typeclass::Functor;
    ///
    /// let x: Maybe<i32> = Maybe::unit(5);
    /// assert_eq!(x.fmap(|n| n * 2), Maybe::Present(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor must stay available afterwards, or when the
    /// inner type does not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    /// use perhaps::typeclass::Functor;
    ///
    /// let x: Maybe<String> = Maybe::unit("hello".to_string());
    /// let y: Maybe<usize> = x.fmap_ref(|s| s.len());
    /// assert_eq!(y, Maybe::Present(5));
    /// // x is still available here
    /// assert!(x.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    /// use perhaps::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::unit(5).replace("replaced"), Maybe::Present("replaced"));
    /// assert_eq!(Maybe::<i32>::absent().replace("replaced"), Maybe::Absent);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}
