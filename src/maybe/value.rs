//! The `Maybe` type and its core operations.
//!
//! `Maybe<T>` is either `Present(T)` or `Absent`. Every combinator consumes
//! the receiver and builds a new value; nothing is mutated in place.

use std::fmt;

/// A value that may or may not be present.
///
/// `Maybe<T>` is the library's optional-value type. Absence is encoded
/// structurally by the [`Maybe::Absent`] variant, so callers can chain
/// computations with [`bind`](Maybe::bind) and [`map`](Maybe::map) instead
/// of branching on presence by hand.
///
/// Variants are declared `Absent` first, so `Absent` orders before any
/// `Present` value, the same way `None < Some(_)` holds for `Option`.
///
/// # Examples
///
/// ```rust
/// use perhaps::maybe::Maybe;
///
/// let greeting = Maybe::unit("Hello")
///     .map(|word| format!("{word} Superman"))
///     .get_or_else(|| "nope".to_string());
/// assert_eq!(greeting, "Hello Superman");
///
/// let missing: Maybe<i32> = Maybe::of(None);
/// assert_eq!(missing.map(|n| n * 2), Maybe::Absent);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Maybe<T> {
    /// No value. Also known as `Nothing`.
    #[default]
    Absent,
    /// Exactly one value. Also known as `Just`.
    Present(T),
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a raw value, treating `None` as the absence sentinel.
    ///
    /// `None` yields `Absent`. Any `Some(value)` yields `Present(value)`,
    /// including falsy-looking payloads such as `false`, `0` or `""`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::of(Some(false)), Maybe::Present(false));
    /// assert_eq!(Maybe::of(Some(0)), Maybe::Present(0));
    /// assert_eq!(Maybe::<&str>::of(None), Maybe::Absent);
    /// ```
    #[inline]
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    /// Wraps a value that is known to exist.
    ///
    /// This is the monadic `return`: it always yields `Present(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::unit(13), Maybe::Present(13));
    /// ```
    #[inline]
    pub const fn unit(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns `Absent`.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    ///
    /// assert!(Maybe::unit("yay").is_present());
    /// assert!(!Maybe::<&str>::of(None).is_present());
    /// ```
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    // =========================================================================
    // Monad / Functor
    // =========================================================================

    /// Chains a computation that may itself produce no value.
    ///
    /// On `Present(value)` this returns `function(value)`. On `Absent` it
    /// returns `Absent` and `function` is never called.
    ///
    /// # Laws
    ///
    /// ```text
    /// Maybe::unit(x).bind(f)    == f(x)
    /// m.bind(Maybe::unit)       == m
    /// m.bind(f).bind(g)         == m.bind(|x| f(x).bind(g))
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    ///
    /// let index = Maybe::unit("Hello World").bind(|text| Maybe::of(text.find(' ')));
    /// assert_eq!(index, Maybe::Present(5));
    ///
    /// let missing = Maybe::unit("HelloWorld").bind(|text| Maybe::of(text.find(' ')));
    /// assert_eq!(missing, Maybe::Absent);
    /// ```
    #[inline]
    pub fn bind<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Applies a plain transformation to the value, if any.
    ///
    /// # Laws
    ///
    /// ```text
    /// m.map(|x| x)             == m
    /// m.map(|x| f(g(x)))       == m.map(g).map(f)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::unit(13).map(|n| n * 2), Maybe::Present(26));
    /// assert_eq!(Maybe::<i32>::absent().map(|n| n * 2), Maybe::Absent);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Present(value) => Maybe::Present(function(value)),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Case analysis as a function.
    ///
    /// Exactly one of the two branches is invoked. A native `match` on the
    /// enum is equivalent; this form is handy at the end of a method chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    ///
    /// let description = Maybe::unit(3).match_with(|| "none".to_string(), |n| n.to_string());
    /// assert_eq!(description, "3");
    /// ```
    #[inline]
    pub fn match_with<R, N, P>(self, on_absent: N, on_present: P) -> R
    where
        N: FnOnce() -> R,
        P: FnOnce(T) -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Returns the value, or computes a fallback when absent.
    ///
    /// The fallback is never invoked when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::unit("so cool").get_or_else(|| "failed"), "so cool");
    /// assert_eq!(Maybe::absent().get_or_else(|| "other"), "other");
    /// ```
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Returns the value, or the given fallback when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::unit("so cool").get_or_else_value("failed"), "so cool");
    /// assert_eq!(Maybe::absent().get_or_else_value("other"), "other");
    /// ```
    #[inline]
    pub fn get_or_else_value(self, fallback: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback,
        }
    }

    // =========================================================================
    // Fallback
    // =========================================================================

    /// Returns `self` if present, otherwise the `Maybe` produced by `fallback`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    ///
    /// let other = Maybe::unit("other");
    /// assert_eq!(Maybe::unit("so cool").or_else(|| other), Maybe::Present("so cool"));
    /// assert_eq!(Maybe::absent().or_else(|| other), other);
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => fallback(),
        }
    }

    /// Returns `self` if present, otherwise `fallback`.
    #[inline]
    #[must_use]
    pub fn or_else_value(self, fallback: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => fallback,
        }
    }

    // =========================================================================
    // Borrowing and Conversion
    // =========================================================================

    /// Borrows the payload, producing a `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use perhaps::maybe::Maybe;
    ///
    /// let name = Maybe::unit("Superman".to_string());
    /// let length = name.as_ref().map(|text| text.len());
    /// assert_eq!(length, Maybe::Present(8));
    /// assert!(name.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Returns an iterator over the zero or one contained values.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Self::Absent => formatter.write_str("Absent"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Same as [`Maybe::of`].
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Maybe<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::of)
    }
}
