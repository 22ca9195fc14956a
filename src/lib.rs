//! # perhaps
//!
//! A `Maybe` type for Rust with a functor/monad combinator algebra.
//!
//! ## Overview
//!
//! - **Maybe**: [`Maybe<T>`](maybe::Maybe), either `Present(T)` or `Absent`,
//!   with `bind`, `map`, `match_with`, `get_or_else` and `or_else`
//! - **Combinators**: `all`, `lift_a2`, `cat_maybes`, `bool_to_maybe`
//! - **Two-way matching**: `match2` over a pair of `Maybe` values
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup, Monoid
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): Type class traits (Functor, Monad, etc.)
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`, shaped like `Option`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use perhaps::prelude::*;
//!
//! let current = Maybe::unit("CHF");
//! let selected = Maybe::unit("USD");
//!
//! let changed = match2(
//!     current,
//!     selected,
//!     Match2 {
//!         first: |_: &str| true,
//!         second: |_: &str| true,
//!         both: |a: &str, b: &str| a != b,
//!         neither: || false,
//!     },
//! );
//! assert!(changed);
//!
//! let lengths = all([current, selected], |codes| codes.concat().len());
//! assert_eq!(lengths, Maybe::Present(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use perhaps::prelude::*;
/// ```
pub mod prelude {
    pub use crate::maybe::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod maybe;

#[cfg(feature = "typeclass")]
pub mod typeclass;
