//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Applying functions within containers
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! [`Maybe`](crate::maybe::Maybe) implements every one of them, and
//! [`Identity`] serves as the reference model when checking laws.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! so traits like Functor and Monad can be defined generically.
//!
//! # Examples
//!
//! ```rust
//! use perhaps::maybe::Maybe;
//! use perhaps::typeclass::{Applicative, Functor, Monad};
//!
//! fn double_all<M>(value: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     value.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::unit(21)), Maybe::Present(42));
//!
//! let chained = Maybe::unit(1)
//!     .map2(Maybe::unit(2), |a, b| a + b)
//!     .flat_map(|sum| if sum > 2 { Maybe::unit(sum) } else { Maybe::absent() });
//! assert_eq!(chained, Maybe::Present(3));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
