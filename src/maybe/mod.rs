//! The `Maybe` type and its combinators.
//!
//! This module provides:
//!
//! - [`Maybe`]: a value that is either `Present(T)` or `Absent`
//! - Collection combinators: [`all`], [`lift_a2`], [`cat_maybes`]
//! - Guard-style lifting of conditions: [`bool_to_maybe`]
//! - Two-way presence matching: [`match2`] and [`Match2`]
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```rust
//! use perhaps::maybe::{Maybe, bool_to_maybe};
//!
//! let do_something = true;
//! let message = bool_to_maybe(do_something)
//!     .bind(|_| Maybe::unit("this is great"))
//!     .map(|message| format!("this will log: {message}"));
//! assert_eq!(message, Maybe::Present("this will log: this is great".to_string()));
//!
//! let nothing = bool_to_maybe(do_something).bind(|_| Maybe::<&str>::absent());
//! assert!(nothing.is_absent());
//! ```
//!
//! ## Matching two values
//!
//! ```rust
//! use perhaps::maybe::{Match2, Maybe, match2};
//!
//! let value_changed = match2(
//!     Maybe::unit("CHF"),
//!     Maybe::unit("USD"),
//!     Match2 {
//!         first: |_: &str| true,
//!         second: |_: &str| true,
//!         both: |current: &str, selected: &str| current != selected,
//!         neither: || false,
//!     },
//! );
//! assert!(value_changed);
//! ```

mod combinators;
mod two_way;
mod value;

pub use combinators::{all, bool_to_maybe, cat_maybes, is_absent, is_present, lift_a2};
pub use two_way::{Match2, match2};
pub use value::Maybe;
