//! Property-based tests for Monad laws on `Maybe`.
//!
//! - **Left Identity**: `Maybe::unit(a).bind(f) == f(a)`
//! - **Right Identity**: `m.bind(Maybe::unit) == m`
//! - **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
//!
//! The functions used here return `Absent` for part of their domain so that
//! both variants flow through every law.

#![cfg(feature = "typeclass")]

use perhaps::maybe::Maybe;
use perhaps::typeclass::{Applicative, Identity, Monad};
use proptest::prelude::*;

fn maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::of)
}

fn halve_even(n: i32) -> Maybe<i32> {
    if n % 2 == 0 { Maybe::unit(n / 2) } else { Maybe::absent() }
}

fn positive_string(n: i32) -> Maybe<String> {
    if n > 0 { Maybe::unit(n.to_string()) } else { Maybe::absent() }
}

proptest! {
    // Left Identity Law

    #[test]
    fn prop_maybe_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Maybe::unit(value).bind(halve_even), halve_even(value));
    }

    #[test]
    fn prop_maybe_left_identity_via_trait(value in any::<i32>()) {
        let left: Maybe<i32> = <Maybe<()>>::pure(value).flat_map(halve_even);
        prop_assert_eq!(left, halve_even(value));
    }

    // Right Identity Law

    #[test]
    fn prop_maybe_right_identity(monad in maybe_i32()) {
        prop_assert_eq!(monad.bind(Maybe::unit), monad);
    }

    #[test]
    fn prop_maybe_right_identity_via_trait(monad in maybe_i32()) {
        prop_assert_eq!(monad.flat_map(|x| <Maybe<()>>::pure(x)), monad);
    }

    // Associativity Law

    #[test]
    fn prop_maybe_associativity(monad in maybe_i32()) {
        let left = monad.bind(halve_even).bind(positive_string);
        let right = monad.bind(|x| halve_even(x).bind(positive_string));
        prop_assert_eq!(left, right);
    }

    // Absent short-circuits

    #[test]
    fn prop_maybe_absent_bind_is_absent(_seed in any::<u8>()) {
        let absent: Maybe<i32> = Maybe::Absent;
        prop_assert_eq!(absent.bind(halve_even), Maybe::Absent);
    }

    // Identity reference model

    #[test]
    fn prop_identity_left_identity(value in any::<i32>()) {
        let function = |n: i32| Identity::new(n.wrapping_mul(2));
        prop_assert_eq!(<Identity<()>>::pure(value).flat_map(function), function(value));
    }

    #[test]
    fn prop_identity_associativity(value in any::<i32>()) {
        let function1 = |n: i32| Identity::new(n.wrapping_add(1));
        let function2 = |n: i32| Identity::new(n.wrapping_mul(2));
        let monad = Identity::new(value);

        let left = monad.flat_map(function1).flat_map(function2);
        let right = monad.flat_map(|x| function1(x).flat_map(function2));

        prop_assert_eq!(left, right);
    }

    /// Present values behave like the Identity monad.
    #[test]
    fn prop_present_agrees_with_identity(value in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(3);
        let maybe = Maybe::unit(value).flat_map(|n| Maybe::unit(function(n)));
        let identity = Identity::new(value).flat_map(|n| Identity::new(function(n)));
        prop_assert_eq!(maybe, Maybe::Present(identity.into_inner()));
    }
}
