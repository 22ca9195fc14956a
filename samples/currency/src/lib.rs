//! currency-check
//!
//! Detects whether a user changed their selected currency, where either the
//! stored or the newly selected currency may be missing.
//!
//! # Examples
//!
//! ```
//! use currency_check::{CurrencyCode, currency_changed};
//! use perhaps::maybe::Maybe;
//!
//! let current = Maybe::unit(CurrencyCode::parse("chf").unwrap());
//! let selected = Maybe::unit(CurrencyCode::parse("USD").unwrap());
//! assert!(currency_changed(current, selected));
//! assert!(!currency_changed(Maybe::absent(), Maybe::absent()));
//! ```

use std::fmt;

use perhaps::maybe::{Match2, Maybe, bool_to_maybe, match2};
use thiserror::Error;

/// Number of letters in a currency code
const CODE_LENGTH: usize = 3;

/// Errors raised while parsing a currency code
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// The input was empty or only whitespace
    #[error("currency code must not be empty")]
    Empty,

    /// The input did not have exactly three characters
    #[error("currency code must have 3 letters, got {0}")]
    InvalidLength(usize),

    /// The input contained something other than an ASCII letter
    #[error("currency code contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// An ISO-4217-shaped currency code: three ASCII letters, stored uppercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses a currency code, trimming whitespace and uppercasing it.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError` if the trimmed input is empty, is not three
    /// characters long, or contains a non-letter.
    pub fn parse(input: &str) -> Result<Self, CurrencyError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CurrencyError::Empty);
        }

        if let Some(invalid) = trimmed.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(CurrencyError::InvalidCharacter(invalid));
        }

        let length = trimmed.len();
        if length != CODE_LENGTH {
            return Err(CurrencyError::InvalidLength(length));
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Parses an optional input; a missing input is `Absent`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError` if a supplied input fails [`CurrencyCode::parse`].
    pub fn parse_optional(input: Option<&str>) -> Result<Maybe<Self>, CurrencyError> {
        match input {
            Some(raw) => Self::parse(raw).map(Maybe::unit),
            None => Ok(Maybe::absent()),
        }
    }

    /// Returns the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Returns whether the selection differs from the current currency.
///
/// Setting or clearing a currency counts as a change; two absent sides do not.
pub fn currency_changed(current: Maybe<CurrencyCode>, selected: Maybe<CurrencyCode>) -> bool {
    match2(
        current,
        selected,
        Match2 {
            first: |current: CurrencyCode| {
                tracing::debug!(%current, "selection cleared");
                true
            },
            second: |selected: CurrencyCode| {
                tracing::debug!(%selected, "currency set for the first time");
                true
            },
            both: |current: CurrencyCode, selected: CurrencyCode| {
                tracing::debug!(%current, %selected, "comparing currencies");
                current != selected
            },
            neither: || {
                tracing::debug!("no currency on either side");
                false
            },
        },
    )
}

/// Builds the report line, only when the currency changed.
pub fn change_message(changed: bool, selected: &Maybe<CurrencyCode>) -> Maybe<String> {
    bool_to_maybe(changed).map(|_| {
        selected.as_ref().match_with(
            || "currency cleared".to_string(),
            |code| format!("currency changed to {code}"),
        )
    })
}
