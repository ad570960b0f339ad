//! Value mappers converting wire tokens to domain values and back.
//!
//! Descriptor tables reference these helpers from their `assign` and
//! `render` functions. A mapper rejection is a hard parse failure for the
//! field that used it; the parser never substitutes a fallback for a token
//! it cannot interpret.

use thiserror::Error;

/// Failure to map a wire token to a domain value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The token is not part of the field's vocabulary.
    #[error("unknown token `{token}`")]
    UnknownToken {
        /// The rejected wire token.
        token: String,
    },

    /// The token is structurally malformed for the field's type.
    #[error("malformed value: {reason}")]
    Malformed {
        /// Why the token was rejected.
        reason: String,
    },
}

impl MapError {
    /// Reject a token that is not part of the vocabulary.
    #[must_use]
    pub fn unknown_token(token: impl Into<String>) -> Self {
        MapError::UnknownToken {
            token: token.into(),
        }
    }

    /// Reject a structurally malformed token.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        MapError::Malformed {
            reason: reason.into(),
        }
    }
}

/// A token vocabulary for an enumerated field.
///
/// Pairs each wire token with its domain value. Tables are `'static` so a
/// descriptor table can reference them from constant context.
///
/// ```
/// use chargewire::mapper::Vocabulary;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Status {
///     Accepted,
///     Rejected,
/// }
///
/// const STATUS: Vocabulary<Status> = Vocabulary::new(&[
///     ("Accepted", Status::Accepted),
///     ("Rejected", Status::Rejected),
/// ]);
///
/// assert_eq!(STATUS.decode("Accepted"), Ok(Status::Accepted));
/// assert!(STATUS.decode("Bogus").is_err());
/// assert_eq!(STATUS.encode(Status::Rejected), Some("Rejected"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary<T: 'static> {
    entries: &'static [(&'static str, T)],
}

impl<T: Copy + PartialEq> Vocabulary<T> {
    /// Build a vocabulary from a static token table.
    #[must_use]
    pub const fn new(entries: &'static [(&'static str, T)]) -> Self { Self { entries } }

    /// Map a wire token to its domain value.
    ///
    /// # Errors
    /// Returns [`MapError::UnknownToken`] when the token is not in the table.
    pub fn decode(&self, token: &str) -> Result<T, MapError> {
        self.entries
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, value)| *value)
            .ok_or_else(|| MapError::unknown_token(token))
    }

    /// Map a domain value back to its wire token.
    ///
    /// Returns `None` for values deliberately kept off the wire, such as a
    /// fallback member absent from the table.
    #[must_use]
    pub fn encode(&self, value: T) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == value)
            .map(|(name, _)| *name)
    }
}

/// Map an integer wire token to an `i64`.
///
/// # Errors
/// Returns [`MapError::Malformed`] when the token is not a decimal integer.
pub fn decode_integer(token: &str) -> Result<i64, MapError> {
    token
        .parse::<i64>()
        .map_err(|_| MapError::malformed(format!("`{token}` is not an integer")))
}

/// Map a boolean wire token (`true`/`false`) to a `bool`.
///
/// # Errors
/// Returns [`MapError::Malformed`] for any other token.
pub fn decode_boolean(token: &str) -> Result<bool, MapError> {
    match token {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(MapError::malformed(format!("`{other}` is not a boolean"))),
    }
}
