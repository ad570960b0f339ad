//! Parse error taxonomy for the codec layer.
//!
//! Every failure inside the parse and serialise pipelines surfaces as a
//! [`ParseError`] value; nothing panics across the fallible entry points'
//! boundary. Errors name the offending field and carry a dotted path from
//! the message root (`reserveNowRequest.chargingProfile.unit`) so a caller
//! can report exactly one offending location. Parse failures are never
//! retried here; retry policy belongs to the transport collaborator.

use thiserror::Error;

use crate::mapper::MapError;

/// Structured failure returned by the parse and serialise pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A mandatory field was absent from the payload.
    #[error("missing mandatory field `{field}` at `{path}`")]
    MissingMandatoryField {
        /// Wire name of the absent field.
        field: String,
        /// Dotted path from the message root.
        path: String,
    },

    /// A field was present but its token was rejected by the value mapper.
    #[error("unrecognised value `{token}` for field `{field}` at `{path}`: {source}")]
    UnrecognizedFieldValue {
        /// Wire name of the offending field.
        field: String,
        /// The rejected wire token.
        token: String,
        /// Dotted path from the message root.
        path: String,
        /// The original mapping failure.
        #[source]
        source: MapError,
    },

    /// The document tree did not match the expected shape.
    #[error("malformed document at `{path}`: {reason}")]
    MalformedDocument {
        /// What was wrong with the tree.
        reason: String,
        /// Dotted path from the message root.
        path: String,
    },

    /// Any other failure raised while handling the message, wrapped
    /// verbatim.
    #[error("underlying fault at `{path}`: {description}")]
    UnderlyingFault {
        /// Description of the wrapped failure.
        description: String,
        /// Dotted path from the message root.
        path: String,
    },
}

impl ParseError {
    /// A mandatory field was absent.
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        let field = field.into();
        let path = field.clone();
        ParseError::MissingMandatoryField { field, path }
    }

    /// A field token was rejected by its mapper.
    #[must_use]
    pub fn unrecognised(
        field: impl Into<String>,
        token: impl Into<String>,
        source: MapError,
    ) -> Self {
        let field = field.into();
        let path = field.clone();
        ParseError::UnrecognizedFieldValue {
            field,
            token: token.into(),
            path,
            source,
        }
    }

    /// The document tree did not match the expected shape.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        ParseError::MalformedDocument {
            reason: reason.into(),
            path: String::new(),
        }
    }

    /// Wrap any other failure verbatim.
    #[must_use]
    pub fn fault(description: impl Into<String>) -> Self {
        ParseError::UnderlyingFault {
            description: description.into(),
            path: String::new(),
        }
    }

    /// Wire name of the offending field, when one is known.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            ParseError::MissingMandatoryField { field, .. }
            | ParseError::UnrecognizedFieldValue { field, .. } => Some(field),
            ParseError::MalformedDocument { .. } | ParseError::UnderlyingFault { .. } => None,
        }
    }

    /// Dotted path from the message root to the failure site.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            ParseError::MissingMandatoryField { path, .. }
            | ParseError::UnrecognizedFieldValue { path, .. }
            | ParseError::MalformedDocument { path, .. }
            | ParseError::UnderlyingFault { path, .. } => path,
        }
    }

    /// Prepend a path segment, used while unwinding out of nested fields.
    #[must_use]
    pub fn prefixed(self, segment: &str) -> Self {
        fn join(segment: &str, path: &str) -> String {
            if path.is_empty() {
                segment.to_owned()
            } else {
                format!("{segment}.{path}")
            }
        }
        match self {
            ParseError::MissingMandatoryField { field, path } => {
                ParseError::MissingMandatoryField {
                    field,
                    path: join(segment, &path),
                }
            }
            ParseError::UnrecognizedFieldValue {
                field,
                token,
                path,
                source,
            } => ParseError::UnrecognizedFieldValue {
                field,
                token,
                path: join(segment, &path),
                source,
            },
            ParseError::MalformedDocument { reason, path } => ParseError::MalformedDocument {
                reason,
                path: join(segment, &path),
            },
            ParseError::UnderlyingFault { description, path } => ParseError::UnderlyingFault {
                description,
                path: join(segment, &path),
            },
        }
    }
}
