//! Bidirectional codec for protocol messages.
//!
//! The codec turns payload trees into typed messages and back, driven by
//! each message's descriptor table. It is synchronous and stateless across
//! calls: parsing and serialising are pure functions of their inputs, hold
//! no shared mutable state, and are safe to invoke concurrently. The only
//! per-instance state is the optional [`CodecHooks`] pair.
//!
//! Parsing either returns a fully valid message with every mandatory field
//! populated, or a single [`ParseError`] naming exactly one offending field
//! and its path; no partial message and no panic ever crosses the `try_*`
//! boundary. The panicking entry points are thin conveniences over the
//! fallible ones for callers who treat a malformed payload as a bug.

mod error;
mod parse;
mod render;


pub use error::ParseError;

use crate::{
    hooks::CodecHooks,
    message::{Request, Response, WireMessage},
    payload::{Encoding, Payload, PayloadRef},
    result::CallResult,
};

/// A codec for one concrete message type, with optional hooks attached.
///
/// `Codec::default()` behaves exactly like the free functions in this
/// module; construct with [`Codec::with_hooks`] to attach post-processing.
pub struct Codec<M> {
    hooks: CodecHooks<M>,
}

impl<M> Default for Codec<M> {
    fn default() -> Self {
        Self {
            hooks: CodecHooks::none(),
        }
    }
}

impl<M: WireMessage> Codec<M> {
    /// A codec with no hooks attached.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// A codec with the given hooks attached.
    #[must_use]
    pub fn with_hooks(hooks: CodecHooks<M>) -> Self { Self { hooks } }

    /// Serialise a message into a payload tree.
    ///
    /// Fields are emitted in descriptor-table order, so serialising the
    /// same instance twice yields identical trees. The serialise hook, if
    /// registered, runs once on the finished payload.
    ///
    /// # Errors
    /// Returns a [`ParseError`] when a nested field fails to render or a
    /// mapper produces a token inconsistent with its declared shape; both
    /// indicate an inconsistent descriptor table rather than bad input.
    pub fn serialize(&self, message: &M, encoding: Encoding) -> Result<Payload, ParseError> {
        match render::render(message, encoding) {
            Ok(payload) => {
                tracing::debug!(message = M::NAME, ?encoding, "serialised message");
                Ok(self.hooks.run_after_serialize(message, payload))
            }
            Err(error) => {
                let error = error.prefixed(M::NAME);
                tracing::warn!(message = M::NAME, %error, "serialisation failed");
                Err(error)
            }
        }
    }
}

impl<M: Request> Codec<M> {
    /// Parse a request message from a payload tree.
    ///
    /// # Errors
    /// Returns a [`ParseError`] naming the offending field when a mandatory
    /// field is absent, a token is rejected by its mapper, or the tree does
    /// not match the expected shape.
    pub fn try_parse_request(&self, payload: &Payload) -> Result<M, ParseError> {
        let node = PayloadRef::from(payload);
        match parse::parse_into(M::fallback(), node) {
            Ok(message) => {
                tracing::debug!(message = M::NAME, encoding = ?payload.encoding(), "parsed request");
                Ok(self.hooks.run_after_parse(node, message))
            }
            Err(error) => {
                let error = error.prefixed(M::NAME);
                tracing::warn!(message = M::NAME, %error, "request parse failed");
                Err(error)
            }
        }
    }

    /// Parse a request message, panicking on failure.
    ///
    /// Thin convenience over [`Codec::try_parse_request`] for callers who
    /// treat a malformed payload as a programmer error.
    ///
    /// # Panics
    /// Panics with the underlying [`ParseError`] when parsing fails.
    #[must_use]
    #[track_caller]
    pub fn parse_request(&self, payload: &Payload) -> M {
        self.try_parse_request(payload)
            .unwrap_or_else(|error| panic!("{error}"))
    }
}

impl<R: Response> Codec<R> {
    /// Parse a response message from a payload tree, attaching the
    /// originating request verbatim.
    ///
    /// A successful parse carries [`CallResult::ok`]; failing results are
    /// attached only by the transport collaborator via
    /// [`Response::from_result`].
    ///
    /// # Errors
    /// Returns a [`ParseError`] naming the offending field when a mandatory
    /// field is absent, a token is rejected by its mapper, or the tree does
    /// not match the expected shape.
    pub fn try_parse_response(
        &self,
        payload: &Payload,
        request: R::Request,
    ) -> Result<R, ParseError> {
        let node = PayloadRef::from(payload);
        let seed = R::from_result(request, CallResult::ok());
        match parse::parse_into(seed, node) {
            Ok(message) => {
                tracing::debug!(message = R::NAME, encoding = ?payload.encoding(), "parsed response");
                Ok(self.hooks.run_after_parse(node, message))
            }
            Err(error) => {
                let error = error.prefixed(R::NAME);
                tracing::warn!(message = R::NAME, %error, "response parse failed");
                Err(error)
            }
        }
    }

    /// Parse a response message, panicking on failure.
    ///
    /// Thin convenience over [`Codec::try_parse_response`].
    ///
    /// # Panics
    /// Panics with the underlying [`ParseError`] when parsing fails.
    #[must_use]
    #[track_caller]
    pub fn parse_response(&self, payload: &Payload, request: R::Request) -> R {
        self.try_parse_response(payload, request)
            .unwrap_or_else(|error| panic!("{error}"))
    }
}

/// Parse a request message without hooks.
///
/// # Errors
/// See [`Codec::try_parse_request`].
pub fn try_parse_request<M: Request>(payload: &Payload) -> Result<M, ParseError> {
    Codec::new().try_parse_request(payload)
}

/// Parse a response message without hooks, attaching the originating
/// request verbatim.
///
/// # Errors
/// See [`Codec::try_parse_response`].
pub fn try_parse_response<R: Response>(
    payload: &Payload,
    request: R::Request,
) -> Result<R, ParseError> {
    Codec::new().try_parse_response(payload, request)
}

/// Serialise a message without hooks.
///
/// # Errors
/// See [`Codec::serialize`].
pub fn serialize<M: WireMessage>(message: &M, encoding: Encoding) -> Result<Payload, ParseError> {
    Codec::new().serialize(message, encoding)
}

/// Parse a bare field set from a payload node.
///
/// This is the recursion entry nested descriptor entries call from their
/// `assign` functions; errors are reported relative to the sub-tree and the
/// calling pipeline prefixes the enclosing field's path.
///
/// # Errors
/// See [`Codec::try_parse_request`].
pub fn try_parse_fields<S: WireMessage>(node: PayloadRef<'_>) -> Result<S, ParseError> {
    parse::parse_into(S::fallback(), node)
}

/// Render a bare field set into a payload tree.
///
/// Counterpart of [`try_parse_fields`] for nested `render` functions. The
/// XML arm renders under [`WireMessage::NAME`]; the enclosing pipeline
/// renames the element to the field's wire name.
///
/// # Errors
/// See [`Codec::serialize`].
pub fn serialize_fields<S: WireMessage>(
    message: &S,
    encoding: Encoding,
) -> Result<Payload, ParseError> {
    render::render(message, encoding)
}
