//! Customisation hooks invoked by the codec.
//!
//! [`CodecHooks`] stores the optional post-processing callbacks a caller may
//! attach to a [`crate::codec::Codec`]. A parse hook runs once after default
//! construction succeeds; a serialise hook runs once on the rendered
//! payload. These are the sole supported extension points: the codec never
//! inspects, retries, or special-cases a hook's output, and at most one hook
//! of each kind exists per message type.

use crate::payload::{Payload, PayloadRef};

/// Post-processing callback run after a message is parsed.
///
/// Receives the raw payload the message was parsed from and the constructed
/// message; ownership of the returned message transfers to the caller.
pub type ParseHook<M> = Box<dyn Fn(PayloadRef<'_>, M) -> M + Send + Sync>;

/// Post-processing callback run after a message is serialised.
///
/// Receives the message and its rendered payload; the returned payload is
/// handed to the caller verbatim. This is the supported way to append
/// vendor-specific fields.
pub type SerializeHook<M> = Box<dyn Fn(&M, Payload) -> Payload + Send + Sync>;

/// Optional callbacks attached to a codec instance.
pub struct CodecHooks<M> {
    /// Invoked once after a successful parse.
    pub after_parse: Option<ParseHook<M>>,
    /// Invoked once after serialisation.
    pub after_serialize: Option<SerializeHook<M>>,
}

impl<M> Default for CodecHooks<M> {
    fn default() -> Self {
        Self {
            after_parse: None,
            after_serialize: None,
        }
    }
}

impl<M> CodecHooks<M> {
    /// Hooks with no callbacks registered.
    #[must_use]
    pub fn none() -> Self { Self::default() }

    /// Register a parse hook, builder style.
    #[must_use]
    pub fn with_after_parse(
        mut self,
        hook: impl Fn(PayloadRef<'_>, M) -> M + Send + Sync + 'static,
    ) -> Self {
        self.after_parse = Some(Box::new(hook));
        self
    }

    /// Register a serialise hook, builder style.
    #[must_use]
    pub fn with_after_serialize(
        mut self,
        hook: impl Fn(&M, Payload) -> Payload + Send + Sync + 'static,
    ) -> Self {
        self.after_serialize = Some(Box::new(hook));
        self
    }

    /// Run the parse hook if registered, otherwise pass the message through.
    #[must_use]
    pub fn run_after_parse(&self, payload: PayloadRef<'_>, message: M) -> M {
        match &self.after_parse {
            Some(hook) => hook(payload, message),
            None => message,
        }
    }

    /// Run the serialise hook if registered, otherwise pass the payload
    /// through.
    #[must_use]
    pub fn run_after_serialize(&self, message: &M, payload: Payload) -> Payload {
        match &self.after_serialize {
            Some(hook) => hook(message, payload),
            None => payload,
        }
    }
}
