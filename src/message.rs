//! Base contracts for protocol messages.
//!
//! Every concrete message type implements exactly one of [`Request`] or
//! [`Response`], and both extend [`WireMessage`], which binds the type to
//! its field descriptor table and its degraded-state representation. The
//! request/response pairing is nominal: each response names its request via
//! an associated type, giving a 1:1 pairing enforced by the type system
//! rather than a runtime lookup.

use std::fmt;

use crate::{descriptor::FieldDescriptor, result::CallResult};

/// A message type with a descriptor table and a fallback representation.
///
/// The descriptor table drives both the parse and serialise pipelines and
/// the semantic equality contract; fields not declared in the table are not
/// part of any of them. [`WireMessage::fallback`] yields the instance used
/// for degraded construction and as the parse seed: every field at its
/// documented fallback value (an `Unknown`-style member for enumerated
/// fields, `None` for optional fields, the empty string for mandatory text).
pub trait WireMessage: Sized + 'static {
    /// Diagnostic name, also used as the XML root element name
    /// (`changeAvailabilityResponse`).
    const NAME: &'static str;

    /// The field descriptor table shared by parse, serialise, and equality.
    fn descriptors() -> &'static [FieldDescriptor<Self>];

    /// An instance with every field at its declared fallback value.
    fn fallback() -> Self;
}

/// A request message initiating a protocol operation.
pub trait Request: WireMessage + fmt::Debug {
    /// Protocol operation this request initiates (`ChangeAvailability`).
    const OPERATION: &'static str;
}

/// A response message, always linked to the request that produced it.
///
/// Responses are built along one of two one-shot paths: the success path
/// (regular constructor or a successful parse, `result` defaults to ok) or
/// the failure path ([`Response::from_result`] with a non-ok result, every
/// domain field at its fallback). Both constructed states are terminal;
/// representing a different outcome requires building a new instance.
pub trait Response: WireMessage + fmt::Debug {
    /// The request type this response answers.
    type Request: Request;

    /// Construct a response from an explicit result, leaving every domain
    /// field at its fallback value.
    ///
    /// With a non-ok result this is the degraded-state representation of
    /// "the remote operation did not succeed"; it is a valid message and
    /// serialises like any other. The codec also uses this constructor with
    /// [`CallResult::ok`] as the seed it populates during parsing.
    fn from_result(request: Self::Request, result: CallResult) -> Self;

    /// The originating request, set at construction and never reassigned.
    fn request(&self) -> &Self::Request;

    /// Outcome of the remote operation.
    fn result(&self) -> &CallResult;
}
