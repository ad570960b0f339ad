#![doc(html_root_url = "https://docs.rs/chargewire/latest")]
//! Bidirectional codec layer for charge-point protocol messages.
//!
//! For every protocol operation this crate models a typed request/response
//! pair that can be produced from and rendered to two wire encodings: the
//! newer JSON object form and the legacy XML/SOAP element form. The codec
//! consumes and produces parsed document trees only; transport, text
//! parsing, and the concrete message catalogue are collaborators on the far
//! side of the [`payload`] boundary.
//!
//! A concrete message type supplies a [`descriptor::FieldDescriptor`] table
//! naming each field's wire names, optionality, and value mappers. The same
//! table drives [`codec`] parsing and serialisation and the [`identity`]
//! equality contract, which is what guarantees that `parse(serialize(m))`
//! reproduces `m` for every declared field.

pub mod codec;
pub mod descriptor;
pub mod hooks;
pub mod identity;
pub mod mapper;
pub mod message;
pub mod payload;
pub mod result;
pub mod xml;

pub use codec::{
    Codec,
    ParseError,
    serialize,
    serialize_fields,
    try_parse_fields,
    try_parse_request,
    try_parse_response,
};
pub use descriptor::{FieldDescriptor, FieldKind, OmitPolicy, Presence, TokenShape, WireName};
pub use hooks::{CodecHooks, ParseHook, SerializeHook};
pub use identity::{semantic_eq, semantic_hash, semantic_summary};
pub use mapper::{MapError, Vocabulary};
pub use message::{Request, Response, WireMessage};
pub use payload::{Encoding, Payload, PayloadRef};
pub use result::{CallOutcome, CallResult};
pub use xml::XmlElement;
