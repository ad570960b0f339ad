//! Field descriptor tables driving the codec.
//!
//! A descriptor table is the externally supplied, per-message mapping from
//! domain fields to wire names, optionality, and value mappers. The same
//! table drives parsing, serialisation, and the semantic equality contract,
//! which is what guarantees the round-trip law for every declared field.
//!
//! Mappers are plain function pointers so tables can live in constant
//! context; customisation happens through [`crate::hooks`], not through
//! subclass-style overrides.

use crate::{
    codec::ParseError,
    mapper::MapError,
    payload::{Encoding, Payload, PayloadRef},
};

/// Wire names for one field, per encoding.
///
/// JSON keys are typically lower-camel while XML element names follow the
/// legacy schema's tags, so the two are declared separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireName {
    /// Key in the JSON object form.
    pub json: &'static str,
    /// Element name in the XML form.
    pub xml: &'static str,
}

impl WireName {
    /// Declare distinct names per encoding.
    #[must_use]
    pub const fn new(json: &'static str, xml: &'static str) -> Self { Self { json, xml } }

    /// Declare one name shared by both encodings.
    #[must_use]
    pub const fn same(name: &'static str) -> Self { Self { json: name, xml: name } }

    /// The wire name for the given encoding.
    #[inline]
    #[must_use]
    pub fn for_encoding(&self, encoding: Encoding) -> &'static str {
        match encoding {
            Encoding::Json => self.json,
            Encoding::Xml => self.xml,
        }
    }
}

/// Whether a field must be present on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Absence is a parse failure.
    Mandatory,
    /// Absence leaves the field at its declared default.
    Optional,
}

/// Per-descriptor policy for absent or empty values during serialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OmitPolicy {
    /// Drop the field from the output when its value is absent or empty.
    OmitWhenEmpty,
    /// Always emit the field, even when empty (legacy XML schemas often
    /// require the empty element).
    EmitAlways,
}

/// Shape of a scalar wire token, controlling typed JSON emission.
///
/// Parsing accepts any JSON scalar and hands its text form to the mapper;
/// the shape only decides what the serialiser emits. XML tokens are always
/// element text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenShape {
    /// Emit as a JSON string.
    Text,
    /// Emit as a JSON integer.
    Integer,
    /// Emit as a JSON boolean.
    Boolean,
}

/// How a field's value is mapped between wire and domain form.
pub enum FieldKind<M> {
    /// A leaf field carrying a single wire token.
    Scalar {
        /// Token shape for typed JSON emission.
        shape: TokenShape,
        /// Apply a wire token to the message under construction.
        assign: fn(&mut M, &str) -> Result<(), MapError>,
        /// Render the field as a wire token; `None` means absent/empty.
        render: fn(&M) -> Option<String>,
    },
    /// A structured field parsed by re-entering the codec with a sub-table.
    Nested {
        /// Parse the sub-tree into the message under construction.
        assign: fn(&mut M, PayloadRef<'_>) -> Result<(), ParseError>,
        /// Render the field as a sub-tree; `Ok(None)` means absent.
        render: fn(&M, Encoding) -> Result<Option<Payload>, ParseError>,
    },
}

/// One entry in a message's descriptor table.
pub struct FieldDescriptor<M> {
    /// Wire names per encoding.
    pub name: WireName,
    /// Whether absence is a parse failure.
    pub presence: Presence,
    /// Emission policy for absent/empty values.
    pub omit: OmitPolicy,
    /// Value mapping for this field.
    pub kind: FieldKind<M>,
}
