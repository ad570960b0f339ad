//! The parse-validate-construct pipeline.
//!
//! Walks a message's descriptor table in table order against a payload
//! tree, applying each field's value mapper to a seed instance. Construction
//! is atomic: the first failure aborts the walk and no partial message
//! escapes. Absent optional fields keep the seed's declared default; a
//! present token the mapper rejects is a hard failure, never a tolerated
//! unknown value.

use std::borrow::Cow;

use serde_json::Value;

use super::error::ParseError;
use crate::{
    descriptor::{FieldDescriptor, FieldKind, Presence},
    message::WireMessage,
    payload::PayloadRef,
};

/// Populate `seed` from `node` according to the message's descriptor table.
pub(super) fn parse_into<M: WireMessage>(
    seed: M,
    node: PayloadRef<'_>,
) -> Result<M, ParseError> {
    let mut message = seed;
    for descriptor in M::descriptors() {
        apply_field(&mut message, descriptor, node)?;
    }
    Ok(message)
}

fn apply_field<M: WireMessage>(
    message: &mut M,
    descriptor: &FieldDescriptor<M>,
    node: PayloadRef<'_>,
) -> Result<(), ParseError> {
    let field = descriptor.name.for_encoding(node.encoding());
    match (locate(node, field)?, descriptor.presence) {
        (None, Presence::Mandatory) => Err(ParseError::missing(field)),
        // The seed already carries the declared default.
        (None, Presence::Optional) => Ok(()),
        (Some(view), _) => match &descriptor.kind {
            FieldKind::Scalar { assign, .. } => {
                let token = scalar_token(view, field)?;
                assign(message, &token)
                    .map_err(|source| ParseError::unrecognised(field, token, source))
            }
            FieldKind::Nested { assign, .. } => {
                assign(message, view).map_err(|error| error.prefixed(field))
            }
        },
    }
}

/// Locate a wire field by name within a payload node.
///
/// JSON `null` and absent keys both read as absent; for XML the field is
/// the first child element with a matching local name.
fn locate<'a>(node: PayloadRef<'a>, field: &str) -> Result<Option<PayloadRef<'a>>, ParseError> {
    match node {
        PayloadRef::Json(Value::Object(object)) => Ok(object
            .get(field)
            .filter(|value| !value.is_null())
            .map(PayloadRef::Json)),
        PayloadRef::Json(other) => Err(ParseError::malformed(format!(
            "expected a JSON object, found {}",
            json_kind(other)
        ))),
        PayloadRef::Xml(element) => Ok(element.child(field).map(PayloadRef::Xml)),
    }
}

/// Extract the scalar wire token from a located field.
fn scalar_token<'a>(view: PayloadRef<'a>, field: &str) -> Result<Cow<'a, str>, ParseError> {
    match view {
        PayloadRef::Json(Value::String(text)) => Ok(Cow::Borrowed(text.as_str())),
        PayloadRef::Json(Value::Number(number)) => Ok(Cow::Owned(number.to_string())),
        PayloadRef::Json(Value::Bool(flag)) => Ok(Cow::Owned(flag.to_string())),
        PayloadRef::Json(other) => Err(ParseError::malformed(format!(
            "field `{field}` expected a scalar, found {}",
            json_kind(other)
        ))),
        PayloadRef::Xml(element) if element.children.is_empty() => {
            Ok(Cow::Borrowed(element.text_or_empty()))
        }
        PayloadRef::Xml(_) => Err(ParseError::malformed(format!(
            "field `{field}` expected a scalar element, found child elements"
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
