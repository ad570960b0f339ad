//! The serialise pipeline.
//!
//! Renders a message into a payload tree by walking its descriptor table in
//! table order, so field emission order is stable and repeated serialisation
//! of the same instance is byte-identical. The per-descriptor
//! [`OmitPolicy`](crate::descriptor::OmitPolicy) decides whether absent or
//! empty values are dropped or emitted as an empty token.

use serde_json::{Map, Value};

use super::error::ParseError;
use crate::{
    descriptor::{FieldKind, OmitPolicy, TokenShape},
    message::WireMessage,
    payload::{Encoding, Payload},
    xml::XmlElement,
};

/// Render `message` into a payload tree in the requested encoding.
pub(super) fn render<M: WireMessage>(
    message: &M,
    encoding: Encoding,
) -> Result<Payload, ParseError> {
    match encoding {
        Encoding::Json => render_json(message).map(Payload::Json),
        Encoding::Xml => render_xml(message).map(Payload::Xml),
    }
}

fn render_json<M: WireMessage>(message: &M) -> Result<Value, ParseError> {
    let mut object = Map::new();
    for descriptor in M::descriptors() {
        let field = descriptor.name.json;
        match &descriptor.kind {
            FieldKind::Scalar { shape, render, .. } => match render(message) {
                Some(token) if token.is_empty() && descriptor.omit == OmitPolicy::OmitWhenEmpty => {}
                Some(token) => {
                    object.insert(field.to_owned(), json_token(*shape, &token, field)?);
                }
                None => {
                    if descriptor.omit == OmitPolicy::EmitAlways {
                        object.insert(field.to_owned(), Value::Null);
                    }
                }
            },
            FieldKind::Nested { render, .. } => {
                match render(message, Encoding::Json).map_err(|error| error.prefixed(field))? {
                    Some(payload) => {
                        let value = payload.into_json().ok_or_else(|| {
                            ParseError::fault(format!(
                                "nested field `{field}` rendered a non-JSON payload"
                            ))
                        })?;
                        object.insert(field.to_owned(), value);
                    }
                    None => {
                        if descriptor.omit == OmitPolicy::EmitAlways {
                            object.insert(field.to_owned(), Value::Null);
                        }
                    }
                }
            }
        }
    }
    Ok(Value::Object(object))
}

fn render_xml<M: WireMessage>(message: &M) -> Result<XmlElement, ParseError> {
    let mut root = XmlElement::new(M::NAME);
    for descriptor in M::descriptors() {
        let field = descriptor.name.xml;
        match &descriptor.kind {
            FieldKind::Scalar { render, .. } => match render(message) {
                Some(token) if token.is_empty() && descriptor.omit == OmitPolicy::OmitWhenEmpty => {}
                Some(token) => root.push_child(XmlElement::text_element(field, token)),
                None => {
                    if descriptor.omit == OmitPolicy::EmitAlways {
                        root.push_child(XmlElement::new(field));
                    }
                }
            },
            FieldKind::Nested { render, .. } => {
                match render(message, Encoding::Xml).map_err(|error| error.prefixed(field))? {
                    Some(payload) => {
                        let mut element = payload.into_xml().ok_or_else(|| {
                            ParseError::fault(format!(
                                "nested field `{field}` rendered a non-XML payload"
                            ))
                        })?;
                        // The sub-message renders under its own name; the
                        // parent owns the field's wire name.
                        element.name = field.to_owned();
                        root.push_child(element);
                    }
                    None => {
                        if descriptor.omit == OmitPolicy::EmitAlways {
                            root.push_child(XmlElement::new(field));
                        }
                    }
                }
            }
        }
    }
    Ok(root)
}

/// Emit a scalar token as a typed JSON value according to its shape.
fn json_token(shape: TokenShape, token: &str, field: &str) -> Result<Value, ParseError> {
    match shape {
        TokenShape::Text => Ok(Value::String(token.to_owned())),
        TokenShape::Integer => token.parse::<i64>().map(Value::from).map_err(|_| {
            ParseError::fault(format!(
                "field `{field}` rendered non-integer token `{token}`"
            ))
        }),
        TokenShape::Boolean => token.parse::<bool>().map(Value::from).map_err(|_| {
            ParseError::fault(format!(
                "field `{field}` rendered non-boolean token `{token}`"
            ))
        }),
    }
}
