//! Wire payload trees exchanged with the transport collaborator.
//!
//! A [`Payload`] is the document-tree form of a message: a JSON value for the
//! newer encoding or an [`XmlElement`] for the legacy SOAP encoding. The
//! codec never touches raw bytes; text-to-tree parsing and tree-to-text
//! serialisation belong to the collaborator on the other side of this
//! boundary.

use std::hash::{Hash, Hasher};

use serde::Serialize;
use serde_json::Value;

use crate::xml::XmlElement;

/// Wire encoding selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Encoding {
    /// The newer JSON object form.
    Json,
    /// The legacy XML/SOAP element form.
    Xml,
}

/// An owned wire payload tree in one of the two supported encodings.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// JSON object form.
    Json(Value),
    /// XML element form.
    Xml(XmlElement),
}

impl Payload {
    /// Encoding this payload is expressed in.
    #[inline]
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        match self {
            Payload::Json(_) => Encoding::Json,
            Payload::Xml(_) => Encoding::Xml,
        }
    }

    /// Borrow the JSON value, if this is the JSON arm.
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Xml(_) => None,
        }
    }

    /// Borrow the XML element, if this is the XML arm.
    #[must_use]
    pub fn as_xml(&self) -> Option<&XmlElement> {
        match self {
            Payload::Xml(element) => Some(element),
            Payload::Json(_) => None,
        }
    }

    /// Consume the payload, yielding the JSON value if present.
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Xml(_) => None,
        }
    }

    /// Consume the payload, yielding the XML element if present.
    #[must_use]
    pub fn into_xml(self) -> Option<XmlElement> {
        match self {
            Payload::Xml(element) => Some(element),
            Payload::Json(_) => None,
        }
    }
}

impl Hash for Payload {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            // serde_json::Value does not implement Hash; fold the canonical
            // text form instead. Payloads built by the codec insert keys in
            // descriptor-table order, so the text form is stable.
            Payload::Json(value) => {
                0u8.hash(state);
                if let Ok(text) = serde_json::to_string(value) {
                    text.hash(state);
                }
            }
            Payload::Xml(element) => {
                1u8.hash(state);
                element.hash(state);
            }
        }
    }
}

/// Borrowed view of a payload node, used while walking a document tree.
///
/// Nested descriptor entries receive a `PayloadRef` pointing at their
/// sub-tree and re-enter the codec with it.
#[derive(Debug, Clone, Copy)]
pub enum PayloadRef<'a> {
    /// Borrowed JSON node.
    Json(&'a Value),
    /// Borrowed XML element.
    Xml(&'a XmlElement),
}

impl PayloadRef<'_> {
    /// Encoding of the underlying tree.
    #[inline]
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        match self {
            PayloadRef::Json(_) => Encoding::Json,
            PayloadRef::Xml(_) => Encoding::Xml,
        }
    }

    /// Clone the referenced node into an owned [`Payload`].
    #[must_use]
    pub fn to_payload(&self) -> Payload {
        match self {
            PayloadRef::Json(value) => Payload::Json((*value).clone()),
            PayloadRef::Xml(element) => Payload::Xml((*element).clone()),
        }
    }
}

impl<'a> From<&'a Payload> for PayloadRef<'a> {
    fn from(payload: &'a Payload) -> Self {
        match payload {
            Payload::Json(value) => PayloadRef::Json(value),
            Payload::Xml(element) => PayloadRef::Xml(element),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{DefaultHasher, Hash, Hasher};

    use serde_json::json;

    use super::{Encoding, Payload, PayloadRef};
    use crate::xml::XmlElement;

    fn hash_of(payload: &Payload) -> u64 {
        let mut hasher = DefaultHasher::new();
        payload.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn encoding_matches_the_arm() {
        assert_eq!(Payload::Json(json!({})).encoding(), Encoding::Json);
        assert_eq!(
            Payload::Xml(XmlElement::new("root")).encoding(),
            Encoding::Xml
        );
    }

    #[test]
    fn equal_payloads_hash_identically() {
        let a = Payload::Json(json!({"status": "Accepted"}));
        let b = Payload::Json(json!({"status": "Accepted"}));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn json_and_xml_arms_hash_distinctly() {
        let json = Payload::Json(json!(null));
        let xml = Payload::Xml(XmlElement::new("null"));
        assert_ne!(hash_of(&json), hash_of(&xml));
    }

    #[test]
    fn payload_ref_round_trips_to_owned() {
        let payload = Payload::Json(json!({"connectorId": 3}));
        let view = PayloadRef::from(&payload);
        assert_eq!(view.to_payload(), payload);
    }
}
