//! Owned XML element trees for the legacy SOAP encoding.
//!
//! The codec consumes and produces parsed trees, never text: turning bytes
//! into an [`XmlElement`] (and back) is the job of a document-parsing
//! collaborator. Child lookup matches on local names so namespace prefixes
//! added by a SOAP stack do not disturb field location.

use serde::{Deserialize, Serialize};

/// A single element in an XML document tree.
///
/// Leaf fields carry their wire token in `text`; structured fields carry
/// child elements. Attributes are not modelled because the protocol encodes
/// every field as element content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct XmlElement {
    /// Element name, possibly namespace-prefixed (`cs:status`).
    pub name: String,
    /// Child elements in document order.
    pub children: Vec<XmlElement>,
    /// Text content for leaf elements.
    pub text: Option<String>,
}

/// Strip a namespace prefix from an element name.
fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, local)| local)
}

impl XmlElement {
    /// Create an empty element.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Create a leaf element carrying a text token.
    #[must_use]
    pub fn text_element(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            text: Some(text.into()),
        }
    }

    /// Append a child element, builder style.
    #[must_use]
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child element in place.
    pub fn push_child(&mut self, child: XmlElement) { self.children.push(child); }

    /// Local name of this element, with any namespace prefix removed.
    #[must_use]
    pub fn local_name(&self) -> &str { local_name(&self.name) }

    /// Find the first child whose local name matches `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children
            .iter()
            .find(|child| child.local_name() == local_name(name))
    }

    /// Text content of this element, defaulting to the empty token.
    #[must_use]
    pub fn text_or_empty(&self) -> &str { self.text.as_deref().unwrap_or("") }

    /// Wrap this element in a SOAP `Envelope`/`Body` pair.
    ///
    /// Convenience for callers speaking the legacy encoding; the codec itself
    /// operates on the bare message element.
    #[must_use]
    pub fn into_soap_body(self) -> XmlElement {
        XmlElement::new("soap:Envelope")
            .with_child(XmlElement::new("soap:Body").with_child(self))
    }

    /// Extract the message element from a SOAP `Envelope`/`Body` pair.
    ///
    /// Returns `None` when the envelope has no `Body` or the body is empty.
    #[must_use]
    pub fn from_soap_body(envelope: &XmlElement) -> Option<&XmlElement> {
        envelope.child("Body")?.children.first()
    }
}
