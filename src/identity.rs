//! The semantic equality and identity contract.
//!
//! Equality between messages is payload-shape equality: every field declared
//! in the descriptor table is compared through its rendered wire form, and
//! nothing else is. Request linkage, timestamps, and correlation identifiers
//! stay out of the comparison unless a descriptor explicitly lists them, so
//! a retransmitted call is recognised as a duplicate by content rather than
//! by object identity.
//!
//! Concrete message types delegate their `PartialEq`/`Hash` implementations
//! to [`semantic_eq`] and [`semantic_hash`]; the two walk the table in the
//! same order, so equal messages always hash identically.

use std::{
    fmt::Write,
    hash::{Hash, Hasher},
};

use crate::{
    descriptor::FieldKind,
    message::WireMessage,
    payload::Encoding,
};

/// Structural equality over the fields declared in the descriptor table.
#[must_use]
pub fn semantic_eq<M: WireMessage>(a: &M, b: &M) -> bool {
    M::descriptors().iter().all(|descriptor| match &descriptor.kind {
        FieldKind::Scalar { render, .. } => render(a) == render(b),
        FieldKind::Nested { render, .. } => {
            render(a, Encoding::Json).ok() == render(b, Encoding::Json).ok()
        }
    })
}

/// Hash consistent with [`semantic_eq`]: folds each declared field's
/// rendered form in table order.
pub fn semantic_hash<M: WireMessage, H: Hasher>(message: &M, state: &mut H) {
    M::NAME.hash(state);
    for descriptor in M::descriptors() {
        descriptor.name.json.hash(state);
        match &descriptor.kind {
            FieldKind::Scalar { render, .. } => render(message).hash(state),
            FieldKind::Nested { render, .. } => {
                render(message, Encoding::Json).ok().hash(state);
            }
        }
    }
}

/// Short human-readable rendering for diagnostics, not a wire form.
///
/// Absent fields render as `-`; nested fields render as their JSON text.
#[must_use]
pub fn semantic_summary<M: WireMessage>(message: &M) -> String {
    let mut summary = format!("{} {{", M::NAME);
    let mut first = true;
    for descriptor in M::descriptors() {
        if !first {
            summary.push(',');
        }
        first = false;
        let rendered = match &descriptor.kind {
            FieldKind::Scalar { render, .. } => render(message),
            FieldKind::Nested { render, .. } => render(message, Encoding::Json)
                .ok()
                .flatten()
                .and_then(|payload| {
                    payload
                        .as_json()
                        .and_then(|value| serde_json::to_string(value).ok())
                }),
        };
        let _ = write!(
            summary,
            " {}: {}",
            descriptor.name.json,
            rendered.as_deref().unwrap_or("-")
        );
    }
    summary.push_str(" }");
    summary
}
