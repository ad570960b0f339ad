//! Shared fixture message types for integration tests.
//!
//! A small catalogue slice standing in for the generated message
//! catalogue: one request/response pair with an enumerated status and an
//! optional free-text field, plus a request carrying an optional nested
//! structure. Descriptor tables are written exactly the way a catalogue
//! generator would emit them.

#![allow(dead_code)]

use std::hash::{Hash, Hasher};

use chargewire::{
    CallResult,
    FieldDescriptor,
    FieldKind,
    OmitPolicy,
    Presence,
    Request,
    Response,
    TokenShape,
    Vocabulary,
    WireMessage,
    WireName,
    identity,
    mapper,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvailabilityKind {
    Operative,
    Inoperative,
    /// Fallback member, deliberately kept off the wire.
    Unknown,
}

pub const AVAILABILITY_KIND: Vocabulary<AvailabilityKind> = Vocabulary::new(&[
    ("Operative", AvailabilityKind::Operative),
    ("Inoperative", AvailabilityKind::Inoperative),
]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvailabilityStatus {
    Accepted,
    Rejected,
    Scheduled,
    Unknown,
}

pub const AVAILABILITY_STATUS: Vocabulary<AvailabilityStatus> = Vocabulary::new(&[
    ("Accepted", AvailabilityStatus::Accepted),
    ("Rejected", AvailabilityStatus::Rejected),
    ("Scheduled", AvailabilityStatus::Scheduled),
    ("Unknown", AvailabilityStatus::Unknown),
]);

#[derive(Debug, Clone)]
pub struct ChangeAvailabilityRequest {
    pub connector_id: i64,
    pub kind: AvailabilityKind,
}

impl WireMessage for ChangeAvailabilityRequest {
    const NAME: &'static str = "changeAvailabilityRequest";

    fn descriptors() -> &'static [FieldDescriptor<Self>] {
        const TABLE: &[FieldDescriptor<ChangeAvailabilityRequest>] = &[
            FieldDescriptor {
                name: WireName::same("connectorId"),
                presence: Presence::Mandatory,
                omit: OmitPolicy::EmitAlways,
                kind: FieldKind::Scalar {
                    shape: TokenShape::Integer,
                    assign: |message, token| {
                        message.connector_id = mapper::decode_integer(token)?;
                        Ok(())
                    },
                    render: |message| Some(message.connector_id.to_string()),
                },
            },
            FieldDescriptor {
                name: WireName::new("type", "availabilityType"),
                presence: Presence::Mandatory,
                omit: OmitPolicy::EmitAlways,
                kind: FieldKind::Scalar {
                    shape: TokenShape::Text,
                    assign: |message, token| {
                        message.kind = AVAILABILITY_KIND.decode(token)?;
                        Ok(())
                    },
                    render: |message| AVAILABILITY_KIND.encode(message.kind).map(str::to_owned),
                },
            },
        ];
        TABLE
    }

    fn fallback() -> Self {
        Self {
            connector_id: 0,
            kind: AvailabilityKind::Unknown,
        }
    }
}

impl Request for ChangeAvailabilityRequest {
    const OPERATION: &'static str = "ChangeAvailability";
}

impl PartialEq for ChangeAvailabilityRequest {
    fn eq(&self, other: &Self) -> bool { identity::semantic_eq(self, other) }
}

impl Eq for ChangeAvailabilityRequest {}

impl Hash for ChangeAvailabilityRequest {
    fn hash<H: Hasher>(&self, state: &mut H) { identity::semantic_hash(self, state); }
}

#[derive(Debug, Clone)]
pub struct ChangeAvailabilityResponse {
    request: ChangeAvailabilityRequest,
    result: CallResult,
    pub status: AvailabilityStatus,
    pub info: Option<String>,
}

impl ChangeAvailabilityResponse {
    /// Success-path constructor: caller supplies the domain fields and the
    /// result defaults to ok.
    pub fn new(
        request: ChangeAvailabilityRequest,
        status: AvailabilityStatus,
        info: Option<String>,
    ) -> Self {
        Self {
            request,
            result: CallResult::ok(),
            status,
            info,
        }
    }
}

impl WireMessage for ChangeAvailabilityResponse {
    const NAME: &'static str = "changeAvailabilityResponse";

    fn descriptors() -> &'static [FieldDescriptor<Self>] {
        const TABLE: &[FieldDescriptor<ChangeAvailabilityResponse>] = &[
            FieldDescriptor {
                name: WireName::same("status"),
                presence: Presence::Mandatory,
                omit: OmitPolicy::EmitAlways,
                kind: FieldKind::Scalar {
                    shape: TokenShape::Text,
                    assign: |message, token| {
                        message.status = AVAILABILITY_STATUS.decode(token)?;
                        Ok(())
                    },
                    render: |message| {
                        AVAILABILITY_STATUS.encode(message.status).map(str::to_owned)
                    },
                },
            },
            FieldDescriptor {
                name: WireName::same("info"),
                presence: Presence::Optional,
                omit: OmitPolicy::OmitWhenEmpty,
                kind: FieldKind::Scalar {
                    shape: TokenShape::Text,
                    assign: |message, token| {
                        message.info = if token.is_empty() {
                            None
                        } else {
                            Some(token.to_owned())
                        };
                        Ok(())
                    },
                    render: |message| message.info.clone(),
                },
            },
        ];
        TABLE
    }

    fn fallback() -> Self {
        Self::from_result(ChangeAvailabilityRequest::fallback(), CallResult::unknown())
    }
}

impl Response for ChangeAvailabilityResponse {
    type Request = ChangeAvailabilityRequest;

    fn from_result(request: Self::Request, result: CallResult) -> Self {
        Self {
            request,
            result,
            status: AvailabilityStatus::Unknown,
            info: None,
        }
    }

    fn request(&self) -> &Self::Request { &self.request }

    fn result(&self) -> &CallResult { &self.result }
}

impl PartialEq for ChangeAvailabilityResponse {
    fn eq(&self, other: &Self) -> bool {
        identity::semantic_eq(self, other) && self.result == other.result
    }
}

impl Eq for ChangeAvailabilityResponse {}

impl Hash for ChangeAvailabilityResponse {
    fn hash<H: Hasher>(&self, state: &mut H) {
        identity::semantic_hash(self, state);
        self.result.hash(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateUnit {
    Amperes,
    Watts,
    Unknown,
}

pub const RATE_UNIT: Vocabulary<RateUnit> =
    Vocabulary::new(&[("A", RateUnit::Amperes), ("W", RateUnit::Watts)]);

#[derive(Debug, Clone)]
pub struct ChargingProfile {
    pub limit: i64,
    pub unit: RateUnit,
}

impl WireMessage for ChargingProfile {
    const NAME: &'static str = "chargingProfile";

    fn descriptors() -> &'static [FieldDescriptor<Self>] {
        const TABLE: &[FieldDescriptor<ChargingProfile>] = &[
            FieldDescriptor {
                name: WireName::same("limit"),
                presence: Presence::Mandatory,
                omit: OmitPolicy::EmitAlways,
                kind: FieldKind::Scalar {
                    shape: TokenShape::Integer,
                    assign: |message, token| {
                        message.limit = mapper::decode_integer(token)?;
                        Ok(())
                    },
                    render: |message| Some(message.limit.to_string()),
                },
            },
            FieldDescriptor {
                name: WireName::same("unit"),
                presence: Presence::Mandatory,
                omit: OmitPolicy::EmitAlways,
                kind: FieldKind::Scalar {
                    shape: TokenShape::Text,
                    assign: |message, token| {
                        message.unit = RATE_UNIT.decode(token)?;
                        Ok(())
                    },
                    render: |message| RATE_UNIT.encode(message.unit).map(str::to_owned),
                },
            },
        ];
        TABLE
    }

    fn fallback() -> Self {
        Self {
            limit: 0,
            unit: RateUnit::Unknown,
        }
    }
}

impl PartialEq for ChargingProfile {
    fn eq(&self, other: &Self) -> bool { identity::semantic_eq(self, other) }
}

impl Eq for ChargingProfile {}

impl Hash for ChargingProfile {
    fn hash<H: Hasher>(&self, state: &mut H) { identity::semantic_hash(self, state); }
}

#[derive(Debug, Clone)]
pub struct RemoteStartRequest {
    pub id_tag: String,
    pub profile: Option<ChargingProfile>,
}

impl WireMessage for RemoteStartRequest {
    const NAME: &'static str = "remoteStartRequest";

    fn descriptors() -> &'static [FieldDescriptor<Self>] {
        const TABLE: &[FieldDescriptor<RemoteStartRequest>] = &[
            FieldDescriptor {
                name: WireName::same("idTag"),
                presence: Presence::Mandatory,
                omit: OmitPolicy::EmitAlways,
                kind: FieldKind::Scalar {
                    shape: TokenShape::Text,
                    assign: |message, token| {
                        message.id_tag = token.to_owned();
                        Ok(())
                    },
                    render: |message| Some(message.id_tag.clone()),
                },
            },
            FieldDescriptor {
                name: WireName::same("chargingProfile"),
                presence: Presence::Optional,
                omit: OmitPolicy::OmitWhenEmpty,
                kind: FieldKind::Nested {
                    assign: |message, node| {
                        message.profile = Some(chargewire::try_parse_fields(node)?);
                        Ok(())
                    },
                    render: |message, encoding| match &message.profile {
                        Some(profile) => {
                            Ok(Some(chargewire::serialize_fields(profile, encoding)?))
                        }
                        None => Ok(None),
                    },
                },
            },
        ];
        TABLE
    }

    fn fallback() -> Self {
        Self {
            id_tag: String::new(),
            profile: None,
        }
    }
}

impl Request for RemoteStartRequest {
    const OPERATION: &'static str = "RemoteStartTransaction";
}

impl PartialEq for RemoteStartRequest {
    fn eq(&self, other: &Self) -> bool { identity::semantic_eq(self, other) }
}

impl Eq for RemoteStartRequest {}

impl Hash for RemoteStartRequest {
    fn hash<H: Hasher>(&self, state: &mut H) { identity::semantic_hash(self, state); }
}
