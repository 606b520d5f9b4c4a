//! HAN event ids, specialized entry kinds and descriptions

use crate::dimension::LogDirection;
use serde::{Deserialize, Serialize};

/// Event ids logged for traffic received from HAN devices
pub mod upstream {
    pub const NETWORK_STATE_TRANSITION: u16 = 0x0001;
    pub const DEVICE_JOINED: u16 = 0x0002;
    pub const DEVICE_LEFT: u16 = 0x0003;
    pub const PRICE_ACKNOWLEDGEMENT: u16 = 0x0004;
    pub const MESSAGE_CONFIRMATION: u16 = 0x0005;
    pub const LOAD_CONTROL_STATUS: u16 = 0x0006;
    pub const KEY_ESTABLISHMENT_FAILED: u16 = 0x0007;
    pub const DEVICE_REJOINED: u16 = 0x0008;
}

/// Event ids logged for traffic sent by the meter
pub mod downstream {
    pub const PRICE_PUBLISHED: u16 = 0x0101;
    pub const MESSAGE_SENT: u16 = 0x0102;
    pub const MESSAGE_CANCELLED: u16 = 0x0103;
    pub const LOAD_CONTROL_SENT: u16 = 0x0104;
    pub const LOAD_CONTROL_CANCELLED: u16 = 0x0105;
    pub const TIME_SYNC_SENT: u16 = 0x0106;
    pub const NETWORK_KEY_UPDATED: u16 = 0x0107;
}

/// Closed set of entry shapes
///
/// Every kind other than [`HanEventKind::Generic`] decodes its argument bytes
/// into typed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HanEventKind {
    Generic,
    NetworkStateTransition,
    PriceAcknowledgement,
    MessageConfirmation,
    LoadControlStatus,
    PricePublished,
    MessageSent,
    MessageCancelled,
    LoadControlSent,
}

const UPSTREAM_KINDS: &[(u16, HanEventKind)] = &[
    (upstream::NETWORK_STATE_TRANSITION, HanEventKind::NetworkStateTransition),
    (upstream::PRICE_ACKNOWLEDGEMENT, HanEventKind::PriceAcknowledgement),
    (upstream::MESSAGE_CONFIRMATION, HanEventKind::MessageConfirmation),
    (upstream::LOAD_CONTROL_STATUS, HanEventKind::LoadControlStatus),
];

const DOWNSTREAM_KINDS: &[(u16, HanEventKind)] = &[
    (downstream::PRICE_PUBLISHED, HanEventKind::PricePublished),
    (downstream::MESSAGE_SENT, HanEventKind::MessageSent),
    (downstream::MESSAGE_CANCELLED, HanEventKind::MessageCancelled),
    (downstream::LOAD_CONTROL_SENT, HanEventKind::LoadControlSent),
];

const UPSTREAM_DESCRIPTIONS: &[(u16, &str)] = &[
    (upstream::NETWORK_STATE_TRANSITION, "Network State Transition"),
    (upstream::DEVICE_JOINED, "Device Joined"),
    (upstream::DEVICE_LEFT, "Device Left"),
    (upstream::PRICE_ACKNOWLEDGEMENT, "Price Acknowledgement"),
    (upstream::MESSAGE_CONFIRMATION, "Message Confirmation"),
    (upstream::LOAD_CONTROL_STATUS, "Load Control Event Status"),
    (upstream::KEY_ESTABLISHMENT_FAILED, "Key Establishment Failed"),
    (upstream::DEVICE_REJOINED, "Device Rejoined"),
];

const DOWNSTREAM_DESCRIPTIONS: &[(u16, &str)] = &[
    (downstream::PRICE_PUBLISHED, "Price Published"),
    (downstream::MESSAGE_SENT, "Message Sent"),
    (downstream::MESSAGE_CANCELLED, "Message Cancelled"),
    (downstream::LOAD_CONTROL_SENT, "Load Control Event Sent"),
    (downstream::LOAD_CONTROL_CANCELLED, "Load Control Event Cancelled"),
    (downstream::TIME_SYNC_SENT, "Time Sync Sent"),
    (downstream::NETWORK_KEY_UPDATED, "Network Key Updated"),
];

impl HanEventKind {
    /// Resolve the entry shape for an event id, defaulting to `Generic`
    pub fn for_event(direction: LogDirection, event_id: u16) -> Self {
        let table = match direction {
            LogDirection::Upstream => UPSTREAM_KINDS,
            LogDirection::Downstream => DOWNSTREAM_KINDS,
        };
        table
            .iter()
            .find(|(id, _)| *id == event_id)
            .map_or(Self::Generic, |(_, kind)| *kind)
    }

    /// Argument bytes needed to decode this kind
    pub fn argument_size(self) -> usize {
        match self {
            Self::Generic => 0,
            Self::NetworkStateTransition => 3,
            Self::PriceAcknowledgement => 12,
            Self::MessageConfirmation => 8,
            Self::LoadControlStatus => 6,
            Self::PricePublished => 8,
            Self::MessageSent => 6,
            Self::MessageCancelled => 4,
            Self::LoadControlSent => 7,
        }
    }
}

/// Description of an event id, `"Unknown Event N"` when not in the dictionary
pub fn describe(direction: LogDirection, event_id: u16) -> String {
    let table = match direction {
        LogDirection::Upstream => UPSTREAM_DESCRIPTIONS,
        LogDirection::Downstream => DOWNSTREAM_DESCRIPTIONS,
    };
    table
        .iter()
        .find(|(id, _)| *id == event_id)
        .map_or_else(|| format!("Unknown Event {}", event_id), |(_, text)| text.to_string())
}
