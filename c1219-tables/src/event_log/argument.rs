//! Typed decoding of event argument bytes

use super::kinds::HanEventKind;
use crate::error::C1219Result;
use c1219_core::{ByteOrder, MeterTime, TableReader};
use serde::{Deserialize, Serialize};

/// HAN device network state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkState {
    Uninitialized,
    Joining,
    Joined,
    KeyEstablishment,
    Registered,
    Leaving,
    Left,
    Unknown(u8),
}

impl NetworkState {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Uninitialized,
            1 => Self::Joining,
            2 => Self::Joined,
            3 => Self::KeyEstablishment,
            4 => Self::Registered,
            5 => Self::Leaving,
            6 => Self::Left,
            other => Self::Unknown(other),
        }
    }
}

/// Reason attached to a network state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureReason {
    None,
    Timeout,
    AuthenticationFailed,
    KeyEstablishmentFailed,
    NoNetworkFound,
    DeviceRejected,
    Unknown(u8),
}

impl FailureReason {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Timeout,
            2 => Self::AuthenticationFailed,
            3 => Self::KeyEstablishmentFailed,
            4 => Self::NoNetworkFound,
            5 => Self::DeviceRejected,
            other => Self::Unknown(other),
        }
    }
}

/// Load control event status reported by a HAN device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadControlStatus {
    CommandReceived,
    EventStarted,
    EventCompleted,
    OptedOut,
    OptedIn,
    EventCancelled,
    EventSuperseded,
    PartiallyCompletedOptOut,
    PartiallyCompletedOptIn,
    CompletedNoParticipation,
    Rejected,
    Unknown(u8),
}

impl LoadControlStatus {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0x01 => Self::CommandReceived,
            0x02 => Self::EventStarted,
            0x03 => Self::EventCompleted,
            0x04 => Self::OptedOut,
            0x05 => Self::OptedIn,
            0x06 => Self::EventCancelled,
            0x07 => Self::EventSuperseded,
            0x08 => Self::PartiallyCompletedOptOut,
            0x09 => Self::PartiallyCompletedOptIn,
            0x0A => Self::CompletedNoParticipation,
            0xF8 => Self::Rejected,
            other => Self::Unknown(other),
        }
    }
}

/// Decoded argument payload of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventArgument {
    /// No typed decoding; the raw bytes are all there is
    #[default]
    Raw,
    NetworkStateTransition {
        from: NetworkState,
        to: NetworkState,
        reason: FailureReason,
    },
    PriceAcknowledgement {
        provider_id: u32,
        issuer_event_id: u32,
        acknowledged_at: MeterTime,
    },
    MessageConfirmation {
        message_id: u32,
        confirmed_at: MeterTime,
    },
    LoadControlStatus {
        issuer_event_id: u32,
        status: LoadControlStatus,
        criticality: u8,
    },
    PricePublished {
        provider_id: u32,
        issuer_event_id: u32,
    },
    MessageSent {
        message_id: u32,
        duration_minutes: u16,
    },
    MessageCancelled {
        message_id: u32,
    },
    LoadControlSent {
        issuer_event_id: u32,
        duration_minutes: u16,
        criticality: u8,
    },
}

/// Decode `bytes` according to `kind`
///
/// Trailing bytes beyond what the kind defines are ignored; too few bytes is
/// an error.
pub fn decode_argument(
    kind: HanEventKind,
    bytes: &[u8],
    order: ByteOrder,
) -> C1219Result<EventArgument> {
    let mut reader = TableReader::with_order(bytes, order);
    let r = &mut reader;
    Ok(match kind {
        HanEventKind::Generic => EventArgument::Raw,
        HanEventKind::NetworkStateTransition => EventArgument::NetworkStateTransition {
            from: NetworkState::from_u8(r.read_u8()?),
            to: NetworkState::from_u8(r.read_u8()?),
            reason: FailureReason::from_u8(r.read_u8()?),
        },
        HanEventKind::PriceAcknowledgement => EventArgument::PriceAcknowledgement {
            provider_id: r.read_u32()?,
            issuer_event_id: r.read_u32()?,
            acknowledged_at: MeterTime::read(r)?,
        },
        HanEventKind::MessageConfirmation => EventArgument::MessageConfirmation {
            message_id: r.read_u32()?,
            confirmed_at: MeterTime::read(r)?,
        },
        HanEventKind::LoadControlStatus => EventArgument::LoadControlStatus {
            issuer_event_id: r.read_u32()?,
            status: LoadControlStatus::from_u8(r.read_u8()?),
            criticality: r.read_u8()?,
        },
        HanEventKind::PricePublished => EventArgument::PricePublished {
            provider_id: r.read_u32()?,
            issuer_event_id: r.read_u32()?,
        },
        HanEventKind::MessageSent => EventArgument::MessageSent {
            message_id: r.read_u32()?,
            duration_minutes: r.read_u16()?,
        },
        HanEventKind::MessageCancelled => EventArgument::MessageCancelled {
            message_id: r.read_u32()?,
        },
        HanEventKind::LoadControlSent => EventArgument::LoadControlSent {
            issuer_event_id: r.read_u32()?,
            duration_minutes: r.read_u16()?,
            criticality: r.read_u8()?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_state_transition() {
        let arg = decode_argument(
            HanEventKind::NetworkStateTransition,
            &[1, 2, 0, 0xEE],
            ByteOrder::BigEndian,
        )
        .unwrap();
        assert_eq!(
            arg,
            EventArgument::NetworkStateTransition {
                from: NetworkState::Joining,
                to: NetworkState::Joined,
                reason: FailureReason::None,
            }
        );
    }

    #[test]
    fn test_unknown_enum_values() {
        let arg = decode_argument(
            HanEventKind::NetworkStateTransition,
            &[0x40, 6, 0x99],
            ByteOrder::BigEndian,
        )
        .unwrap();
        assert_eq!(
            arg,
            EventArgument::NetworkStateTransition {
                from: NetworkState::Unknown(0x40),
                to: NetworkState::Left,
                reason: FailureReason::Unknown(0x99),
            }
        );
    }

    #[test]
    fn test_byte_order_applies() {
        let arg = decode_argument(
            HanEventKind::MessageSent,
            &[0x01, 0x00, 0x00, 0x00, 0x3C, 0x00],
            ByteOrder::LittleEndian,
        )
        .unwrap();
        assert_eq!(
            arg,
            EventArgument::MessageSent {
                message_id: 1,
                duration_minutes: 60,
            }
        );
    }

    #[test]
    fn test_short_argument_is_error() {
        assert!(decode_argument(HanEventKind::PriceAcknowledgement, &[0; 11], ByteOrder::BigEndian)
            .is_err());
        assert_eq!(
            decode_argument(HanEventKind::Generic, &[], ByteOrder::BigEndian).unwrap(),
            EventArgument::Raw
        );
    }

    #[test]
    fn test_sizes_match_decoders() {
        let kinds = [
            HanEventKind::NetworkStateTransition,
            HanEventKind::PriceAcknowledgement,
            HanEventKind::MessageConfirmation,
            HanEventKind::LoadControlStatus,
            HanEventKind::PricePublished,
            HanEventKind::MessageSent,
            HanEventKind::MessageCancelled,
            HanEventKind::LoadControlSent,
        ];
        for kind in kinds {
            let size = kind.argument_size();
            let exact = vec![0u8; size];
            assert!(decode_argument(kind, &exact, ByteOrder::BigEndian).is_ok());
            assert!(decode_argument(kind, &exact[..size - 1], ByteOrder::BigEndian).is_err());
        }
    }
}
