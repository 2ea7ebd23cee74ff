//! Relays are the binary output channels on the device (pump, light, …).
//!
//! The page numbers relays from 1 (`relay1-toggle`), the device API indexes
//! them from 0. [`RelayNumber`] is the only place that conversion happens.

use std::fmt;
use std::num::NonZeroU8;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// 1-based relay number as shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelayNumber(NonZeroU8);

impl RelayNumber {
    /// Create a relay number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RelayNumberZero`] when `number` is 0.
    pub fn new(number: u8) -> Result<Self, ValidationError> {
        NonZeroU8::new(number)
            .map(Self)
            .ok_or(ValidationError::RelayNumberZero)
    }

    /// The 1-based number.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// The zero-based index the device API expects.
    #[must_use]
    pub fn index(self) -> u8 {
        self.0.get() - 1
    }

    /// The relay occupying zero-based position `index` in a snapshot.
    ///
    /// Returns `None` past relay 255.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_add(1)
            .and_then(|number| u8::try_from(number).ok())
            .and_then(NonZeroU8::new)
            .map(Self)
    }
}

impl fmt::Display for RelayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Body of `POST /relay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayCommand {
    /// Zero-based relay index.
    pub id: u8,
    /// `1` for on, `0` for off.
    pub state: u8,
}

impl RelayCommand {
    /// Build the command switching `relay` to `on`.
    #[must_use]
    pub fn new(relay: RelayNumber, on: bool) -> Self {
        Self {
            id: relay.index(),
            state: u8::from(on),
        }
    }

    /// Whether this command switches the relay on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state != 0
    }
}

/// Device reply to a relay command. Only ever logged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayAck {
    pub success: Option<bool>,
    pub id: Option<u8>,
    pub state: Option<u8>,
    /// Reason given by the device when it refuses a command.
    pub message: Option<String>,
}

impl RelayAck {
    /// Whether the device explicitly reported a failure.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.success == Some(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_relay_number_zero() {
        assert_eq!(RelayNumber::new(0), Err(ValidationError::RelayNumberZero));
    }

    #[test]
    fn should_map_relay_number_to_zero_based_index() {
        let relay = RelayNumber::new(3).unwrap();
        assert_eq!(relay.get(), 3);
        assert_eq!(relay.index(), 2);
    }

    #[test]
    fn should_build_relay_number_from_snapshot_position() {
        assert_eq!(RelayNumber::from_index(0), RelayNumber::new(1).ok());
        assert_eq!(RelayNumber::from_index(254), RelayNumber::new(255).ok());
        assert_eq!(RelayNumber::from_index(255), None);
    }

    #[test]
    fn should_serialize_command_with_zero_based_id_and_numeric_state() {
        let command = RelayCommand::new(RelayNumber::new(3).unwrap(), true);
        let json = serde_json::to_value(command).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 2, "state": 1 }));
        assert!(command.is_on());
    }

    #[test]
    fn should_encode_off_as_zero() {
        let command = RelayCommand::new(RelayNumber::new(1).unwrap(), false);
        assert_eq!(command, RelayCommand { id: 0, state: 0 });
        assert!(!command.is_on());
    }

    #[test]
    fn should_parse_partial_ack() {
        let ack: RelayAck = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(ack.is_rejected());
        assert_eq!(ack.id, None);
    }

    #[test]
    fn should_keep_rejection_message() {
        let ack: RelayAck =
            serde_json::from_str(r#"{"success":false,"message":"Invalid relay ID"}"#).unwrap();
        assert!(ack.is_rejected());
        assert_eq!(ack.message.as_deref(), Some("Invalid relay ID"));
    }

    #[test]
    fn should_parse_empty_ack_as_not_rejected() {
        let ack: RelayAck = serde_json::from_str("{}").unwrap();
        assert!(!ack.is_rejected());
    }
}
