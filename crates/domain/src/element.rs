//! Stable identifiers of the page elements the dashboard reads and writes.

use crate::relay::RelayNumber;

pub const TEMPERATURE: &str = "temperature";
pub const HUMIDITY: &str = "humidity";
pub const PRESSURE: &str = "pressure";
pub const HEAT_INDEX: &str = "heat-index";
pub const SOIL_MOISTURE: &str = "soil-moisture";
pub const DEVICE_NAME: &str = "device-name";
pub const CURRENT_TIME: &str = "current-time";
pub const WATERING_STATUS: &str = "watering-status";

/// "Read now" button.
pub const READ_NOW: &str = "read-now";
/// "Water now" button.
pub const WATER_NOW: &str = "water-now";

/// Class carried by every busy indicator on the page.
pub const LOADING_SPINNER_CLASS: &str = "loading-spinner";
/// Class added to busy indicators while a request is in flight.
pub const VISIBLE_CLASS: &str = "visible";

/// Id of the text element showing a relay's state.
#[must_use]
pub fn relay_status(relay: RelayNumber) -> String {
    format!("relay{relay}-status")
}

/// Id of the element showing a relay's name.
#[must_use]
pub fn relay_name(relay: RelayNumber) -> String {
    format!("relay{relay}-name")
}

/// Id of the checkbox switching a relay.
#[must_use]
pub fn relay_toggle(relay: RelayNumber) -> String {
    format!("relay{relay}-toggle")
}

/// On/off styling applied to status elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    On,
    Off,
}

impl StatusClass {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "status-on",
            Self::Off => "status-off",
        }
    }
}

impl From<bool> for StatusClass {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_relay_element_ids_from_one_based_number() {
        let relay = RelayNumber::new(4).unwrap();
        assert_eq!(relay_status(relay), "relay4-status");
        assert_eq!(relay_toggle(relay), "relay4-toggle");
        assert_eq!(relay_name(relay), "relay4-name");
    }

    #[test]
    fn should_map_bool_to_status_class() {
        assert_eq!(StatusClass::from(true).as_str(), "status-on");
        assert_eq!(StatusClass::from(false).as_str(), "status-off");
    }
}
