//! Sensor snapshot: one point-in-time set of readings from the device.
//!
//! A snapshot has no identity and no history: every poll returns a fresh one
//! that fully replaces whatever the page showed before.

use serde::{Deserialize, Serialize};

use crate::relay::RelayNumber;

/// Readings and device state returned by `GET /sensor-data`.
///
/// The device encodes a failed sensor read (NaN) as JSON `null`, so every
/// numeric reading is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorSnapshot {
    /// Air temperature in °C.
    pub temperature: Option<f64>,
    /// Relative humidity in %.
    pub humidity: Option<f64>,
    /// Barometric pressure in hPa.
    pub pressure: Option<f64>,
    /// Apparent temperature in °C.
    pub heat_index: Option<f64>,
    /// Soil moisture in %.
    pub soil_moisture: Option<f64>,
    /// Raw soil sensor ADC value.
    pub soil_raw: Option<f64>,
    /// Configured device name.
    #[serde(rename = "deviceName")]
    pub device_name: String,
    /// Device clock, already formatted for display.
    pub time_str: String,
    /// Device clock as a unix timestamp.
    pub timestamp: Option<i64>,
    /// Relay states, relay 1 first.
    pub relays: Vec<bool>,
    /// Relay names configured on the device, relay 1 first.
    pub relay_names: Vec<String>,
    /// Whether a watering cycle is running.
    pub watering_active: bool,
    /// Seconds left in the current watering cycle.
    pub watering_remaining: Option<u64>,
}

impl SensorSnapshot {
    /// Iterate relays with their 1-based numbers.
    pub fn relay_states(&self) -> impl Iterator<Item = (RelayNumber, bool)> + '_ {
        self.relays
            .iter()
            .enumerate()
            .filter_map(|(index, on)| RelayNumber::from_index(index).map(|number| (number, *on)))
    }

    /// State of a single relay, if the device reported it.
    #[must_use]
    pub fn relay(&self, number: RelayNumber) -> Option<bool> {
        self.relays.get(usize::from(number.index())).copied()
    }

    /// Device-side name of a relay. Blank names count as absent.
    #[must_use]
    pub fn relay_name(&self, number: RelayNumber) -> Option<&str> {
        self.relay_names
            .get(usize::from(number.index()))
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
    }

    /// Current watering state.
    #[must_use]
    pub fn watering(&self) -> WateringState {
        if self.watering_active {
            WateringState::Active {
                remaining_secs: self.watering_remaining.unwrap_or_default(),
            }
        } else {
            WateringState::Idle
        }
    }
}

/// Watering cycle state derived from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WateringState {
    Idle,
    Active { remaining_secs: u64 },
}
