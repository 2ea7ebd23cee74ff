//! Display formatting. Turns a [`SensorSnapshot`] into element updates.
//!
//! The result is a flat list of `(element id, text, class)` writes that a view
//! applies in order. Elements missing from the page are the view's concern.

use std::fmt;

use crate::element::{self, StatusClass};
use crate::snapshot::{SensorSnapshot, WateringState};

/// Text shown in place of a reading the sensor failed to produce.
pub const MISSING_READING: &str = "--";

/// A single write to a page element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementUpdate {
    /// Target element id.
    pub id: String,
    /// New text content.
    pub text: String,
    /// Replacement class name, when the element carries a status.
    pub class: Option<StatusClass>,
}

impl ElementUpdate {
    fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            class: None,
        }
    }

    fn status(id: impl Into<String>, text: impl Into<String>, class: StatusClass) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            class: Some(class),
        }
    }
}

/// Format a reading followed by its unit, e.g. `21.5 °C`.
#[must_use]
pub fn reading(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) if value.is_finite() => format!("{value} {unit}"),
        _ => format!("{MISSING_READING} {unit}"),
    }
}

/// Text for a relay status element.
#[must_use]
pub fn relay_label(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

impl fmt::Display for WateringState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("Idle"),
            Self::Active { remaining_secs } => write!(f, "Active ({remaining_secs}s remaining)"),
        }
    }
}

impl WateringState {
    #[must_use]
    pub fn status_class(self) -> StatusClass {
        StatusClass::from(matches!(self, Self::Active { .. }))
    }
}

/// Every element write needed to show `snapshot`.
#[must_use]
pub fn updates(snapshot: &SensorSnapshot) -> Vec<ElementUpdate> {
    let mut updates = vec![
        ElementUpdate::text(element::TEMPERATURE, reading(snapshot.temperature, "°C")),
        ElementUpdate::text(element::HUMIDITY, reading(snapshot.humidity, "%")),
        ElementUpdate::text(element::PRESSURE, reading(snapshot.pressure, "hPa")),
        ElementUpdate::text(element::HEAT_INDEX, reading(snapshot.heat_index, "°C")),
        ElementUpdate::text(element::SOIL_MOISTURE, reading(snapshot.soil_moisture, "%")),
        ElementUpdate::text(element::DEVICE_NAME, snapshot.device_name.clone()),
        ElementUpdate::text(element::CURRENT_TIME, snapshot.time_str.clone()),
    ];

    for (relay, on) in snapshot.relay_states() {
        if let Some(name) = snapshot.relay_name(relay) {
            updates.push(ElementUpdate::text(element::relay_name(relay), name));
        }
        updates.push(ElementUpdate::status(
            element::relay_status(relay),
            relay_label(on),
            StatusClass::from(on),
        ));
    }

    let watering = snapshot.watering();
    updates.push(ElementUpdate::status(
        element::WATERING_STATUS,
        watering.to_string(),
        watering.status_class(),
    ));

    updates
}
