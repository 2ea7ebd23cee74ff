//! Relay card component: status text plus an on/off switch.

use garden_domain::display::relay_label;
use garden_domain::element::{self, StatusClass};
use garden_domain::relay::RelayNumber;
use leptos::prelude::*;

/// A card for one relay. Starts out showing "OFF" and the configured name
/// until the first poll reports the device's own.
#[component]
pub fn RelayCard(
    /// Which relay this card controls.
    relay: RelayNumber,
    /// Display name, e.g. "Pump".
    #[prop(into)]
    name: String,
) -> impl IntoView {
    let name_id = element::relay_name(relay);
    let status_id = element::relay_status(relay);
    let toggle_id = element::relay_toggle(relay);

    view! {
        <div class="relay-card">
            <span id=name_id class="relay-name">{name}</span>
            <span id=status_id class=StatusClass::Off.as_str()>{relay_label(false)}</span>
            <label class="switch">
                <input type="checkbox" id=toggle_id/>
                <span class="slider"></span>
            </label>
        </div>
    }
}
