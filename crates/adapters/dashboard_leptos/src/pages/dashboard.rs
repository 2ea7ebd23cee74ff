//! Full dashboard markup, mounted when the hosting page does not provide it.

use garden_domain::element;
use garden_domain::relay::RelayNumber;
use leptos::prelude::*;

use crate::components::{Loading, RelayCard, StatCard, WateringCard};

/// Dashboard page: device header, readings, relays, watering.
#[component]
pub fn Dashboard(
    /// Relays to render, with their display names.
    relays: Vec<(RelayNumber, String)>,
) -> impl IntoView {
    view! {
        <div class="dashboard">
            <header>
                <h1 id=element::DEVICE_NAME>"Garden Monitor"</h1>
                <span id=element::CURRENT_TIME></span>
                <button id=element::READ_NOW type="button">"Read now"</button>
                <Loading/>
            </header>

            <section class="readings">
                <StatCard label="Temperature" element_id=element::TEMPERATURE/>
                <StatCard label="Humidity" element_id=element::HUMIDITY/>
                <StatCard label="Pressure" element_id=element::PRESSURE/>
                <StatCard label="Heat index" element_id=element::HEAT_INDEX/>
                <StatCard label="Soil moisture" element_id=element::SOIL_MOISTURE/>
            </section>

            <section class="relays">
                {relays
                    .into_iter()
                    .map(|(relay, name)| view! { <RelayCard relay name/> })
                    .collect::<Vec<_>>()}
            </section>

            <section class="watering">
                <WateringCard/>
            </section>
        </div>
    }
}
