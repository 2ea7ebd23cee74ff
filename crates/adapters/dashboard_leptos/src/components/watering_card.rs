use garden_domain::element::{self, StatusClass};
use leptos::prelude::*;

/// Watering status plus the manual "Water now" trigger.
#[component]
pub fn WateringCard() -> impl IntoView {
    view! {
        <div class="watering-card">
            <span class="stat-label">"Watering"</span>
            <span id=element::WATERING_STATUS class=StatusClass::Off.as_str()>"Idle"</span>
            <button id=element::WATER_NOW type="button">"Water now"</button>
        </div>
    }
}
