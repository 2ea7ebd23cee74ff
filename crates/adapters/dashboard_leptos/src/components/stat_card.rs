//! Stat card component for displaying a labelled sensor reading.

use garden_domain::display::MISSING_READING;
use leptos::prelude::*;

/// A card displaying a label and a reading the controller fills in.
#[component]
pub fn StatCard(
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// Id of the value element, written on every poll.
    element_id: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value" id=element_id>{MISSING_READING}</span>
        </div>
    }
}
