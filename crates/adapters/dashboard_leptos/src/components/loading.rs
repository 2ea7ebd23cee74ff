//! Loading spinner component.

use garden_domain::element::LOADING_SPINNER_CLASS;
use leptos::prelude::*;

/// A busy indicator. Hidden until the controller adds the `visible` class.
#[component]
pub fn Loading(
    /// Tooltip shown while the spinner is visible.
    #[prop(default = "Loading\u{2026}".into(), into)]
    message: String,
) -> impl IntoView {
    view! {
        <span class=LOADING_SPINNER_CLASS title=message aria-hidden="true"></span>
    }
}
