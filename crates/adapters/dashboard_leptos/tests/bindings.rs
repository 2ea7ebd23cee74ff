//! Click bindings attach to page controls and detach on drop.

#![cfg(target_arch = "wasm32")]

mod common;

use std::iter;
use std::time::Duration;

use garden_dashboard::bindings::ControlBindings;
use garden_domain::relay::RelayNumber;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn should_detach_listeners_on_drop() {
    common::init_executor();
    let button = common::ensure_element("button", "read-now");
    let (api, controller) = common::controller();

    let document = common::document();
    let bindings = ControlBindings::bind(&document, &controller, iter::empty::<RelayNumber>());
    assert_eq!(bindings.len(), 1);

    button.click();
    common::settle(Duration::ZERO).await;
    assert_eq!(api.reads.get(), 1);
    assert_eq!(api.fetches.get(), 0);

    drop(bindings);
    button.click();
    common::settle(Duration::ZERO).await;
    assert_eq!(api.reads.get(), 1);
}

#[wasm_bindgen_test]
fn should_skip_controls_missing_from_page() {
    let (_api, controller) = common::controller();
    let document = web_sys::Document::new().unwrap();

    let bindings = ControlBindings::bind(&document, &controller, iter::empty::<RelayNumber>());

    assert!(bindings.is_empty());
}
