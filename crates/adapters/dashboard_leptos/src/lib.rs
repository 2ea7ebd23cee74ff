//! # garden-dashboard
//!
//! Browser adapter for the garden monitor. Binds the [`DashboardController`]
//! to the live page: `gloo-net` for the device API, `web-sys` for the DOM,
//! `gloo-timers` for the poll loop.
//!
//! The device normally serves the dashboard HTML itself. When the page has
//! no dashboard markup (e.g. under `trunk serve`), the Leptos [`App`] is
//! mounted first to provide it.

use std::cell::RefCell;
use std::rc::Rc;

use garden_app::controller::DashboardController;
use garden_domain::element;
use garden_domain::relay::RelayNumber;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::PageTransitionEvent;

pub mod api;
pub mod bindings;
mod components;
pub mod config;
pub mod dom;
pub mod logging;
mod pages;
pub mod poller;

use api::HttpGardenApi;
use bindings::ControlBindings;
use config::DashboardConfig;
use dom::DomView;
use pages::Dashboard;
use poller::PollTask;

/// Controller wired to the real API and DOM.
pub type Controller = DashboardController<HttpGardenApi, DomView>;

/// Root application component.
#[component]
pub fn App(
    /// Relays to render, with their display names.
    relays: Vec<(RelayNumber, String)>,
) -> impl IntoView {
    view! {
        <main>
            <Dashboard relays/>
        </main>
    }
}

/// A running dashboard: controller, click bindings and poll loop.
///
/// Dropping it stops polling and detaches every listener.
pub struct DashboardRuntime {
    controller: Rc<Controller>,
    _bindings: ControlBindings,
    poller: PollTask,
}

impl DashboardRuntime {
    /// Bind controls in `view`'s document and start polling.
    #[must_use]
    pub fn start(view: DomView, config: &DashboardConfig) -> Self {
        let document = view.document().clone();
        let api = HttpGardenApi::new(&config.api.base_url);
        let controller = Rc::new(DashboardController::new(api, view));

        let bindings =
            ControlBindings::bind(&document, &controller, config.relays().map(|(n, _)| n));
        let poller = PollTask::start(&controller, config.poll_interval());

        Self {
            controller,
            _bindings: bindings,
            poller,
        }
    }

    /// The controller driving the page.
    #[must_use]
    pub fn controller(&self) -> &Rc<Controller> {
        &self.controller
    }

    /// Stop polling and detach listeners. In-flight requests still complete.
    pub fn stop(mut self) {
        self.poller.stop();
    }
}

thread_local! {
    static RUNTIME: RefCell<Option<DashboardRuntime>> = const { RefCell::new(None) };
    static PAGEHIDE: RefCell<Option<Closure<dyn FnMut(PageTransitionEvent)>>> =
        const { RefCell::new(None) };
}

/// Errors preventing the dashboard from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartError {
    /// Not running in a browser window.
    #[error("no browser document available")]
    NoDocument,
    /// [`start`] was already called on this page.
    #[error("dashboard is already running")]
    AlreadyStarted,
}

/// Boot the dashboard on the current page.
///
/// Loads configuration, installs logging, mounts the markup if the page lacks
/// it, binds controls and starts polling. Teardown happens when the page is
/// unloaded; a page parked in the back/forward cache keeps its runtime.
///
/// # Errors
///
/// Returns [`StartError`] when there is no document or the dashboard is
/// already running.
pub fn start() -> Result<(), StartError> {
    if is_running() {
        return Err(StartError::AlreadyStarted);
    }
    let view = DomView::from_window().ok_or(StartError::NoDocument)?;

    let (config, config_error) = match DashboardConfig::load(view.document()) {
        Ok(config) => (config, None),
        Err(err) => (DashboardConfig::default(), Some(err)),
    };
    logging::init(&config.logging.filter);
    if let Some(err) = config_error {
        tracing::error!(error = %err, "invalid dashboard configuration, using defaults");
    }

    if let Err(err) = any_spawner::Executor::init_wasm_bindgen() {
        tracing::debug!(?err, "async executor already initialised");
    }

    if view.document().get_element_by_id(element::TEMPERATURE).is_none() {
        tracing::info!("page has no dashboard markup, mounting it");
        let relays: Vec<(RelayNumber, String)> = config
            .relays()
            .map(|(number, name)| (number, name.to_string()))
            .collect();
        leptos::mount::mount_to_body(move || view! { <App relays/> });
    }

    let runtime = DashboardRuntime::start(view, &config);
    RUNTIME.with(|r| *r.borrow_mut() = Some(runtime));
    stop_on_pagehide();

    tracing::info!(api = %config.api.base_url, "garden dashboard started");
    Ok(())
}

/// Whether [`start`] has a dashboard running on this page.
#[must_use]
pub fn is_running() -> bool {
    RUNTIME.with(|r| r.borrow().is_some())
}

/// Stop the running dashboard, if any.
pub fn stop() {
    if let Some(runtime) = RUNTIME.with(|r| r.borrow_mut().take()) {
        runtime.stop();
    }
}

fn on_pagehide(event: &PageTransitionEvent) {
    if event.persisted() {
        tracing::debug!("page entering back/forward cache, dashboard kept running");
        return;
    }
    stop();
}

/// Register the `pagehide` handler once for the lifetime of the page.
fn stop_on_pagehide() {
    if PAGEHIDE.with(|p| p.borrow().is_some()) {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::<dyn FnMut(PageTransitionEvent)>::new(|event: PageTransitionEvent| {
        on_pagehide(&event);
    });
    match window.add_event_listener_with_callback("pagehide", callback.as_ref().unchecked_ref()) {
        Ok(()) => PAGEHIDE.with(|p| *p.borrow_mut() = Some(callback)),
        Err(err) => tracing::warn!(?err, "failed to register pagehide handler"),
    }
}
