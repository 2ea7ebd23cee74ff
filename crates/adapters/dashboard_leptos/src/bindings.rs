//! Click listeners wiring page controls to the controller.
//!
//! Listeners are attached to whatever controls exist on the page and are
//! detached again when the [`ControlBindings`] guard drops.

use std::future::Future;
use std::rc::Rc;

use garden_app::controller::DashboardController;
use garden_app::ports::{DashboardView, GardenApi};
use garden_domain::element;
use garden_domain::relay::RelayNumber;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use web_sys::{Document, EventTarget, HtmlInputElement};

/// A click listener that removes itself on drop.
struct Listener {
    target: EventTarget,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    fn attach(
        target: EventTarget,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        Ok(Self { target, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback("click", self.callback.as_ref().unchecked_ref())
        {
            tracing::warn!(?err, "failed to detach click listener");
        }
    }
}

/// Guard keeping the page's click listeners alive.
#[derive(Default)]
pub struct ControlBindings {
    listeners: Vec<Listener>,
}

impl ControlBindings {
    /// Bind the relay toggles for `relays`, the read-now button and the
    /// water-now button. Controls missing from `document` are skipped.
    pub fn bind<A, V>(
        document: &Document,
        controller: &Rc<DashboardController<A, V>>,
        relays: impl IntoIterator<Item = RelayNumber>,
    ) -> Self
    where
        A: GardenApi + 'static,
        V: DashboardView + 'static,
    {
        let mut bindings = Self::default();

        for relay in relays {
            bindings.bind_relay_toggle(document, controller, relay);
        }

        bindings.bind_button(document, element::READ_NOW, controller, |c| async move {
            if let Err(err) = c.force_read().await {
                tracing::debug!(error = %err, "read-now finished without refresh");
            }
        });
        bindings.bind_button(document, element::WATER_NOW, controller, |c| async move {
            c.water_now().await;
        });

        tracing::info!(listeners = bindings.len(), "dashboard controls bound");
        bindings
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    fn push(&mut self, id: &str, target: EventTarget, callback: Closure<dyn FnMut(web_sys::Event)>) {
        match Listener::attach(target, callback) {
            Ok(listener) => self.listeners.push(listener),
            Err(err) => tracing::warn!(id, ?err, "failed to attach click listener"),
        }
    }

    fn bind_relay_toggle<A, V>(
        &mut self,
        document: &Document,
        controller: &Rc<DashboardController<A, V>>,
        relay: RelayNumber,
    ) where
        A: GardenApi + 'static,
        V: DashboardView + 'static,
    {
        let id = element::relay_toggle(relay);
        let Some(el) = document.get_element_by_id(&id) else {
            tracing::debug!(%id, "relay toggle not on page");
            return;
        };
        let Ok(input) = el.dyn_into::<HtmlInputElement>() else {
            tracing::warn!(%id, "relay toggle is not an input element");
            return;
        };

        let controller = Rc::clone(controller);
        let checkbox = input.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            let on = checkbox.checked();
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                controller.toggle_relay(relay, on).await;
            });
        });
        self.push(&id, input.into(), callback);
    }

    fn bind_button<A, V, F, Fut>(
        &mut self,
        document: &Document,
        id: &str,
        controller: &Rc<DashboardController<A, V>>,
        action: F,
    ) where
        A: GardenApi + 'static,
        V: DashboardView + 'static,
        F: Fn(Rc<DashboardController<A, V>>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let Some(el) = document.get_element_by_id(id) else {
            tracing::debug!(id, "control not on page");
            return;
        };

        let controller = Rc::clone(controller);
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            spawn_local(action(Rc::clone(&controller)));
        });
        self.push(id, el.into(), callback);
    }
}
