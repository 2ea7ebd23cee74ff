//! Shared fakes for the browser tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::future::{Future, ready};
use std::rc::Rc;
use std::time::Duration;

use garden_app::controller::DashboardController;
use garden_app::ports::{ApiError, DashboardView, GardenApi};
use garden_domain::relay::{RelayAck, RelayCommand};
use garden_domain::snapshot::SensorSnapshot;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// API answering instantly and counting calls.
#[derive(Default)]
pub struct CountingApi {
    pub fetches: Cell<usize>,
    pub reads: Cell<usize>,
}

impl GardenApi for CountingApi {
    fn fetch_snapshot(&self) -> impl Future<Output = Result<SensorSnapshot, ApiError>> {
        self.fetches.set(self.fetches.get() + 1);
        ready(Ok(SensorSnapshot::default()))
    }

    fn read_now(&self) -> impl Future<Output = Result<(), ApiError>> {
        self.reads.set(self.reads.get() + 1);
        ready(Err(ApiError::Status {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        }))
    }

    fn set_relay(&self, _command: RelayCommand) -> impl Future<Output = Result<RelayAck, ApiError>> {
        ready(Ok(RelayAck::default()))
    }

    fn water_now(&self) -> impl Future<Output = Result<u16, ApiError>> {
        ready(Ok(200))
    }
}

/// View with no elements.
pub struct BlankView;

impl DashboardView for BlankView {
    fn set_text(&self, _id: &str, _text: &str) -> bool {
        false
    }

    fn set_class(&self, _id: &str, _class: &str) -> bool {
        false
    }

    fn set_busy(&self, _busy: bool) {}
}

pub type TestController = DashboardController<Rc<CountingApi>, BlankView>;

pub fn controller() -> (Rc<CountingApi>, Rc<TestController>) {
    let api = Rc::new(CountingApi::default());
    let controller = Rc::new(DashboardController::new(Rc::clone(&api), BlankView));
    (api, controller)
}

pub fn init_executor() {
    let _ = any_spawner::Executor::init_wasm_bindgen();
}

/// Let spawned tasks and timers run for `duration`.
pub async fn settle(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap();
    TimeoutFuture::new(millis).await;
}

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Add an element with `id` to the body, unless one exists.
pub fn ensure_element(tag: &str, id: &str) -> HtmlElement {
    let document = document();
    if let Some(existing) = document.get_element_by_id(id) {
        return existing.dyn_into().unwrap();
    }
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element.dyn_into().unwrap()
}
