//! Recurring sensor-data poll driven by a `gloo-timers` interval.

use std::rc::Rc;
use std::time::Duration;

use garden_app::controller::DashboardController;
use garden_app::ports::{DashboardView, GardenApi};
use gloo_timers::callback::Interval;
use leptos::task::spawn_local;

/// Owned poll loop. Refreshes immediately on start, then every interval
/// until stopped or dropped.
pub struct PollTask {
    interval: Option<Interval>,
    period: Duration,
}

impl PollTask {
    /// Start polling through `controller` every `period`.
    pub fn start<A, V>(controller: &Rc<DashboardController<A, V>>, period: Duration) -> Self
    where
        A: GardenApi + 'static,
        V: DashboardView + 'static,
    {
        spawn_refresh(Rc::clone(controller));

        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        let controller = Rc::clone(controller);
        let interval = Interval::new(millis, move || spawn_refresh(Rc::clone(&controller)));

        tracing::info!(interval_ms = millis, "sensor polling started");
        Self {
            interval: Some(interval),
            period,
        }
    }

    /// Time between two polls.
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the timer is still armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Cancel the timer. Polls already in flight still complete.
    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.cancel();
            tracing::info!("sensor polling stopped");
        }
    }
}

impl Drop for PollTask {
    fn drop(&mut self) {
        self.stop();
    }
}

fn spawn_refresh<A, V>(controller: Rc<DashboardController<A, V>>)
where
    A: GardenApi + 'static,
    V: DashboardView + 'static,
{
    spawn_local(async move {
        controller.refresh().await;
    });
}
