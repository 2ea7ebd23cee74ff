//! Dashboard controller: polling, rendering and the control use-cases.
//!
//! The controller owns no timers and spawns nothing: adapters decide when
//! each operation runs. All state is in `Cell`s so operations take `&self`
//! and may overlap on a single-threaded executor.

use garden_domain::display;
use garden_domain::relay::{RelayCommand, RelayNumber};
use garden_domain::snapshot::SensorSnapshot;

use crate::busy::BusyCounter;
use crate::poll_sequence::PollSequence;
use crate::ports::{ApiError, DashboardView, GardenApi};

/// Result of one sensor-data poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The snapshot was written to the page.
    Rendered,
    /// A newer poll had already been rendered; the snapshot was dropped.
    Stale,
    /// The request failed; the page keeps its previous values.
    Failed,
}

/// Drives the dashboard page from the device API.
pub struct DashboardController<A, V> {
    api: A,
    view: V,
    busy: BusyCounter,
    polls: PollSequence,
}

impl<A: GardenApi, V: DashboardView> DashboardController<A, V> {
    /// Create a controller rendering into `view` from `api`.
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            busy: BusyCounter::new(),
            polls: PollSequence::new(),
        }
    }

    /// The view this controller renders into.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Number of requests currently in flight.
    pub fn in_flight(&self) -> usize {
        self.busy.in_flight()
    }

    /// Fetch the current snapshot and render it.
    ///
    /// Failures are logged and leave the page untouched. A response that
    /// arrives after a newer poll was rendered is dropped.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> RefreshOutcome {
        let _busy = self.busy.begin(&self.view);
        let token = self.polls.issue();

        match self.api.fetch_snapshot().await {
            Ok(snapshot) if self.polls.accept(token) => {
                self.render(&snapshot);
                RefreshOutcome::Rendered
            }
            Ok(_) => {
                tracing::debug!(token = token.value(), "dropping stale sensor snapshot");
                RefreshOutcome::Stale
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch sensor data");
                RefreshOutcome::Failed
            }
        }
    }

    /// Write every field of `snapshot` to its element, skipping absent ones.
    pub fn render(&self, snapshot: &SensorSnapshot) {
        for update in display::updates(snapshot) {
            if !self.view.set_text(&update.id, &update.text) {
                tracing::trace!(id = %update.id, "element not on page");
                continue;
            }
            if let Some(class) = update.class {
                self.view.set_class(&update.id, class.as_str());
            }
        }
    }

    /// Ask the device for an immediate sensor read, then refresh.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] of the read request. No refresh happens in
    /// that case.
    #[tracing::instrument(skip(self))]
    pub async fn force_read(&self) -> Result<RefreshOutcome, ApiError> {
        let _busy = self.busy.begin(&self.view);

        tracing::info!("requesting immediate sensor read");
        if let Err(err) = self.api.read_now().await {
            tracing::error!(error = %err, "sensor read request failed");
            return Err(err);
        }
        tracing::info!("sensor read requested");

        Ok(self.refresh().await)
    }

    /// Switch `relay` on or off, then refresh to show the device's real state.
    ///
    /// The refresh runs whatever the device answered.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_relay(&self, relay: RelayNumber, on: bool) -> RefreshOutcome {
        let _busy = self.busy.begin(&self.view);

        let command = RelayCommand::new(relay, on);
        match self.api.set_relay(command).await {
            Ok(ack) if ack.is_rejected() => {
                let reason = ack.message.as_deref().unwrap_or("no reason given");
                tracing::warn!(id = ack.id, reason, "device rejected relay command");
            }
            Ok(ack) => tracing::info!(?ack, "relay command acknowledged"),
            Err(err) => tracing::error!(error = %err, "relay command failed"),
        }

        self.refresh().await
    }

    /// Start a manual watering cycle, then refresh.
    ///
    /// The refresh runs whatever the device answered.
    #[tracing::instrument(skip(self))]
    pub async fn water_now(&self) -> RefreshOutcome {
        let _busy = self.busy.begin(&self.view);

        tracing::info!("requesting manual watering");
        match self.api.water_now().await {
            Ok(status) if (200..300).contains(&status) => {
                tracing::info!(status, "watering started");
            }
            Ok(status) => tracing::warn!(status, "watering request not accepted"),
            Err(err) => tracing::error!(error = %err, "watering request failed"),
        }

        self.refresh().await
    }
}
