//! Reference-counted busy indicator.
//!
//! Every request holds a [`BusyGuard`] for its lifetime. The indicator is shown
//! when the first guard is taken and hidden when the last one drops, so an
//! early finisher cannot hide the spinner while another request is in flight.

use std::cell::Cell;

use crate::ports::DashboardView;

/// Count of in-flight requests.
#[derive(Debug, Default)]
pub struct BusyCounter {
    in_flight: Cell<usize>,
}

impl BusyCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests currently holding a guard.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    /// Register a request, showing the indicator on `view` if it was idle.
    pub fn begin<'a, V: DashboardView>(&'a self, view: &'a V) -> BusyGuard<'a, V> {
        let previous = self.in_flight.get();
        self.in_flight.set(previous + 1);
        if previous == 0 {
            view.set_busy(true);
        }
        BusyGuard {
            counter: self,
            view,
        }
    }

    fn end<V: DashboardView>(&self, view: &V) {
        let remaining = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(remaining);
        if remaining == 0 {
            view.set_busy(false);
        }
    }
}

/// Releases one busy slot on drop.
#[must_use = "the request is only counted while the guard is alive"]
pub struct BusyGuard<'a, V: DashboardView> {
    counter: &'a BusyCounter,
    view: &'a V,
}

impl<V: DashboardView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.counter.end(self.view);
    }
}
