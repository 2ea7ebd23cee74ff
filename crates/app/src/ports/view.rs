//! View port: the page the dashboard renders into.

use std::rc::Rc;

/// Write access to the dashboard page.
///
/// Writes address elements by id and report whether the element exists.
/// A missing element is never an error.
pub trait DashboardView {
    /// Replace the text of element `id`. Returns `false` if it is absent.
    fn set_text(&self, id: &str, text: &str) -> bool;

    /// Replace the class name of element `id`. Returns `false` if it is absent.
    fn set_class(&self, id: &str, class: &str) -> bool;

    /// Show or hide every busy indicator on the page.
    fn set_busy(&self, busy: bool);
}

impl<T: DashboardView> DashboardView for Rc<T> {
    fn set_text(&self, id: &str, text: &str) -> bool {
        (**self).set_text(id, text)
    }

    fn set_class(&self, id: &str, class: &str) -> bool {
        (**self).set_class(id, class)
    }

    fn set_busy(&self, busy: bool) {
        (**self).set_busy(busy);
    }
}
