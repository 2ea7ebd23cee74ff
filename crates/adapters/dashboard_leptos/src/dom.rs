//! [`DashboardView`] backed by the live DOM.

use garden_app::ports::DashboardView;
use garden_domain::element::{LOADING_SPINNER_CLASS, VISIBLE_CLASS};
use web_sys::{Document, Element};

/// Writes to elements of a `web_sys::Document` by id.
#[derive(Debug, Clone)]
pub struct DomView {
    document: Document,
}

impl DomView {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// View over the current window's document, if there is one.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .map(Self::new)
    }

    /// The underlying document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn spinners(&self) -> Vec<Element> {
        let collection = self
            .document
            .get_elements_by_class_name(LOADING_SPINNER_CLASS);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }
}

impl DashboardView for DomView {
    fn set_text(&self, id: &str, text: &str) -> bool {
        let Some(el) = self.element(id) else {
            return false;
        };
        el.set_text_content(Some(text));
        true
    }

    fn set_class(&self, id: &str, class: &str) -> bool {
        let Some(el) = self.element(id) else {
            return false;
        };
        el.set_class_name(class);
        true
    }

    fn set_busy(&self, busy: bool) {
        for spinner in self.spinners() {
            let classes = spinner.class_list();
            let result = if busy {
                classes.add_1(VISIBLE_CLASS)
            } else {
                classes.remove_1(VISIBLE_CLASS)
            };
            if let Err(err) = result {
                tracing::warn!(?err, "failed to toggle loading spinner");
            }
        }
    }
}
