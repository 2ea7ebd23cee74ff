//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the controller and the outside world:
//! the device API on one side, the page on the other.

pub mod garden_api;
pub mod view;

pub use garden_api::{ApiError, GardenApi};
pub use view::DashboardView;
