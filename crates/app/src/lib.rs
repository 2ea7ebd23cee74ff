//! # garden-app
//!
//! Application layer: the dashboard controller and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `GardenApi`: the device's HTTP endpoints
//!   - `DashboardView`: element writes and the busy indicator
//! - Provide the `DashboardController` use-cases: refresh, forced read,
//!   relay control, watering trigger
//! - Keep overlapping requests honest: a reference-counted busy indicator and
//!   sequence tokens that drop out-of-order poll responses
//!
//! ## Dependency rule
//! Depends on `garden-domain` only. Never imports adapter or browser crates.
//! Everything here is single-threaded; nothing is required to be `Send`.

pub mod busy;
pub mod controller;
pub mod poll_sequence;
pub mod ports;
