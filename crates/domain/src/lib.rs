//! # garden-domain
//!
//! Pure domain model for the garden monitor dashboard.
//!
//! ## Responsibilities
//! - Define the **sensor snapshot** returned by the device on every poll
//! - Define **relays**: 1-based numbering, the control command, the device ack
//! - Name the **DOM elements** the dashboard writes to and listens on
//! - Turn a snapshot into the exact **display strings** and status classes
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.

pub mod display;
pub mod element;
pub mod error;
pub mod relay;
pub mod snapshot;
