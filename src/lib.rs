//! roadmap-rs: interactive project roadmap engine.
//!
//! This crate provides a Rust-idiomatic API for a bubble-chart roadmap view:
//! projects are laid out on a calendar timeline by start date, positioned
//! vertically by business value, and sized by implementation complexity.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod io;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{RoadmapEngine, RoadmapEngineConfig};
pub use error::{RoadmapError, RoadmapResult};
