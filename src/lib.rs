//! `TripGenie` - form-driven travel itinerary planner
//!
//! The core is two synchronous functions: [`PlanBuilder`] renders a
//! templated itinerary from a [`TripRequest`], and [`PlanExporter`] packages
//! the rendered plan as JSON or Markdown. The [`web`] module is a thin HTTP
//! shell around them.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod telemetry;
pub mod ui;
pub mod web;

// Re-export core types for public API
pub use crate::config::TripGenieConfig;
pub use error::TripGenieError;
pub use models::{
    ExportRecord, LabelSet, PlanDocument, SpecialRequirements, TripInfo, TripMetadata, TripRequest,
};
pub use planner::{Clock, FixedClock, ParsedDuration, PlanBuilder, PlanExporter, SystemClock};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripGenieError>;
