//! Data models for the TripGenie application
//!
//! - Trip: the request tuple gathered from the form
//! - Plan: the rendered itinerary document
//! - Export: the structured export record

pub mod export;
pub mod plan;
pub mod trip;

pub use export::{ExportRecord, TripInfo};
pub use plan::PlanDocument;
pub use trip::{LabelSet, NOT_SELECTED, SpecialRequirements, TripMetadata, TripRequest};
