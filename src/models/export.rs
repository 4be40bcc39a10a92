//! Structured export record

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::trip::TripMetadata;

/// Top-level export document. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub trip_info: TripInfo,
    pub plan_content: String,
}

/// Identifying trip fields plus the generation timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripInfo {
    pub origin: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    /// Local wall-clock time at export, RFC 3339
    pub generated_at: DateTime<Local>,
}

impl TripInfo {
    #[must_use]
    pub fn new(metadata: &TripMetadata, generated_at: DateTime<Local>) -> Self {
        Self {
            origin: metadata.origin.clone(),
            destination: metadata.destination.clone(),
            start_date: metadata.start_date.clone(),
            end_date: metadata.end_date.clone(),
            budget: metadata.budget,
            generated_at,
        }
    }
}
