//! Export of a rendered plan as JSON or Markdown

use chrono::{DateTime, Local};
use tracing::{debug, instrument};

use crate::Result;
use crate::models::{ExportRecord, PlanDocument, TripInfo, TripMetadata};

/// Source of the export timestamp
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Host wall clock in local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Supported download formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    #[must_use]
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json; charset=utf-8",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }

    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            ExportFormat::Json => "tripgenie-plan.json",
            ExportFormat::Markdown => "tripgenie-plan.md",
        }
    }
}

/// Packages plans for download
#[derive(Debug, Clone, Default)]
pub struct PlanExporter<C: Clock = SystemClock> {
    clock: C,
}

impl PlanExporter<SystemClock> {
    #[must_use]
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> PlanExporter<C> {
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Build the export record, stamping it with the clock once
    #[must_use]
    pub fn record(&self, plan: &PlanDocument, metadata: &TripMetadata) -> ExportRecord {
        ExportRecord {
            trip_info: TripInfo::new(metadata, self.clock.now()),
            plan_content: plan.as_str().to_string(),
        }
    }

    /// Serialize the export record as indented JSON with non-ASCII kept as-is
    #[instrument(skip_all, fields(destination = %metadata.destination))]
    pub fn export(&self, plan: &PlanDocument, metadata: &TripMetadata) -> Result<String> {
        let record = self.record(plan, metadata);
        let json = serde_json::to_string_pretty(&record)?;
        debug!(bytes = json.len(), "Exported plan as JSON");
        Ok(json)
    }

    /// The Markdown export is the document itself
    #[must_use]
    pub fn export_markdown(&self, plan: &PlanDocument) -> String {
        plan.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn metadata() -> TripMetadata {
        TripMetadata {
            origin: "北京".to_string(),
            destination: "上海".to_string(),
            start_date: "2024-03-15".to_string(),
            end_date: "2024-03-17".to_string(),
            budget: 3000.0,
        }
    }

    fn fixed_exporter() -> PlanExporter<FixedClock> {
        let instant = Local.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        PlanExporter::with_clock(FixedClock(instant))
    }

    #[test]
    fn test_export_key_order_and_indent() {
        let plan = PlanDocument::new("# 计划\n第一行".to_string());
        let json = fixed_exporter().export(&plan, &metadata()).unwrap();

        let keys = [
            "\"trip_info\"",
            "\"origin\"",
            "\"destination\"",
            "\"start_date\"",
            "\"end_date\"",
            "\"budget\"",
            "\"generated_at\"",
            "\"plan_content\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);

        assert!(json.starts_with("{\n  \"trip_info\": {\n    \"origin\": \"北京\""));
    }

    #[test]
    fn test_export_preserves_non_ascii_and_newlines() {
        let plan = PlanDocument::new("# 🌟 上海\n- 第一行".to_string());
        let json = fixed_exporter().export(&plan, &metadata()).unwrap();
        assert!(json.contains("🌟 上海"));
        assert!(!json.contains("\\u"));
        assert!(json.contains("\"plan_content\": \"# 🌟 上海\\n- 第一行\""));
    }

    #[test]
    fn test_export_uses_injected_clock() {
        let exporter = fixed_exporter();
        let plan = PlanDocument::new("plan".to_string());
        let record = exporter.record(&plan, &metadata());
        assert_eq!(
            record.trip_info.generated_at,
            Local.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap()
        );

        let json = exporter.export(&plan, &metadata()).unwrap();
        let parsed: ExportRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_system_clock_timestamp_is_rfc3339() {
        let plan = PlanDocument::new("plan".to_string());
        let json = PlanExporter::new().export(&plan, &metadata()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let stamp = value["trip_info"]["generated_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn test_markdown_export_is_unchanged_document() {
        let plan = PlanDocument::new("# 标题\n\n正文\n".to_string());
        assert_eq!(PlanExporter::new().export_markdown(&plan), plan.as_str());
    }

    #[test]
    fn test_export_format_metadata() {
        assert_eq!(ExportFormat::Json.file_name(), "tripgenie-plan.json");
        assert!(ExportFormat::Markdown.content_type().starts_with("text/markdown"));
    }
}
