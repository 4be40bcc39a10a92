use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::config::FormDefaults;
use crate::models::{PlanDocument, TripMetadata, TripRequest};
use crate::planner::{ExportFormat, PlanBuilder, PlanExporter};
use crate::ui::FormSchema;

pub mod error;

pub use error::ApiError;

/// Shared, read-only state behind every handler
pub struct AppState {
    pub builder: PlanBuilder,
    pub exporter: PlanExporter,
    pub schema: FormSchema,
}

impl AppState {
    #[must_use]
    pub fn new(defaults: FormDefaults) -> Self {
        Self {
            builder: PlanBuilder::new(),
            exporter: PlanExporter::new(),
            schema: FormSchema::new(defaults),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    pub plan: String,
    pub days: i64,
    pub duration_defaulted: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonExportRequest {
    pub plan: String,
    #[serde(flatten)]
    pub trip: TripMetadata,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MarkdownExportRequest {
    pub plan: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/form", get(get_form))
        .route("/plan", post(create_plan))
        .route("/export/json", post(export_json))
        .route("/export/markdown", post(export_markdown))
        .with_state(state)
}

async fn get_form(State(state): State<Arc<AppState>>) -> Json<FormSchema> {
    Json(state.schema.clone())
}

#[instrument(skip_all, fields(origin = %request.origin, destination = %request.destination))]
async fn create_plan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TripRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    request.validate()?;

    let itinerary = state.builder.compose(&request);
    let duration = itinerary.overview.duration;
    let plan = itinerary.to_string();

    info!(days = duration.days(), "Generated travel plan");
    Ok(Json(PlanResponse {
        plan,
        days: duration.days(),
        duration_defaulted: duration.is_defaulted(),
    }))
}

#[instrument(skip_all, fields(destination = %payload.trip.destination))]
async fn export_json(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<JsonExportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let plan = PlanDocument::new(payload.plan);
    let body = state.exporter.export(&plan, &payload.trip)?;
    Ok(attachment(ExportFormat::Json, body))
}

async fn export_markdown(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MarkdownExportRequest>,
) -> impl IntoResponse {
    let plan = PlanDocument::new(payload.plan);
    attachment(ExportFormat::Markdown, state.exporter.export_markdown(&plan))
}

fn attachment(format: ExportFormat, body: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", format.file_name()),
            ),
        ],
        body,
    )
}
