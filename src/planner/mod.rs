//! Plan synthesis and export
//!
//! Both halves are synchronous and hold no state between calls:
//! - [`PlanBuilder`] renders a templated itinerary from a [`TripRequest`](crate::TripRequest)
//! - [`PlanExporter`] packages a rendered plan as JSON or Markdown

pub mod budget;
pub mod builder;
pub mod duration;
pub mod exporter;
pub mod itinerary;

pub use budget::{BudgetBreakdown, BudgetCategory, BudgetLine};
pub use builder::PlanBuilder;
pub use duration::{DATE_FORMAT, DEFAULT_TRIP_DAYS, ParsedDuration};
pub use exporter::{Clock, ExportFormat, FixedClock, PlanExporter, SystemClock};
pub use itinerary::{DayPlan, Itinerary, Overview, OverviewField, Personalization, TimeSlot};
