//! Analytics module - time-bucketed spend series and category breakdowns.

mod aggregation_engine;
mod analytics_model;
mod analytics_service;
mod analytics_traits;

pub use aggregation_engine::AggregationEngine;
pub use analytics_model::{CategoryBreakdown, CategoryTotal, Interval, SeriesPoint};
pub use analytics_service::AnalyticsService;
pub use analytics_traits::AnalyticsServiceTrait;
