use super::analytics_model::{CategoryBreakdown, Interval, SeriesPoint};
use crate::errors::Result;

/// Trait defining the contract for analytics reads.
pub trait AnalyticsServiceTrait: Send + Sync {
    /// Full-history spend bucketed by `interval`, oldest first.
    fn get_series(&self, user_id: &str, interval: Interval) -> Result<Vec<SeriesPoint>>;

    fn get_category_breakdown(&self, user_id: &str) -> Result<CategoryBreakdown>;
}
