/// Decimal places used when amounts are rendered for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Remaining-budget percentage at or below which a near-limit alert fires
pub const NEAR_LIMIT_REMAINING_PCT: u32 = 10;

/// Bucket key emitted when a series has no records at all
pub const NO_DATA_BUCKET_KEY: &str = "No Data";

/// Default look-back window for expense history queries, in days
pub const DEFAULT_HISTORY_DAYS: i64 = 30;

/// Largest accepted expense amount or salary
pub const MAX_MONEY_AMOUNT: u64 = 1_000_000_000_000;

/// Decimal places accepted on user-entered amounts and salaries
pub const MAX_MONEY_SCALE: u32 = 4;
