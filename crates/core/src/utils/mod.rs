pub mod time_utils;
pub mod money_utils;
