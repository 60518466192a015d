//! Allocation module - the fixed 50/30/20 split of salary into budget groups.

mod allocation_model;
mod allocation_policy;

pub use allocation_model::GroupAllocation;
pub use allocation_policy::{round_for_display, AllocationPolicy};
