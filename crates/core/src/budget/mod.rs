//! Budget module - allocation snapshots, admission control and the budget service.

mod admission;
mod budget_engine;
mod budget_model;
mod budget_service;
mod budget_traits;

pub use admission::{AdmissionController, AdmissionDecision};
pub use budget_engine::BudgetEngine;
pub use budget_model::{AcceptedExpense, AllocationSnapshot, GroupSnapshot};
pub use budget_service::BudgetService;
pub use budget_traits::BudgetServiceTrait;
