pub mod api;
pub mod config;
pub mod domain_events;
pub mod error;
pub mod events;
pub mod extract;
mod main_lib;
pub mod models;

pub use main_lib::{build_state, init_tracing, AppState};
