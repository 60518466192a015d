//! Users module - salary records and salary cycles.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{parse_salary, NewUser, User};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
