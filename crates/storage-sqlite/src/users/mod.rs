pub(crate) mod model;
mod repository;

pub use model::{NewUserDB, UserDB};
pub use repository::UserRepository;
