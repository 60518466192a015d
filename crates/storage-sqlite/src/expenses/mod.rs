mod model;
mod repository;

pub use model::{ExpenseDB, NewExpenseDB};
pub use repository::ExpenseRepository;
