mod command;
pub mod mealplan;
pub mod recipe;
pub mod shopping;
mod store;
pub mod text;

pub use command::*;
pub use store::*;
