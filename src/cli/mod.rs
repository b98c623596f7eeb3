pub mod menu;
pub mod recipe;
pub mod shopping;
