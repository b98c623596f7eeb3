pub mod config;
pub mod observability;
pub mod store;

pub use config::Config;
pub use store::{JsonFile, JsonStore};
