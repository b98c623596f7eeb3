mod catalog;
mod filter;
mod import;
mod portion;

pub use catalog::*;
pub use filter::*;
pub use import::*;
pub use portion::*;

pub use popote_shared::recipe::{Category, DEFAULT_PERSONNES, Ingredient, Recipe, Season};
