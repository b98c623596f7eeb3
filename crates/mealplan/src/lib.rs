mod calendar;
mod schedule;
mod suggestion;

pub use calendar::*;
pub use schedule::*;
pub use suggestion::*;

pub use popote_shared::mealplan::{MenuGroup, MenuSlot};
