mod aggregation;

pub use aggregation::*;

pub use popote_shared::shopping::{ShoppingItem, to_clipboard_text};
