pub mod core;
pub mod settings;
pub mod types;

pub use core::{Cursor, Session};
pub use types::{Collection, Ingredient, Move, Record, Transition};
