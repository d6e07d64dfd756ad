pub mod app;
pub mod errors;
pub mod fetch;
pub mod i18n;
pub mod input;
pub mod layout;
pub mod logging;
#[path = "runner/mod.rs"]
pub mod runner;
#[path = "ui/mod.rs"]
pub mod ui;

pub use crate::app::{Collection, Cursor, Ingredient, Move, Record, Session, Transition};
pub use crate::errors::BrowseError;
