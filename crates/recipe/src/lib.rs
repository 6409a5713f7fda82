mod command;
mod difficulty;
pub mod favorite;
mod query;
mod ranking;
mod stat;

pub use command::{Command, CreateInput};
pub use difficulty::Difficulty;
pub use query::*;
pub use ranking::rank;
pub use recipebook_shared::recipe::Category;
pub use stat::{FavoriteRecipe, FavoriteStats, StatEntry};
