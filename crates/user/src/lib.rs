mod command;
mod query;

pub use command::{Command, CreateInput};
pub use query::{Query, UserRow};
