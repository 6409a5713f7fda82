mod add;
mod list;
mod remove;
mod stat;

use std::ops::Deref;

use recipebook_shared::State;
use serde::Serialize;

#[derive(Clone)]
pub struct Command(pub State);

impl Deref for Command {
    type Target = State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Added {
    /// `false` when the recipe was already a favorite.
    pub created: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Removed {
    /// `false` when the recipe was not a favorite.
    pub removed: bool,
}
