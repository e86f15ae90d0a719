use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub trait Entity {
    fn id(&self) -> &ID;
}

/// Integer identifier handed out by a `ReminderManager`.
/// Serialized as a plain number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ID(u64);

impl ID {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl From<u64> for ID {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
