mod reminder;
mod shared;

pub use reminder::Reminder;
pub use shared::entity::{Entity, ID};
