mod error;
mod manager;
mod reminder;
mod shared;

pub use error::ReminderError;
pub use manager::ReminderManager;
pub use reminder::*;
pub use shared::usecase::{execute, UseCase};
