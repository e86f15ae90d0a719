use thiserror::Error;
use todo_reminders_domain::ID;

#[derive(Error, Debug, PartialEq)]
pub enum ReminderError {
    #[error("The reminder with id: {0}, was not found.")]
    NotFound(ID),
}
