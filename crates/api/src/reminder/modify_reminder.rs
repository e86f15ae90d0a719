use crate::{error::ReminderError, shared::usecase::UseCase};
use chrono::{DateTime, Utc};
use todo_reminders_domain::{Reminder, ID};
use todo_reminders_infra::ReminderContext;
use tracing::info;

/// Overwrites the fields that are given. Giving none of them is a valid no-op update.
#[derive(Debug)]
pub struct ModifyReminderUseCase {
    pub reminder_id: ID,
    pub new_time: Option<DateTime<Utc>>,
    pub new_message: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    NotFound(ID),
}

impl From<UseCaseErrors> for ReminderError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::NotFound(id) => Self::NotFound(id),
        }
    }
}

impl UseCase for ModifyReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let new_time = self.new_time;
        let new_message = self.new_message.as_ref();

        let reminder = ctx
            .repos
            .reminder_repo
            .update(&self.reminder_id, &mut |reminder| {
                if let Some(time) = new_time {
                    reminder.reminder_time = time;
                }
                if let Some(message) = new_message {
                    reminder.message = message.clone();
                }
            })
            .ok_or(UseCaseErrors::NotFound(self.reminder_id))?;

        info!("Modified reminder {}", reminder.id);

        Ok(reminder)
    }
}
