use crate::{error::ReminderError, shared::usecase::UseCase};
use todo_reminders_domain::{Reminder, ID};
use todo_reminders_infra::ReminderContext;
use tracing::info;

#[derive(Debug)]
pub struct DismissReminderUseCase {
    pub reminder_id: ID,
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

impl UseCase for DismissReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let reminder = ctx
            .repos
            .reminder_repo
            .update(&self.reminder_id, &mut |reminder| reminder.dismiss())
            .ok_or(UseCaseErrors::NotFound(self.reminder_id))?;

        info!("Dismissed reminder {}", reminder.id);

        Ok(reminder)
    }
}
