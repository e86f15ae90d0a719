use crate::{error::ReminderError, shared::usecase::UseCase};
use todo_reminders_domain::{Reminder, ID};
use todo_reminders_infra::ReminderContext;

#[derive(Debug)]
pub struct GetReminderUseCase {
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

impl UseCase for GetReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .reminder_repo
            .find(&self.reminder_id)
            .ok_or(UseCaseErrors::NotFound(self.reminder_id))
    }
}
