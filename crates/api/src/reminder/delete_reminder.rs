use crate::{error::ReminderError, shared::usecase::UseCase};
use todo_reminders_domain::ID;
use todo_reminders_infra::{DeleteResult, ReminderContext};
use tracing::info;

#[derive(Debug)]
pub struct DeleteReminderUseCase {
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

impl UseCase for DeleteReminderUseCase {
    type Response = DeleteResult;

    type Errors = UseCaseErrors;

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let res = ctx.repos.reminder_repo.delete(&self.reminder_id);
        if res.deleted_count == 0 {
            return Err(UseCaseErrors::NotFound(self.reminder_id));
        }

        info!("Deleted reminder {}", self.reminder_id);

        Ok(res)
    }
}
