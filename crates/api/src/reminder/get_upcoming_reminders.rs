use crate::shared::usecase::UseCase;
use todo_reminders_domain::Reminder;
use todo_reminders_infra::ReminderContext;

/// Finds every `Reminder` that fires strictly after the current time
/// of the context system, in insertion order
#[derive(Debug)]
pub struct GetUpcomingRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {}

impl UseCase for GetUpcomingRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_datetime();
        Ok(ctx.repos.reminder_repo.find_upcoming(now))
    }
}
