use crate::shared::usecase::UseCase;
use chrono::{DateTime, Utc};
use todo_reminders_domain::Reminder;
use todo_reminders_infra::ReminderContext;
use tracing::info;

#[derive(Debug)]
pub struct AddReminderUseCase {
    pub task_id: i64,
    pub reminder_time: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

impl UseCase for AddReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let reminder = ctx.repos.reminder_repo.insert_new(&mut |id| {
            Reminder::new(id, self.task_id, self.reminder_time, self.message.clone())
        });

        info!(
            "Created reminder {} for task {} at {}",
            reminder.id, reminder.task_id, reminder.reminder_time
        );

        Ok(reminder)
    }
}
