use crate::shared::usecase::UseCase;
use todo_reminders_domain::Reminder;
use todo_reminders_infra::ReminderContext;

#[derive(Debug)]
pub struct GetTaskRemindersUseCase {
    pub task_id: i64,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

impl UseCase for GetTaskRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        Ok(ctx.repos.reminder_repo.find_by_task(self.task_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use todo_reminders_infra::setup_context;

    #[test]
    fn gets_reminders_of_one_task() {
        let ctx = setup_context();
        let repo = &ctx.repos.reminder_repo;
        let reminders = [(1, "Buy milk"), (2, "Water plants"), (1, "Buy bread")]
            .iter()
            .map(|(task_id, message)| {
                let reminder = Reminder::new(repo.next_id(), *task_id, Utc::now(), *message);
                repo.insert(&reminder);
                reminder
            })
            .collect::<Vec<_>>();

        let mut usecase = GetTaskRemindersUseCase { task_id: 1 };
        let res = usecase.execute(&ctx).unwrap();
        assert_eq!(res, vec![reminders[0].clone(), reminders[2].clone()]);

        let mut usecase = GetTaskRemindersUseCase { task_id: 3 };
        assert!(usecase.execute(&ctx).unwrap().is_empty());
    }
}
