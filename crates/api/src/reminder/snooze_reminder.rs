use crate::{error::ReminderError, shared::usecase::UseCase};
use todo_reminders_domain::{Reminder, ID};
use todo_reminders_infra::ReminderContext;
use tracing::info;

/// Snoozes a stored `Reminder`. Without `minutes` the
/// configured default snooze length is used.
#[derive(Debug)]
pub struct SnoozeReminderUseCase {
    pub reminder_id: ID,
    pub minutes: Option<i64>,
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

impl UseCase for SnoozeReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let minutes = self
            .minutes
            .unwrap_or(ctx.config.default_snooze_minutes);

        let reminder = ctx
            .repos
            .reminder_repo
            .update(&self.reminder_id, &mut |reminder| reminder.snooze(minutes))
            .ok_or(UseCaseErrors::NotFound(self.reminder_id))?;

        info!(
            "Snoozed reminder {} for {} minutes until {}",
            reminder.id, minutes, reminder.reminder_time
        );

        Ok(reminder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use todo_reminders_infra::setup_context;

    fn insert_meeting(ctx: &ReminderContext) -> Reminder {
        let repo = &ctx.repos.reminder_repo;
        let time = Utc.with_ymd_and_hms(2025, 9, 17, 12, 0, 0).unwrap();
        let reminder = Reminder::new(repo.next_id(), 1, time, "Meeting");
        repo.insert(&reminder);
        reminder
    }

    #[test]
    fn snoozes_stored_reminder() {
        let ctx = setup_context();
        let reminder = insert_meeting(&ctx);

        let mut usecase = SnoozeReminderUseCase {
            reminder_id: reminder.id,
            minutes: Some(15),
        };
        let snoozed = usecase.execute(&ctx).unwrap();
        assert_eq!(
            snoozed.reminder_time,
            Utc.with_ymd_and_hms(2025, 9, 17, 12, 15, 0).unwrap()
        );
        assert!(snoozed.snoozed);
        assert_eq!(ctx.repos.reminder_repo.find(&reminder.id), Some(snoozed));
    }

    #[test]
    fn snoozes_for_configured_default() {
        let mut ctx = setup_context();
        ctx.config.default_snooze_minutes = 30;
        let reminder = insert_meeting(&ctx);

        let mut usecase = SnoozeReminderUseCase {
            reminder_id: reminder.id,
            minutes: None,
        };
        let snoozed = usecase.execute(&ctx).unwrap();
        assert_eq!(
            snoozed.reminder_time,
            Utc.with_ymd_and_hms(2025, 9, 17, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn unknown_reminder_is_not_found() {
        let ctx = setup_context();
        let mut usecase = SnoozeReminderUseCase {
            reminder_id: ID::new(3),
            minutes: Some(5),
        };
        assert_eq!(usecase.execute(&ctx), Err(UseCaseErrors::NotFound(ID::new(3))));
    }
}
