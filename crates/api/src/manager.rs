use crate::reminder::*;
use crate::shared::usecase::execute;
use chrono::{DateTime, Utc};
use todo_reminders_domain::{Reminder, ID};
use todo_reminders_infra::{setup_context, ReminderContext};

/// Owns a collection of `Reminder`s for todo tasks.
///
/// Every operation runs the matching use case. Unknown ids never produce an
/// error here: lookups return `None` and updates or deletes become no-ops.
/// Use the use cases directly to tell "not found" apart from success.
///
/// Returned `Reminder`s are snapshots. Changing one does not change the
/// stored `Reminder`; go through `modify_reminder`, `snooze_reminder` or
/// `dismiss_reminder` for that.
pub struct ReminderManager {
    ctx: ReminderContext,
}

impl ReminderManager {
    /// Creates an empty manager that reads the current time from the system clock
    pub fn new() -> Self {
        Self::with_context(setup_context())
    }

    pub fn with_context(ctx: ReminderContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ReminderContext {
        &self.ctx
    }

    pub fn add_reminder(
        &self,
        task_id: i64,
        reminder_time: DateTime<Utc>,
        message: impl Into<String>,
    ) -> Reminder {
        let usecase = AddReminderUseCase {
            task_id,
            reminder_time,
            message: message.into(),
        };

        match execute(usecase, &self.ctx) {
            Ok(reminder) => reminder,
            Err(e) => match e {},
        }
    }

    pub fn modify_reminder(
        &self,
        reminder_id: ID,
        new_time: Option<DateTime<Utc>>,
        new_message: Option<String>,
    ) {
        let usecase = ModifyReminderUseCase {
            reminder_id,
            new_time,
            new_message,
        };

        // Missing reminder is a no-op
        let _ = execute(usecase, &self.ctx);
    }

    pub fn delete_reminder(&self, reminder_id: ID) {
        let usecase = DeleteReminderUseCase { reminder_id };

        // Missing reminder is a no-op
        let _ = execute(usecase, &self.ctx);
    }

    pub fn get_reminder(&self, reminder_id: ID) -> Option<Reminder> {
        let usecase = GetReminderUseCase { reminder_id };

        execute(usecase, &self.ctx).ok()
    }

    /// Every `Reminder` that fires strictly after now, in the order they were added
    pub fn get_upcoming_reminders(&self) -> Vec<Reminder> {
        let usecase = GetUpcomingRemindersUseCase {};

        match execute(usecase, &self.ctx) {
            Ok(reminders) => reminders,
            Err(e) => match e {},
        }
    }

    pub fn get_task_reminders(&self, task_id: i64) -> Vec<Reminder> {
        let usecase = GetTaskRemindersUseCase { task_id };

        match execute(usecase, &self.ctx) {
            Ok(reminders) => reminders,
            Err(e) => match e {},
        }
    }

    /// Snoozes for `minutes`, or for `Config::default_snooze_minutes` when not given
    pub fn snooze_reminder(&self, reminder_id: ID, minutes: Option<i64>) -> Option<Reminder> {
        let usecase = SnoozeReminderUseCase {
            reminder_id,
            minutes,
        };

        execute(usecase, &self.ctx).ok()
    }

    pub fn dismiss_reminder(&self, reminder_id: ID) -> Option<Reminder> {
        let usecase = DismissReminderUseCase { reminder_id };

        execute(usecase, &self.ctx).ok()
    }
}

impl Default for ReminderManager {
    fn default() -> Self {
        Self::new()
    }
}
