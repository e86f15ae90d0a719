pub mod add_reminder;
pub mod delete_reminder;
pub mod dismiss_reminder;
pub mod get_reminder;
pub mod get_task_reminders;
pub mod get_upcoming_reminders;
pub mod modify_reminder;
pub mod snooze_reminder;

pub use add_reminder::AddReminderUseCase;
pub use delete_reminder::DeleteReminderUseCase;
pub use dismiss_reminder::DismissReminderUseCase;
pub use get_reminder::GetReminderUseCase;
pub use get_task_reminders::GetTaskRemindersUseCase;
pub use get_upcoming_reminders::GetUpcomingRemindersUseCase;
pub use modify_reminder::ModifyReminderUseCase;
pub use snooze_reminder::SnoozeReminderUseCase;
