mod telemetry;

use chrono::{TimeZone, Utc};
use telemetry::{get_subscriber, init_subscriber};
use todo_reminders_api::ReminderManager;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("todo_reminders".into(), "info".into());
    init_subscriber(subscriber)?;

    let manager = ReminderManager::new();
    let reminder_time = Utc
        .with_ymd_and_hms(2025, 9, 17, 12, 0, 0)
        .single()
        .ok_or_else(|| anyhow::anyhow!("Invalid reminder time"))?;
    let reminder = manager.add_reminder(1, reminder_time, "Don't forget to attend the meeting!");

    info!(
        "Reminder set for task {}: {} at {}",
        reminder.task_id, reminder.message, reminder.reminder_time
    );
    println!("{}", serde_json::to_string_pretty(&reminder)?);

    Ok(())
}
