use chrono::{DateTime, Utc};
use std::sync::Arc;
use todo_reminders_api::ReminderManager;
use todo_reminders_infra::{setup_context, ISys};

pub struct StaticTimeSys {
    pub now: DateTime<Utc>,
}

impl ISys for StaticTimeSys {
    fn get_datetime(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Empty manager reading the real system time
pub fn spawn_manager() -> ReminderManager {
    ReminderManager::new()
}

/// Empty manager for which the current time is always `now`
pub fn spawn_manager_at(now: DateTime<Utc>) -> ReminderManager {
    let mut ctx = setup_context();
    ctx.sys = Arc::new(StaticTimeSys { now });
    ReminderManager::with_context(ctx)
}
