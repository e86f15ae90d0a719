use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A `Reminder` represents a point in time at which the owner of a todo
/// task should be reminded about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: ID,
    /// The todo task this `Reminder` is associated with. This is never
    /// validated and is only meaningful to the todo system.
    pub task_id: i64,
    /// The time at which the `Reminder` should fire
    pub reminder_time: DateTime<Utc>,
    /// The message to show when the `Reminder` fires
    pub message: String,
    /// Set by `snooze` and cleared by `dismiss`
    pub snoozed: bool,
}

impl Reminder {
    pub fn new(
        id: ID,
        task_id: i64,
        reminder_time: DateTime<Utc>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id,
            task_id,
            reminder_time,
            message: message.into(),
            snoozed: false,
        }
    }

    /// Pushes the `reminder_time` `minutes` forward. Negative values move it
    /// backwards. Repeated snoozes accumulate.
    ///
    /// If the new time is out of range for `DateTime<Utc>` the time is kept as is,
    /// the `Reminder` is still marked as snoozed.
    pub fn snooze(&mut self, minutes: i64) {
        if let Some(new_time) = Duration::try_minutes(minutes)
            .and_then(|delta| self.reminder_time.checked_add_signed(delta))
        {
            self.reminder_time = new_time;
        }
        self.snoozed = true;
    }

    pub fn dismiss(&mut self) {
        self.snoozed = false;
    }

    /// Whether the `Reminder` fires strictly after `now`
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.reminder_time > now
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}
