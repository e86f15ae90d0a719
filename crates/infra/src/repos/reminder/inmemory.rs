use super::IReminderRepo;
use chrono::{DateTime, Utc};
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use todo_reminders_domain::{Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: Mutex<Vec<Reminder>>,
    last_id: AtomicU64,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: Mutex::new(vec![]),
            last_id: AtomicU64::new(0),
        }
    }
}

impl Default for InMemoryReminderRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl IReminderRepo for InMemoryReminderRepo {
    fn next_id(&self) -> ID {
        ID::new(self.last_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn insert(&self, reminder: &Reminder) {
        insert(reminder, &self.reminders);
    }

    fn insert_new(&self, new_reminder: &mut dyn FnMut(ID) -> Reminder) -> Reminder {
        insert_with(&self.reminders, || new_reminder(self.next_id()))
    }

    fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    fn find_by_task(&self, task_id: i64) -> Vec<Reminder> {
        find_by(&self.reminders, |reminder| reminder.task_id == task_id)
    }

    fn find_upcoming(&self, now: DateTime<Utc>) -> Vec<Reminder> {
        find_by(&self.reminders, |reminder| reminder.is_upcoming(now))
    }

    fn update(&self, reminder_id: &ID, apply: &mut dyn FnMut(&mut Reminder)) -> Option<Reminder> {
        update(reminder_id, &self.reminders, apply)
    }

    fn delete(&self, reminder_id: &ID) -> DeleteResult {
        delete_by(&self.reminders, |reminder| reminder.id == *reminder_id)
    }
}
