mod inmemory;

use chrono::{DateTime, Utc};
pub use inmemory::InMemoryReminderRepo;
use todo_reminders_domain::{Reminder, ID};

use crate::repos::shared::repo::DeleteResult;

pub trait IReminderRepo: Send + Sync {
    /// Allocates the next `Reminder` id. Ids are never handed out twice,
    /// also not after the `Reminder` holding it was deleted
    fn next_id(&self) -> ID;
    fn insert(&self, reminder: &Reminder);
    /// Allocates the next id and stores the `Reminder` built from it in one
    /// step, so stored order always follows id order
    fn insert_new(&self, new_reminder: &mut dyn FnMut(ID) -> Reminder) -> Reminder;
    fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    fn find_by_task(&self, task_id: i64) -> Vec<Reminder>;
    /// All `Reminder`s firing strictly after `now`
    fn find_upcoming(&self, now: DateTime<Utc>) -> Vec<Reminder>;
    /// Runs `update` on the stored `Reminder` as a single atomic step
    fn update(&self, reminder_id: &ID, update: &mut dyn FnMut(&mut Reminder)) -> Option<Reminder>;
    fn delete(&self, reminder_id: &ID) -> DeleteResult;
}
