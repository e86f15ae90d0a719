//! Useful functions for creating inmemory repositories

use super::repo::DeleteResult;
use std::sync::{Mutex, MutexGuard};
use todo_reminders_domain::{Entity, ID};

/// Recovers the collection if another thread panicked while holding the lock
fn lock<T>(collection: &Mutex<Vec<T>>) -> MutexGuard<'_, Vec<T>> {
    collection
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = lock(collection);
    collection.push(val.clone());
}

/// Builds the value and appends it while holding the lock, so values
/// end up in the collection in the order they were built
pub fn insert_with<T: Clone, F: FnOnce() -> T>(collection: &Mutex<Vec<T>>, create: F) -> T {
    let mut collection = lock(collection);
    let val = create();
    collection.push(val.clone());
    val
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = lock(collection);
    collection.iter().find(|item| item.id() == val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Vec<T> {
    let collection = lock(collection);
    collection.iter().filter(|item| compare(*item)).cloned().collect()
}

pub fn delete_by<T, F: Fn(&T) -> bool>(collection: &Mutex<Vec<T>>, compare: F) -> DeleteResult {
    DeleteResult {
        deleted_count: find_and_delete_by(collection, compare).len() as i64,
    }
}

pub fn find_and_delete_by<T, F: Fn(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    compare: F,
) -> Vec<T> {
    let mut collection = lock(collection);
    let (deleted_items, kept): (Vec<T>, Vec<T>) =
        collection.drain(..).partition(|item| compare(item));
    *collection = kept;

    deleted_items
}

/// Applies `apply` to the first item with the given id while holding the lock
/// and returns the updated item
pub fn update<T: Clone + Entity, U: FnOnce(&mut T)>(
    val_id: &ID,
    collection: &Mutex<Vec<T>>,
    apply: U,
) -> Option<T> {
    let mut collection = lock(collection);
    let item = collection.iter_mut().find(|item| item.id() == val_id)?;
    apply(item);
    Some(item.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: ID,
        value: i64,
    }

    impl Entity for Item {
        fn id(&self) -> &ID {
            &self.id
        }
    }

    fn item(id: u64, value: i64) -> Item {
        Item {
            id: ID::new(id),
            value,
        }
    }

    fn collection() -> Mutex<Vec<Item>> {
        let collection = Mutex::new(Vec::new());
        for (id, value) in &[(1, 10), (2, 20), (3, 30)] {
            insert(&item(*id, *value), &collection);
        }
        collection
    }

    #[test]
    fn finds_by_id() {
        let collection = collection();
        assert_eq!(find(&ID::new(2), &collection), Some(item(2, 20)));
        assert_eq!(find(&ID::new(4), &collection), None);
    }

    #[test]
    fn inserts_built_value_last() {
        let collection = collection();
        let built = insert_with(&collection, || item(4, 40));
        assert_eq!(built, item(4, 40));
        assert_eq!(find_by(&collection, |_| true).last(), Some(&item(4, 40)));
    }

    #[test]
    fn finds_by_predicate_in_order() {
        let collection = collection();
        let found = find_by(&collection, |i| i.value >= 20);
        assert_eq!(found, vec![item(2, 20), item(3, 30)]);
    }

    #[test]
    fn deletes_all_matching_and_keeps_order() {
        let collection = collection();
        let res = delete_by(&collection, |i| i.value != 20);
        assert_eq!(res.deleted_count, 2);
        assert_eq!(find_by(&collection, |_| true), vec![item(2, 20)]);
    }

    #[test]
    fn updates_in_place() {
        let collection = collection();
        let updated = update(&ID::new(3), &collection, |i| i.value += 1);
        assert_eq!(updated, Some(item(3, 31)));
        assert_eq!(find(&ID::new(3), &collection), Some(item(3, 31)));
        assert_eq!(update(&ID::new(9), &collection, |i| i.value += 1), None);
    }
}
