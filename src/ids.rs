use chrono::Utc;

use crate::error::AppResult;
use crate::storage::{keys, Storage};

/// Time-based ids that never repeat, even when two records are created in
/// the same millisecond. The last issued id is persisted with the data.
#[derive(Clone)]
pub struct IdGenerator {
    storage: Storage,
}

impl IdGenerator {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn next_id(&self) -> AppResult<i64> {
        self.next_id_at(Utc::now().timestamp_millis())
    }

    fn next_id_at(&self, now_millis: i64) -> AppResult<i64> {
        let last: i64 = self.storage.get_or_default(keys::LAST_ID)?;
        let id = now_millis.max(last + 1);
        self.storage.set(keys::LAST_ID, &id)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_the_clock() {
        let ids = IdGenerator::new(Storage::in_memory());
        assert_eq!(ids.next_id_at(1_000).unwrap(), 1_000);
        assert_eq!(ids.next_id_at(2_000).unwrap(), 2_000);
    }

    #[test]
    fn same_millisecond_does_not_collide() {
        let ids = IdGenerator::new(Storage::in_memory());
        let a = ids.next_id_at(5_000).unwrap();
        let b = ids.next_id_at(5_000).unwrap();
        assert_eq!(b, a + 1);
    }

    #[test]
    fn clock_going_backwards_still_increases() {
        let ids = IdGenerator::new(Storage::in_memory());
        ids.next_id_at(9_000).unwrap();
        assert_eq!(ids.next_id_at(100).unwrap(), 9_001);
    }

    #[test]
    fn real_clock_ids_are_strictly_increasing() {
        let ids = IdGenerator::new(Storage::in_memory());
        let a = ids.next_id().unwrap();
        let b = ids.next_id().unwrap();
        assert!(b > a);
    }
}
