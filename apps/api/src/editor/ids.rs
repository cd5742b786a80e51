use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Issues time-based entry ids (milliseconds since the epoch). Ids from one
/// generator strictly increase even when several are requested within the
/// same millisecond.
#[derive(Debug, Default)]
pub struct EntryIdGenerator {
    last: AtomicI64,
}

impl EntryIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id that does not collide with any id in `existing`.
    pub fn fresh<'a>(&self, existing: impl IntoIterator<Item = &'a str> + Clone) -> String {
        loop {
            let candidate = self.next_millis().to_string();
            if !existing.clone().into_iter().any(|id| id == candidate) {
                return candidate;
            }
        }
    }

    fn next_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => last = actual,
            }
        }
    }
}
