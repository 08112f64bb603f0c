//! Time-derived post identifiers.
//!
//! Ids are milliseconds since the Unix epoch, bumped when needed so that every
//! id handed out is strictly greater than the previous one and than any id
//! the caller reports as already taken.

use std::sync::atomic::{AtomicI64, Ordering};

use time::OffsetDateTime;

use crate::domain::entities::PostId;

#[derive(Debug, Default)]
pub struct PostIdGenerator {
    last: AtomicI64,
}

impl PostIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint an id above `floor` (typically the largest id in the store).
    pub fn next_id(&self, floor: Option<PostId>) -> PostId {
        self.next_id_at(now_millis(), floor)
    }

    pub fn next_id_at(&self, now_millis: PostId, floor: Option<PostId>) -> PostId {
        let floor = floor.unwrap_or(PostId::MIN);
        let mut last = self.last.load(Ordering::SeqCst);
        loop {
            let candidate = now_millis
                .max(last.saturating_add(1))
                .max(floor.saturating_add(1));
            match self
                .last
                .compare_exchange(last, candidate, Ordering::SeqCst, Ordering::SeqCst)
            {
                Ok(_) => return candidate,
                Err(current) => last = current,
            }
        }
    }
}

fn now_millis() -> PostId {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    PostId::try_from(millis).unwrap_or(PostId::MAX)
}
