//! Record identity: millisecond timestamps, bumped so they never repeat.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use log::warn;

/// Ids at or above this are treated as corrupt and not tracked.
const ID_CEILING: i64 = i64::MAX - 1_000_000_000;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// A new record id: the current Unix time in milliseconds, or one past the
/// last id handed out (or seen on load) if that is larger.
pub fn next_id() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last.saturating_add(1));
        match LAST_ID.compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

/// Make sure later ids are greater than `id`.
///
/// Ids too close to `i64::MAX` are skipped: following them would leave no
/// room for new records.
pub(super) fn observe(id: i64) {
    if id >= ID_CEILING {
        warn!("event=id_observe status=ignored id={id}");
        return;
    }
    LAST_ID.fetch_max(id, Ordering::Relaxed);
}
