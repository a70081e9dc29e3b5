use serde::{Deserialize, Serialize};

use super::today_label;
use crate::constants::TASKS_KEY;
use crate::error::McProResult;
use crate::store::{Record, next_id};
use crate::validate::require_text;

/// A workshop job with a running stopwatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub date: String,
    pub titulo: String,
    /// Elapsed seconds.
    #[serde(default)]
    pub tiempo: u64,
    #[serde(default, rename = "isRunning")]
    pub is_running: bool,
}

impl Task {
    pub fn new(titulo: &str) -> McProResult<Self> {
        Ok(Task {
            id: next_id(),
            date: today_label(),
            titulo: require_text("titulo", titulo)?,
            tiempo: 0,
            is_running: false,
        })
    }
}

impl Record for Task {
    const KEY: &'static str = TASKS_KEY;

    fn id(&self) -> i64 {
        self.id
    }
}
