use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Opaque event identity.
///
/// Fresh ids are seeded from the wall-clock milliseconds and bumped past any
/// id already in use, so ids are unique and increase in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl EventId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A key decision anchored to the campaign clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Total clock hours at creation; never changes afterwards.
    pub time_created: u64,
    /// Hours left on the countdown; `None` means untimed.
    #[serde(default)]
    pub time_remaining: Option<u64>,

    /// Fields this crate does not know about, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    pub fn new(
        id: EventId,
        title: String,
        description: String,
        time_created: u64,
        time_remaining: Option<u64>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            time_created,
            time_remaining,
            extra: Map::new(),
        }
    }

    pub fn is_timed(&self) -> bool {
        self.time_remaining.is_some()
    }

    pub fn is_expired(&self) -> bool {
        matches!(self.time_remaining, Some(0))
    }

    /// Countdown label used by listings.
    pub fn countdown_label(&self) -> Option<String> {
        match self.time_remaining {
            None => None,
            Some(0) => Some("Time Expired!".to_string()),
            Some(h) => Some(format!("{h} hours remaining")),
        }
    }
}
