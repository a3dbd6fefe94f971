use super::{clock::Clock, timeline::Timeline};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Complete persisted snapshot: clock plus timeline.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub time: Clock,
    pub events: Timeline,

    /// Unknown top-level fields from an imported or stored snapshot.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppState {
    pub fn new(time: Clock, events: Timeline) -> Self {
        Self {
            time,
            events,
            extra: Map::new(),
        }
    }

    /// `{0,0,0,0}` and an empty timeline.
    pub fn initial() -> Self {
        Self::default()
    }
}
