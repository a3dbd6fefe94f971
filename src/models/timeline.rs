use super::event::{Event, EventId};
use serde::{Deserialize, Deserializer, Serialize};

/// Set of events keyed by id.
///
/// Storage order is insertion order; listings go through [`Timeline::sorted`].
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    events: Vec<Event>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a timeline, keeping only the first event for each id.
    pub fn from_events(events: Vec<Event>) -> Self {
        let mut timeline = Self::new();
        for ev in events {
            timeline.insert(ev);
        }
        timeline
    }

    /// Add an event. Returns `false` (and leaves the timeline untouched) if the
    /// id is already taken.
    pub fn insert(&mut self, event: Event) -> bool {
        if self.contains(event.id) {
            return false;
        }
        self.events.push(event);
        true
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.events.iter().any(|e| e.id == id)
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EventId) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == id)
    }

    pub fn remove(&mut self, id: EventId) -> Option<Event> {
        let idx = self.events.iter().position(|e| e.id == id)?;
        Some(self.events.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Event> {
        self.events.iter_mut()
    }

    pub fn ids(&self) -> Vec<EventId> {
        self.events.iter().map(|e| e.id).collect()
    }

    pub fn max_id(&self) -> Option<EventId> {
        self.events.iter().map(|e| e.id).max()
    }

    /// Events by ascending `time_created`; ties keep insertion order.
    pub fn sorted(&self) -> Vec<&Event> {
        let mut out: Vec<&Event> = self.events.iter().collect();
        out.sort_by_key(|e| e.time_created);
        out
    }

    /// Number of events with a running (non-zero) countdown.
    pub fn active_countdowns(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.time_remaining, Some(h) if h > 0))
            .count()
    }

    pub fn expired(&self) -> usize {
        self.events.iter().filter(|e| e.is_expired()).count()
    }
}

impl<'de> Deserialize<'de> for Timeline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let events = Vec::<Event>::deserialize(deserializer)?;
        Ok(Timeline::from_events(events))
    }
}
