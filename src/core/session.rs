//! Interactive state container.
//!
//! A [`Session`] owns the current campaign snapshot together with the UI
//! state the commands need: which event is being edited and which
//! destructive action is waiting for confirmation. Every applied mutation is
//! written back to the store right away.

use crate::core::advance::{self, Preset, TimeUnit};
use crate::core::editor::{self, EventForm};
use crate::core::persistence;
use crate::db::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::{AppState, Event, EventId};

/// Destructive action awaiting confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Delete(EventId),
    Clear,
}

pub struct Session<S: KeyValueStore> {
    store: S,
    state: AppState,
    editing: Option<EventId>,
    pending: Option<PendingAction>,
    persisted: bool,
}

impl<S: KeyValueStore> Session<S> {
    /// Restore the stored snapshot, or start from zero.
    pub fn open(store: S) -> Self {
        let state = persistence::load_or_initial(&store);
        Self {
            store,
            state,
            editing: None,
            pending: None,
            persisted: true,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn editing(&self) -> Option<EventId> {
        self.editing
    }

    pub fn pending(&self) -> Option<PendingAction> {
        self.pending
    }

    /// `false` once a save failed; the session then lives in memory only.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    fn commit(&mut self, state: AppState) {
        self.state = state;
        self.persisted = persistence::save(&mut self.store, &self.state);
    }

    // ---------------------------
    // Time
    // ---------------------------

    pub fn advance_time(&mut self, hours: u64) -> AppResult<()> {
        if hours == 0 {
            return Err(AppError::InvalidAmount(0));
        }
        let state = std::mem::take(&mut self.state);
        self.commit(advance::advance_state(state, hours));
        Ok(())
    }

    pub fn advance_preset(&mut self, preset: Preset) -> AppResult<()> {
        self.advance_time(preset.hours())
    }

    pub fn advance_custom(&mut self, value: i64, unit: TimeUnit) -> AppResult<()> {
        let hours = advance::custom_hours(value, unit)?;
        self.advance_time(hours)
    }

    // ---------------------------
    // Events
    // ---------------------------

    pub fn create_event(&mut self, form: EventForm) -> AppResult<EventId> {
        let id = editor::next_id(&self.state.events);
        let event = editor::create(form, self.state.time, id)?;

        let mut state = self.state.clone();
        if !state.events.insert(event) {
            return Err(AppError::Other(format!("event id {id} already in use")));
        }
        self.commit(state);
        Ok(id)
    }

    /// Enter edit mode for `id` and return the pre-filled form.
    ///
    /// Starting an edit while another one is open silently drops the other
    /// one. Unknown ids leave the session untouched and return `None`.
    pub fn start_edit(&mut self, id: EventId) -> Option<EventForm> {
        let event = self.state.events.get(id)?;
        let form = EventForm::from_event(event, self.state.time);
        self.editing = Some(id);
        Some(form)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Apply `form` to the event in edit mode and leave edit mode.
    ///
    /// Returns `Ok(false)` when nothing was in edit mode or the event no
    /// longer exists.
    pub fn save_edit(&mut self, form: EventForm) -> AppResult<bool> {
        let Some(id) = self.editing else {
            return Ok(false);
        };

        if !self.state.events.contains(id) {
            self.editing = None;
            return Ok(false);
        }

        let timeline = editor::update(id, form, self.state.time, self.state.events.clone())?;
        let mut state = self.state.clone();
        state.events = timeline;
        self.commit(state);
        self.editing = None;
        Ok(true)
    }

    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.state.events.get(id)
    }

    // ---------------------------
    // Destructive actions
    // ---------------------------

    /// Ask for deletion of `id`. Nothing changes until [`Session::confirm_delete`].
    pub fn request_delete(&mut self, id: EventId) -> bool {
        if !self.state.events.contains(id) {
            return false;
        }
        self.pending = Some(PendingAction::Delete(id));
        true
    }

    /// Returns the removed event, if a delete was pending and the event
    /// still existed.
    pub fn confirm_delete(&mut self) -> Option<Event> {
        let Some(PendingAction::Delete(id)) = self.pending else {
            return None;
        };
        self.pending = None;

        let removed = self.state.events.get(id).cloned()?;
        let mut state = self.state.clone();
        state.events = editor::delete(id, state.events);
        self.commit(state);

        if self.editing == Some(id) {
            self.editing = None;
        }
        Some(removed)
    }

    pub fn request_clear(&mut self) {
        self.pending = Some(PendingAction::Clear);
    }

    pub fn confirm_clear(&mut self) -> bool {
        if self.pending != Some(PendingAction::Clear) {
            return false;
        }
        self.pending = None;
        self.editing = None;
        self.state = persistence::clear(&mut self.store);
        self.persisted = persistence::load(&self.store).is_some_and(|s| s == self.state);
        true
    }

    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    // ---------------------------
    // Files
    // ---------------------------

    pub fn export_bytes(&self) -> AppResult<Vec<u8>> {
        persistence::export_bytes(&self.state)
    }

    /// Replace the whole state with an imported file. On error nothing
    /// changes.
    pub fn import_bytes(&mut self, bytes: &[u8]) -> AppResult<()> {
        let imported = persistence::import_bytes(bytes)?;
        self.editing = None;
        self.pending = None;
        self.commit(imported);
        Ok(())
    }
}
