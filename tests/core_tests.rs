use rcampaign::core::advance::{self, Preset, TimeUnit, custom_hours};
use rcampaign::core::editor::{self, EventForm};
use rcampaign::core::log::strip_ansi;
use rcampaign::core::persistence::{self, STATE_KEY};
use rcampaign::core::session::{PendingAction, Session};
use rcampaign::db::KeyValueStore;
use rcampaign::db::memory::MemoryStore;
use rcampaign::db::pool::DbPool;
use rcampaign::db::store::CampaignStore;
use rcampaign::errors::AppError;
use rcampaign::models::clock::{from_total_hours, to_total_hours};
use rcampaign::models::{AppState, Clock, ClockParts, Event, EventId, Timeline};

fn event(id: u64, created: u64, remaining: Option<u64>) -> Event {
    Event::new(EventId(id), format!("event {id}"), String::new(), created, remaining)
}

// ---------------------------
// Clock
// ---------------------------

#[test]
fn test_clock_conversions() {
    assert_eq!(to_total_hours(&ClockParts::new(0, 0, 0, 8)), 8);
    assert_eq!(to_total_hours(&ClockParts::new(1, 1, 1, 1)), 8640 + 720 + 24 + 1);
    assert_eq!(from_total_hours(32), ClockParts::new(0, 0, 1, 8));
    assert_eq!(from_total_hours(8640), ClockParts::new(1, 0, 0, 0));
    assert_eq!(from_total_hours(8639), ClockParts::new(0, 11, 29, 23));
}

#[test]
fn test_clock_serializes_as_parts() {
    let json = serde_json::to_value(Clock::from_hours(745)).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({"years": 0, "months": 1, "days": 1, "hours": 1})
    );

    let clock: Clock =
        serde_json::from_str(r#"{"years":0,"months":0,"days":2,"hours":25}"#).expect("parse");
    assert_eq!(clock.total_hours(), 73);
    assert_eq!(clock.parts(), ClockParts::new(0, 0, 3, 1));
}

#[test]
fn test_clock_display() {
    assert_eq!(Clock::from_hours(8).to_string(), "0y, 0m, 0d, 8h");
}

// ---------------------------
// TimeAdvancer
// ---------------------------

#[test]
fn test_unit_multipliers() {
    assert_eq!(TimeUnit::Hours.hours(), 1);
    assert_eq!(TimeUnit::Days.hours(), 24);
    assert_eq!(TimeUnit::Weeks.hours(), 168);
    // flat 30-day month, same as the clock's month
    assert_eq!(TimeUnit::Months.hours(), 720);
    assert_eq!(
        Clock::ZERO.plus(TimeUnit::Months.hours()).parts(),
        ClockParts::new(0, 1, 0, 0)
    );
}

#[test]
fn test_presets() {
    assert_eq!(Preset::Short.hours(), 1);
    assert_eq!(Preset::Watch.hours(), 4);
    assert_eq!(Preset::Long.hours(), 8);
}

#[test]
fn test_custom_hours_validation() {
    assert_eq!(custom_hours(3, TimeUnit::Days).ok(), Some(72));
    assert!(matches!(custom_hours(0, TimeUnit::Hours), Err(AppError::InvalidAmount(0))));
    assert!(matches!(custom_hours(-2, TimeUnit::Weeks), Err(AppError::InvalidAmount(-2))));
}

#[test]
fn test_advance_decrements_running_countdowns_only() {
    let timeline = Timeline::from_events(vec![
        event(1, 0, Some(10)),
        event(2, 0, Some(3)),
        event(3, 0, Some(0)),
        event(4, 0, None),
    ]);

    let (clock, timeline) = advance::advance(Clock::from_hours(5), timeline, 4);

    assert_eq!(clock.total_hours(), 9);
    let remaining: Vec<Option<u64>> = timeline.iter().map(|e| e.time_remaining).collect();
    assert_eq!(remaining, vec![Some(6), Some(0), Some(0), None]);
    assert!(timeline.iter().all(|e| e.time_created == 0));
}

// ---------------------------
// EventEditor
// ---------------------------

#[test]
fn test_create_stamps_clock_and_keeps_countdown() {
    let ev = editor::create(
        EventForm::new("Found the amulet", "", Some(24)),
        Clock::from_hours(8),
        EventId(1),
    )
    .expect("create");

    assert_eq!(ev.time_created, 8);
    assert_eq!(ev.time_remaining, Some(24));
    assert_eq!(ev.description, "");
}

#[test]
fn test_create_rejects_empty_title() {
    let res = editor::create(EventForm::new("", "desc", None), Clock::ZERO, EventId(1));
    assert!(matches!(res, Err(AppError::EmptyTitle)));

    let res = editor::create(EventForm::new(" \t", "", None), Clock::ZERO, EventId(1));
    assert!(matches!(res, Err(AppError::EmptyTitle)));
}

#[test]
fn test_next_id_is_unique_and_increasing() {
    let mut timeline = Timeline::new();
    let first = editor::next_id(&timeline);
    timeline.insert(event(first.value(), 0, None));
    let second = editor::next_id(&timeline);
    assert!(second > first);

    let far_future = Timeline::from_events(vec![event(u64::MAX - 1, 0, None)]);
    assert_eq!(editor::next_id(&far_future), EventId(u64::MAX));
}

#[test]
fn test_update_rebases_countdown() {
    let timeline = Timeline::from_events(vec![event(1, 10, Some(5))]);

    let timeline = editor::update(
        EventId(1),
        EventForm::new("Renamed", "new text", Some(50)),
        Clock::from_hours(40),
        timeline,
    )
    .expect("update");

    let ev = timeline.get(EventId(1)).expect("event");
    assert_eq!(ev.title, "Renamed");
    assert_eq!(ev.description, "new text");
    assert_eq!(ev.time_remaining, Some(20));
    assert_eq!(ev.time_created, 10);
}

#[test]
fn test_update_rebases_event_created_after_clock() {
    // imported files may carry events stamped ahead of the clock
    let timeline = Timeline::from_events(vec![event(1, 50, Some(5))]);

    let timeline = editor::update(
        EventId(1),
        EventForm::new("From the future", "", Some(20)),
        Clock::from_hours(40),
        timeline,
    )
    .expect("update");

    assert_eq!(timeline.get(EventId(1)).and_then(|e| e.time_remaining), Some(30));
}

#[test]
fn test_prefilled_form_round_trips_for_event_created_after_clock() {
    let ev = event(1, 50, Some(30));
    let clock = Clock::from_hours(40);

    let form = EventForm::from_event(&ev, clock);
    assert_eq!(form.time_remaining, Some(20));
    assert_eq!(editor::rebase_remaining(20, clock, ev.time_created), 30);

    // countdown shorter than the gap still floors at zero in the form
    let ev = event(2, 50, Some(4));
    assert_eq!(EventForm::from_event(&ev, clock).time_remaining, Some(0));
}

#[test]
fn test_update_absent_countdown_clears_it() {
    let timeline = Timeline::from_events(vec![event(1, 0, Some(5))]);
    let timeline = editor::update(
        EventId(1),
        EventForm::new("event 1", "", None),
        Clock::from_hours(1),
        timeline,
    )
    .expect("update");

    assert_eq!(timeline.get(EventId(1)).and_then(|e| e.time_remaining), None);
}

#[test]
fn test_update_and_delete_unknown_id_are_noops() {
    let timeline = Timeline::from_events(vec![event(1, 0, Some(5))]);

    let updated = editor::update(
        EventId(9),
        EventForm::new("x", "", Some(1)),
        Clock::ZERO,
        timeline.clone(),
    )
    .expect("update");
    assert_eq!(updated, timeline);

    assert_eq!(editor::delete(EventId(9), timeline.clone()), timeline);
    assert!(editor::delete(EventId(1), timeline).is_empty());
}

#[test]
fn test_prefilled_form_round_trips_countdown() {
    let ev = event(1, 10, Some(7));
    let clock = Clock::from_hours(25);

    let form = EventForm::from_event(&ev, clock);
    assert_eq!(form.time_remaining, Some(22));
    assert_eq!(editor::rebase_remaining(22, clock, ev.time_created), 7);
}

// ---------------------------
// Timeline
// ---------------------------

#[test]
fn test_timeline_rejects_duplicate_ids_and_sorts() {
    let mut timeline = Timeline::new();
    assert!(timeline.insert(event(1, 30, None)));
    assert!(timeline.insert(event(2, 5, None)));
    assert!(!timeline.insert(event(1, 0, None)));
    assert!(timeline.insert(event(3, 12, None)));

    let order: Vec<u64> = timeline.sorted().iter().map(|e| e.id.value()).collect();
    assert_eq!(order, vec![2, 3, 1]);
    assert_eq!(timeline.len(), 3);
}

// ---------------------------
// PersistenceGateway
// ---------------------------

#[test]
fn test_load_missing_or_corrupt_falls_back() {
    let mut store = MemoryStore::new();
    assert!(persistence::load(&store).is_none());
    assert_eq!(persistence::load_or_initial(&store), AppState::initial());

    store.set(STATE_KEY, "not json").expect("set");
    assert!(persistence::load(&store).is_none());

    store.set(STATE_KEY, r#"{"time":{"years":0,"months":0,"days":0,"hours":1}}"#).expect("set");
    assert!(persistence::load(&store).is_none());

    store.set(STATE_KEY, r#"{"time":null,"events":[]}"#).expect("set");
    assert!(persistence::load(&store).is_none());
}

#[test]
fn test_save_then_load() {
    let mut store = MemoryStore::new();
    let state = AppState::new(
        Clock::from_hours(100),
        Timeline::from_events(vec![event(1, 3, Some(4))]),
    );

    assert!(persistence::save(&mut store, &state));
    assert_eq!(persistence::load(&store), Some(state));
}

#[test]
fn test_snapshot_is_stored_under_fixed_key() {
    let timeline = Timeline::from_events(vec![event(1, 0, None)]);
    let state = persistence::snapshot(Clock::from_hours(2), &timeline);
    assert_eq!(state.events, timeline);

    let mut store = MemoryStore::new();
    assert!(persistence::save(&mut store, &state));

    let raw = store.raw(STATE_KEY).expect("stored value");
    assert!(raw.contains("\"timeCreated\":0"));
    assert!(raw.contains("\"hours\":2"));
}

#[test]
fn test_failing_store_never_fails_caller() {
    let mut store = MemoryStore::failing();
    assert!(!persistence::save(&mut store, &AppState::initial()));
    assert!(persistence::load(&store).is_none());
    assert_eq!(persistence::clear(&mut store), AppState::initial());
}

#[test]
fn test_clear_overwrites_snapshot() {
    let mut store = MemoryStore::new();
    let state = AppState::new(Clock::from_hours(50), Timeline::from_events(vec![event(1, 0, None)]));
    persistence::save(&mut store, &state);

    let cleared = persistence::clear(&mut store);
    assert_eq!(cleared, AppState::initial());
    assert_eq!(persistence::load(&store), Some(AppState::initial()));
}

#[test]
fn test_import_validation() {
    let ok = persistence::import_bytes(
        br#"{"time":{"years":0,"months":0,"days":1,"hours":0},"events":[{"id":5,"title":"t","description":"d","timeCreated":2,"timeRemaining":3}]}"#,
    )
    .expect("valid import");
    assert_eq!(ok.time.total_hours(), 24);
    assert_eq!(ok.events.get(EventId(5)).and_then(|e| e.time_remaining), Some(3));

    assert!(matches!(
        persistence::import_bytes(br#"{"foo":1}"#),
        Err(AppError::ImportMissingFields)
    ));
    assert!(matches!(
        persistence::import_bytes(b"[1,2,3]"),
        Err(AppError::ImportMissingFields)
    ));
    assert!(matches!(
        persistence::import_bytes(b"{oops"),
        Err(AppError::ImportParse(_))
    ));
    assert!(matches!(
        persistence::import_bytes(br#"{"time":{"hours":1},"events":"nope"}"#),
        Err(AppError::ImportParse(_))
    ));
}

#[test]
fn test_export_bytes_matches_store_schema() {
    let state = AppState::new(Clock::from_hours(8), Timeline::from_events(vec![event(1, 8, Some(24))]));
    let bytes = persistence::export_bytes(&state).expect("export");
    let text = String::from_utf8(bytes.clone()).expect("utf8");

    assert!(text.contains("\"timeCreated\": 8"));
    assert!(text.contains("\"timeRemaining\": 24"));
    assert_eq!(persistence::import_bytes(&bytes).expect("import"), state);
}

#[test]
fn test_campaign_store_falls_back_to_memory() {
    let mut store = CampaignStore::open("/nonexistent_rcampaign_dir/campaign.sqlite");
    assert!(store.is_memory());
    assert!(store.pool().is_none());

    let mut session = Session::open(&mut store);
    session.advance_time(3).expect("advance");
    assert!(session.is_persisted());
    assert_eq!(persistence::load(&store).map(|s| s.time.total_hours()), Some(3));
}

#[test]
fn test_campaign_store_opens_sqlite_file() {
    let path = std::env::temp_dir().join("campaign_store_open_rcampaign.sqlite");
    std::fs::remove_file(&path).ok();

    let store = CampaignStore::open(&path.to_string_lossy());
    assert!(!store.is_memory());
    assert!(store.pool().is_some());
}

#[test]
fn test_strip_ansi() {
    assert_eq!(strip_ansi("\x1b[31mdel\x1b[0m (42)"), "del (42)");
    assert_eq!(strip_ansi("plain"), "plain");
}

#[test]
fn test_sqlite_store_round_trip() {
    let mut pool = DbPool::in_memory().expect("in-memory store");
    assert_eq!(pool.get(STATE_KEY).expect("get"), None);

    pool.set(STATE_KEY, "one").expect("set");
    pool.set(STATE_KEY, "two").expect("overwrite");
    assert_eq!(pool.get(STATE_KEY).expect("get").as_deref(), Some("two"));
}

// ---------------------------
// Session
// ---------------------------

#[test]
fn test_session_scenario_persists_each_step() {
    let mut session = Session::open(MemoryStore::new());

    session.advance_preset(Preset::Long).expect("advance");
    let id = session
        .create_event(EventForm::new("Found the amulet", "", Some(24)))
        .expect("create");
    session.advance_time(24).expect("advance");
    session.advance_custom(5, TimeUnit::Hours).expect("advance");

    assert_eq!(session.state().time.total_hours(), 37);
    assert_eq!(session.event(id).and_then(|e| e.time_remaining), Some(0));
    assert!(session.is_persisted());

    let reopened = Session::open(session.into_store());
    assert_eq!(reopened.state().time.total_hours(), 37);
    assert_eq!(reopened.event(id).map(|e| e.time_created), Some(8));
}

#[test]
fn test_session_rejects_invalid_input_without_change() {
    let mut session = Session::open(MemoryStore::new());
    session.advance_time(3).expect("advance");
    let before = session.state().clone();

    assert!(session.advance_custom(0, TimeUnit::Days).is_err());
    assert!(session.advance_custom(-1, TimeUnit::Hours).is_err());
    assert!(session.advance_time(0).is_err());
    assert!(session.create_event(EventForm::new("", "", None)).is_err());

    assert_eq!(session.state(), &before);
}

#[test]
fn test_request_delete_alone_does_not_mutate() {
    let mut session = Session::open(MemoryStore::new());
    let id = session
        .create_event(EventForm::new("Spared the goblin", "", None))
        .expect("create");

    assert!(session.request_delete(id));
    assert_eq!(session.pending(), Some(PendingAction::Delete(id)));
    assert!(session.event(id).is_some());

    session.cancel_pending();
    assert_eq!(session.confirm_delete(), None);
    assert!(session.event(id).is_some());

    session.request_delete(id);
    let removed = session.confirm_delete().expect("deleted");
    assert_eq!(removed.id, id);
    assert!(session.event(id).is_none());
    assert_eq!(session.pending(), None);
}

#[test]
fn test_request_delete_unknown_id() {
    let mut session = Session::open(MemoryStore::new());
    assert!(!session.request_delete(EventId(3)));
    assert_eq!(session.pending(), None);
}

#[test]
fn test_delete_of_event_in_edit_exits_edit_mode() {
    let mut session = Session::open(MemoryStore::new());
    let id = session
        .create_event(EventForm::new("Burned the map", "", None))
        .expect("create");

    session.start_edit(id).expect("edit");
    session.request_delete(id);
    session.confirm_delete();

    assert_eq!(session.editing(), None);
}

#[test]
fn test_switching_edit_discards_previous_form() {
    let mut session = Session::open(MemoryStore::new());
    let a = session.create_event(EventForm::new("A", "", Some(10))).expect("a");
    let b = session.create_event(EventForm::new("B", "", None)).expect("b");

    let mut form_a = session.start_edit(a).expect("edit a");
    form_a.title = "A edited".to_string();

    let form_b = session.start_edit(b).expect("edit b");
    assert_eq!(session.editing(), Some(b));
    assert_eq!(form_b.title, "B");

    // the unsaved form for A is gone: saving now applies to B
    assert!(session.save_edit(form_a).expect("save"));
    assert_eq!(session.event(a).map(|e| e.title.as_str()), Some("A"));
    assert_eq!(session.event(b).map(|e| e.title.as_str()), Some("A edited"));
    assert_eq!(session.editing(), None);
}

#[test]
fn test_save_edit_without_session_or_after_removal() {
    let mut session = Session::open(MemoryStore::new());
    assert!(!session.save_edit(EventForm::new("x", "", None)).expect("save"));

    let id = session.create_event(EventForm::new("Gone soon", "", None)).expect("create");
    session.start_edit(id).expect("edit");
    session.request_delete(id);
    session.confirm_delete();

    assert!(!session.save_edit(EventForm::new("Back", "", None)).expect("save"));
    assert!(session.state().events.is_empty());
}

#[test]
fn test_cancel_edit() {
    let mut session = Session::open(MemoryStore::new());
    let id = session.create_event(EventForm::new("Kept", "", None)).expect("create");

    session.start_edit(id).expect("edit");
    session.cancel_edit();

    assert_eq!(session.editing(), None);
    assert!(!session.save_edit(EventForm::new("Changed", "", None)).expect("save"));
    assert_eq!(session.event(id).map(|e| e.title.as_str()), Some("Kept"));
}

#[test]
fn test_clear_requires_confirmation_and_persists() {
    let mut session = Session::open(MemoryStore::new());
    session.advance_time(100).expect("advance");
    session.create_event(EventForm::new("Something", "", None)).expect("create");

    assert!(!session.confirm_clear());
    session.request_clear();
    assert_eq!(session.state().time.total_hours(), 100);

    assert!(session.confirm_clear());
    assert_eq!(session.state(), &AppState::initial());

    let reopened = Session::open(session.into_store());
    assert_eq!(reopened.state(), &AppState::initial());
}

#[test]
fn test_import_is_atomic() {
    let mut session = Session::open(MemoryStore::new());
    session.advance_time(7).expect("advance");
    let before = session.state().clone();

    assert!(session.import_bytes(br#"{"foo":1}"#).is_err());
    assert_eq!(session.state(), &before);

    let exported = session.export_bytes().expect("export");
    let mut other = Session::open(MemoryStore::new());
    other.import_bytes(&exported).expect("import");
    assert_eq!(other.state(), &before);
}

#[test]
fn test_session_degrades_to_memory_when_store_fails() {
    let mut store = MemoryStore::new();
    persistence::save(&mut store, &AppState::new(Clock::from_hours(12), Timeline::new()));
    store.set_failing(true);

    let mut session = Session::open(store);
    // unreadable store: start from zero
    assert_eq!(session.state().time.total_hours(), 0);

    session.advance_time(2).expect("advance still works");
    assert_eq!(session.state().time.total_hours(), 2);
    assert!(!session.is_persisted());
}
