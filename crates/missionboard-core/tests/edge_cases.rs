//! End-to-end behavior of the mission store on a real redb database.

use missionboard_core::{
    render_html, DeleteOutcome, EditSession, KeyValueStore, MissionDraft, MissionField,
    MissionStatus, MissionStore, MissionView, RedbStore, SubmitOutcome, MISSIONS_KEY,
};
use tempfile::TempDir;

fn open(dir: &TempDir) -> RedbStore {
    RedbStore::open(dir.path().join("missionboard.redb")).unwrap()
}

fn yes(_: &str) -> bool {
    true
}

#[test]
fn empty_storage_yields_three_defaults() {
    let dir = TempDir::new().unwrap();
    let store = MissionStore::load(open(&dir)).unwrap();

    let summary: Vec<_> = store
        .missions()
        .iter()
        .map(|m| (m.name.clone(), m.year, m.status))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Voyager 1".to_string(), 1977, MissionStatus::Active),
            ("Apollo 11".to_string(), 1969, MissionStatus::Completed),
            ("Mars 2020".to_string(), 2020, MissionStatus::Active),
        ]
    );
}

#[test]
fn state_survives_reopening_the_database() {
    let dir = TempDir::new().unwrap();
    let expected = {
        let mut store = MissionStore::load(open(&dir)).unwrap();
        let id = store
            .create(&MissionDraft::new("Europa Clipper", "Europa", "2024", "planned"))
            .unwrap();
        let mut session = EditSession::open(store.get(id).unwrap());
        session.set_field(MissionField::Status, "active");
        assert_eq!(session.submit(&mut store).unwrap(), SubmitOutcome::Applied);
        let first = store.missions()[0].id;
        assert_eq!(store.delete(first, &yes).unwrap(), DeleteOutcome::Deleted);
        store.missions().to_vec()
    };

    let reopened = MissionStore::load(open(&dir)).unwrap();
    assert_eq!(reopened.missions(), expected.as_slice());
    assert_eq!(reopened.missions().last().unwrap().status, MissionStatus::Active);
}

#[test]
fn deleting_everything_shows_placeholder_and_persists_empty_list() {
    let dir = TempDir::new().unwrap();
    let backend = open(&dir);
    let mut store = MissionStore::load(backend.clone()).unwrap();
    while let Some(id) = store.missions().first().map(|m| m.id) {
        store.delete(id, &yes).unwrap();
    }

    assert!(matches!(store.view(), MissionView::Empty { .. }));
    assert_eq!(backend.get(MISSIONS_KEY).unwrap().as_deref(), Some("[]"));

    // An empty stored list is data, not absence: no reseed.
    let reloaded = MissionStore::load(backend).unwrap();
    assert!(reloaded.is_empty());
}

#[test]
fn garbage_in_storage_is_replaced_by_defaults() {
    let dir = TempDir::new().unwrap();
    let backend = open(&dir);
    backend.set(MISSIONS_KEY, "{\"id\": 5}").unwrap();

    let store = MissionStore::load(backend.clone()).unwrap();
    assert_eq!(store.len(), 3);
    let stored = backend.get(MISSIONS_KEY).unwrap().unwrap();
    assert!(stored.contains("Voyager 1"));
}

#[test]
fn script_in_mission_name_is_rendered_inert() {
    let mut store = MissionStore::load(missionboard_core::MemoryStore::new()).unwrap();
    store
        .create(&MissionDraft::new(
            "<script>alert('x')</script>",
            "Moon & Back",
            "2030",
            "planned",
        ))
        .unwrap();

    let html = render_html(&store.view());
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    assert!(html.contains("Moon &amp; Back"));
    assert_eq!(html, render_html(&store.view()));
}
