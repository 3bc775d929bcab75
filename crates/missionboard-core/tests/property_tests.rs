//! Property-based tests for MissionStore operations
//!
//! Uses proptest to verify invariants of the mission collection.

use proptest::prelude::*;
use missionboard_core::{
    planet_transform, progress_percent, DeleteOutcome, MemoryStore, MissionDraft,
    MissionError, MissionStore, Vec2,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate non-blank field text
fn field_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9<>&\"' ]{0,40}[a-zA-Z0-9]")
        .expect("valid regex")
}

fn status_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("active".to_string()),
        Just("completed".to_string()),
        Just("planned".to_string()),
    ]
}

/// Generate a draft that passes validation
fn valid_draft_strategy() -> impl Strategy<Value = MissionDraft> {
    (field_strategy(), field_strategy(), 1957..=2100i32, status_strategy()).prop_map(
        |(name, destination, year, status)| {
            MissionDraft::new(name, destination, year.to_string(), status)
        },
    )
}

/// Generate a draft with at least one broken field
fn invalid_draft_strategy() -> impl Strategy<Value = MissionDraft> {
    (valid_draft_strategy(), 0..4usize, prop::bool::ANY).prop_map(|(mut draft, field, blank)| {
        match field {
            0 => draft.name = "   ".to_string(),
            1 => draft.destination = String::new(),
            2 => draft.year = if blank { "soon".to_string() } else { "1956".to_string() },
            _ => draft.status = if blank { String::new() } else { "scrubbed".to_string() },
        }
        draft
    })
}

/// Operations that can be performed on a MissionStore
#[derive(Debug, Clone)]
enum StoreOp {
    Create(MissionDraft),
    Update(usize, MissionDraft),
    Delete(usize),
}

fn store_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<StoreOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => valid_draft_strategy().prop_map(StoreOp::Create),
            1 => (0..10usize, valid_draft_strategy()).prop_map(|(i, d)| StoreOp::Update(i, d)),
            1 => (0..10usize).prop_map(StoreOp::Delete),
        ],
        0..max_ops,
    )
}

fn yes(_: &str) -> bool {
    true
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Valid creates append exactly one record with a fresh id
    #[test]
    fn create_appends_exactly_one(drafts in prop::collection::vec(valid_draft_strategy(), 1..20)) {
        let mut store = MissionStore::load(MemoryStore::new()).unwrap();

        for (i, draft) in drafts.iter().enumerate() {
            let id = store.create(draft).unwrap();
            prop_assert_eq!(store.len(), 3 + i + 1);
            prop_assert_eq!(store.missions().last().map(|m| m.id), Some(id));
            prop_assert_eq!(store.missions().iter().filter(|m| m.id == id).count(), 1);
        }
    }

    /// Invalid drafts never change the collection
    #[test]
    fn invalid_drafts_are_no_ops(draft in invalid_draft_strategy()) {
        let mut store = MissionStore::load(MemoryStore::new()).unwrap();
        let before = store.missions().to_vec();
        let target = before[0].id;

        match store.create(&draft) {
            Err(MissionError::Invalid(errors)) => prop_assert!(!errors.is_empty()),
            other => prop_assert!(false, "create accepted invalid draft: {:?}", other),
        }
        match store.update(target, &draft) {
            Err(MissionError::Invalid(errors)) => {
                for (_, msg) in errors.iter() {
                    prop_assert!(!msg.is_empty());
                }
            }
            other => prop_assert!(false, "update accepted invalid draft: {:?}", other),
        }
        prop_assert_eq!(store.missions(), before.as_slice());
    }

    /// Create followed by delete restores the previous collection
    #[test]
    fn create_then_delete_restores(draft in valid_draft_strategy()) {
        let mut store = MissionStore::load(MemoryStore::new()).unwrap();
        let before = store.missions().to_vec();

        let id = store.create(&draft).unwrap();
        prop_assert_eq!(store.delete(id, &yes).unwrap(), DeleteOutcome::Deleted);
        prop_assert_eq!(store.missions(), before.as_slice());
    }

    /// Reloading from the backend always matches the in-memory state
    #[test]
    fn reload_matches_memory(ops in store_ops_strategy(30)) {
        let backend = MemoryStore::new();
        let mut store = MissionStore::load(backend.clone()).unwrap();

        for op in ops {
            match op {
                StoreOp::Create(draft) => {
                    store.create(&draft).unwrap();
                }
                StoreOp::Update(i, draft) => {
                    if let Some(id) = store.missions().get(i).map(|m| m.id) {
                        prop_assert!(store.update(id, &draft).unwrap());
                    }
                }
                StoreOp::Delete(i) => {
                    if let Some(id) = store.missions().get(i).map(|m| m.id) {
                        let len = store.len();
                        store.delete(id, &yes).unwrap();
                        prop_assert_eq!(store.len(), len - 1);
                        prop_assert!(store.get(id).is_none());
                    }
                }
            }
        }

        let reloaded = MissionStore::load(backend).unwrap();
        prop_assert_eq!(reloaded.missions(), store.missions());
    }

    /// Progress never leaves [0, 100]
    #[test]
    fn progress_is_bounded(scroll in 0.0..1e6f64, doc in 0.0..1e6f64, vp in 1.0..1e5f64) {
        let p = progress_percent(scroll, doc, vp);
        prop_assert!((0.0..=100.0).contains(&p));
    }

    /// With no scroll and a centered pointer, only the distance term remains
    #[test]
    fn rest_transform_is_distance_only(index in 0..8usize, center in -2000.0..4000.0f64) {
        let t = planet_transform(index, Vec2::ZERO, 0.0, center, 1000.0);
        prop_assert_eq!(t.rotate_deg, 0.0);
        prop_assert_eq!(t.translate_x, 0.0);
        prop_assert!((t.translate_y - (center - 500.0) / 1000.0 * 30.0).abs() < 1e-9);
    }
}
