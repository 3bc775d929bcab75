//! Shared state for the desktop shell.
//!
//! The mission store and the launch configuration are provided through
//! Dioxus context; components reach them with [`use_mission_store`] and
//! [`use_app_config`].

use std::path::{Path, PathBuf};

use dioxus::prelude::*;
use missionboard_core::{
    default_missions, AnimationMode, Confirm, KeyValueStore, MemoryStore, MissionStore,
    RedbStore,
};

/// Database file inside the data directory
pub const DB_FILE: &str = "missionboard.redb";

/// Settings decided at launch from the command line
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub mode: AnimationMode,
}

/// The store type held in context: the backend is chosen at startup.
pub type SharedStore = MissionStore<Box<dyn KeyValueStore>>;

/// Open the mission store for `data_dir`.
///
/// Storage faults never stop the window from opening: they are logged and
/// the page falls back to an in-memory store seeded with the defaults.
pub fn open_store(data_dir: &Path) -> SharedStore {
    let db_path = data_dir.join(DB_FILE);
    let backend: Box<dyn KeyValueStore> = match RedbStore::open(&db_path) {
        Ok(db) => Box::new(db),
        Err(e) => {
            tracing::error!("Failed to open {:?}, missions will not persist: {}", db_path, e);
            Box::new(MemoryStore::new())
        }
    };

    match MissionStore::load(backend) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to load missions: {}", e);
            MissionStore::from_parts(Box::new(MemoryStore::new()), default_missions())
        }
    }
}

/// Blocking yes/no prompt using the native message dialog
pub struct DialogConfirm;

impl Confirm for DialogConfirm {
    fn confirm(&self, message: &str) -> bool {
        let answer = rfd::MessageDialog::new()
            .set_title("Delete mission")
            .set_description(message)
            .set_buttons(rfd::MessageButtons::YesNo)
            .set_level(rfd::MessageLevel::Warning)
            .show();
        matches!(answer, rfd::MessageDialogResult::Yes)
    }
}

/// Hook to access the mission store from context.
pub fn use_mission_store() -> Signal<SharedStore> {
    use_context::<Signal<SharedStore>>()
}

/// Hook to access the launch configuration.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}
