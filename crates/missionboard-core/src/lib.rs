//! Mission Board Core Library
//!
//! Mission records persisted to a durable key-value store, plus the math
//! behind the decorative parallax layer.
//!
//! ## Overview
//!
//! Two independent subsystems live here:
//!
//! - **Mission records**: an ordered list of [`Mission`]s owned by a
//!   [`MissionStore`], validated on every create/update, written back to a
//!   [`KeyValueStore`] as one JSON array after every mutation.
//! - **Parallax layer**: exponential pointer smoothing, per-planet transforms,
//!   the scroll progress bar, debouncing, star-field generation and
//!   one-shot section reveal.
//!
//! Neither subsystem touches the other. The desktop shell wires both into
//! Dioxus components.
//!
//! ## Quick Start
//!
//! ```ignore
//! use missionboard_core::{MemoryStore, MissionDraft, MissionStore};
//!
//! let mut store = MissionStore::load(MemoryStore::new())?;
//! assert_eq!(store.len(), 3); // seeded defaults
//!
//! let id = store.create(&MissionDraft::new("Europa Clipper", "Europa", "2024", "planned"))?;
//! println!("{}", missionboard_core::render_html(&store.view()));
//! ```

pub mod debounce;
pub mod edit;
pub mod error;
pub mod parallax;
pub mod render;
pub mod reveal;
pub mod stars;
pub mod storage;
pub mod store;
pub mod types;
pub mod validation;

// Re-exports
pub use debounce::{DebounceTicket, Debouncer, POINTER_DEBOUNCE, RESIZE_DEBOUNCE};
pub use edit::{EditSession, SubmitOutcome};
pub use error::{MissionError, MissionResult};
pub use parallax::{
    planet_transform, pointer_target, progress_percent, AnimationMode, FrameOutput, ParallaxAnimator,
    PlanetTransform, Smoother, Vec2, Viewport, FRAME_INTERVAL,
};
pub use render::{escape_html, render_html, MissionCard, MissionView};
pub use reveal::{RevealPolicy, RevealTracker};
pub use stars::{generate_stars, star_count, Star};
pub use storage::{KeyValueStore, MemoryStore, RedbStore};
pub use store::{Confirm, DeleteOutcome, MissionStore, MISSIONS_KEY};
pub use types::*;
pub use validation::{MissionDraft, MissionField, ValidMission, ValidationErrors};
