//! Mission store: the single owner of the mission collection.
//!
//! Every mutation builds the next collection, writes the whole JSON array to
//! the backend, and only then replaces the in-memory list. A failed write or
//! a failed validation leaves the collection exactly as it was.

use crate::error::{MissionError, MissionResult};
use crate::render::MissionView;
use crate::storage::KeyValueStore;
use crate::types::{default_missions, Mission, MissionId};
use crate::validation::{check_stored, MissionDraft};

/// Storage key holding the JSON-encoded mission array
pub const MISSIONS_KEY: &str = "missions";

/// Blocking yes/no decision made before a record is deleted
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record was removed and the collection persisted
    Deleted,
    /// The user answered "no"; nothing changed
    Declined,
    /// No record carries that id; nothing changed
    NotFound,
}

/// Ordered mission collection mirrored to a [`KeyValueStore`]
pub struct MissionStore<S: KeyValueStore> {
    backend: S,
    missions: Vec<Mission>,
}

impl<S: KeyValueStore> MissionStore<S> {
    /// Read the stored collection, seeding the defaults when there is none.
    ///
    /// Anything other than a JSON array counts as "no data". Inside an
    /// array, each record that fails to parse or validate is dropped on its
    /// own and the rest are kept.
    pub fn load(backend: S) -> MissionResult<Self> {
        let stored = match backend.get(MISSIONS_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
                Ok(records) => Some(records),
                Err(e) => {
                    tracing::warn!("Stored missions are malformed, reseeding defaults: {}", e);
                    None
                }
            },
            None => None,
        };

        let missions = match stored {
            Some(records) => {
                let total = records.len();
                let kept: Vec<Mission> = records
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, record)| parse_stored(index, record))
                    .collect();
                tracing::debug!(loaded = kept.len(), dropped = total - kept.len(), "Loaded missions");
                kept
            }
            None => {
                let seeded = default_missions();
                backend.set(MISSIONS_KEY, &serde_json::to_string(&seeded)?)?;
                tracing::info!("Seeded {} default missions", seeded.len());
                seeded
            }
        };

        Ok(Self { backend, missions })
    }

    /// Wrap an existing collection without touching the backend
    pub fn from_parts(backend: S, missions: Vec<Mission>) -> Self {
        Self { backend, missions }
    }

    /// Missions in display order
    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn get(&self, id: MissionId) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// The list view for the current collection
    pub fn view(&self) -> MissionView {
        MissionView::from_missions(&self.missions)
    }

    /// Validate the draft and append a new record to the end of the list.
    pub fn create(&mut self, draft: &MissionDraft) -> MissionResult<MissionId> {
        let valid = draft.validate().map_err(MissionError::Invalid)?;

        let mut mission = Mission::new(valid.name, valid.destination, valid.year, valid.status);
        while self.get(mission.id).is_some() {
            mission.id = MissionId::new();
        }
        let id = mission.id;

        let mut next = self.missions.clone();
        next.push(mission);
        self.commit(next)?;

        tracing::debug!(%id, "Created mission");
        Ok(id)
    }

    /// Apply the draft to the record with `id`.
    ///
    /// Returns `Ok(false)` without touching storage when no record matches.
    pub fn update(&mut self, id: MissionId, draft: &MissionDraft) -> MissionResult<bool> {
        let valid = draft.validate().map_err(MissionError::Invalid)?;

        let Some(index) = self.missions.iter().position(|m| m.id == id) else {
            tracing::debug!(%id, "Update for unknown mission ignored");
            return Ok(false);
        };

        let mut next = self.missions.clone();
        let mission = &mut next[index];
        mission.name = valid.name;
        mission.destination = valid.destination;
        mission.year = valid.year;
        mission.status = valid.status;
        self.commit(next)?;

        tracing::debug!(%id, "Updated mission");
        Ok(true)
    }

    /// Remove the record with `id` after the user confirms.
    pub fn delete(&mut self, id: MissionId, confirm: &dyn Confirm) -> MissionResult<DeleteOutcome> {
        let Some(index) = self.missions.iter().position(|m| m.id == id) else {
            return Ok(DeleteOutcome::NotFound);
        };

        let message = format!(
            "Are you sure you want to delete \"{}\"?",
            self.missions[index].name
        );
        if !confirm.confirm(&message) {
            return Ok(DeleteOutcome::Declined);
        }

        let mut next = self.missions.clone();
        next.remove(index);
        self.commit(next)?;

        tracing::debug!(%id, "Deleted mission");
        Ok(DeleteOutcome::Deleted)
    }

    /// Persist `next` in full, then make it the current collection.
    fn commit(&mut self, next: Vec<Mission>) -> MissionResult<()> {
        let json = serde_json::to_string(&next)?;
        self.backend.set(MISSIONS_KEY, &json)?;
        self.missions = next;
        Ok(())
    }
}

/// Decode and validate one stored record, logging why it is dropped.
fn parse_stored(index: usize, record: serde_json::Value) -> Option<Mission> {
    let mission = match serde_json::from_value::<Mission>(record) {
        Ok(mission) => mission,
        Err(e) => {
            tracing::warn!(index, "Dropping unreadable stored mission: {}", e);
            return None;
        }
    };
    match check_stored(&mission) {
        Ok(()) => Some(mission),
        Err(errors) => {
            tracing::warn!(id = %mission.id, "Dropping invalid stored mission: {}", errors);
            None
        }
    }
}
