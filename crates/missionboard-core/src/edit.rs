//! Edit dialog state machine.
//!
//! ```text
//! Closed --open(mission)--> Open { id, draft, errors }
//! Open --submit(valid)----> Closed   (update applied)
//! Open --submit(invalid)--> Open     (errors shown)
//! Open --cancel-----------> Closed
//! ```
//!
//! Only one record can be open for editing at a time; opening another record
//! replaces the current session.

use crate::error::{MissionError, MissionResult};
use crate::storage::KeyValueStore;
use crate::store::MissionStore;
use crate::types::{Mission, MissionId};
use crate::validation::{MissionDraft, MissionField, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditSession {
    #[default]
    Closed,
    Open {
        id: MissionId,
        draft: MissionDraft,
        errors: ValidationErrors,
    },
}

/// What a submit did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Update applied, dialog closed
    Applied,
    /// Validation failed, dialog stays open with errors
    Invalid,
    /// The record no longer exists, dialog closed
    Missing,
    /// Nothing was open
    Idle,
}

impl EditSession {
    /// Start editing `mission` with its current values
    pub fn open(mission: &Mission) -> Self {
        EditSession::Open {
            id: mission.id,
            draft: MissionDraft::from_mission(mission),
            errors: ValidationErrors::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Open { .. })
    }

    pub fn editing_id(&self) -> Option<MissionId> {
        match self {
            EditSession::Open { id, .. } => Some(*id),
            EditSession::Closed => None,
        }
    }

    pub fn set_field(&mut self, field: MissionField, value: impl Into<String>) {
        if let EditSession::Open { draft, .. } = self {
            draft.set_field(field, value);
        }
    }

    pub fn cancel(&mut self) {
        *self = EditSession::Closed;
    }

    /// Validate the draft and apply it to the store.
    ///
    /// Storage failures propagate and leave the dialog open.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        store: &mut MissionStore<S>,
    ) -> MissionResult<SubmitOutcome> {
        let EditSession::Open { id, draft, errors } = self else {
            return Ok(SubmitOutcome::Idle);
        };

        match store.update(*id, draft) {
            Ok(true) => {
                *self = EditSession::Closed;
                Ok(SubmitOutcome::Applied)
            }
            Ok(false) => {
                *self = EditSession::Closed;
                Ok(SubmitOutcome::Missing)
            }
            Err(MissionError::Invalid(found)) => {
                *errors = found;
                Ok(SubmitOutcome::Invalid)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::store::DeleteOutcome;

    fn store() -> MissionStore<MemoryStore> {
        MissionStore::load(MemoryStore::new()).unwrap()
    }

    #[test]
    fn open_prepopulates_from_record() {
        let store = store();
        let mission = &store.missions()[0];
        let session = EditSession::open(mission);
        let EditSession::Open { id, draft, errors } = &session else {
            panic!("expected open session");
        };
        assert_eq!(*id, mission.id);
        assert_eq!(draft.name, "Voyager 1");
        assert_eq!(draft.year, "1977");
        assert!(errors.is_empty());
    }

    #[test]
    fn valid_submit_applies_and_closes() {
        let mut store = store();
        let id = store.missions()[0].id;
        let mut session = EditSession::open(&store.missions()[0]);
        session.set_field(MissionField::Status, "completed");

        assert_eq!(session.submit(&mut store).unwrap(), SubmitOutcome::Applied);
        assert_eq!(session, EditSession::Closed);
        assert_eq!(store.get(id).unwrap().status.as_str(), "completed");
    }

    #[test]
    fn invalid_submit_stays_open_with_errors() {
        let mut store = store();
        let before = store.missions().to_vec();
        let mut session = EditSession::open(&store.missions()[0]);
        session.set_field(MissionField::Name, " ");
        session.set_field(MissionField::Year, "1800");

        assert_eq!(session.submit(&mut store).unwrap(), SubmitOutcome::Invalid);
        let EditSession::Open { errors, .. } = &session else {
            panic!("expected open session");
        };
        assert_eq!(errors.len(), 2);
        assert_eq!(store.missions(), before.as_slice());
    }

    #[test]
    fn cancel_clears_editing_id() {
        let store = store();
        let mut session = EditSession::open(&store.missions()[1]);
        assert!(session.editing_id().is_some());
        session.cancel();
        assert!(!session.is_open());
        assert_eq!(session.editing_id(), None);
    }

    #[test]
    fn submit_after_record_deleted_closes() {
        let mut store = store();
        let id = store.missions()[2].id;
        let mut session = EditSession::open(&store.missions()[2]);
        assert_eq!(store.delete(id, &|_: &str| true).unwrap(), DeleteOutcome::Deleted);

        assert_eq!(session.submit(&mut store).unwrap(), SubmitOutcome::Missing);
        assert!(!session.is_open());
    }

    #[test]
    fn closed_session_ignores_input() {
        let mut store = store();
        let mut session = EditSession::Closed;
        session.set_field(MissionField::Name, "x");
        assert_eq!(session.submit(&mut store).unwrap(), SubmitOutcome::Idle);
    }
}
