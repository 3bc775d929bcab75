//! Form validation shared by the create and edit flows.
//!
//! Every field is checked on every submit so the form can show all of its
//! errors at once. A draft with any error is never applied.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Mission, MissionStatus};

/// Earliest accepted launch year (Sputnik 1)
pub const YEAR_MIN: i32 = 1957;
/// Latest accepted launch year
pub const YEAR_MAX: i32 = 2100;

/// Form fields of a mission, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MissionField {
    Name,
    Destination,
    Year,
    Status,
}

impl MissionField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionField::Name => "name",
            MissionField::Destination => "destination",
            MissionField::Year => "year",
            MissionField::Status => "status",
        }
    }
}

/// Field-scoped validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<MissionField, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message for a single field, if it failed
    pub fn get(&self, field: MissionField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MissionField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: MissionField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, msg) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.as_str(), msg)?;
            first = false;
        }
        Ok(())
    }
}

/// Raw form input for a mission, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissionDraft {
    pub name: String,
    pub destination: String,
    pub year: String,
    pub status: String,
}

/// A draft that passed validation, with typed fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidMission {
    pub name: String,
    pub destination: String,
    pub year: i32,
    pub status: MissionStatus,
}

impl MissionDraft {
    pub fn new(
        name: impl Into<String>,
        destination: impl Into<String>,
        year: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            destination: destination.into(),
            year: year.into(),
            status: status.into(),
        }
    }

    /// Pre-populate the edit form from a stored record
    pub fn from_mission(mission: &Mission) -> Self {
        Self {
            name: mission.name.clone(),
            destination: mission.destination.clone(),
            year: mission.year.to_string(),
            status: mission.status.as_str().to_string(),
        }
    }

    pub fn field(&self, field: MissionField) -> &str {
        match field {
            MissionField::Name => &self.name,
            MissionField::Destination => &self.destination,
            MissionField::Year => &self.year,
            MissionField::Status => &self.status,
        }
    }

    pub fn set_field(&mut self, field: MissionField, value: impl Into<String>) {
        let value = value.into();
        match field {
            MissionField::Name => self.name = value,
            MissionField::Destination => self.destination = value,
            MissionField::Year => self.year = value,
            MissionField::Status => self.status = value,
        }
    }

    /// Check every field and return the trimmed, typed values.
    pub fn validate(&self) -> Result<ValidMission, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(MissionField::Name, "Mission name is required");
        }

        let destination = self.destination.trim();
        if destination.is_empty() {
            errors.insert(MissionField::Destination, "Destination is required");
        }

        let year = match self.year.trim().parse::<i32>() {
            Ok(year) if (YEAR_MIN..=YEAR_MAX).contains(&year) => Some(year),
            _ => {
                errors.insert(MissionField::Year, "Year must be between 1957 and 2100");
                None
            }
        };

        let status = match self.status.parse::<MissionStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                errors.insert(MissionField::Status, "Please select a mission status");
                None
            }
        };

        match (year, status) {
            (Some(year), Some(status)) if errors.is_empty() => Ok(ValidMission {
                name: name.to_string(),
                destination: destination.to_string(),
                year,
                status,
            }),
            _ => Err(errors),
        }
    }
}

/// Validate a record that came back from storage
pub(crate) fn check_stored(mission: &Mission) -> Result<(), ValidationErrors> {
    MissionDraft::from_mission(mission).validate().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_draft_is_trimmed_and_typed() {
        let valid = MissionDraft::new("  Europa Clipper ", " Europa", " 2024 ", "planned")
            .validate()
            .unwrap();
        assert_eq!(valid.name, "Europa Clipper");
        assert_eq!(valid.destination, "Europa");
        assert_eq!(valid.year, 2024);
        assert_eq!(valid.status, MissionStatus::Planned);
    }

    #[test]
    fn all_fields_are_reported_together() {
        let errors = MissionDraft::new("   ", "", "abc", "").validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(MissionField::Name), Some("Mission name is required"));
        assert_eq!(errors.get(MissionField::Destination), Some("Destination is required"));
        assert_eq!(
            errors.get(MissionField::Year),
            Some("Year must be between 1957 and 2100")
        );
        assert_eq!(
            errors.get(MissionField::Status),
            Some("Please select a mission status")
        );
    }

    #[test]
    fn year_bounds_are_inclusive() {
        for (year, ok) in [("1956", false), ("1957", true), ("2100", true), ("2101", false)] {
            let result = MissionDraft::new("a", "b", year, "active").validate();
            assert_eq!(result.is_ok(), ok, "year {}", year);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let errors = MissionDraft::new("a", "b", "2000", "aborted")
            .validate()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(MissionField::Status).is_some());
    }

    #[test]
    fn from_mission_prepopulates_fields() {
        let mission = Mission::new("Apollo 11", "Moon", 1969, MissionStatus::Completed);
        let draft = MissionDraft::from_mission(&mission);
        assert_eq!(draft.field(MissionField::Year), "1969");
        assert_eq!(draft.field(MissionField::Status), "completed");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn set_field_updates_only_that_field() {
        let mut draft = MissionDraft::new("a", "b", "2000", "active");
        draft.set_field(MissionField::Destination, "Titan");
        assert_eq!(draft, MissionDraft::new("a", "Titan", "2000", "active"));
    }
}
