//! Core types for Mission Board

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a mission record
///
/// Uses ULID so ids are unique and sort by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionId(pub Ulid);

impl MissionId {
    /// Create a new MissionId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse from string representation (as found in `data-id` attributes)
    pub fn from_string(s: &str) -> Result<Self, ulid::DecodeError> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

impl Default for MissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a mission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    Active,
    Completed,
    Planned,
}

impl MissionStatus {
    /// Form/storage value
    pub fn as_str(&self) -> &'static str {
        match self {
            MissionStatus::Active => "active",
            MissionStatus::Completed => "completed",
            MissionStatus::Planned => "planned",
        }
    }

    /// Human-readable label shown on cards and in the status select
    pub fn label(&self) -> &'static str {
        match self {
            MissionStatus::Active => "Active",
            MissionStatus::Completed => "Completed",
            MissionStatus::Planned => "Planned",
        }
    }

    /// CSS class for the status badge
    pub fn class(&self) -> &'static str {
        match self {
            MissionStatus::Active => "status-active",
            MissionStatus::Completed => "status-completed",
            MissionStatus::Planned => "status-planned",
        }
    }

    pub fn all() -> &'static [MissionStatus] {
        &[
            MissionStatus::Active,
            MissionStatus::Completed,
            MissionStatus::Planned,
        ]
    }
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not one of the known values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mission status: {:?}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for MissionStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "active" => Ok(MissionStatus::Active),
            "completed" => Ok(MissionStatus::Completed),
            "planned" => Ok(MissionStatus::Planned),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A persisted mission record
///
/// `id` and `created_at` are fixed at creation; the other four fields are
/// editable through the edit dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: MissionId,
    pub name: String,
    pub destination: String,
    pub year: i32,
    pub status: MissionStatus,
    pub created_at: DateTime<Utc>,
}

impl Mission {
    /// Create a mission with a fresh id stamped with the current time
    pub fn new(
        name: impl Into<String>,
        destination: impl Into<String>,
        year: i32,
        status: MissionStatus,
    ) -> Self {
        Self {
            id: MissionId::new(),
            name: name.into(),
            destination: destination.into(),
            year,
            status,
            created_at: Utc::now(),
        }
    }
}

/// The records shown when storage holds no collection yet
pub fn default_missions() -> Vec<Mission> {
    vec![
        Mission::new("Voyager 1", "Interstellar Space", 1977, MissionStatus::Active),
        Mission::new("Apollo 11", "Moon", 1969, MissionStatus::Completed),
        Mission::new("Mars 2020", "Mars", 2020, MissionStatus::Active),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mission_id_string_roundtrip() {
        let id = MissionId::new();
        let parsed = MissionId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn mission_id_rejects_garbage() {
        assert!(MissionId::from_string("not-a-ulid").is_err());
    }

    #[test]
    fn status_parses_form_values() {
        assert_eq!("active".parse::<MissionStatus>(), Ok(MissionStatus::Active));
        assert_eq!(" planned ".parse::<MissionStatus>(), Ok(MissionStatus::Planned));
        assert!("".parse::<MissionStatus>().is_err());
        assert!("Active".parse::<MissionStatus>().is_err());
    }

    #[test]
    fn mission_serializes_camel_case() {
        let mission = Mission::new("Apollo 11", "Moon", 1969, MissionStatus::Completed);
        let json = serde_json::to_value(&mission).unwrap();
        assert_eq!(json["status"], "completed");
        assert_eq!(json["year"], 1969);
        assert!(json["createdAt"].is_string());
        assert_eq!(json["id"], mission.id.to_string());
    }

    #[test]
    fn default_missions_are_in_order() {
        let missions = default_missions();
        let summary: Vec<_> = missions
            .iter()
            .map(|m| (m.name.as_str(), m.year, m.status))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Voyager 1", 1977, MissionStatus::Active),
                ("Apollo 11", 1969, MissionStatus::Completed),
                ("Mars 2020", 2020, MissionStatus::Active),
            ]
        );
    }
}
