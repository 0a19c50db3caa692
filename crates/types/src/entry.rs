//! Clinical entry model.
//!
//! An entry is one clinical record attached to a patient: a hospital stay,
//! an occupational-health visit, or a health check. On the wire, entries
//! form a tagged union discriminated by the `type` field; here each kind is
//! its own struct and the union is a sum type, so a record can only ever
//! carry the fields belonging to its kind.
//!
//! [`Entry`] is the stored shape (identifier assigned by the record
//! service); [`NewEntry`] is the pre-submission shape, which carries every
//! field of its kind except the identifier.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Errors that can occur when converting a raw integer into a
/// [`HealthCheckRating`].
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    /// The value was outside the 0–3 rating scale.
    #[error("health check rating must be an integer from 0 to 3, got {0}")]
    OutOfRange(u8),
}

/// Outcome of a health check, on a four-point scale.
///
/// Serialised as the bare integer (`0`–`3`); anything outside the scale is
/// rejected at the wire boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum HealthCheckRating {
    /// No concerns raised.
    Healthy = 0,
    /// Minor concerns; self-care advised.
    LowRisk = 1,
    /// Concerns warranting follow-up.
    HighRisk = 2,
    /// Immediate intervention required.
    CriticalRisk = 3,
}

impl HealthCheckRating {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            HealthCheckRating::Healthy => "healthy",
            HealthCheckRating::LowRisk => "low risk",
            HealthCheckRating::HighRisk => "high risk",
            HealthCheckRating::CriticalRisk => "critical risk",
        }
    }
}

impl From<HealthCheckRating> for u8 {
    fn from(rating: HealthCheckRating) -> Self {
        rating as u8
    }
}

impl TryFrom<u8> for HealthCheckRating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(HealthCheckRating::Healthy),
            1 => Ok(HealthCheckRating::LowRisk),
            2 => Ok(HealthCheckRating::HighRisk),
            3 => Ok(HealthCheckRating::CriticalRisk),
            other => Err(RatingError::OutOfRange(other)),
        }
    }
}

impl fmt::Display for HealthCheckRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Hospital discharge details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discharge {
    /// Date the patient was discharged.
    pub date: NaiveDate,
    /// Criteria under which discharge was approved.
    pub criteria: String,
}

/// Sick leave granted as part of an occupational-health visit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SickLeave {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A hospital stay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub specialist: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnosis_codes: Vec<String>,
    pub discharge: Discharge,
}

/// An occupational-health visit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupationalHealthEntry {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub specialist: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnosis_codes: Vec<String>,
    pub employer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sick_leave: Option<SickLeave>,
}

/// A routine health check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckEntry {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub specialist: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnosis_codes: Vec<String>,
    pub health_check_rating: HealthCheckRating,
}

/// One clinical record attached to a patient, discriminated by the `type`
/// field on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Entry {
    Hospital(HospitalEntry),
    OccupationalHealth(OccupationalHealthEntry),
    HealthCheck(HealthCheckEntry),
}

impl Entry {
    /// The service-assigned identifier.
    pub fn id(&self) -> &str {
        match self {
            Entry::Hospital(e) => &e.id,
            Entry::OccupationalHealth(e) => &e.id,
            Entry::HealthCheck(e) => &e.id,
        }
    }

    /// Date of the clinical event.
    pub fn date(&self) -> NaiveDate {
        match self {
            Entry::Hospital(e) => e.date,
            Entry::OccupationalHealth(e) => e.date,
            Entry::HealthCheck(e) => e.date,
        }
    }

    /// Free-text description of the event.
    pub fn description(&self) -> &str {
        match self {
            Entry::Hospital(e) => &e.description,
            Entry::OccupationalHealth(e) => &e.description,
            Entry::HealthCheck(e) => &e.description,
        }
    }

    /// Name of the attending specialist.
    pub fn specialist(&self) -> &str {
        match self {
            Entry::Hospital(e) => &e.specialist,
            Entry::OccupationalHealth(e) => &e.specialist,
            Entry::HealthCheck(e) => &e.specialist,
        }
    }

    /// Diagnosis codes annotating the entry (may reference codes absent
    /// from the loaded reference set).
    pub fn diagnosis_codes(&self) -> &[String] {
        match self {
            Entry::Hospital(e) => &e.diagnosis_codes,
            Entry::OccupationalHealth(e) => &e.diagnosis_codes,
            Entry::HealthCheck(e) => &e.diagnosis_codes,
        }
    }

    /// Which kind of entry this is.
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Hospital(_) => EntryKind::Hospital,
            Entry::OccupationalHealth(_) => EntryKind::OccupationalHealth,
            Entry::HealthCheck(_) => EntryKind::HealthCheck,
        }
    }

    /// Attaches a service-assigned identifier to a pre-submission entry,
    /// producing the stored shape.
    pub fn from_new(new: NewEntry, id: impl Into<String>) -> Self {
        let id = id.into();
        match new {
            NewEntry::Hospital(e) => Entry::Hospital(HospitalEntry {
                id,
                date: e.date,
                description: e.description,
                specialist: e.specialist,
                diagnosis_codes: e.diagnosis_codes,
                discharge: e.discharge,
            }),
            NewEntry::OccupationalHealth(e) => Entry::OccupationalHealth(OccupationalHealthEntry {
                id,
                date: e.date,
                description: e.description,
                specialist: e.specialist,
                diagnosis_codes: e.diagnosis_codes,
                employer_name: e.employer_name,
                sick_leave: e.sick_leave,
            }),
            NewEntry::HealthCheck(e) => Entry::HealthCheck(HealthCheckEntry {
                id,
                date: e.date,
                description: e.description,
                specialist: e.specialist,
                diagnosis_codes: e.diagnosis_codes,
                health_check_rating: e.health_check_rating,
            }),
        }
    }
}

/// A hospital stay awaiting submission (no identifier yet).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHospitalEntry {
    pub date: NaiveDate,
    pub description: String,
    pub specialist: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnosis_codes: Vec<String>,
    pub discharge: Discharge,
}

/// An occupational-health visit awaiting submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOccupationalHealthEntry {
    pub date: NaiveDate,
    pub description: String,
    pub specialist: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnosis_codes: Vec<String>,
    pub employer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sick_leave: Option<SickLeave>,
}

/// A health check awaiting submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHealthCheckEntry {
    pub date: NaiveDate,
    pub description: String,
    pub specialist: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnosis_codes: Vec<String>,
    pub health_check_rating: HealthCheckRating,
}

/// The pre-submission entry union: identical to [`Entry`] minus the
/// service-assigned identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NewEntry {
    Hospital(NewHospitalEntry),
    OccupationalHealth(NewOccupationalHealthEntry),
    HealthCheck(NewHealthCheckEntry),
}

impl NewEntry {
    /// Which kind of entry this will become.
    pub fn kind(&self) -> EntryKind {
        match self {
            NewEntry::Hospital(_) => EntryKind::Hospital,
            NewEntry::OccupationalHealth(_) => EntryKind::OccupationalHealth,
            NewEntry::HealthCheck(_) => EntryKind::HealthCheck,
        }
    }
}

/// Errors that can occur when parsing an [`EntryKind`] from text.
#[derive(Debug, thiserror::Error)]
pub enum KindError {
    #[error("unknown entry kind '{0}' (expected hospital, occupational-health or health-check)")]
    Unknown(String),
}

/// The three entry kinds, as selectable in forms and on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Hospital,
    OccupationalHealth,
    HealthCheck,
}

impl EntryKind {
    /// All kinds, in presentation order.
    pub const ALL: [EntryKind; 3] = [
        EntryKind::Hospital,
        EntryKind::OccupationalHealth,
        EntryKind::HealthCheck,
    ];

    /// The wire discriminant for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            EntryKind::Hospital => "Hospital",
            EntryKind::OccupationalHealth => "OccupationalHealth",
            EntryKind::HealthCheck => "HealthCheck",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for EntryKind {
    type Err = KindError;

    /// Parses a kind name, tolerating case and separator differences
    /// (`HealthCheck`, `health-check` and `health_check` all parse).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalised.as_str() {
            "hospital" => Ok(EntryKind::Hospital),
            "occupationalhealth" => Ok(EntryKind::OccupationalHealth),
            "healthcheck" => Ok(EntryKind::HealthCheck),
            _ => Err(KindError::Unknown(s.to_owned())),
        }
    }
}
