//! Patient demographics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::id::PatientId;

/// Administrative gender, as recorded in the register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        };
        write!(f, "{label}")
    }
}

/// A full patient record, including the clinical entries.
///
/// Records fetched before the service attached any entries arrive without
/// the `entries` field at all; that deserialises to an empty list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub date_of_birth: NaiveDate,
    /// National identification number, kept verbatim.
    pub ssn: String,
    pub gender: Gender,
    pub occupation: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// The listing shape: demographics without `ssn` or entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub id: PatientId,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub occupation: String,
}

impl From<&Patient> for PatientSummary {
    fn from(patient: &Patient) -> Self {
        PatientSummary {
            id: patient.id.clone(),
            name: patient.name.clone(),
            date_of_birth: patient.date_of_birth,
            gender: patient.gender,
            occupation: patient.occupation.clone(),
        }
    }
}
