//! ICD-coded diagnosis reference data.

use serde::{Deserialize, Serialize};

/// One diagnosis from the reference set: an ICD code, its name, and an
/// optional Latin name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latin: Option<String>,
}
