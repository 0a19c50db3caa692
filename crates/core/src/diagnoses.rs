//! Diagnosis reference registry.
//!
//! The reference set is fetched once at startup and never changes. Lookups
//! are display-safe: entries may carry codes the loaded set does not know
//! (or the set may have failed to load entirely), and rendering must not
//! fail over it.

use std::collections::HashMap;

use pcv_types::Diagnosis;

/// Label shown for a diagnosis code the registry cannot resolve.
pub const UNKNOWN_DIAGNOSIS: &str = "Unknown diagnosis code";

/// An in-memory index of the diagnosis reference set, keyed by code.
#[derive(Clone, Debug, Default)]
pub struct DiagnosisRegistry {
    by_code: HashMap<String, Diagnosis>,
}

impl DiagnosisRegistry {
    /// Builds a registry from a fetched reference sequence.
    ///
    /// Codes are unique in well-formed reference data; if a duplicate does
    /// appear, the first occurrence wins.
    pub fn new(diagnoses: Vec<Diagnosis>) -> Self {
        let mut by_code: HashMap<String, Diagnosis> = HashMap::with_capacity(diagnoses.len());
        for diagnosis in diagnoses {
            if by_code.contains_key(&diagnosis.code) {
                tracing::warn!("duplicate diagnosis code in reference data: {}", diagnosis.code);
                continue;
            }
            by_code.insert(diagnosis.code.clone(), diagnosis);
        }
        Self { by_code }
    }

    /// A registry that resolves nothing, used when the reference set could
    /// not be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The display name for `code`, or [`UNKNOWN_DIAGNOSIS`] when the code
    /// is not in the loaded set. Never fails.
    pub fn describe(&self, code: &str) -> &str {
        self.by_code
            .get(code)
            .map(|diagnosis| diagnosis.name.as_str())
            .unwrap_or(UNKNOWN_DIAGNOSIS)
    }

    pub fn get(&self, code: &str) -> Option<&Diagnosis> {
        self.by_code.get(code)
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
