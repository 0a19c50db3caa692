//! Validated patient identifiers.
//!
//! Patient identifiers are assigned by the record service and are only ever
//! consumed by this client — never generated here. This module wraps them in
//! a type that guarantees the canonical form once constructed.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Errors that can occur when parsing a patient identifier.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    /// The input was not in canonical patient-identifier form.
    #[error("patient id must be 36 lowercase hex characters with hyphens (8-4-4-4-12), got: '{0}'")]
    InvalidInput(String),
}

/// A patient identifier in canonical form: a lowercase, hyphenated UUID
/// (for example `d2773336-f723-11e9-8f0b-362b9e155667`).
///
/// # When to use this type
/// Use this wrapper whenever you are accepting a patient identifier from
/// outside the workspace — CLI arguments, URL path segments, API payloads.
/// Once you have a `PatientId`, the contained identifier is guaranteed to be
/// valid and canonical.
///
/// # Construction
/// [`PatientId::parse`] validates an externally supplied identifier. Other
/// common UUID forms (uppercase, unhyphenated) are **not** normalised;
/// callers must provide the canonical representation the record service
/// itself uses.
///
/// # Display format
/// When displayed or serialised, `PatientId` always produces the canonical
/// 36-character lowercase hyphenated form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PatientId(Uuid);

impl PatientId {
    /// Validates and parses a patient identifier that must already be in
    /// canonical form.
    ///
    /// # Arguments
    ///
    /// * `input` - Identifier string to validate and wrap.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::InvalidInput`] if `input` is not a lowercase
    /// hyphenated UUID.
    pub fn parse(input: &str) -> Result<Self, IdError> {
        if Self::is_canonical(input) {
            // SAFETY: is_canonical guarantees valid hyphenated hex, so
            // parse_str will succeed
            let uuid = Uuid::parse_str(input).expect("is_canonical guarantees valid UUID");
            return Ok(Self(uuid));
        }
        Err(IdError::InvalidInput(input.to_owned()))
    }

    /// Returns true if `input` is in canonical patient-identifier form.
    ///
    /// This is a purely syntactic check that validates:
    /// - Exactly 36 bytes long
    /// - Hyphens at positions 8, 13, 18 and 23
    /// - Lowercase hex characters (`0-9` and `a-f`) everywhere else
    pub fn is_canonical(input: &str) -> bool {
        if input.len() != 36 {
            return false;
        }
        input.bytes().enumerate().all(|(i, b)| match i {
            8 | 13 | 18 | 23 => b == b'-',
            _ => matches!(b, b'0'..=b'9' | b'a'..=b'f'),
        })
    }

    /// Returns the underlying `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for PatientId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for PatientId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0.hyphenated())
    }
}

impl<'de> serde::Deserialize<'de> for PatientId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PatientId::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_id() {
        let id = PatientId::parse("d2773336-f723-11e9-8f0b-362b9e155667").expect("valid id");
        assert_eq!(id.to_string(), "d2773336-f723-11e9-8f0b-362b9e155667");
    }

    #[test]
    fn rejects_uppercase() {
        let err = PatientId::parse("D2773336-F723-11E9-8F0B-362B9E155667")
            .expect_err("should reject uppercase");
        assert!(matches!(err, IdError::InvalidInput(_)));
    }

    #[test]
    fn rejects_unhyphenated() {
        let err = PatientId::parse("d2773336f72311e98f0b362b9e155667")
            .expect_err("should reject unhyphenated form");
        assert!(matches!(err, IdError::InvalidInput(_)));
    }

    #[test]
    fn rejects_misplaced_hyphens() {
        let err = PatientId::parse("d277333-6f723-11e9-8f0b-362b9e155667")
            .expect_err("should reject misplaced hyphens");
        assert!(matches!(err, IdError::InvalidInput(_)));
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(PatientId::parse("").is_err());
        assert!(PatientId::parse("not-a-patient-id").is_err());
    }

    #[test]
    fn serde_round_trip() {
        let id = PatientId::parse("d2773336-f723-11e9-8f0b-362b9e155667").expect("valid id");
        let json = serde_json::to_string(&id).expect("serialise");
        assert_eq!(json, "\"d2773336-f723-11e9-8f0b-362b9e155667\"");
        let back: PatientId = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, id);
    }

    #[test]
    fn serde_rejects_non_canonical() {
        let result: Result<PatientId, _> = serde_json::from_str("\"NOT-CANONICAL\"");
        assert!(result.is_err());
    }
}
