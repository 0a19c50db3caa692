//! # PCV Types
//!
//! Wire and domain types for the PCV patient chart viewer.
//!
//! This crate defines the data model shared by every other crate in the
//! workspace: patients, their clinical entries, and the diagnosis reference
//! set. The shapes mirror the record service's JSON contract exactly
//! (camelCase field names, a `type` discriminant on entries, ISO dates), so
//! the same types serve as wire models on both the client and stub sides.
//!
//! No I/O, no API concerns: translation to and from JSON is the job of the
//! crates at the HTTP boundary.

pub mod diagnosis;
pub mod entry;
pub mod id;
pub mod patient;

pub use diagnosis::Diagnosis;
pub use entry::{
    Discharge, Entry, EntryKind, HealthCheckEntry, HealthCheckRating, HospitalEntry, KindError,
    NewEntry, NewHealthCheckEntry, NewHospitalEntry, NewOccupationalHealthEntry,
    OccupationalHealthEntry, RatingError, SickLeave,
};
pub use id::{IdError, PatientId};
pub use patient::{Gender, Patient, PatientSummary};
