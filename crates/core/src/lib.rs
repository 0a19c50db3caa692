//! # PCV Core
//!
//! Page logic for the PCV patient chart viewer.
//!
//! This crate contains pure data operations:
//! - Transient add-entry form state and assembly into a typed submission
//! - The diagnosis reference registry with a display-safe lookup
//! - The page state machine (form visibility, submission guard, inline alerts)
//! - Plain-text page rendering
//!
//! **No API concerns**: HTTP calls and record-service configuration belong in `api-client` and `api-stub`.

pub mod diagnoses;
pub mod error;
pub mod form;
pub mod page;
pub mod render;

pub use diagnoses::{DiagnosisRegistry, UNKNOWN_DIAGNOSIS};
pub use error::{FormError, FormResult, PageError, PageResult};
pub use form::{EntryForm, FormField};
pub use page::{FormSlot, PatientPage};
pub use render::render_page;
