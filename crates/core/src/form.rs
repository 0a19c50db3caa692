//! Transient add-entry form state.
//!
//! Field values live as raw text until submission, grouped into one struct
//! per entry kind plus a shared group. Grouping by kind is what makes
//! cross-kind leakage impossible: [`EntryForm::assemble`] can only ever
//! read the group matching the selected kind, so a discharge date typed
//! while `Hospital` was selected can never end up inside a health check.
//!
//! Assembly validates structure only. Dates must parse and the rating must
//! sit on the 0–3 scale because the typed model demands it; string-shaped
//! content (description, specialist, criteria, employer name) passes
//! through as-is and is judged by the record service.

use chrono::NaiveDate;
use pcv_types::{
    Discharge, EntryKind, HealthCheckRating, NewEntry, NewHealthCheckEntry, NewHospitalEntry,
    NewOccupationalHealthEntry, SickLeave,
};

use crate::error::{FormError, FormResult};

/// One editable field of the add-entry form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Description,
    Date,
    Specialist,
    DiagnosisCodes,
    DischargeDate,
    DischargeCriteria,
    EmployerName,
    SickLeaveStart,
    SickLeaveEnd,
    HealthCheckRating,
}

impl FormField {
    /// Fields shared by every entry kind, in presentation order.
    pub const SHARED: [FormField; 4] = [
        FormField::Description,
        FormField::Date,
        FormField::Specialist,
        FormField::DiagnosisCodes,
    ];

    /// The kind-specific fields for `kind`, in presentation order.
    pub fn for_kind(kind: EntryKind) -> &'static [FormField] {
        match kind {
            EntryKind::Hospital => &[FormField::DischargeDate, FormField::DischargeCriteria],
            EntryKind::OccupationalHealth => &[
                FormField::EmployerName,
                FormField::SickLeaveStart,
                FormField::SickLeaveEnd,
            ],
            EntryKind::HealthCheck => &[FormField::HealthCheckRating],
        }
    }

    /// Label used when rendering the field.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Description => "description",
            FormField::Date => "date",
            FormField::Specialist => "specialist",
            FormField::DiagnosisCodes => "diagnosis codes",
            FormField::DischargeDate => "discharge date",
            FormField::DischargeCriteria => "discharge criteria",
            FormField::EmployerName => "employer name",
            FormField::SickLeaveStart => "sick leave start",
            FormField::SickLeaveEnd => "sick leave end",
            FormField::HealthCheckRating => "rating",
        }
    }

    /// Token identifying the field in session and command-line input.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Description => "description",
            FormField::Date => "date",
            FormField::Specialist => "specialist",
            FormField::DiagnosisCodes => "codes",
            FormField::DischargeDate => "discharge-date",
            FormField::DischargeCriteria => "criteria",
            FormField::EmployerName => "employer",
            FormField::SickLeaveStart => "sick-start",
            FormField::SickLeaveEnd => "sick-end",
            FormField::HealthCheckRating => "rating",
        }
    }

    /// Resolves a session token back to its field.
    pub fn from_key(key: &str) -> Option<FormField> {
        const ALL: [FormField; 10] = [
            FormField::Description,
            FormField::Date,
            FormField::Specialist,
            FormField::DiagnosisCodes,
            FormField::DischargeDate,
            FormField::DischargeCriteria,
            FormField::EmployerName,
            FormField::SickLeaveStart,
            FormField::SickLeaveEnd,
            FormField::HealthCheckRating,
        ];
        ALL.into_iter().find(|field| field.key() == key)
    }
}

#[derive(Clone, Debug, Default)]
struct SharedFields {
    description: String,
    date: String,
    specialist: String,
    diagnosis_codes: String,
}

#[derive(Clone, Debug, Default)]
struct HospitalFields {
    discharge_date: String,
    discharge_criteria: String,
}

#[derive(Clone, Debug, Default)]
struct OccupationalFields {
    employer_name: String,
    sick_leave_start: String,
    sick_leave_end: String,
}

#[derive(Clone, Debug, Default)]
struct HealthCheckFields {
    rating: String,
}

/// Raw field state for one in-progress entry.
///
/// Selecting a kind switches which kind-specific group is active without
/// touching the shared group, so description, date, specialist and codes
/// persist across kind switches. The inactive groups persist too; they are
/// simply never read at assembly.
#[derive(Clone, Debug, Default)]
pub struct EntryForm {
    kind: Option<EntryKind>,
    shared: SharedFields,
    hospital: HospitalFields,
    occupational: OccupationalFields,
    health_check: HealthCheckFields,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches which kind-specific fields are active.
    pub fn select_kind(&mut self, kind: EntryKind) {
        self.kind = Some(kind);
    }

    pub fn selected_kind(&self) -> Option<EntryKind> {
        self.kind
    }

    /// Updates one field. No validation happens here; empty strings are
    /// permitted and judged at assembly or by the record service.
    pub fn set_field(&mut self, field: FormField, value: &str) {
        let slot = match field {
            FormField::Description => &mut self.shared.description,
            FormField::Date => &mut self.shared.date,
            FormField::Specialist => &mut self.shared.specialist,
            FormField::DiagnosisCodes => &mut self.shared.diagnosis_codes,
            FormField::DischargeDate => &mut self.hospital.discharge_date,
            FormField::DischargeCriteria => &mut self.hospital.discharge_criteria,
            FormField::EmployerName => &mut self.occupational.employer_name,
            FormField::SickLeaveStart => &mut self.occupational.sick_leave_start,
            FormField::SickLeaveEnd => &mut self.occupational.sick_leave_end,
            FormField::HealthCheckRating => &mut self.health_check.rating,
        };
        *slot = value.to_owned();
    }

    /// The current raw text of one field.
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Description => &self.shared.description,
            FormField::Date => &self.shared.date,
            FormField::Specialist => &self.shared.specialist,
            FormField::DiagnosisCodes => &self.shared.diagnosis_codes,
            FormField::DischargeDate => &self.hospital.discharge_date,
            FormField::DischargeCriteria => &self.hospital.discharge_criteria,
            FormField::EmployerName => &self.occupational.employer_name,
            FormField::SickLeaveStart => &self.occupational.sick_leave_start,
            FormField::SickLeaveEnd => &self.occupational.sick_leave_end,
            FormField::HealthCheckRating => &self.health_check.rating,
        }
    }

    /// Builds the tagged submission matching the selected kind, reading
    /// only the shared group and that kind's group.
    pub fn assemble(&self) -> FormResult<NewEntry> {
        let kind = self.kind.ok_or(FormError::NoKindSelected)?;
        let date = parse_date("date", &self.shared.date)?;
        let description = self.shared.description.clone();
        let specialist = self.shared.specialist.clone();
        let diagnosis_codes = split_codes(&self.shared.diagnosis_codes);

        let entry = match kind {
            EntryKind::Hospital => NewEntry::Hospital(NewHospitalEntry {
                date,
                description,
                specialist,
                diagnosis_codes,
                discharge: Discharge {
                    date: parse_date("discharge date", &self.hospital.discharge_date)?,
                    criteria: self.hospital.discharge_criteria.clone(),
                },
            }),
            EntryKind::OccupationalHealth => {
                NewEntry::OccupationalHealth(NewOccupationalHealthEntry {
                    date,
                    description,
                    specialist,
                    diagnosis_codes,
                    employer_name: self.occupational.employer_name.clone(),
                    sick_leave: self.assemble_sick_leave()?,
                })
            }
            EntryKind::HealthCheck => NewEntry::HealthCheck(NewHealthCheckEntry {
                date,
                description,
                specialist,
                diagnosis_codes,
                health_check_rating: self.parse_rating()?,
            }),
        };

        Ok(entry)
    }

    fn assemble_sick_leave(&self) -> FormResult<Option<SickLeave>> {
        let start = self.occupational.sick_leave_start.trim();
        let end = self.occupational.sick_leave_end.trim();
        match (start.is_empty(), end.is_empty()) {
            (true, true) => Ok(None),
            (false, false) => Ok(Some(SickLeave {
                start_date: parse_date("sick leave start", start)?,
                end_date: parse_date("sick leave end", end)?,
            })),
            _ => Err(FormError::PartialSickLeave),
        }
    }

    fn parse_rating(&self) -> FormResult<HealthCheckRating> {
        let raw = self.health_check.rating.trim();
        let value: u8 = raw
            .parse()
            .map_err(|_| FormError::InvalidRating(raw.to_owned()))?;
        HealthCheckRating::try_from(value).map_err(|_| FormError::InvalidRating(raw.to_owned()))
    }
}

fn parse_date(field: &'static str, raw: &str) -> FormResult<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| FormError::InvalidDate {
        field,
        value: trimmed.to_owned(),
    })
}

/// Splits a comma-separated code list, trimming whitespace and dropping
/// empty items. No registry check is applied here.
fn split_codes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_owned)
        .collect()
}
