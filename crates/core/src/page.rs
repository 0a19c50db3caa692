//! Page state machine.
//!
//! [`PatientPage`] owns everything the single patient page displays: the
//! in-memory patient record, the diagnosis registry, the add-entry form
//! slot and the inline alert. Network effects happen elsewhere; callers
//! drive the machine with `begin_submit` / `entry_appended` /
//! `submit_failed` around the actual request.

use pcv_types::{Entry, NewEntry, Patient};

use crate::diagnoses::DiagnosisRegistry;
use crate::error::{PageError, PageResult};
use crate::form::EntryForm;

/// Where the add-entry form currently is.
///
/// `Submitting` keeps the field state while a request is in flight and
/// refuses a second submission until the outcome lands.
#[derive(Clone, Debug)]
pub enum FormSlot {
    Hidden,
    Visible(EntryForm),
    Submitting(EntryForm),
}

/// The state behind one rendered patient page.
#[derive(Clone, Debug)]
pub struct PatientPage {
    patient: Patient,
    registry: DiagnosisRegistry,
    form: FormSlot,
    alert: Option<String>,
}

impl PatientPage {
    pub fn new(patient: Patient, registry: DiagnosisRegistry) -> Self {
        Self {
            patient,
            registry,
            form: FormSlot::Hidden,
            alert: None,
        }
    }

    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn registry(&self) -> &DiagnosisRegistry {
        &self.registry
    }

    pub fn form(&self) -> &FormSlot {
        &self.form
    }

    /// The inline alert, when one is set.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Opens a fresh add-entry form. A form already open (or mid-flight)
    /// keeps its state.
    pub fn open_form(&mut self) {
        if matches!(self.form, FormSlot::Hidden) {
            self.form = FormSlot::Visible(EntryForm::new());
            self.alert = None;
        }
    }

    /// Discards the form and its field state.
    pub fn cancel_form(&mut self) {
        self.form = FormSlot::Hidden;
        self.alert = None;
    }

    /// Mutable access to the form fields, only while the form is visible.
    /// During submission the fields are frozen.
    pub fn form_mut(&mut self) -> Option<&mut EntryForm> {
        match &mut self.form {
            FormSlot::Visible(form) => Some(form),
            FormSlot::Hidden | FormSlot::Submitting(_) => None,
        }
    }

    /// Assembles the submission and moves the form into `Submitting`.
    ///
    /// On an assembly failure the form stays visible with its field state
    /// intact and the failure message becomes the inline alert. A second
    /// call while a submission is in flight is refused.
    pub fn begin_submit(&mut self) -> PageResult<NewEntry> {
        let slot = std::mem::replace(&mut self.form, FormSlot::Hidden);
        match slot {
            FormSlot::Hidden => Err(PageError::FormNotOpen),
            FormSlot::Submitting(form) => {
                self.form = FormSlot::Submitting(form);
                Err(PageError::SubmissionInFlight)
            }
            FormSlot::Visible(form) => match form.assemble() {
                Ok(new_entry) => {
                    self.form = FormSlot::Submitting(form);
                    self.alert = None;
                    Ok(new_entry)
                }
                Err(err) => {
                    self.alert = Some(err.to_string());
                    self.form = FormSlot::Visible(form);
                    Err(PageError::Form(err))
                }
            },
        }
    }

    /// Records a successful submission: the created entry joins the list,
    /// the form closes and any alert clears.
    pub fn entry_appended(&mut self, entry: Entry) {
        self.patient.entries.push(entry);
        self.form = FormSlot::Hidden;
        self.alert = None;
    }

    /// Records a failed submission: the form returns to `Visible` with its
    /// field state intact so the user can correct and resubmit, and the
    /// user-facing message becomes the inline alert.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        let slot = std::mem::replace(&mut self.form, FormSlot::Hidden);
        self.form = match slot {
            FormSlot::Submitting(form) | FormSlot::Visible(form) => FormSlot::Visible(form),
            FormSlot::Hidden => FormSlot::Hidden,
        };
        self.alert = Some(message.into());
    }
}
